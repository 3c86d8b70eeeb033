use clap::Args;
use contacto_config::Config;
use contacto_core_form_contracts::ContactFormFeatureService;
use contacto_models::{
    contact::MESSAGE_MAX_CHARS,
    form::{ContactField, LoadStatus, SubmissionStatus},
};

#[derive(Debug, Args)]
pub struct SendArgs {
    /// First name of the sender
    #[arg(long)]
    first_name: String,
    /// Last name of the sender
    #[arg(long)]
    last_name: String,
    /// Email address for the reply
    #[arg(long)]
    email: String,
    /// Id of the contact reason (see `contacto reasons`)
    #[arg(long)]
    reason: String,
    /// Message body, capped at 500 characters
    #[arg(long)]
    message: String,
}

pub async fn invoke(config: Config, args: SendArgs) -> anyhow::Result<()> {
    let mut form = super::contact_form(&config);

    form.load_reasons().await;
    if let LoadStatus::Failed(message) = &form.state().load {
        eprintln!("{message}");
    }

    form.update_field(ContactField::FirstName, &args.first_name);
    form.update_field(ContactField::LastName, &args.last_name);
    form.update_field(ContactField::Email, &args.email);
    form.update_field(ContactField::ContactReason, &args.reason);
    form.update_field(ContactField::Message, &args.message);

    let stored = form.state().fields.message.chars().count();
    if stored < args.message.chars().count() {
        eprintln!("Mensaje recortado: {stored}/{MESSAGE_MAX_CHARS} caracteres");
    }

    form.submit().await;

    match &form.state().submission {
        SubmissionStatus::Success(message) => {
            println!("{message}");
            Ok(())
        }
        SubmissionStatus::Failure(message) => anyhow::bail!("{message}"),
        status @ (SubmissionStatus::Idle | SubmissionStatus::Submitting) => {
            unreachable!("submission settled as {status:?}")
        }
    }
}
