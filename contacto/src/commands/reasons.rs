use contacto_config::Config;
use contacto_core_form_contracts::ContactFormFeatureService;
use contacto_models::form::LoadStatus;

pub async fn invoke(config: Config) -> anyhow::Result<()> {
    let mut form = super::contact_form(&config);
    form.load_reasons().await;

    match &form.state().load {
        LoadStatus::Ready(reasons) => {
            for reason in reasons {
                println!("{}: {} - {}", *reason.id, reason.reason, reason.description);
            }
            Ok(())
        }
        LoadStatus::Failed(message) => anyhow::bail!("{message}"),
        LoadStatus::Loading => unreachable!(),
    }
}
