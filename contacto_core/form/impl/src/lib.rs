use contacto_core_form_contracts::{
    ContactFormFeatureService, LOAD_FAILURE_MESSAGE, REQUIRED_FIELDS_MESSAGE,
    SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
use contacto_extern_contracts::contact::{ContactApiError, ContactApiService};
use contacto_models::{
    contact::{NewContact, MESSAGE_MAX_CHARS},
    form::{ContactField, ContactFormState, LoadStatus, SubmissionStatus},
};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormFeatureServiceImpl<Api> {
    api: Api,
    state: ContactFormState,
}

impl<Api> ContactFormFeatureServiceImpl<Api> {
    /// Starts a fresh form session: empty fields, `Idle` submission status
    /// and the reason list still `Loading`.
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: ContactFormState::default(),
        }
    }

    /// Submit-time validation: all five fields filled and the selected reason
    /// present in the loaded list.
    fn validated_contact(&self) -> Option<NewContact> {
        let fields = &self.state.fields;
        if fields.first_name.is_empty()
            || fields.last_name.is_empty()
            || fields.email.is_empty()
            || fields.message.is_empty()
        {
            return None;
        }

        let contact_reason_id = fields
            .contact_reason_id
            .filter(|&id| self.state.load.reasons().iter().any(|r| r.id == id))?;

        // The cap is enforced on every update, so this cannot fail.
        let message = fields.message.clone().try_into().ok()?;

        Some(NewContact {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            contact_reason_id,
            message,
        })
    }
}

impl<Api> ContactFormFeatureService for ContactFormFeatureServiceImpl<Api>
where
    Api: ContactApiService,
{
    fn state(&self) -> &ContactFormState {
        &self.state
    }

    #[tracing::instrument(skip(self))]
    async fn load_reasons(&mut self) {
        if !matches!(self.state.load, LoadStatus::Loading) {
            debug!("reason list already settled");
            return;
        }

        self.state.load = match self.api.list_contact_reasons().await {
            Ok(reasons) => LoadStatus::Ready(reasons),
            Err(err) => {
                warn!("Failed to load contact reasons: {err:#}");
                LoadStatus::Failed(LOAD_FAILURE_MESSAGE.into())
            }
        };
    }

    fn update_field(&mut self, field: ContactField, value: &str) {
        let fields = &mut self.state.fields;
        match field {
            ContactField::FirstName => fields.first_name = value.into(),
            ContactField::LastName => fields.last_name = value.into(),
            ContactField::Email => fields.email = value.into(),
            // The selector carries its value as text; empty or unparseable
            // input clears the selection.
            ContactField::ContactReason => {
                fields.contact_reason_id = value.trim().parse::<i64>().ok().map(Into::into);
            }
            // Values beyond the cap are never stored.
            ContactField::Message => {
                fields.message = match value.char_indices().nth(MESSAGE_MAX_CHARS) {
                    Some((cap, _)) => value[..cap].into(),
                    None => value.into(),
                };
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&mut self) {
        if self.state.submission.is_submitting() {
            debug!("submission already in flight");
            return;
        }

        let Some(contact) = self.validated_contact() else {
            self.state.submission = SubmissionStatus::Failure(REQUIRED_FIELDS_MESSAGE.into());
            return;
        };

        self.state.submission = SubmissionStatus::Submitting;

        self.state.submission = match self.api.create_contact(contact).await {
            Ok(()) => {
                self.state.fields = Default::default();
                SubmissionStatus::Success(SUBMIT_SUCCESS_MESSAGE.into())
            }
            Err(ContactApiError::Rejected(message)) => SubmissionStatus::Failure(message),
            Err(ContactApiError::Other(err)) => {
                warn!("Failed to submit contact form: {err:#}");
                SubmissionStatus::Failure(SUBMIT_FAILURE_MESSAGE.into())
            }
        };
    }
}
