use std::sync::Arc;

use anyhow::{anyhow, Context};
use contacto_extern_contracts::contact::{ContactApiError, ContactApiService};
use contacto_models::contact::{ContactReason, NewContact};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    base_url: Arc<Url>,
}

impl ContactApiServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn list_contact_reasons(&self) -> Result<Vec<ContactReason>, ContactApiError> {
        let url = self
            .config
            .base_url
            .join("contact-reasons/")
            .context("Failed to build contact reasons URL")?;

        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send contact reasons request")?
            .error_for_status()
            .context("Contact reasons request returned an error")?
            .json::<Vec<ContactReasonDto>>()
            .await
            .context("Failed to deserialize contact reasons response")
            .map(|reasons| reasons.into_iter().map(Into::into).collect())
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn create_contact(&self, contact: NewContact) -> Result<(), ContactApiError> {
        let url = self
            .config
            .base_url
            .join("contacts/")
            .context("Failed to build create contact URL")?;

        let response = self
            .client
            .post(url)
            .json(&CreateContactRequest::from(&contact))
            .send()
            .await
            .context("Failed to send create contact request")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Structured rejections carry an optional `message` field which is
        // surfaced to the user verbatim.
        match response
            .json::<ApiErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
        {
            Some(message) => Err(ContactApiError::Rejected(message)),
            None => Err(anyhow!("Create contact request returned status {status}").into()),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateContactRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    contact_reason_id: i64,
    message: &'a str,
}

impl<'a> From<&'a NewContact> for CreateContactRequest<'a> {
    fn from(contact: &'a NewContact) -> Self {
        Self {
            first_name: &contact.first_name,
            last_name: &contact.last_name,
            email: &contact.email,
            contact_reason_id: *contact.contact_reason_id,
            message: contact.message.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContactReasonDto {
    id: i64,
    reason: String,
    description: String,
}

impl From<ContactReasonDto> for ContactReason {
    fn from(dto: ContactReasonDto) -> Self {
        Self {
            id: dto.id.into(),
            reason: dto.reason,
            description: dto.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use contacto_demo::contact::VENTAS;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_contact_reason() {
        let dto = serde_json::from_value::<ContactReasonDto>(json!({
            "id": 2,
            "reason": "Ventas",
            "description": "Consultas comerciales",
        }))
        .unwrap();

        assert_eq!(ContactReason::from(dto), VENTAS.clone());
    }

    #[test]
    fn serialize_create_contact_request() {
        let contact = NewContact {
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            email: "ana@x.com".into(),
            contact_reason_id: 2.into(),
            message: "Hola".to_owned().try_into().unwrap(),
        };

        let body = serde_json::to_value(CreateContactRequest::from(&contact)).unwrap();

        assert_eq!(
            body,
            json!({
                "first_name": "Ana",
                "last_name": "Gomez",
                "email": "ana@x.com",
                "contact_reason_id": 2,
                "message": "Hola",
            })
        );
    }

    #[test]
    fn error_body_with_message() {
        let body =
            serde_json::from_str::<ApiErrorResponse>(r#"{"message": "Email duplicado"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Email duplicado"));
    }

    #[test]
    fn error_body_without_message() {
        let body = serde_json::from_str::<ApiErrorResponse>(r#"{"detail": "oops"}"#).unwrap();
        assert_eq!(body.message, None);
    }
}
