use std::future::Future;

use contacto_models::contact::{ContactReason, NewContact};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Fetches the full list of contact reasons, in the order returned by the
    /// backend.
    fn list_contact_reasons(
        &self,
    ) -> impl Future<Output = Result<Vec<ContactReason>, ContactApiError>> + Send;

    /// Persists a completed contact record on the backend.
    fn create_contact(
        &self,
        contact: NewContact,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The backend rejected the request and reported a user-facing message.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_list_contact_reasons(
        mut self,
        result: Result<Vec<ContactReason>, ContactApiError>,
    ) -> Self {
        self.expect_list_contact_reasons()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create_contact(
        mut self,
        contact: NewContact,
        result: Result<(), ContactApiError>,
    ) -> Self {
        self.expect_create_contact()
            .once()
            .with(mockall::predicate::eq(contact))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
