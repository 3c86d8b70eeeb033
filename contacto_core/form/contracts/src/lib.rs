use std::future::Future;

use contacto_models::form::{ContactField, ContactFormState};

/// Shown after the backend accepts a submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Formulario enviado correctamente!";
/// Shown when local validation finds an empty or unset field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Todos los campos son requeridos";
/// Fallback when a submission fails without a structured backend message.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Error al enviar el formulario";
/// Shown when the contact reason list cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Error al cargar las razones de contacto";

/// One contact form session: owns the form state and runs the submission
/// state machine. The presentation layer only reads [`state`](Self::state)
/// and forwards user events into the other handlers.
pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Read projection of the current form state.
    fn state(&self) -> &ContactFormState;

    /// Fetches the contact reason list. Runs once per session, at session
    /// start; once the status has settled this is a no-op (a failed load is
    /// not retried automatically).
    fn load_reasons(&mut self) -> impl Future<Output = ()> + Send;

    /// Replaces the value of a single field, last write wins. No validation
    /// happens here except the unconditional message length cap; everything
    /// else is deferred to submit time.
    fn update_field(&mut self, field: ContactField, value: &str);

    /// Validates the fields locally and, if they are complete, sends the
    /// record to the backend. A call while a submission is already in flight
    /// is a no-op. On success the input fields reset to their defaults; on
    /// failure they are preserved for correction and resubmission.
    fn submit(&mut self) -> impl Future<Output = ()> + Send;
}
