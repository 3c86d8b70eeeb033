use crate::contact::{ContactReason, ContactReasonId};

/// The editable inputs of one contact form session.
///
/// Mutated only through the controller's handlers; the presentation layer
/// reads a projection and never holds its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_reason_id: Option<ContactReasonId>,
    pub message: String,
}

/// The five editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    ContactReason,
    Message,
}

/// Lifecycle of a submission attempt. Exactly one variant is active at any
/// time; `Submitting` can only be entered from `Idle` or a terminal variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Lifecycle of the asynchronous fetch of the contact reason list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready(Vec<ContactReason>),
    Failed(String),
}

impl LoadStatus {
    /// The loaded reasons in backend order, or an empty slice while the fetch
    /// is pending or after it failed.
    pub fn reasons(&self) -> &[ContactReason] {
        match self {
            Self::Ready(reasons) => reasons,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Complete state of one mounted form session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub fields: ContactFormFields,
    pub submission: SubmissionStatus,
    pub load: LoadStatus,
}
