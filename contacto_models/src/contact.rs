use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::macros::id;

/// Maximum number of characters stored for a contact message. Kept in sync
/// with the `len_char_max` of [`ContactMessageContent`].
pub const MESSAGE_MAX_CHARS: usize = 500;

id!(ContactReasonId);

/// A backend-defined category selectable by the user to classify their
/// inquiry.
///
/// Owned and only ever produced by the backend; the client holds a read-only
/// cached copy for the lifetime of one form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReason {
    pub id: ContactReasonId,
    pub reason: String,
    pub description: String,
}

#[nutype(
    validate(len_char_max = 500),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// A completed, locally validated contact record ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_reason_id: ContactReasonId,
    pub message: ContactMessageContent,
}
