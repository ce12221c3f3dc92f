//! Friend domain record.
//!
//! # Responsibility
//! - Define the persisted friend shape (`id`, `name`, `email`, `birthday`).
//! - Validate add-form drafts before a record is constructed.
//!
//! # Invariants
//! - `id` is stable and never reused for another friend.
//! - `birthday` serializes as `YYYY-MM-DD`; only its month and day drive
//!   recurrence, the year is kept as entered.
//! - Records are immutable once created; there is no update operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one friend record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FriendId = Uuid;

/// Date format accepted for draft birthdays and used by the mirror payload.
const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// One tracked friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Stable global id, generated once at creation time.
    pub id: FriendId,
    /// Display name shown in every view.
    pub name: String,
    /// Contact address; checked for presence only, never for shape.
    pub email: String,
    /// Calendar birth date. Recurrence ignores the year.
    pub birthday: NaiveDate,
}

impl Friend {
    /// Creates a friend with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, birthday: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, birthday)
    }

    /// Creates a friend with a caller-provided id.
    ///
    /// Used where identity already exists, such as fixtures with pinned ids.
    pub fn with_id(
        id: FriendId,
        name: impl Into<String>,
        email: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            birthday,
        }
    }

    /// Validates a draft and constructs the record with a fresh id.
    ///
    /// # Errors
    /// - Any field blank after trimming is rejected.
    /// - A birthday that does not parse as `YYYY-MM-DD` is rejected.
    pub fn from_draft(draft: &FriendDraft) -> Result<Self, FriendValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(FriendValidationError::MissingName);
        }

        let email = draft.email.trim();
        if email.is_empty() {
            return Err(FriendValidationError::MissingEmail);
        }

        let birthday_text = draft.birthday.trim();
        if birthday_text.is_empty() {
            return Err(FriendValidationError::MissingBirthday);
        }

        let birthday = NaiveDate::parse_from_str(birthday_text, BIRTHDAY_FORMAT)
            .map_err(|_| FriendValidationError::InvalidBirthday(birthday_text.to_string()))?;

        Ok(Self::new(name, email, birthday))
    }
}

/// Unvalidated add-form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendDraft {
    pub name: String,
    pub email: String,
    pub birthday: String,
}

impl FriendDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            birthday: birthday.into(),
        }
    }
}

/// Draft validation failure reported back as a user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendValidationError {
    MissingName,
    MissingEmail,
    MissingBirthday,
    InvalidBirthday(String),
}

impl Display for FriendValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "name must not be empty"),
            Self::MissingEmail => write!(f, "email must not be empty"),
            Self::MissingBirthday => write!(f, "birthday must not be empty"),
            Self::InvalidBirthday(value) => {
                write!(f, "birthday `{value}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for FriendValidationError {}
