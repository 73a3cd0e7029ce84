//! DTOs shaped for the owner templates and redirects.

use serde::Serialize;

use crate::domain::owner::Owner;
use crate::domain::types::OwnerId;
use crate::forms::FieldErrors;
use crate::forms::owner::OwnerForm;
use crate::pagination::Paginated;

/// Error attached to a single form field, e.g. the search filter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: &'static str,
    pub message: &'static str,
}

impl FieldError {
    /// `notFound` error on the last name search filter.
    pub const fn last_name_not_found() -> Self {
        Self {
            field: "lastName",
            code: "notFound",
            message: "not found",
        }
    }
}

/// Result of the owner search flow.
#[derive(Debug)]
pub enum SearchOutcome {
    /// No owner matched; the filter is echoed back for redisplay.
    NotFound {
        last_name: String,
        error: FieldError,
    },
    /// Exactly one owner matched across all pages.
    SingleMatch { owner_id: OwnerId },
    /// Several owners matched; carries the normalized filter and the
    /// requested page.
    MultiMatch {
        last_name: String,
        owners: Paginated<Owner>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Message the boundary forwards across a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result wrapper for owner mutations so callers can redirect easily.
#[derive(Debug)]
pub struct OwnerOperationOutcome {
    pub owner_id: OwnerId,
    pub notice: Notice,
}

/// Data required to render the create/edit owner form.
#[derive(Debug, Default)]
pub struct OwnerFormPage {
    /// `None` while creating a new owner.
    pub owner_id: Option<OwnerId>,
    pub form: OwnerForm,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

impl OwnerFormPage {
    pub fn is_new(&self) -> bool {
        self.owner_id.is_none()
    }
}

/// Outcome of submitting the owner form.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(OwnerOperationOutcome),
    /// Validation failed; the form must be shown again.
    Invalid(OwnerFormPage),
}
