//! Selection state for one guide session.
//!
//! The store holds the answers, the email address and the submitted flag.
//! Submitting freezes the answers until [`SelectionStore::back`] or
//! [`SelectionStore::reset`] is called.
//!
//! # Example
//!
//! ```
//! use guide_core::models::{FieldId, GuideKind};
//! use guide_core::store::{SelectionStore, SubmitOutcome, SubmitRejection};
//!
//! let mut store = SelectionStore::new(GuideKind::BusinessCase);
//! store.select(FieldId::EmployeeSize, "1000-2499");
//! store.set_email("not-an-email");
//!
//! assert_eq!(store.submit(), SubmitOutcome::Rejected(SubmitRejection::MissingAtSign));
//!
//! store.set_email("hr@example.com");
//! assert_eq!(store.submit(), SubmitOutcome::Accepted);
//! assert!(store.is_submitted());
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{FieldId, FieldKind, GuideKind, Selection};

/// Why a submit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    EmptyEmail,
    MissingAtSign,
}

impl std::fmt::Display for SubmitRejection {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::EmptyEmail => f.write_str("email is empty"),
            Self::MissingAtSign => f.write_str("email has no '@'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(SubmitRejection),
    /// The session was already submitted; nothing changed.
    AlreadySubmitted,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The answers and email captured by an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionEnvelope {
    pub selection: Selection,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    selection: Selection,
    email: String,
    submitted: bool,
}

impl SelectionStore {
    /// An all-unanswered store for `kind`.
    pub fn new(kind: GuideKind) -> Self {
        Self {
            selection: Selection::new(kind),
            email: String::new(),
            submitted: false,
        }
    }

    pub fn kind(&self) -> GuideKind {
        self.selection.kind()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Sets a single-select field, overwriting any prior value.
    ///
    /// Values outside the option list are stored as unlisted. Returns `false`
    /// when the call was ignored: the store is submitted, the field is
    /// multi-select, or the field belongs to the other guide.
    pub fn select(
        &mut self,
        field: FieldId,
        value: &str,
    ) -> bool {
        if self.refuse_while_submitted("select", field) {
            return false;
        }
        if field.kind() == FieldKind::Multi {
            warn!(field = %field, "select on a multi-select field ignored, use toggle");
            return false;
        }
        if !self.selection.set_single(field, value) {
            warn!(field = %field, guide = %self.kind(), "field is not part of this guide");
            return false;
        }
        debug!(field = %field, value, "selected");
        true
    }

    /// Removes `value` from a multi-select field if present, else appends it.
    ///
    /// Returns `false` when the call was ignored.
    pub fn toggle_multi(
        &mut self,
        field: FieldId,
        value: &str,
    ) -> bool {
        if self.refuse_while_submitted("toggle", field) {
            return false;
        }
        if !self.selection.toggle(field, value) {
            warn!(field = %field, guide = %self.kind(), "toggle on a field that is not multi-select ignored");
            return false;
        }
        debug!(field = %field, value, "toggled");
        true
    }

    /// Overwrites the email. Ignored while submitted.
    pub fn set_email(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        if self.submitted {
            warn!("email change ignored while submitted");
            return false;
        }
        self.email = value.into();
        true
    }

    /// Marks the session submitted when the email is non-empty and contains
    /// an `@`.
    ///
    /// A second submit while submitted is a no-op, so one session captures
    /// at most one lead until [`SelectionStore::back`] or
    /// [`SelectionStore::reset`].
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitted {
            warn!(guide = %self.kind(), "submit ignored, already submitted");
            return SubmitOutcome::AlreadySubmitted;
        }

        let rejection = if self.email.is_empty() {
            Some(SubmitRejection::EmptyEmail)
        } else if !self.email.contains('@') {
            Some(SubmitRejection::MissingAtSign)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                info!(%reason, "submit rejected");
                SubmitOutcome::Rejected(reason)
            }
            None => {
                self.submitted = true;
                info!(guide = %self.kind(), "submitted");
                SubmitOutcome::Accepted
            }
        }
    }

    /// Leaves the submitted state, keeping answers and email.
    pub fn back(&mut self) {
        self.submitted = false;
    }

    /// Clears answers and email and leaves the submitted state.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind());
    }

    /// The captured answers and email, once submitted.
    pub fn envelope(&self) -> Option<SubmissionEnvelope> {
        self.submitted.then(|| SubmissionEnvelope {
            selection: self.selection.clone(),
            email: self.email.clone(),
        })
    }

    fn refuse_while_submitted(
        &self,
        operation: &str,
        field: FieldId,
    ) -> bool {
        if self.submitted {
            warn!(operation, field = %field, "selection is frozen while submitted");
        }
        self.submitted
    }
}
