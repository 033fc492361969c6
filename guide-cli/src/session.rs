//! Session scripts: a guide kind plus the store operations a user performed,
//! replayed in order.
//!
//! ```toml
//! guide = "business-case"
//!
//! [[steps]]
//! action = "select"
//! field = "employeeSize"
//! value = "1000-2499"
//!
//! [[steps]]
//! action = "email"
//! value = "hr@example.com"
//!
//! [[steps]]
//! action = "submit"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use guide_core::store::SubmitRejection;
use guide_core::{FieldId, GuideKind, SelectionStore, SubmitOutcome};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionScriptError {
    #[error("cannot read session script '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid session script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("step {step}: field '{field}' is not part of the {guide} guide")]
    ForeignField {
        step: usize,
        field: FieldId,
        guide: GuideKind,
    },
}

/// One recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase", deny_unknown_fields)]
pub enum SessionStep {
    Select { field: FieldId, value: String },
    Toggle { field: FieldId, value: String },
    Email { value: String },
    Submit,
    Back,
    Reset,
}

/// What a replayed step did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    Applied,
    /// The store refused the operation: frozen, wrong field kind, or a
    /// repeated submit.
    Ignored,
    Submitted,
    Rejected(SubmitRejection),
}

impl SessionStep {
    fn field(&self) -> Option<FieldId> {
        match self {
            Self::Select { field, .. } | Self::Toggle { field, .. } => Some(*field),
            Self::Email { .. } | Self::Submit | Self::Back | Self::Reset => None,
        }
    }

    /// Performs the step on `store`.
    pub fn apply(
        &self,
        store: &mut SelectionStore,
    ) -> StepEffect {
        let applied = match self {
            Self::Select { field, value } => store.select(*field, value),
            Self::Toggle { field, value } => store.toggle_multi(*field, value),
            Self::Email { value } => store.set_email(value.as_str()),
            Self::Submit => {
                return match store.submit() {
                    SubmitOutcome::Accepted => StepEffect::Submitted,
                    SubmitOutcome::Rejected(reason) => StepEffect::Rejected(reason),
                    SubmitOutcome::AlreadySubmitted => StepEffect::Ignored,
                };
            }
            Self::Back => {
                store.back();
                true
            }
            Self::Reset => {
                store.reset();
                true
            }
        };
        if applied {
            StepEffect::Applied
        } else {
            StepEffect::Ignored
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionScript {
    pub guide: GuideKind,
    #[serde(default)]
    pub steps: Vec<SessionStep>,
}

impl SessionScript {
    /// Parses a script and checks every field belongs to its guide.
    pub fn from_toml(text: &str) -> Result<Self, SessionScriptError> {
        let script: Self = toml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, SessionScriptError> {
        let text = fs::read_to_string(path).map_err(|source| SessionScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_toml(&text)?;
        debug!(path = %path.display(), steps = script.steps.len(), "loaded session script");
        Ok(script)
    }

    fn validate(&self) -> Result<(), SessionScriptError> {
        let foreign = self.steps.iter().enumerate().find_map(|(index, step)| {
            step.field()
                .filter(|field| field.guide() != self.guide)
                .map(|field| (index + 1, field))
        });
        match foreign {
            Some((step, field)) => Err(SessionScriptError::ForeignField {
                step,
                field,
                guide: self.guide,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCRIPT: &str = r#"
        guide = "mentorship-template"

        [[steps]]
        action = "toggle"
        field = "employeePopulations"
        value = "First-time managers"

        [[steps]]
        action = "select"
        field = "programFormat"
        value = "Cohort-based"

        [[steps]]
        action = "submit"
    "#;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parses_tagged_steps() {
        let script = SessionScript::from_toml(SCRIPT).unwrap();

        assert_eq!(script.guide, GuideKind::MentorshipTemplate);
        assert_eq!(
            script.steps,
            vec![
                SessionStep::Toggle {
                    field: FieldId::EmployeePopulations,
                    value: "First-time managers".to_string(),
                },
                SessionStep::Select {
                    field: FieldId::ProgramFormat,
                    value: "Cohort-based".to_string(),
                },
                SessionStep::Submit,
            ]
        );
    }

    #[test]
    fn rejects_field_from_other_guide() {
        let text = r#"
            guide = "business-case"

            [[steps]]
            action = "select"
            field = "programFormat"
            value = "Cohort-based"
        "#;

        let result = SessionScript::from_toml(text);

        assert!(matches!(
            result,
            Err(SessionScriptError::ForeignField {
                step: 1,
                field: FieldId::ProgramFormat,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_action() {
        let text = "guide = \"business-case\"\n[[steps]]\naction = \"undo\"\n";

        assert!(matches!(
            SessionScript::from_toml(text),
            Err(SessionScriptError::Parse(_))
        ));
    }

    #[test]
    fn script_without_steps_is_valid() {
        let script = SessionScript::from_toml("guide = \"business-case\"\n").unwrap();

        assert!(script.steps.is_empty());
    }

    // =========================================================================
    // Replay
    // =========================================================================

    #[test]
    fn submit_without_email_is_rejected() {
        let mut store = SelectionStore::new(GuideKind::BusinessCase);

        assert_eq!(
            SessionStep::Submit.apply(&mut store),
            StepEffect::Rejected(SubmitRejection::EmptyEmail)
        );
    }

    #[test]
    fn steps_after_submit_are_ignored_until_back() {
        let mut store = SelectionStore::new(GuideKind::BusinessCase);
        let select = SessionStep::Select {
            field: FieldId::Timeline,
            value: "This quarter".to_string(),
        };

        SessionStep::Email { value: "hr@example.com".to_string() }.apply(&mut store);
        assert_eq!(SessionStep::Submit.apply(&mut store), StepEffect::Submitted);
        assert_eq!(select.apply(&mut store), StepEffect::Ignored);

        SessionStep::Back.apply(&mut store);
        assert_eq!(select.apply(&mut store), StepEffect::Applied);
    }

    #[test]
    fn repeated_submit_is_ignored() {
        let mut store = SelectionStore::new(GuideKind::BusinessCase);
        SessionStep::Email { value: "hr@example.com".to_string() }.apply(&mut store);

        assert_eq!(SessionStep::Submit.apply(&mut store), StepEffect::Submitted);
        assert_eq!(SessionStep::Submit.apply(&mut store), StepEffect::Ignored);
        assert!(store.is_submitted());
    }
}
