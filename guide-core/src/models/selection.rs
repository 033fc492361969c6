//! The per-guide selection record and the guide catalogue.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::business_case::BusinessCaseSelection;
use super::field::{Answer, FieldId, Question, TrackedField};
use super::mentorship_template::TemplateSelection;

/// Which guide a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideKind {
    BusinessCase,
    MentorshipTemplate,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown guide '{0}' (expected business-case or mentorship-template)")]
pub struct UnknownGuide(pub String);

const BUSINESS_CASE_QUESTIONS: &[Question] = &[
    Question {
        number: 1,
        field: FieldId::PrimaryGoal,
        prompt: "What's the primary business objective you're trying to address?",
    },
    Question {
        number: 2,
        field: FieldId::EmployeeSize,
        prompt: "How many employees does your organization have?",
    },
    Question {
        number: 3,
        field: FieldId::ProgramType,
        prompt: "Which program model aligns best with your objectives?",
    },
    Question {
        number: 4,
        field: FieldId::AudienceSize,
        prompt: "What's your target audience size for the initial program?",
    },
    Question {
        number: 5,
        field: FieldId::MatchingApproach,
        prompt: "How do you want to handle mentor-mentee matching?",
    },
    Question {
        number: 6,
        field: FieldId::MeasurementFocus,
        prompt: "What's your primary measurement focus?",
    },
    Question {
        number: 7,
        field: FieldId::Timeline,
        prompt: "When are you hoping to launch your program?",
    },
];

const TEMPLATE_QUESTIONS: &[Question] = &[
    Question {
        number: 1,
        field: FieldId::ProgramGoal,
        prompt: "What is the primary goal of your mentorship program?",
    },
    Question {
        number: 2,
        field: FieldId::EmployeePopulations,
        prompt: "Which employee populations will participate in your program?",
    },
    Question {
        number: 3,
        field: FieldId::ProgramFormat,
        prompt: "Which program format best fits your needs?",
    },
    Question {
        number: 4,
        field: FieldId::MentoringStyle,
        prompt: "Which mentoring style will you use?",
    },
    Question {
        number: 5,
        field: FieldId::MatchingProcess,
        prompt: "How will mentors and mentees be matched?",
    },
];

const BUSINESS_CASE_TRACKER: &[TrackedField] = &[
    TrackedField { field: FieldId::PrimaryGoal, label: "Goal" },
    TrackedField { field: FieldId::EmployeeSize, label: "Company Size" },
    TrackedField { field: FieldId::ProgramType, label: "Type" },
    TrackedField { field: FieldId::AudienceSize, label: "Size" },
    TrackedField { field: FieldId::MatchingApproach, label: "Matching" },
    TrackedField { field: FieldId::MeasurementFocus, label: "Measure" },
    TrackedField { field: FieldId::Timeline, label: "Timeline" },
];

const TEMPLATE_TRACKER: &[TrackedField] = &[
    TrackedField { field: FieldId::ProgramGoal, label: "Goal" },
    TrackedField { field: FieldId::EmployeePopulations, label: "Audience" },
    TrackedField { field: FieldId::ProgramFormat, label: "Format" },
    TrackedField { field: FieldId::MentoringStyle, label: "Style" },
    TrackedField { field: FieldId::MatchingProcess, label: "Matching" },
];

impl GuideKind {
    pub const ALL: &'static [GuideKind] = &[GuideKind::BusinessCase, GuideKind::MentorshipTemplate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessCase => "business-case",
            Self::MentorshipTemplate => "mentorship-template",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BusinessCase => "The 5-Step Business Case for Enterprise Mentorship",
            Self::MentorshipTemplate => {
                "The 2026 Framework: A Complete Mentorship Program Template for HR Leaders"
            }
        }
    }

    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::BusinessCase => BusinessCaseSelection::FIELDS,
            Self::MentorshipTemplate => TemplateSelection::FIELDS,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        match self {
            Self::BusinessCase => BUSINESS_CASE_QUESTIONS,
            Self::MentorshipTemplate => TEMPLATE_QUESTIONS,
        }
    }

    /// The ordered field list shown by this guide's progress tracker.
    pub fn tracker_fields(&self) -> &'static [TrackedField] {
        match self {
            Self::BusinessCase => BUSINESS_CASE_TRACKER,
            Self::MentorshipTemplate => TEMPLATE_TRACKER,
        }
    }

    /// Base name for the downloadable report.
    pub fn report_name(&self) -> &'static str {
        match self {
            Self::BusinessCase => "mentorship-business-case",
            Self::MentorshipTemplate => "mentorship-program-template",
        }
    }
}

impl FromStr for GuideKind {
    type Err = UnknownGuide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownGuide(s.to_string()))
    }
}

impl std::fmt::Display for GuideKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answers for one guide session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "guide", rename_all = "kebab-case")]
pub enum Selection {
    BusinessCase(BusinessCaseSelection),
    MentorshipTemplate(TemplateSelection),
}

impl Selection {
    /// An all-unanswered selection for `kind`.
    pub fn new(kind: GuideKind) -> Self {
        match kind {
            GuideKind::BusinessCase => Self::BusinessCase(BusinessCaseSelection::default()),
            GuideKind::MentorshipTemplate => Self::MentorshipTemplate(TemplateSelection::default()),
        }
    }

    pub fn kind(&self) -> GuideKind {
        match self {
            Self::BusinessCase(_) => GuideKind::BusinessCase,
            Self::MentorshipTemplate(_) => GuideKind::MentorshipTemplate,
        }
    }

    /// The current answer for `field`. Fields of the other guide read as
    /// unanswered.
    pub fn answer(
        &self,
        field: FieldId,
    ) -> Answer<'_> {
        let answer = match self {
            Self::BusinessCase(selection) => selection.answer(field),
            Self::MentorshipTemplate(selection) => selection.answer(field),
        };
        answer.unwrap_or(Answer::Unanswered)
    }

    /// Overwrites a single-select field. Returns `false` when the field is
    /// multi-select or belongs to the other guide.
    pub fn set_single(
        &mut self,
        field: FieldId,
        raw: &str,
    ) -> bool {
        match self {
            Self::BusinessCase(selection) => selection.set(field, raw),
            Self::MentorshipTemplate(selection) => selection.set(field, raw),
        }
    }

    /// Adds or removes `raw` from a multi-select field. Returns `false` when
    /// the field is not a multi-select field of this guide.
    pub fn toggle(
        &mut self,
        field: FieldId,
        raw: &str,
    ) -> bool {
        match self {
            Self::BusinessCase(_) => false,
            Self::MentorshipTemplate(selection) => selection.toggle(field, raw),
        }
    }

    /// Fields holding at least one value outside their option list.
    pub fn unlisted_fields(&self) -> Vec<FieldId> {
        match self {
            Self::BusinessCase(selection) => selection.unlisted_fields(),
            Self::MentorshipTemplate(selection) => selection.unlisted_fields(),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.kind()
            .fields()
            .iter()
            .filter(|field| self.answer(**field).is_answered())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.kind().fields().len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{Choice, EmployeeSize};

    #[test]
    fn guide_kind_parses_cli_names() {
        assert_eq!("business-case".parse(), Ok(GuideKind::BusinessCase));
        assert_eq!("mentorship-template".parse(), Ok(GuideKind::MentorshipTemplate));
        assert_eq!(
            "template".parse::<GuideKind>(),
            Err(UnknownGuide("template".to_string()))
        );
    }

    #[test]
    fn questions_and_tracker_cover_every_field() {
        for kind in GuideKind::ALL {
            let question_fields: Vec<FieldId> =
                kind.questions().iter().map(|question| question.field).collect();
            let tracked: Vec<FieldId> =
                kind.tracker_fields().iter().map(|tracked| tracked.field).collect();

            assert_eq!(question_fields, kind.fields());
            assert_eq!(tracked, kind.fields());
        }
    }

    #[test]
    fn foreign_field_reads_unanswered() {
        let mut selection = Selection::new(GuideKind::BusinessCase);

        assert!(!selection.set_single(FieldId::ProgramGoal, "Employee Retention"));
        assert_eq!(selection.answer(FieldId::ProgramGoal), Answer::Unanswered);
    }

    #[test]
    fn toggle_is_refused_by_business_case() {
        let mut selection = Selection::new(GuideKind::BusinessCase);

        assert!(!selection.toggle(FieldId::EmployeePopulations, "Technical specialists"));
    }

    #[test]
    fn completeness_counts_answered_fields() {
        let mut selection = Selection::new(GuideKind::MentorshipTemplate);
        selection.set_single(FieldId::ProgramGoal, "Employee Retention");
        selection.toggle(FieldId::EmployeePopulations, "Technical specialists");

        assert_eq!(selection.answered_count(), 2);
        assert!(!selection.is_complete());
    }

    #[test]
    fn set_single_resolves_listed_option() {
        let mut selection = Selection::new(GuideKind::BusinessCase);
        selection.set_single(FieldId::EmployeeSize, "1000-2499");

        let Selection::BusinessCase(inner) = &selection else {
            panic!("expected business case selection");
        };
        assert_eq!(
            inner.employee_size,
            Some(Choice::Listed(EmployeeSize::From1000To2499))
        );
    }
}
