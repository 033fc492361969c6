//! Field identifiers shared by both guides, and the answers they hold.

use serde::{Deserialize, Serialize};

use super::OptionSet;
use super::business_case::{
    AudienceSize, EmployeeSize, MatchingApproach, MeasurementFocus, PrimaryGoal, ProgramType,
    Timeline,
};
use super::mentorship_template::{
    EmployeePopulation, MatchingProcess, MentoringStyle, ProgramFormat, ProgramGoal,
};
use super::selection::GuideKind;

/// Every question across both guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    // Business case
    PrimaryGoal,
    EmployeeSize,
    ProgramType,
    AudienceSize,
    MatchingApproach,
    MeasurementFocus,
    Timeline,
    // Mentorship template
    ProgramGoal,
    EmployeePopulations,
    ProgramFormat,
    MentoringStyle,
    MatchingProcess,
}

/// Whether a field holds one answer or a list of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Single,
    Multi,
}

impl FieldId {
    pub const ALL: &'static [FieldId] = &[
        FieldId::PrimaryGoal,
        FieldId::EmployeeSize,
        FieldId::ProgramType,
        FieldId::AudienceSize,
        FieldId::MatchingApproach,
        FieldId::MeasurementFocus,
        FieldId::Timeline,
        FieldId::ProgramGoal,
        FieldId::EmployeePopulations,
        FieldId::ProgramFormat,
        FieldId::MentoringStyle,
        FieldId::MatchingProcess,
    ];

    /// The camelCase identifier used in session scripts and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryGoal => "primaryGoal",
            Self::EmployeeSize => "employeeSize",
            Self::ProgramType => "programType",
            Self::AudienceSize => "audienceSize",
            Self::MatchingApproach => "matchingApproach",
            Self::MeasurementFocus => "measurementFocus",
            Self::Timeline => "timeline",
            Self::ProgramGoal => "programGoal",
            Self::EmployeePopulations => "employeePopulations",
            Self::ProgramFormat => "programFormat",
            Self::MentoringStyle => "mentoringStyle",
            Self::MatchingProcess => "matchingProcess",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == s)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::EmployeePopulations => FieldKind::Multi,
            _ => FieldKind::Single,
        }
    }

    /// The guide whose question set contains this field.
    pub fn guide(&self) -> GuideKind {
        match self {
            Self::PrimaryGoal
            | Self::EmployeeSize
            | Self::ProgramType
            | Self::AudienceSize
            | Self::MatchingApproach
            | Self::MeasurementFocus
            | Self::Timeline => GuideKind::BusinessCase,
            Self::ProgramGoal
            | Self::EmployeePopulations
            | Self::ProgramFormat
            | Self::MentoringStyle
            | Self::MatchingProcess => GuideKind::MentorshipTemplate,
        }
    }

    /// Name of the CRM form field this answer is submitted under.
    pub fn crm_field_name(&self) -> &'static str {
        match self {
            Self::PrimaryGoal | Self::ProgramGoal => "gtm_program_goal",
            Self::EmployeeSize => "gtm__employee_size",
            Self::ProgramType => "gtm__program_type",
            Self::AudienceSize => "gtm__participants",
            Self::MatchingApproach | Self::MatchingProcess => "gtm__matching_type",
            Self::MeasurementFocus => "gtm__measurement",
            Self::Timeline => "gtm__timeline",
            Self::EmployeePopulations => "gtm__employee_populations",
            Self::ProgramFormat => "gtm__program_format",
            Self::MentoringStyle => "gtm__mentoring_style",
        }
    }

    /// The listed options for this field, in presentation order.
    pub fn options(&self) -> Vec<OptionInfo> {
        match self {
            Self::PrimaryGoal => option_infos::<PrimaryGoal>(),
            Self::EmployeeSize => option_infos::<EmployeeSize>(),
            Self::ProgramType => option_infos::<ProgramType>(),
            Self::AudienceSize => option_infos::<AudienceSize>(),
            Self::MatchingApproach => option_infos::<MatchingApproach>(),
            Self::MeasurementFocus => option_infos::<MeasurementFocus>(),
            Self::Timeline => option_infos::<Timeline>(),
            Self::ProgramGoal => option_infos::<ProgramGoal>(),
            Self::EmployeePopulations => option_infos::<EmployeePopulation>(),
            Self::ProgramFormat => option_infos::<ProgramFormat>(),
            Self::MentoringStyle => option_infos::<MentoringStyle>(),
            Self::MatchingProcess => option_infos::<MatchingProcess>(),
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view of the current answer for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<'a> {
    Unanswered,
    Single(&'a str),
    /// Never empty; an empty list is reported as `Unanswered`.
    Multi(Vec<&'a str>),
}

impl Answer<'_> {
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Unanswered => false,
            Self::Single(_) => true,
            Self::Multi(values) => !values.is_empty(),
        }
    }

    /// Single values as-is, lists joined with `", "`, unanswered as `None`.
    pub fn joined(&self) -> Option<String> {
        match self {
            Self::Unanswered => None,
            Self::Single(value) => Some((*value).to_string()),
            Self::Multi(values) if values.is_empty() => None,
            Self::Multi(values) => Some(values.join(", ")),
        }
    }
}

/// A listed option as shown on a question card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionInfo {
    pub label: &'static str,
    /// Empty when the option has no description.
    pub description: &'static str,
}

fn option_infos<T: OptionSet>() -> Vec<OptionInfo> {
    T::ALL
        .iter()
        .map(|option| OptionInfo {
            label: option.label(),
            description: option.description(),
        })
        .collect()
}

/// One question of a guide, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub number: u8,
    pub field: FieldId,
    pub prompt: &'static str,
}

/// A field shown in the progress tracker, with its short label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedField {
    pub field: FieldId,
    pub label: &'static str,
}
