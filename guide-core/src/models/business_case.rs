//! Question set for the business-case guide.

use serde::{Deserialize, Serialize};

use super::choice::{Choice, is_unlisted, option_set, single_answer};
use super::field::{Answer, FieldId};

option_set! {
    /// The business objective the program is meant to address.
    PrimaryGoal {
        RetentionAndTurnover => ("Retention & Turnover", "Reduce costly attrition, especially among high performers"),
        LeadershipPipeline => ("Leadership Pipeline", "Develop emerging leaders for succession planning"),
        DeiAndBelonging => ("DEI & Belonging", "Support underrepresented groups and improve inclusion"),
        OnboardingAndRamp => ("Onboarding & Ramp", "Accelerate time-to-productivity for new hires"),
    }
}

option_set! {
    /// Organization headcount, as a bucketed range.
    EmployeeSize {
        UpTo249 => ("1-249", "Small organization"),
        From250To499 => ("250-499", "Small to mid-size organization"),
        From500To999 => ("500-999", "Mid-size growing company"),
        From1000To2499 => ("1000-2499", "Large organization"),
        From2500To5000 => ("2500-5000", "Enterprise-level company"),
        Over5000 => ("5000+", "Large enterprise organization"),
    }
}

impl EmployeeSize {
    /// Inclusive headcount bounds. The top bucket is open-ended.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::UpTo249 => (1, Some(249)),
            Self::From250To499 => (250, Some(499)),
            Self::From500To999 => (500, Some(999)),
            Self::From1000To2499 => (1000, Some(2499)),
            Self::From2500To5000 => (2500, Some(5000)),
            Self::Over5000 => (5000, None),
        }
    }
}

option_set! {
    /// Program model.
    ProgramType {
        Traditional => ("Traditional 1:1", "Senior-junior pairing for career development"),
        Group => ("Group Mentoring", "One mentor with multiple mentees"),
        Reverse => ("Reverse Mentoring", "Junior employees mentor senior leaders"),
        Peer => ("Peer Mentoring", "Similar-level mutual support"),
    }
}

option_set! {
    /// Size of the initial participant audience.
    AudienceSize {
        Pilot => ("Pilot (50-200)", "Prove concept before scaling"),
        Department => ("Department (200-500)", "One business unit or function"),
        MultiDepartment => ("Multi-Department (500-2000)", "Several units with phased rollout"),
        Enterprise => ("Enterprise (2000+)", "Organization-wide from launch"),
    }
}

impl AudienceSize {
    /// Inclusive participant bounds. The top bucket is open-ended.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::Pilot => (50, Some(200)),
            Self::Department => (200, Some(500)),
            Self::MultiDepartment => (500, Some(2000)),
            Self::Enterprise => (2000, None),
        }
    }
}

option_set! {
    MatchingApproach {
        AlgorithmLed => ("Algorithm-led", "System matches based on goals, skills, preferences"),
        AdminCurated => ("Admin-curated", "Administrators make final pairing decisions"),
        Hybrid => ("Hybrid", "Algorithm suggests, admin approves"),
        SelfService => ("Self-service", "Participants browse and select their own matches"),
    }
}

option_set! {
    /// The outcome the organization intends to measure first.
    MeasurementFocus {
        RetentionAndTurnover => ("Retention & Turnover", "Track participant retention vs. non-participants"),
        CareerProgression => ("Career Progression", "Monitor promotions, role changes, skill growth"),
        EngagementAndSatisfaction => ("Engagement & Satisfaction", "Survey-based feedback and engagement scores"),
        TimeToProductivity => ("Time to Productivity", "New hire ramp time and performance milestones"),
        ManagerEffectiveness => ("Manager Effectiveness", "Improve people management skills and effectiveness"),
    }
}

option_set! {
    /// Intended launch window.
    Timeline {
        ThisQuarter => ("This quarter", "Ready to move quickly"),
        NextQuarter => ("Next quarter", "Building the case now"),
        SixMonthsPlus => ("6+ months", "Planning for future budget cycle"),
        Exploring => ("Exploring options", "Just researching for now"),
    }
}

/// Answers collected by the business-case guide. Every field is single-select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessCaseSelection {
    pub primary_goal: Option<Choice<PrimaryGoal>>,
    pub employee_size: Option<Choice<EmployeeSize>>,
    pub program_type: Option<Choice<ProgramType>>,
    pub audience_size: Option<Choice<AudienceSize>>,
    pub matching_approach: Option<Choice<MatchingApproach>>,
    pub measurement_focus: Option<Choice<MeasurementFocus>>,
    pub timeline: Option<Choice<Timeline>>,
}

impl BusinessCaseSelection {
    pub const FIELDS: &'static [FieldId] = &[
        FieldId::PrimaryGoal,
        FieldId::EmployeeSize,
        FieldId::ProgramType,
        FieldId::AudienceSize,
        FieldId::MatchingApproach,
        FieldId::MeasurementFocus,
        FieldId::Timeline,
    ];

    /// Returns `None` when `field` belongs to the other guide.
    pub(crate) fn answer(
        &self,
        field: FieldId,
    ) -> Option<Answer<'_>> {
        let answer = match field {
            FieldId::PrimaryGoal => single_answer(&self.primary_goal),
            FieldId::EmployeeSize => single_answer(&self.employee_size),
            FieldId::ProgramType => single_answer(&self.program_type),
            FieldId::AudienceSize => single_answer(&self.audience_size),
            FieldId::MatchingApproach => single_answer(&self.matching_approach),
            FieldId::MeasurementFocus => single_answer(&self.measurement_focus),
            FieldId::Timeline => single_answer(&self.timeline),
            _ => return None,
        };
        Some(answer)
    }

    /// Overwrites a field. Returns `false` when `field` is not part of this guide.
    pub(crate) fn set(
        &mut self,
        field: FieldId,
        raw: &str,
    ) -> bool {
        match field {
            FieldId::PrimaryGoal => self.primary_goal = Some(Choice::parse(raw)),
            FieldId::EmployeeSize => self.employee_size = Some(Choice::parse(raw)),
            FieldId::ProgramType => self.program_type = Some(Choice::parse(raw)),
            FieldId::AudienceSize => self.audience_size = Some(Choice::parse(raw)),
            FieldId::MatchingApproach => self.matching_approach = Some(Choice::parse(raw)),
            FieldId::MeasurementFocus => self.measurement_focus = Some(Choice::parse(raw)),
            FieldId::Timeline => self.timeline = Some(Choice::parse(raw)),
            _ => return false,
        }
        true
    }

    pub(crate) fn unlisted_fields(&self) -> Vec<FieldId> {
        let flags = [
            (FieldId::PrimaryGoal, is_unlisted(&self.primary_goal)),
            (FieldId::EmployeeSize, is_unlisted(&self.employee_size)),
            (FieldId::ProgramType, is_unlisted(&self.program_type)),
            (FieldId::AudienceSize, is_unlisted(&self.audience_size)),
            (FieldId::MatchingApproach, is_unlisted(&self.matching_approach)),
            (FieldId::MeasurementFocus, is_unlisted(&self.measurement_focus)),
            (FieldId::Timeline, is_unlisted(&self.timeline)),
        ];
        flags
            .into_iter()
            .filter_map(|(field, unlisted)| unlisted.then_some(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::OptionSet;

    #[test]
    fn employee_size_labels_are_the_submitted_values() {
        let labels: Vec<&str> = EmployeeSize::ALL.iter().map(|size| size.label()).collect();

        assert_eq!(
            labels,
            vec!["1-249", "250-499", "500-999", "1000-2499", "2500-5000", "5000+"]
        );
    }

    #[test]
    fn only_top_buckets_are_open_ended() {
        assert_eq!(EmployeeSize::Over5000.bounds(), (5000, None));
        assert_eq!(AudienceSize::Enterprise.bounds(), (2000, None));
        assert_eq!(EmployeeSize::From1000To2499.bounds(), (1000, Some(2499)));
    }

    #[test]
    fn set_rejects_template_fields() {
        let mut selection = BusinessCaseSelection::default();

        assert!(!selection.set(FieldId::ProgramFormat, "Cohort-based"));
        assert_eq!(selection, BusinessCaseSelection::default());
    }

    #[test]
    fn set_overwrites_prior_value() {
        let mut selection = BusinessCaseSelection::default();

        selection.set(FieldId::Timeline, "This quarter");
        selection.set(FieldId::Timeline, "Next quarter");

        assert_eq!(selection.timeline, Some(Choice::Listed(Timeline::NextQuarter)));
    }

    #[test]
    fn unlisted_fields_reports_free_text() {
        let mut selection = BusinessCaseSelection::default();
        selection.set(FieldId::PrimaryGoal, "Retention & Turnover");
        selection.set(FieldId::EmployeeSize, "about 900");

        assert_eq!(selection.unlisted_fields(), vec![FieldId::EmployeeSize]);
    }
}
