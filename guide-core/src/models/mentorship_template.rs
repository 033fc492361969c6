//! Question set for the mentorship-template guide.

use serde::{Deserialize, Serialize};

use super::choice::{Choice, is_unlisted, multi_answer, option_set, single_answer, toggle};
use super::field::{Answer, FieldId};

option_set! {
    ProgramGoal {
        LeadershipDevelopment => ("Leadership Development", "Build a pipeline of future leaders by pairing high-potential employees with senior executives"),
        NewManagerTraining => ("New Manager Training", "Equip first-time managers with the skills and confidence to lead effectively"),
        EmployeeOnboarding => ("Employee Onboarding", "Accelerate time-to-productivity for new hires by connecting them with experienced colleagues"),
        DiversityEquityInclusion => ("Diversity, Equity & Inclusion", "Create pathways for underrepresented employees to access sponsorship, visibility, and career advancement"),
        EmployeeRetention => ("Employee Retention", "Strengthen engagement and reduce turnover by fostering meaningful workplace connections"),
        SkillsDevelopment => ("Skills Development", "Enable targeted skill-building through knowledge transfer from experienced practitioners"),
        GeneralCareerDevelopment => ("General Career Development", "Support employees at all levels in navigating their career paths and growth opportunities"),
        CultureAndConnection => ("Culture & Connection", "Combat isolation in hybrid/remote environments by facilitating cross-functional relationships"),
    }
}

option_set! {
    /// Participant groups. These carry no description.
    EmployeePopulation {
        NewHires => ("New hires (first 90 days)", ""),
        IndividualContributors => ("Individual contributors seeking promotion", ""),
        FirstTimeManagers => ("First-time managers", ""),
        HighPotential => ("High-potential employees", ""),
        WomenInLeadership => ("Women in leadership pipelines", ""),
        UnderrepresentedGroups => ("Underrepresented groups (ERG members)", ""),
        CrossFunctionalMovers => ("Cross-functional movers", ""),
        RemoteEmployees => ("Remote/distributed employees", ""),
        TechnicalSpecialists => ("Technical specialists", ""),
        AllEmployees => ("All employees (open enrollment)", ""),
    }
}

option_set! {
    ProgramFormat {
        CohortBased => ("Cohort-based", "Fixed duration with structured milestones and defined participant groups"),
        AlwaysOpen => ("Always-open", "Continuous enrollment with flexible, ongoing relationships"),
    }
}

option_set! {
    MentoringStyle {
        Traditional => ("Traditional 1:1 Mentoring", "Deep, sustained relationships with dedicated mentor-mentee pairs"),
        Group => ("Group Mentoring", "One mentor guiding multiple mentees through shared sessions"),
        Peer => ("Peer Mentoring", "Colleagues at similar levels learning from each other"),
        Reverse => ("Reverse Mentoring", "Junior employees mentoring senior leaders on specific topics"),
        Flash => ("Flash Mentoring / Coffee Chats", "Short-term, informal connections for quick learning or networking"),
    }
}

option_set! {
    MatchingProcess {
        AlgorithmLed => ("Algorithm-led", "Automated matching based on skills, goals, and preferences"),
        AdminSelected => ("Admin-selected", "Program administrators manually create all pairings"),
        Hybrid => ("Hybrid", "Algorithm generates recommendations; admins review and approve"),
        SelfDirected => ("Self-directed", "Participants browse profiles and choose their own matches"),
    }
}

/// Answers collected by the mentorship-template guide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateSelection {
    pub program_goal: Option<Choice<ProgramGoal>>,
    /// Multi-select, in the order the populations were picked.
    pub employee_populations: Vec<Choice<EmployeePopulation>>,
    pub program_format: Option<Choice<ProgramFormat>>,
    pub mentoring_style: Option<Choice<MentoringStyle>>,
    pub matching_process: Option<Choice<MatchingProcess>>,
}

impl TemplateSelection {
    pub const FIELDS: &'static [FieldId] = &[
        FieldId::ProgramGoal,
        FieldId::EmployeePopulations,
        FieldId::ProgramFormat,
        FieldId::MentoringStyle,
        FieldId::MatchingProcess,
    ];

    pub(crate) fn answer(
        &self,
        field: FieldId,
    ) -> Option<Answer<'_>> {
        let answer = match field {
            FieldId::ProgramGoal => single_answer(&self.program_goal),
            FieldId::EmployeePopulations => multi_answer(&self.employee_populations),
            FieldId::ProgramFormat => single_answer(&self.program_format),
            FieldId::MentoringStyle => single_answer(&self.mentoring_style),
            FieldId::MatchingProcess => single_answer(&self.matching_process),
            _ => return None,
        };
        Some(answer)
    }

    /// Overwrites a single-select field. Multi-select and foreign fields
    /// return `false`.
    pub(crate) fn set(
        &mut self,
        field: FieldId,
        raw: &str,
    ) -> bool {
        match field {
            FieldId::ProgramGoal => self.program_goal = Some(Choice::parse(raw)),
            FieldId::ProgramFormat => self.program_format = Some(Choice::parse(raw)),
            FieldId::MentoringStyle => self.mentoring_style = Some(Choice::parse(raw)),
            FieldId::MatchingProcess => self.matching_process = Some(Choice::parse(raw)),
            _ => return false,
        }
        true
    }

    pub(crate) fn toggle(
        &mut self,
        field: FieldId,
        raw: &str,
    ) -> bool {
        match field {
            FieldId::EmployeePopulations => {
                toggle(&mut self.employee_populations, raw);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn unlisted_fields(&self) -> Vec<FieldId> {
        let flags = [
            (FieldId::ProgramGoal, is_unlisted(&self.program_goal)),
            (
                FieldId::EmployeePopulations,
                self.employee_populations.iter().any(|choice| !choice.is_listed()),
            ),
            (FieldId::ProgramFormat, is_unlisted(&self.program_format)),
            (FieldId::MentoringStyle, is_unlisted(&self.mentoring_style)),
            (FieldId::MatchingProcess, is_unlisted(&self.matching_process)),
        ];
        flags
            .into_iter()
            .filter_map(|(field, unlisted)| unlisted.then_some(field))
            .collect()
    }
}
