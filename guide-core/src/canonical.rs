//! Canonical keys shared by both guides.
//!
//! The two guides word their options differently ("Retention & Turnover"
//! versus "Employee Retention", "Admin-curated" versus "Admin-selected"), but
//! the report content is keyed by one machine key per concept. Each key type
//! here holds the one mapping for its concept: machine key, report display
//! name and every guide label that resolves to it.
//!
//! # Example
//!
//! ```
//! use guide_core::canonical::{CanonicalKey, GoalKey, MatchingKey};
//!
//! assert_eq!(GoalKey::resolve("Retention & Turnover"), Some(GoalKey::EmployeeRetention));
//! assert_eq!(GoalKey::resolve("employee_retention"), Some(GoalKey::EmployeeRetention));
//! assert_eq!(MatchingKey::AdminSelected.display_name(), "Admin-Selected");
//! ```

use tracing::{debug, warn};

use crate::models::{Choice, FieldId, OptionSet, Selection};

/// A machine key with its display name and accepted guide labels.
pub trait CanonicalKey: Copy + Eq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// The snake_case machine key.
    fn key(self) -> &'static str;

    /// The name used in generated reports.
    fn display_name(self) -> &'static str;

    /// Guide labels that map onto this key, besides the display name.
    fn aliases(self) -> &'static [&'static str];

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|candidate| candidate.key() == key)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.display_name() == name || candidate.aliases().contains(&name))
    }

    /// Accepts a guide label, a display name or a machine key.
    fn resolve(value: &str) -> Option<Self> {
        Self::from_display_name(value).or_else(|| Self::from_key(value))
    }
}

macro_rules! canonical_key {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($key:literal, $display:literal, [$($alias:literal),* $(,)?]) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $key)] $variant ),+
        }

        impl CanonicalKey for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }

            fn display_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $display ),+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $( Self::$variant => &[$($alias),*] ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

canonical_key! {
    /// Program goal. The business-case goals map onto the closest template goal.
    GoalKey {
        LeadershipDevelopment => ("leadership_development", "Leadership Development", ["Leadership Pipeline"]),
        NewManagerTraining => ("new_manager_training", "New Manager Training", []),
        EmployeeOnboarding => ("employee_onboarding", "Employee Onboarding", ["Onboarding & Ramp"]),
        Dei => ("dei", "Diversity, Equity & Inclusion", ["DEI & Belonging"]),
        EmployeeRetention => ("employee_retention", "Employee Retention", ["Retention & Turnover"]),
        SkillsDevelopment => ("skills_development", "Skills Development", []),
        GeneralCareerDevelopment => ("general_career_development", "General Career Development", []),
        CultureConnection => ("culture_connection", "Culture & Connection", []),
    }
}

canonical_key! {
    /// Mentoring style, which the business case calls program type.
    StyleKey {
        Traditional => ("traditional_1_1", "Traditional 1:1", ["Traditional 1:1 Mentoring"]),
        Group => ("group_mentoring", "Group Mentoring", []),
        Peer => ("peer_mentoring", "Peer Mentoring", []),
        Reverse => ("reverse_mentoring", "Reverse Mentoring", []),
        Flash => ("flash_mentoring", "Flash Mentoring / Coffee Chats", []),
    }
}

canonical_key! {
    FormatKey {
        Cohort => ("cohort", "Cohort-based", []),
        Evergreen => ("evergreen", "Always-open (Evergreen)", ["Always-open"]),
    }
}

canonical_key! {
    MatchingKey {
        AlgorithmLed => ("algorithm_led", "Algorithm-Led", ["Algorithm-led"]),
        AdminSelected => ("admin_selected", "Admin-Selected", ["Admin-selected", "Admin-curated"]),
        Hybrid => ("hybrid", "Hybrid", []),
        SelfDirected => ("self_directed", "Self-Directed", ["Self-directed", "Self-service"]),
    }
}

canonical_key! {
    PopulationKey {
        NewHires => ("new_hires", "New Hires", ["New hires (first 90 days)"]),
        IndividualContributors => ("individual_contributors", "Individual Contributors", ["Individual contributors seeking promotion"]),
        FirstTimeManagers => ("first_time_managers", "First-Time Managers", ["First-time managers"]),
        HighPotential => ("high_potential", "High-Potential Employees", ["High-potential employees"]),
        WomenLeadership => ("women_leadership", "Women in Leadership", ["Women in leadership pipelines"]),
        UnderrepresentedGroups => ("underrepresented_groups", "Underrepresented Groups", ["Underrepresented groups (ERG members)"]),
        CrossFunctional => ("cross_functional", "Cross-Functional Movers", ["Cross-functional movers"]),
        RemoteEmployees => ("remote_employees", "Remote/Distributed Employees", ["Remote/distributed employees"]),
        TechnicalSpecialists => ("technical_specialists", "Technical Specialists", ["Technical specialists"]),
        AllEmployees => ("all_employees", "All Employees", ["All employees (open enrollment)"]),
    }
}

/// A field value after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical<K> {
    Unanswered,
    Key(K),
    /// Answered with text that maps to no key. Content lookups fall back to
    /// their generic entry.
    Unmapped(String),
}

impl<K: CanonicalKey> Canonical<K> {
    fn from_choice<T: OptionSet>(
        field: FieldId,
        choice: Option<&Choice<T>>,
    ) -> Self {
        let Some(choice) = choice else {
            return Self::Unanswered;
        };
        match K::resolve(choice.as_str()) {
            Some(key) => Self::Key(key),
            None => {
                warn!(
                    field = %field,
                    value = %choice.as_str(),
                    "value has no canonical key, using generic content"
                );
                Self::Unmapped(choice.as_str().to_string())
            }
        }
    }

    pub fn key(&self) -> Option<K> {
        match self {
            Self::Key(key) => Some(*key),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    /// The report display name, the raw text when unmapped, or `None` when
    /// unanswered.
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Unanswered => None,
            Self::Key(key) => Some(key.display_name()),
            Self::Unmapped(raw) => Some(raw),
        }
    }
}

/// A selection translated to canonical keys, computed once per report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSelection {
    pub goal: Canonical<GoalKey>,
    pub style: Canonical<StyleKey>,
    /// Always unanswered for the business case, which has no format question.
    pub format: Canonical<FormatKey>,
    pub matching: Canonical<MatchingKey>,
    pub populations: Vec<Canonical<PopulationKey>>,
}

impl CanonicalSelection {
    pub fn from_selection(selection: &Selection) -> Self {
        let canonical = match selection {
            Selection::BusinessCase(answers) => Self {
                goal: Canonical::from_choice(FieldId::PrimaryGoal, answers.primary_goal.as_ref()),
                style: Canonical::from_choice(FieldId::ProgramType, answers.program_type.as_ref()),
                format: Canonical::Unanswered,
                matching: Canonical::from_choice(
                    FieldId::MatchingApproach,
                    answers.matching_approach.as_ref(),
                ),
                populations: Vec::new(),
            },
            Selection::MentorshipTemplate(answers) => Self {
                goal: Canonical::from_choice(FieldId::ProgramGoal, answers.program_goal.as_ref()),
                style: Canonical::from_choice(
                    FieldId::MentoringStyle,
                    answers.mentoring_style.as_ref(),
                ),
                format: Canonical::from_choice(
                    FieldId::ProgramFormat,
                    answers.program_format.as_ref(),
                ),
                matching: Canonical::from_choice(
                    FieldId::MatchingProcess,
                    answers.matching_process.as_ref(),
                ),
                populations: answers
                    .employee_populations
                    .iter()
                    .map(|population| {
                        Canonical::from_choice(FieldId::EmployeePopulations, Some(population))
                    })
                    .collect(),
            },
        };
        debug!(guide = %selection.kind(), ?canonical, "canonicalized selection");
        canonical
    }
}
