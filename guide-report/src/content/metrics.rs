//! Engagement and outcome metrics, and the feedback collection framework.

use guide_core::canonical::{Canonical, GoalKey};
use guide_core::{Choice, MeasurementFocus};

use super::goals::FALLBACK_GOAL;

#[derive(Debug, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub description: &'static str,
    /// Only engagement metrics carry a target.
    pub target: Option<&'static str>,
}

const fn engagement(
    name: &'static str,
    description: &'static str,
    target: &'static str,
) -> Metric {
    Metric { name, description, target: Some(target) }
}

const fn outcome(
    name: &'static str,
    description: &'static str,
) -> Metric {
    Metric { name, description, target: None }
}

pub static ENGAGEMENT_METRICS: [Metric; 5] = [
    engagement("Registration Rate", "% of eligible employees enrolled", "40-60%"),
    engagement("Match Acceptance Rate", "% of proposed matches accepted", ">90%"),
    engagement("Session Completion Rate", "% of pairs meeting consistently", ">75%"),
    engagement("Session Frequency", "Average meetings per month", "1-2"),
    engagement("Resource Utilization", "% accessing provided materials", ">50%"),
];

static LEADERSHIP_DEVELOPMENT: [Metric; 3] = [
    outcome("Promotion Rate", "% of participants promoted vs. non-participants"),
    outcome("Leadership Pipeline", "# of participants identified as succession candidates"),
    outcome("Competency Scores", "Improvement in leadership assessment ratings"),
];

static NEW_MANAGER_TRAINING: [Metric; 3] = [
    outcome("Manager Effectiveness", "Team satisfaction scores for new managers"),
    outcome("Time to Competency", "Weeks until manager meets performance standards"),
    outcome("Manager Retention", "% of new managers retained at 12 months"),
];

static EMPLOYEE_ONBOARDING: [Metric; 3] = [
    outcome("Time to Productivity", "Weeks until new hire reaches full productivity"),
    outcome("90-Day Retention", "% of new hires retained at 90 days"),
    outcome("New Hire Satisfaction", "Onboarding experience survey scores"),
];

static DEI: [Metric; 3] = [
    outcome("Promotion Equity", "Promotion rates for underrepresented groups"),
    outcome("Pipeline Representation", "% representation in leadership pipeline"),
    outcome("Belonging Scores", "Inclusion and belonging survey results"),
];

static EMPLOYEE_RETENTION: [Metric; 3] = [
    outcome("Retention Rate", "Turnover among participants vs. non-participants"),
    outcome("Engagement Scores", "Employee engagement survey results"),
    outcome("Intent to Stay", "% indicating plans to stay 12+ months"),
];

static SKILLS_DEVELOPMENT: [Metric; 3] = [
    outcome("Skill Assessment", "Pre/post skill assessment score improvement"),
    outcome("Certification Rate", "% completing related certifications"),
    outcome("Skill Application", "Manager ratings on skill demonstration"),
];

static GENERAL_CAREER_DEVELOPMENT: [Metric; 3] = [
    outcome("Internal Mobility", "% of participants making internal moves"),
    outcome("Career Clarity", "Self-reported career path confidence"),
    outcome("Promotion Readiness", "% identified as ready for next level"),
];

static CULTURE_CONNECTION: [Metric; 3] = [
    outcome("Connection Expansion", "New relationships formed outside immediate team"),
    outcome("Collaboration Metrics", "Cross-functional project participation"),
    outcome("Engagement Scores", "Overall employee engagement results"),
];

pub fn outcome_metrics(key: GoalKey) -> &'static [Metric] {
    match key {
        GoalKey::LeadershipDevelopment => &LEADERSHIP_DEVELOPMENT,
        GoalKey::NewManagerTraining => &NEW_MANAGER_TRAINING,
        GoalKey::EmployeeOnboarding => &EMPLOYEE_ONBOARDING,
        GoalKey::Dei => &DEI,
        GoalKey::EmployeeRetention => &EMPLOYEE_RETENTION,
        GoalKey::SkillsDevelopment => &SKILLS_DEVELOPMENT,
        GoalKey::GeneralCareerDevelopment => &GENERAL_CAREER_DEVELOPMENT,
        GoalKey::CultureConnection => &CULTURE_CONNECTION,
    }
}

pub fn resolve_outcome_metrics(goal: &Canonical<GoalKey>) -> &'static [Metric] {
    outcome_metrics(goal.key().unwrap_or(FALLBACK_GOAL))
}

/// The goal whose outcome metrics best track a measurement focus.
pub fn measurement_goal(focus: MeasurementFocus) -> GoalKey {
    match focus {
        MeasurementFocus::RetentionAndTurnover => GoalKey::EmployeeRetention,
        MeasurementFocus::CareerProgression => GoalKey::GeneralCareerDevelopment,
        MeasurementFocus::EngagementAndSatisfaction => GoalKey::CultureConnection,
        MeasurementFocus::TimeToProductivity => GoalKey::EmployeeOnboarding,
        MeasurementFocus::ManagerEffectiveness => GoalKey::NewManagerTraining,
    }
}

/// Outcome metrics for a business-case measurement focus. An unanswered or
/// unlisted focus falls back to the metrics of the program goal.
pub fn resolve_measurement_metrics(
    focus: Option<&Choice<MeasurementFocus>>,
    goal: &Canonical<GoalKey>,
) -> &'static [Metric] {
    match focus.and_then(Choice::listed) {
        Some(focus) => outcome_metrics(measurement_goal(focus)),
        None => resolve_outcome_metrics(goal),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FeedbackStage {
    pub title: &'static str,
    pub questions: &'static [&'static str],
}

pub static FEEDBACK_FRAMEWORK: [FeedbackStage; 3] = [
    FeedbackStage {
        title: "Session-Level Pulse (After each session)",
        questions: &[
            "Did the session happen as scheduled?",
            "How valuable was this session? (1-5 scale)",
            "What topics did you discuss?",
        ],
    },
    FeedbackStage {
        title: "Mid-Program Check-In (For cohort programs)",
        questions: &[
            "How would you rate your match compatibility? (1-5 scale)",
            "Are you on track to achieve your development goals?",
            "What additional support would help?",
        ],
    },
    FeedbackStage {
        title: "Program Completion Survey",
        questions: &[
            "Net Promoter Score: Would you recommend this program?",
            "Skills/goals progress assessment",
            "Relationship quality rating",
            "Open feedback for improvement",
        ],
    },
];
