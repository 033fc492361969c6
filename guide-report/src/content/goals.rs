//! Goal descriptions for the template report and goal outlines for the
//! business-case report.

use guide_core::canonical::{Canonical, GoalKey};

#[derive(Debug, PartialEq, Eq)]
pub struct GoalContent {
    pub title: &'static str,
    pub description: &'static str,
    pub statistic: &'static str,
    pub key_elements: &'static [&'static str],
}

/// Used when the goal is unanswered or unmapped.
pub const FALLBACK_GOAL: GoalKey = GoalKey::GeneralCareerDevelopment;

static LEADERSHIP_DEVELOPMENT: GoalContent = GoalContent {
    title: "Leadership Development",
    description: "Your program aims to build a pipeline of future leaders by pairing high-potential employees with senior executives. Studies show mentees are promoted 5x more frequently than non-participants.",
    statistic: "5x more promotions",
    key_elements: &[
        "Pair high-potential employees with senior leaders",
        "Create clear competency development paths",
        "Track promotion and leadership readiness metrics",
        "Integrate with succession planning processes",
    ],
};

static NEW_MANAGER_TRAINING: GoalContent = GoalContent {
    title: "New Manager Training",
    description: "Your program equips first-time managers with the skills, confidence, and support network they need to lead effectively. Organizations with structured manager mentoring see 23% higher team engagement scores.",
    statistic: "23% higher engagement",
    key_elements: &[
        "Connect new managers with experienced people leaders",
        "Focus on practical leadership challenges and scenarios",
        "Build peer support networks among manager cohorts",
        "Track manager effectiveness and team satisfaction metrics",
    ],
};

static EMPLOYEE_ONBOARDING: GoalContent = GoalContent {
    title: "Employee Onboarding",
    description: "Your program accelerates time-to-productivity for new hires by connecting them with experienced colleagues who can share institutional knowledge and cultural context. Structured onboarding mentorship improves 90-day retention by up to 82%.",
    statistic: "82% better retention",
    key_elements: &[
        "Match new hires with tenured employees in similar roles",
        "Provide structured conversation guides for first 90 days",
        "Focus on cultural integration and relationship building",
        "Track time-to-productivity and new hire satisfaction",
    ],
};

static DEI: GoalContent = GoalContent {
    title: "Diversity, Equity & Inclusion",
    description: "Your program creates pathways for underrepresented employees to access sponsorship, visibility, and career advancement opportunities. DEI-focused mentoring programs show 24% higher promotion rates for participants.",
    statistic: "24% higher promotion rates",
    key_elements: &[
        "Intentionally pair underrepresented talent with senior sponsors",
        "Create visibility opportunities and stretch assignments",
        "Track representation metrics in leadership pipeline",
        "Measure belonging and inclusion survey scores",
    ],
};

static EMPLOYEE_RETENTION: GoalContent = GoalContent {
    title: "Employee Retention",
    description: "Your program strengthens engagement and reduces turnover by fostering meaningful workplace connections. Organizations with mentoring programs see 50% higher retention among participants.",
    statistic: "50% higher retention",
    key_elements: &[
        "Build cross-functional relationships and networks",
        "Create career path visibility and growth opportunities",
        "Focus on engagement drivers and employee satisfaction",
        "Track retention rates and intent-to-stay metrics",
    ],
};

static SKILLS_DEVELOPMENT: GoalContent = GoalContent {
    title: "Skills Development",
    description: "Your program enables targeted skill-building through structured knowledge transfer from experienced practitioners. Mentored employees report 25% faster skill acquisition than self-directed learners.",
    statistic: "25% faster skill acquisition",
    key_elements: &[
        "Match based on specific skill gaps and expertise",
        "Create competency-based development milestones",
        "Integrate with formal training and certification programs",
        "Track skill assessment improvements and application",
    ],
};

static GENERAL_CAREER_DEVELOPMENT: GoalContent = GoalContent {
    title: "General Career Development",
    description: "Your program supports employees at all levels in navigating their career paths and identifying growth opportunities. Career mentoring increases internal mobility by 30% and improves promotion readiness.",
    statistic: "30% more internal mobility",
    key_elements: &[
        "Offer flexible, self-directed mentoring relationships",
        "Provide career exploration and path planning resources",
        "Enable cross-functional exposure and networking",
        "Track career progression and internal mobility rates",
    ],
};

static CULTURE_CONNECTION: GoalContent = GoalContent {
    title: "Culture & Connection",
    description: "Your program combats isolation in hybrid and remote environments by facilitating meaningful cross-functional relationships. Connected employees are 3x more likely to report high engagement.",
    statistic: "3x higher engagement",
    key_elements: &[
        "Facilitate connections across teams and locations",
        "Lower barriers to entry with casual conversation formats",
        "Build community through shared experiences",
        "Track collaboration metrics and connection scores",
    ],
};

pub fn goal_content(key: GoalKey) -> &'static GoalContent {
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

pub fn resolve_goal_content(goal: &Canonical<GoalKey>) -> &'static GoalContent {
    goal_content(goal.key().unwrap_or(FALLBACK_GOAL))
}

// --- Business-case outlines ---

#[derive(Debug, PartialEq, Eq)]
pub struct GoalOutline {
    pub summary: &'static str,
    pub key_points: &'static [&'static str],
}

/// Outline used for goals without a dedicated entry.
pub static GENERIC_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your mentorship program will create meaningful connections that drive business outcomes.",
    key_points: &[
        "Define clear program objectives",
        "Match mentors and mentees thoughtfully",
        "Provide structure and resources",
        "Measure outcomes and iterate",
    ],
};

static RETENTION_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your program is focused on reducing employee turnover through meaningful mentorship connections. Research shows mentorship programs reduce turnover by 25-50% among participants.",
    key_points: &[
        "Target high-risk employee segments (early career, post-merger, etc.)",
        "Track retention rates for mentored vs. non-mentored employees",
        "Focus on career development and growth conversations",
        "Measure engagement scores alongside retention metrics",
    ],
};

static LEADERSHIP_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your program aims to develop future leaders through structured mentorship. Studies show mentees are promoted 5x more frequently than non-participants.",
    key_points: &[
        "Pair high-potential employees with senior leaders",
        "Create clear competency development paths",
        "Track promotion and readiness metrics",
        "Integrate with succession planning processes",
    ],
};

static DEI_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your program focuses on building inclusion through mentorship. Mentored employees from underrepresented groups report 96% gains in confidence and leadership capabilities.",
    key_points: &[
        "Prioritize cross-functional and diverse pairings",
        "Create safe spaces for authentic conversations",
        "Track belonging and inclusion survey scores",
        "Develop ERG leadership through mentorship",
    ],
};

static ONBOARDING_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your program accelerates new hire productivity through structured support. New hires with mentors reach full productivity 25% faster.",
    key_points: &[
        "Assign mentors before or during first week",
        "Create structured 30/60/90 day check-ins",
        "Focus on cultural integration and network building",
        "Track time-to-productivity metrics",
    ],
};

static SKILLS_OUTLINE: GoalOutline = GoalOutline {
    summary: "Your program enables peer-to-peer skill sharing and continuous learning. Skill-based mentorship programs show 40% improvement in capability development.",
    key_points: &[
        "Match based on specific skill gaps and expertise",
        "Set measurable learning objectives",
        "Enable peer mentoring and group sessions",
        "Track skill acquisition and application",
    ],
};

/// The dedicated outline for `key`, if there is one.
pub fn goal_outline(key: GoalKey) -> Option<&'static GoalOutline> {
    match key {
        GoalKey::EmployeeRetention => Some(&RETENTION_OUTLINE),
        GoalKey::LeadershipDevelopment => Some(&LEADERSHIP_OUTLINE),
        GoalKey::Dei => Some(&DEI_OUTLINE),
        GoalKey::EmployeeOnboarding => Some(&ONBOARDING_OUTLINE),
        GoalKey::SkillsDevelopment => Some(&SKILLS_OUTLINE),
        GoalKey::NewManagerTraining
        | GoalKey::GeneralCareerDevelopment
        | GoalKey::CultureConnection => None,
    }
}

pub fn resolve_goal_outline(goal: &Canonical<GoalKey>) -> &'static GoalOutline {
    goal.key().and_then(goal_outline).unwrap_or(&GENERIC_OUTLINE)
}
