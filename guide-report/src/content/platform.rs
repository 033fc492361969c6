//! Vendor material shared by both reports: case studies, platform facts,
//! software benefits and contact details.

pub const CONTACT_EMAIL: &str = "hello@togetherplatform.com";
pub const CONTACT_WEBSITE: &str = "www.togetherplatform.com";

pub const ABOUT_TITLE: &str = "About Together Platform";

pub const ABOUT_TEXT: &str = "Together is the leading mentorship platform trusted by enterprises worldwide to run successful mentoring, coaching, and employee connection programs at scale. Our platform has powered over 1 million mentorship connections across Fortune 500 companies, government agencies, and fast-growing startups.";

/// `(value, label)` pairs.
pub static PLATFORM_STATS: [(&str, &str); 3] = [
    ("1M+", "Participant Programs"),
    ("95%", "Match Satisfaction"),
    ("4.9/5", "G2 Rating"),
];

pub static SOFTWARE_BENEFITS: [&str; 6] = [
    "95%+ match satisfaction with algorithm-based matching",
    "Built-in best practices and guided workflows",
    "Automatic engagement nudges and reminders",
    "Consistent experience across all participants",
    "Data-driven insights for continuous improvement",
    "Scalability without linear increase in admin burden",
];

pub const RULE_OF_THUMB_TITLE: &str = "Rule of Thumb";

/// The decision heuristic for a program of `participants` people.
pub fn rule_of_thumb(participants: &str) -> String {
    format!(
        "After ~50 participants, manual programs become complex to manage effectively. \
         At 100+ participants, dedicated software becomes essential for program success \
         and administrator sanity. With {participants}+ participants, software-enabled \
         management will save significant time while improving outcomes."
    )
}

pub static BUSINESS_CASE_NEXT_STEPS: [&str; 5] = [
    "Share this summary with key stakeholders (CFO, CHRO, department heads)",
    "Calculate your specific ROI using actual salary and turnover data",
    "Identify a pilot group or launch strategy based on your timeline",
    "Schedule stakeholder meetings to build consensus",
    "Request a demo to see platform capabilities in action",
];

pub static TEMPLATE_NEXT_STEPS: [&str; 5] = [
    "Share this template with your executive sponsor and program team",
    "Confirm your target population and eligibility criteria",
    "Set your kickoff date and work backward through the timeline",
    "Draft promotional messaging using the checklists above",
    "Request a demo to see how software handles matching and tracking",
];

#[derive(Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub company: &'static str,
    pub industry: &'static str,
    pub size: &'static str,
    pub headline: &'static str,
    /// `(value, label)` pairs.
    pub stats: [(&'static str, &'static str); 3],
    pub quote: &'static str,
}

pub const CASE_STUDIES_INTRO: &str = "Organizations across industries have achieved measurable results with structured mentorship programs. Here are real outcomes from Together Platform customers:";

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        company: "CDM Smith",
        industry: "Engineering & Construction",
        size: "5,000+ employees",
        headline: "$3.2M in savings within one year",
        stats: [
            ("34%", "Promotion Rate (Mentees)"),
            ("13%", "Promotion Rate (Non-mentees)"),
            ("96%", "Confidence & Leadership Gains"),
        ],
        quote: "The mentorship program has become a cornerstone of our talent development strategy.",
    },
    CaseStudy {
        company: "Randstad",
        industry: "Staffing & HR Services",
        size: "38,000+ employees",
        headline: "2x increase in program participation",
        stats: [
            ("200%", "Participation Growth"),
            ("+18%", "Employee Engagement Lift"),
            ("<24 hours", "Time to Match"),
        ],
        quote: "Together Platform transformed how we approach mentorship at scale.",
    },
    CaseStudy {
        company: "AAA",
        industry: "Insurance & Services",
        size: "20,000+ employees",
        headline: "Standardized mentorship across 30+ clubs",
        stats: [
            ("30+", "Clubs Using Platform"),
            ("2,500+", "Active Mentorships"),
            ("75%", "Admin Time Reduction"),
        ],
        quote: "We finally have consistency and visibility into mentorship outcomes.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_of_thumb_names_the_participant_count() {
        let text = rule_of_thumb("1,250");

        assert!(text.contains("With 1,250+ participants"));
        assert!(!text.contains("  "));
    }
}
