//! Launch plans per program format, and launch guidance per business-case
//! timeline answer.

use guide_core::canonical::{Canonical, FormatKey};
use guide_core::{Choice, Timeline};

#[derive(Debug, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    pub weeks: &'static str,
    pub activities: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TimelinePlan {
    pub title: &'static str,
    pub phases: &'static [Phase],
    pub callout_title: &'static str,
    pub callout_text: &'static str,
    pub planning_tips: &'static [&'static str],
}

/// Used when the format is unanswered or unmapped.
pub const FALLBACK_FORMAT: FormatKey = FormatKey::Cohort;

static COHORT: TimelinePlan = TimelinePlan {
    title: "Recommended Timeline: Cohort Program (12-Week Launch)",
    phases: &[
        Phase {
            name: "Program Design",
            weeks: "1-2",
            activities: "Finalize goals, participant criteria, and matching parameters. Secure executive sponsorship and identify program champions.",
        },
        Phase {
            name: "Platform Setup & Comms Prep",
            weeks: "3-4",
            activities: "Configure mentoring tools and templates. Draft promotional content, registration materials, and participant resources.",
        },
        Phase {
            name: "Registration Period",
            weeks: "5-7",
            activities: "Launch promotional campaign across multiple channels. Host information sessions. Send targeted invitations to eligible employees.",
        },
        Phase {
            name: "Matching Period",
            weeks: "8-9",
            activities: "Run matching algorithm or complete manual pairings. Allow participant review window. Resolve any matching conflicts.",
        },
        Phase {
            name: "Program Kickoff",
            weeks: "10-11",
            activities: "Send pairing notifications. Distribute onboarding resources. Host kickoff event (virtual or in-person).",
        },
        Phase {
            name: "Active Mentoring",
            weeks: "12+",
            activities: "Monitor session completion. Send reminders and resources. Collect early feedback.",
        },
    ],
    callout_title: "Cohort Duration",
    callout_text: "We recommend 3-6 month cohorts for most programs. Shorter cohorts (3 months) work well for onboarding and skills-focused programs. Longer cohorts (6 months) suit leadership development and deep relationship building.",
    planning_tips: &[
        "Schedule your kickoff date first, then work backward to set registration and matching deadlines.",
        "Build in buffer time. Programs consistently need 1-2 extra weeks for each phase.",
        "Plan your mid-program check-in and graduation celebration early.",
    ],
};

static EVERGREEN: TimelinePlan = TimelinePlan {
    title: "Recommended Timeline: Evergreen Program (8-Week Launch + Ongoing)",
    phases: &[
        Phase {
            name: "Program Design",
            weeks: "1-2",
            activities: "Finalize goals, participant criteria, and matching parameters. Secure executive sponsorship and identify program champions.",
        },
        Phase {
            name: "Platform Setup & Comms Prep",
            weeks: "3-4",
            activities: "Configure mentoring tools and templates. Create evergreen promotional materials and self-service registration flows.",
        },
        Phase {
            name: "Soft Launch",
            weeks: "5-6",
            activities: "Invite initial cohort of mentors. Test registration and matching workflows. Gather early feedback and iterate.",
        },
        Phase {
            name: "General Availability",
            weeks: "7-8",
            activities: "Open registration to full target population. Launch ongoing promotional campaign. Enable self-service matching.",
        },
        Phase {
            name: "Ongoing Management",
            weeks: "8+",
            activities: "Monitor enrollment and matching rates. Refresh mentor pool periodically. Send engagement nudges and celebrate milestones.",
        },
    ],
    callout_title: "Evergreen Cadence",
    callout_text: "Plan quarterly \"refreshes\" to recruit new mentors, re-engage dormant participants, and promote the program to new employees. Set automated reminders for mentors to update their availability.",
    planning_tips: &[
        "Set calendar reminders for quarterly mentor pool refreshes and promotional pushes.",
        "Build automated triggers for re-engagement when mentor availability drops.",
        "Create onboarding flows for new employees joining the program mid-year.",
    ],
};

pub fn timeline_plan(key: FormatKey) -> &'static TimelinePlan {
    match key {
        FormatKey::Cohort => &COHORT,
        FormatKey::Evergreen => &EVERGREEN,
    }
}

pub fn resolve_timeline_plan(format: &Canonical<FormatKey>) -> &'static TimelinePlan {
    timeline_plan(format.key().unwrap_or(FALLBACK_FORMAT))
}

// --- Business-case launch guidance ---

#[derive(Debug, PartialEq, Eq)]
pub struct LaunchGuidance {
    pub summary: &'static str,
    pub steps: &'static [&'static str],
}

/// Guidance for an unanswered or unlisted timeline.
pub static GENERIC_LAUNCH: LaunchGuidance = LaunchGuidance {
    summary: "Most enterprise mentorship programs move from design to kickoff in 8-12 weeks. Start with a focused pilot and expand once early results are in.",
    steps: &[
        "Confirm an executive sponsor and program owner",
        "Agree on the two or three metrics that define success",
        "Pick a pilot audience and a target kickoff date",
    ],
};

static THIS_QUARTER: LaunchGuidance = LaunchGuidance {
    summary: "Launching this quarter leaves little slack. Use the 8-week evergreen launch path or a small cohort so the program can start before the quarter closes.",
    steps: &[
        "Lock program goals and participant criteria this week",
        "Configure the platform and registration flow in parallel with communications",
        "Open registration within three to four weeks",
        "Schedule the kickoff before registration opens",
    ],
};

static NEXT_QUARTER: LaunchGuidance = LaunchGuidance {
    summary: "Launching next quarter fits the standard 12-week cohort plan, with time for sponsor alignment and a full promotional campaign.",
    steps: &[
        "Spend the remaining weeks of this quarter on program design and sponsorship",
        "Prepare promotional content and participant resources",
        "Run a three-week registration window at the start of the quarter",
        "Kick off with a launch event once matching is complete",
    ],
};

static SIX_MONTHS_PLUS: LaunchGuidance = LaunchGuidance {
    summary: "A launch six or more months out leaves room to build the case internally and collect baseline metrics before the program starts.",
    steps: &[
        "Capture baseline retention and engagement figures now",
        "Build stakeholder support and budget approval",
        "Run a small pilot to test matching criteria",
        "Plan the full rollout around your performance review calendar",
    ],
};

static EXPLORING: LaunchGuidance = LaunchGuidance {
    summary: "While you are exploring options, focus on the business problem you want mentorship to solve and the evidence leadership will need.",
    steps: &[
        "Identify the workforce challenge with the highest cost",
        "Share this business case with an executive sponsor",
        "Benchmark your turnover and promotion data against industry peers",
        "Book a platform demo to see matching and reporting in practice",
    ],
};

pub fn launch_guidance(timeline: Timeline) -> &'static LaunchGuidance {
    match timeline {
        Timeline::ThisQuarter => &THIS_QUARTER,
        Timeline::NextQuarter => &NEXT_QUARTER,
        Timeline::SixMonthsPlus => &SIX_MONTHS_PLUS,
        Timeline::Exploring => &EXPLORING,
    }
}

pub fn resolve_launch_guidance(timeline: Option<&Choice<Timeline>>) -> &'static LaunchGuidance {
    timeline
        .and_then(Choice::listed)
        .map_or(&GENERIC_LAUNCH, launch_guidance)
}

#[cfg(test)]
mod tests {
    use guide_core::OptionSet;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unanswered_format_uses_cohort_plan() {
        let plan = resolve_timeline_plan(&Canonical::Unanswered);

        assert_eq!(plan.title, "Recommended Timeline: Cohort Program (12-Week Launch)");
        assert_eq!(plan.phases.len(), 6);
    }

    #[test]
    fn evergreen_plan_has_five_phases() {
        let plan = timeline_plan(FormatKey::Evergreen);

        assert_eq!(plan.phases.len(), 5);
        assert_eq!(plan.phases[4].weeks, "8+");
        assert_eq!(plan.callout_title, "Evergreen Cadence");
    }

    #[test]
    fn every_timeline_has_its_own_guidance() {
        for timeline in Timeline::ALL {
            let guidance = launch_guidance(*timeline);

            assert!(!std::ptr::eq(guidance, &GENERIC_LAUNCH));
            assert!(!guidance.steps.is_empty());
        }
    }

    #[test]
    fn unlisted_timeline_uses_generic_guidance() {
        let custom = Choice::<Timeline>::parse("Whenever budget allows");

        assert_eq!(resolve_launch_guidance(Some(&custom)), &GENERIC_LAUNCH);
        assert_eq!(resolve_launch_guidance(None), &GENERIC_LAUNCH);
    }
}
