//! Promotion checklists for the program template.

pub const PROMOTION_INTRO: &str = "Successful programs require intentional promotion at every stage. Use these checklists to ensure comprehensive communication and sustained engagement.";

#[derive(Debug, PartialEq, Eq)]
pub struct Checklist {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub static CHECKLISTS: [Checklist; 3] = [
    Checklist {
        title: "Pre-Launch Promotion (2-3 weeks before registration)",
        items: &[
            "Announce the program in a leadership message or all-hands meeting",
            "Brief people managers so they can nominate and encourage participants",
            "Recruit mentors ahead of mentees to guarantee capacity",
            "Publish an intranet page with program goals, timeline and FAQs",
            "Line up two or three early champions to share their motivation",
        ],
    },
    Checklist {
        title: "During Registration",
        items: &[
            "Send targeted invitations to each eligible population",
            "Host a short information session and share the recording",
            "Post reminders in Slack/Teams channels at the midpoint and final week",
            "Track registration rate daily and nudge low-enrollment teams",
            "Keep the sign-up form under five minutes",
        ],
    },
    Checklist {
        title: "Post-Launch Engagement",
        items: &[
            "Celebrate the kickoff with a welcome message to every pair",
            "Share conversation guides and resources at regular intervals",
            "Send nudges to pairs that have not logged a session",
            "Feature participant stories in internal newsletters",
            "Report early results to sponsors after the first month",
        ],
    },
];

/// Heading for the populations the program targets.
pub const AUDIENCE_TITLE: &str = "Your Target Audience";

pub const AUDIENCE_FIT_TITLE: &str = "Best Practice";

pub const AUDIENCE_FIT_TEXT: &str = "Match your audience breadth to your program format and goals. Specific populations with specific outcomes, like first-time managers, benefit from deeper structured relationships. Broader audiences pursuing general development often thrive with lighter-touch formats like peer mentoring or coffee chats.";

pub const KEY_MESSAGING_TITLE: &str = "Key Messaging";

pub const KEY_MESSAGING_TEXT: &str = "Lead with what participants gain: faster growth, a wider network and a trusted sounding board. Make the time commitment explicit and show that leadership supports time spent mentoring.";

pub const COMMUNICATION_PRACTICES_TITLE: &str = "Communication Best Practices";

pub static COMMUNICATION_PRACTICES: [&str; 3] = [
    "Use multiple channels: Email alone won't reach everyone. Combine Slack/Teams, manager meetings, town halls, and intranet posts.",
    "Feature success stories: Nothing sells mentorship like hearing from peers who've benefited. Collect testimonials from early participants.",
    "Make it easy to say yes: Remove friction from registration. A 5-minute sign-up converts better than a 20-minute form.",
];
