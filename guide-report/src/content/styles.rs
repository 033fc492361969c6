//! Mentoring style descriptions and best practices.

use guide_core::canonical::{Canonical, StyleKey};

#[derive(Debug, PartialEq, Eq)]
pub struct StyleContent {
    pub title: &'static str,
    pub description: &'static str,
    pub best_practices: &'static [&'static str],
    /// Insight quoted in the business-case outline.
    pub insight_title: &'static str,
    pub insight: &'static str,
}

pub const FALLBACK_STYLE: StyleKey = StyleKey::Traditional;

static TRADITIONAL: StyleContent = StyleContent {
    title: "Traditional 1:1",
    description: "Traditional 1:1 mentoring creates deep, sustained relationships between dedicated mentor-mentee pairs. This format excels at building trust, enabling candid conversations, and supporting long-term development goals.",
    best_practices: &[
        "Set clear expectations for meeting frequency (recommended: bi-weekly)",
        "Establish relationship duration upfront (typically 6-12 months)",
        "Provide conversation guides and development frameworks",
        "Check in at midpoint to assess match quality",
    ],
    insight_title: "1:1 Mentorship",
    insight: "Traditional mentoring relationships typically run 6-12 months and are ideal for career development and retention objectives.",
};

static GROUP: StyleContent = StyleContent {
    title: "Group Mentoring",
    description: "Group mentoring connects one mentor with multiple mentees who learn together. This format efficiently scales expertise, creates peer cohorts, and exposes mentees to diverse perspectives.",
    best_practices: &[
        "Limit groups to 4-6 mentees for meaningful engagement",
        "Structure sessions with clear agendas and discussion topics",
        "Rotate facilitation to build mentee capabilities",
        "Balance group sessions with occasional 1:1 check-ins",
    ],
    insight_title: "Scaling Expertise",
    insight: "Group mentoring multiplies the reach of each senior mentor, making it the most efficient way to scale scarce expertise across a large audience.",
};

static PEER: StyleContent = StyleContent {
    title: "Peer Mentoring",
    description: "Peer mentoring matches colleagues at similar career stages to learn from each other's experiences. This format is powerful for knowledge-sharing across functions and reduces hierarchy barriers.",
    best_practices: &[
        "Match peers from different functions or teams for diverse perspectives",
        "Set reciprocal expectations so both parties learn and teach",
        "Provide structured discussion prompts to guide conversations",
        "Track knowledge-sharing and cross-functional collaboration",
    ],
    insight_title: "Learning Across Teams",
    insight: "Peer mentoring removes the bottleneck of senior mentor availability and builds the cross-functional networks that keep employees engaged.",
};

static REVERSE: StyleContent = StyleContent {
    title: "Reverse Mentoring",
    description: "Reverse mentoring pairs junior employees as mentors to senior leaders, typically for technology adoption, generational insight, or DEI perspective-building.",
    best_practices: &[
        "Clearly define learning objectives for senior participants",
        "Train junior mentors on navigating senior relationships",
        "Create psychological safety for candid feedback",
        "Celebrate and recognize junior mentor contributions",
    ],
    insight_title: "Breaking Barriers",
    insight: "Reverse mentoring builds inclusion and gives senior leaders valuable insights into emerging trends and generational perspectives.",
};

static FLASH: StyleContent = StyleContent {
    title: "Flash Mentoring / Coffee Chats",
    description: "Flash mentoring facilitates one-time or short-term connections focused on specific questions, networking, or career exploration. This format offers low commitment and high flexibility.",
    best_practices: &[
        "Keep sessions to 30-45 minutes with focused agendas",
        "Provide conversation starters and suggested topics",
        "Enable easy re-matching for follow-up conversations",
        "Track connection volume and participant satisfaction",
    ],
    insight_title: "Low-Commitment Connections",
    insight: "Flash mentoring lowers the barrier to entry, letting employees build many connections quickly without a long-term commitment.",
};

pub fn style_content(key: StyleKey) -> &'static StyleContent {
    match key {
        StyleKey::Traditional => &TRADITIONAL,
        StyleKey::Group => &GROUP,
        StyleKey::Peer => &PEER,
        StyleKey::Reverse => &REVERSE,
        StyleKey::Flash => &FLASH,
    }
}

pub fn resolve_style_content(style: &Canonical<StyleKey>) -> &'static StyleContent {
    style_content(style.key().unwrap_or(FALLBACK_STYLE))
}

#[cfg(test)]
mod tests {
    use guide_core::canonical::CanonicalKey;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn style_titles_match_display_names() {
        for key in StyleKey::ALL {
            assert_eq!(style_content(*key).title, key.display_name());
        }
    }

    #[test]
    fn unanswered_style_falls_back_to_traditional() {
        assert_eq!(resolve_style_content(&Canonical::Unanswered).title, "Traditional 1:1");
    }
}
