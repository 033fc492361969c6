//! Matching approach descriptions and implementation notes.

use guide_core::canonical::{Canonical, MatchingKey};

#[derive(Debug, PartialEq, Eq)]
pub struct MatchingContent {
    pub title: &'static str,
    pub description: &'static str,
    pub implementation_notes: &'static [&'static str],
    /// Matching strategy note for the business-case outline.
    pub strategy: &'static str,
}

pub const FALLBACK_MATCHING: MatchingKey = MatchingKey::AlgorithmLed;

static ALGORITHM_LED: MatchingContent = MatchingContent {
    title: "Algorithm-Led",
    description: "Algorithm-led matching uses registration data (skills, goals, experience, preferences) to automatically generate optimal pairings. This approach is best for large programs, reduces bias, and saves significant admin time.",
    implementation_notes: &[
        "Define clear matching criteria aligned to program goals",
        "Weight factors based on what matters most (skills, location, experience, etc.)",
        "Build in preference collection during registration",
        "Plan for exception handling and manual overrides",
    ],
    strategy: "Algorithm-based matching achieves 95%+ satisfaction rates by considering 30+ variables simultaneously, far exceeding manual or self-service approaches.",
};

static ADMIN_SELECTED: MatchingContent = MatchingContent {
    title: "Admin-Selected",
    description: "Admin-selected matching puts program administrators in control, manually pairing participants based on organizational knowledge and strategic considerations. This approach offers maximum control but requires significant time investment.",
    implementation_notes: &[
        "Allocate 1-2 hours per 25 participants for matching",
        "Document matching rationale for future reference",
        "Consider strategic pairings (cross-functional, high-visibility, etc.)",
        "Build in participant review before finalizing",
    ],
    strategy: "Administrator-curated matching gives you full control over strategic pairings. Budget administrator time accordingly, since manual matching effort grows with every participant.",
};

static HYBRID: MatchingContent = MatchingContent {
    title: "Hybrid",
    description: "Hybrid matching combines algorithmic efficiency with human oversight. The algorithm generates recommended pairings, then administrators review, adjust, and approve matches before notification.",
    implementation_notes: &[
        "Configure algorithm with your priority matching criteria",
        "Review top recommendations (typically 2-3 options per participant)",
        "Apply organizational context the algorithm can't see",
        "Document adjustments for continuous improvement",
    ],
    strategy: "Hybrid matching combines algorithmic efficiency with human oversight, ensuring quality while maintaining the \"people connection\".",
};

static SELF_DIRECTED: MatchingContent = MatchingContent {
    title: "Self-Directed",
    description: "Self-directed matching empowers participants to browse mentor profiles and select their own matches. This approach increases participant buy-in but requires careful design to prevent bottlenecks.",
    implementation_notes: &[
        "Create rich, searchable mentor profiles",
        "Set mentor capacity limits to distribute demand",
        "Consider \"marketplace\" periods with waitlists",
        "Provide guidance on what makes a good match",
    ],
    strategy: "Self-service matching maximizes participant ownership of the relationship. Pair it with mentor capacity limits so popular mentors are not overwhelmed.",
};

pub fn matching_content(key: MatchingKey) -> &'static MatchingContent {
    match key {
        MatchingKey::AlgorithmLed => &ALGORITHM_LED,
        MatchingKey::AdminSelected => &ADMIN_SELECTED,
        MatchingKey::Hybrid => &HYBRID,
        MatchingKey::SelfDirected => &SELF_DIRECTED,
    }
}

pub fn resolve_matching_content(matching: &Canonical<MatchingKey>) -> &'static MatchingContent {
    matching_content(matching.key().unwrap_or(FALLBACK_MATCHING))
}

#[cfg(test)]
mod tests {
    use guide_core::canonical::CanonicalKey;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn matching_titles_match_display_names() {
        for key in MatchingKey::ALL {
            assert_eq!(matching_content(*key).title, key.display_name());
        }
    }

    #[test]
    fn strategies_are_distinct() {
        let mut strategies: Vec<&str> = MatchingKey::ALL
            .iter()
            .map(|key| matching_content(*key).strategy)
            .collect();
        strategies.dedup();

        assert_eq!(strategies.len(), MatchingKey::ALL.len());
    }
}
