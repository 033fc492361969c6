//! Static report content.
//!
//! Every table is keyed by a typed key and looked up with an exhaustive
//! `match`, so each enumerated value has its own entry. The `resolve_*`
//! functions take the canonicalized answer and fall back to a named generic
//! entry when the answer is missing or maps to no key.
//!
//! | Table | Key | Fallback |
//! |-------|-----|----------|
//! | [`goals::goal_content`] | `GoalKey` | General Career Development |
//! | [`goals::goal_outline`] | `GoalKey` | generic outline |
//! | [`styles::style_content`] | `StyleKey` | Traditional 1:1 |
//! | [`matching::matching_content`] | `MatchingKey` | Algorithm-Led |
//! | [`timeline::timeline_plan`] | `FormatKey` | cohort plan |
//! | [`timeline::launch_guidance`] | `Timeline` | generic guidance |
//! | [`metrics::outcome_metrics`] | `GoalKey` | General Career Development |

pub mod goals;
pub mod matching;
pub mod metrics;
pub mod platform;
pub mod promotion;
pub mod styles;
pub mod timeline;
