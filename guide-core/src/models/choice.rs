//! Closed option sets and the values a guide question can hold.
//!
//! Every question in a guide has a closed list of options. The store does
//! not reject values outside that list, so a stored answer is a [`Choice`]:
//! either one of the listed options or the raw text that was supplied.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::field::Answer;

/// A closed enumeration of answers for one guide question.
pub trait OptionSet: Copy + Eq + fmt::Debug + 'static {
    /// Every option, in the order the guide presents them.
    const ALL: &'static [Self];

    /// The display label, which is also the value the guide submits.
    fn label(self) -> &'static str;

    /// One-line description shown under the label.
    fn description(self) -> &'static str;

    /// Looks up an option by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

/// Declares a guide option enum together with its [`OptionSet`] impl.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($label:literal, $description:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $crate::models::OptionSet for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::OptionSet::label(*self))
            }
        }
    };
}

pub(crate) use option_set;

/// A stored answer: a listed option, or raw text outside the option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Listed(T),
    Unlisted(String),
}

impl<T: OptionSet> Choice<T> {
    /// Resolves `raw` against the option labels, keeping it verbatim if no
    /// label matches.
    pub fn parse(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(option) => Self::Listed(option),
            None => Self::Unlisted(raw.to_string()),
        }
    }

    /// The text shown for this answer.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Listed(option) => option.label(),
            Self::Unlisted(raw) => raw,
        }
    }

    pub fn listed(&self) -> Option<T> {
        match self {
            Self::Listed(option) => Some(*option),
            Self::Unlisted(_) => None,
        }
    }

    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Listed(_))
    }
}

impl<T: OptionSet> From<T> for Choice<T> {
    fn from(option: T) -> Self {
        Self::Listed(option)
    }
}

impl<T: OptionSet> fmt::Display for Choice<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: OptionSet> Serialize for Choice<T> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: OptionSet> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

// --- Slot helpers shared by the per-guide selection records ---

pub(crate) fn single_answer<T: OptionSet>(slot: &Option<Choice<T>>) -> Answer<'_> {
    match slot {
        Some(choice) => Answer::Single(choice.as_str()),
        None => Answer::Unanswered,
    }
}

pub(crate) fn multi_answer<T: OptionSet>(values: &[Choice<T>]) -> Answer<'_> {
    if values.is_empty() {
        Answer::Unanswered
    } else {
        Answer::Multi(values.iter().map(Choice::as_str).collect())
    }
}

pub(crate) fn is_unlisted<T: OptionSet>(slot: &Option<Choice<T>>) -> bool {
    slot.as_ref().is_some_and(|choice| !choice.is_listed())
}

/// Adds `raw` to `values`, or removes it if already present.
pub(crate) fn toggle<T: OptionSet>(
    values: &mut Vec<Choice<T>>,
    raw: &str,
) {
    let choice = Choice::parse(raw);
    match values.iter().position(|existing| *existing == choice) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(choice),
    }
}
