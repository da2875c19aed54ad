use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use utoipa::ToSchema;

/// The closed set of moods the analyzer is asked to choose from.
///
/// Entries store the mood as plain text, so a value outside this set can still show up
/// (the model does not always follow instructions). Such values are kept and rendered
/// with a neutral style.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Calm,
    Frustrated,
    Grateful,
    Reflective,
    Energetic,
    Peaceful,
    Worried,
    Content,
}

impl Mood {
    /// Used whenever no analysis is available.
    pub const FALLBACK: Mood = Mood::Reflective;

    /// Parses an already normalized (trimmed, lower-case) mood.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    #[must_use]
    pub fn all() -> Vec<Mood> {
        Mood::iter().collect()
    }

    /// Comma separated list of all moods, in taxonomy order.
    #[must_use]
    pub fn list() -> String {
        Mood::iter().map(<&'static str>::from).collect::<Vec<_>>().join(", ")
    }
}

/// Human readable label for a stored mood: first letter upper-cased, rest untouched.
#[must_use]
pub fn label(mood: &str) -> String {
    let mut chars = mood.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
