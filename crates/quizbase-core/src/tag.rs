//! Question categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// An enumerated category label used to index questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Tag {
    Math,
    Geo,
    History,
    Science,
    Literature,
    Language,
    Art,
    Music,
    Sport,
    General,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 10] = [
        Tag::Math,
        Tag::Geo,
        Tag::History,
        Tag::Science,
        Tag::Literature,
        Tag::Language,
        Tag::Art,
        Tag::Music,
        Tag::Sport,
        Tag::General,
    ];

    /// The canonical (upper-case) name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Math => "MATH",
            Tag::Geo => "GEO",
            Tag::History => "HISTORY",
            Tag::Science => "SCIENCE",
            Tag::Literature => "LITERATURE",
            Tag::Language => "LANGUAGE",
            Tag::Art => "ART",
            Tag::Music => "MUSIC",
            Tag::Sport => "SPORT",
            Tag::General => "GENERAL",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = QuizError;

    /// Case-insensitive exact match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.name() == upper)
            .ok_or_else(|| QuizError::InvalidTag(s.to_string()))
    }
}

impl TryFrom<String> for Tag {
    type Error = QuizError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
