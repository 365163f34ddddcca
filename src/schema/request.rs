use serde::{Deserialize, Serialize};

use super::story::NarrativeRole;

/// Genres with dedicated template sets.
///
/// Parsing is lenient: an unrecognized genre string normalizes to
/// `None` and every lookup falls through to the generic template tier.
/// Unknown genres are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fantasy,
    SciFi,
    Mystery,
    Romance,
    Adventure,
    Horror,
    Comedy,
}

impl Genre {
    /// Every genre with a dedicated template set, in no particular order.
    pub const ALL: [Genre; 7] = [
        Self::Fantasy,
        Self::SciFi,
        Self::Mystery,
        Self::Romance,
        Self::Adventure,
        Self::Horror,
        Self::Comedy,
    ];

    /// Parse a boundary string. Returns `None` for unrecognized values.
    pub fn parse(input: &str) -> Option<Genre> {
        match input.trim().to_ascii_lowercase().as_str() {
            "fantasy" => Some(Self::Fantasy),
            "sci-fi" | "scifi" | "science fiction" => Some(Self::SciFi),
            "mystery" => Some(Self::Mystery),
            "romance" => Some(Self::Romance),
            "adventure" => Some(Self::Adventure),
            "horror" => Some(Self::Horror),
            "comedy" => Some(Self::Comedy),
            _ => None,
        }
    }

    /// Canonical tag string, also the data file stem (e.g. "sci-fi.ron").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fantasy => "fantasy",
            Self::SciFi => "sci-fi",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::Adventure => "adventure",
            Self::Horror => "horror",
            Self::Comedy => "comedy",
        }
    }
}

/// Story length tiers. Each tier fixes an ordered sequence of
/// narrative roles; longer tiers extend shorter ones without
/// reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    Medium,
    Long,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Parse a boundary string. Returns `None` for unrecognized values;
    /// the generator treats `None` as `Medium`.
    pub fn parse(input: &str) -> Option<LengthTier> {
        match input.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// The ordered narrative roles assembled for this tier.
    ///
    /// Always opens with an introduction and contains a resolution;
    /// a conclusion appears only in the long tier.
    pub fn roles(&self) -> &'static [NarrativeRole] {
        use NarrativeRole::*;
        match self {
            Self::Short => &[Introduction, Development, Resolution],
            Self::Medium => &[Introduction, Development, Complication, Resolution],
            Self::Long => &[
                Introduction,
                Development,
                Complication,
                Climax,
                Resolution,
                Conclusion,
            ],
        }
    }
}

/// A story request as received at the boundary.
///
/// Genre and length stay free strings here; the generator normalizes
/// them with graceful fallback and echoes the raw values back in the
/// result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRequest {
    pub prompt: String,
    pub genre: String,
    pub length: String,
}

impl StoryRequest {
    pub fn new(prompt: &str, genre: &str, length: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            genre: genre.to_string(),
            length: length.to_string(),
        }
    }
}
