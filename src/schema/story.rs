use serde::{Deserialize, Serialize};

/// A structural position in the story arc.
///
/// The derived ordering is the arc ordering: an assembled story's
/// beats are strictly increasing in role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeRole {
    Introduction,
    Development,
    Complication,
    Climax,
    Resolution,
    Conclusion,
}

impl NarrativeRole {
    /// All roles in arc order.
    pub const ALL: [NarrativeRole; 6] = [
        Self::Introduction,
        Self::Development,
        Self::Complication,
        Self::Climax,
        Self::Resolution,
        Self::Conclusion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Development => "development",
            Self::Complication => "complication",
            Self::Climax => "climax",
            Self::Resolution => "resolution",
            Self::Conclusion => "conclusion",
        }
    }

    /// Parse a role name as it appears in data files.
    pub fn parse(input: &str) -> Option<NarrativeRole> {
        match input {
            "introduction" => Some(Self::Introduction),
            "development" => Some(Self::Development),
            "complication" => Some(Self::Complication),
            "climax" => Some(Self::Climax),
            "resolution" => Some(Self::Resolution),
            "conclusion" => Some(Self::Conclusion),
            _ => None,
        }
    }
}

/// Marks whether a result came from normal generation or the degraded
/// last-resort path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorySource {
    Primary,
    Fallback,
}

impl StorySource {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

/// The generated story returned to the caller.
///
/// `prompt`, `genre`, and `length` echo the raw request strings, not
/// their normalized forms. Paragraphs in `content` are joined with a
/// blank line and appear in arc order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResult {
    pub title: String,
    pub content: String,
    pub prompt: String,
    pub genre: String,
    pub length: String,
    pub source: StorySource,
}

impl StoryResult {
    /// The content paragraphs, split on the blank-line separator.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split("\n\n")
    }
}
