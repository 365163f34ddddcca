/// Title composition from prompt tokens and genre title templates.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::core::library::StoryLibrary;
use crate::core::template::{SlotKind, TemplateError};
use crate::schema::request::Genre;

#[derive(Debug, Error)]
pub enum TitleError {
    #[error("no title templates available")]
    NoTemplates,
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Tokens shorter than this are treated as filler ("a", "the", "who")
/// and skipped.
const MIN_TOKEN_LEN: usize = 4;

/// Stock tokens used when the prompt yields too few substantive words.
const DEFAULT_FIRST: &str = "Mysterious";
const DEFAULT_SECOND: &str = "Adventure";

/// Compose a title from the prompt's first two substantive tokens and
/// a genre title template picked uniformly at random. An unrecognized
/// genre uses the generic templates; an empty or all-filler prompt
/// uses the stock tokens.
pub fn compose(
    library: &StoryLibrary,
    genre: Option<Genre>,
    prompt: &str,
    rng: &mut StdRng,
) -> Result<String, TitleError> {
    let tokens: Vec<String> = prompt
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .take(2)
        .map(title_case)
        .collect();
    let first = tokens.first().map(String::as_str).unwrap_or(DEFAULT_FIRST);
    let second = tokens.get(1).map(String::as_str).unwrap_or(DEFAULT_SECOND);

    let template = library
        .title_candidates(genre)
        .choose(rng)
        .ok_or(TitleError::NoTemplates)?;
    let title = template.fill(|kind| match kind {
        SlotKind::First => Some(first),
        SlotKind::Second => Some(second),
        _ => None,
    })?;
    Ok(title)
}

/// Uppercase the first letter, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
