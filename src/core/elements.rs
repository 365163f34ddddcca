/// Element extraction: the once-per-request draw of story slots.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::library::StoryLibrary;
use crate::core::template::SlotKind;
use crate::schema::request::Genre;

/// The narrative elements filled into every beat of one story.
///
/// Drawn exactly once per request and reused verbatim by every
/// paragraph, which is what makes the output read as one narrative
/// instead of unrelated sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct StorySlots {
    pub character: String,
    pub setting: String,
    pub object: String,
    pub conflict: String,
    /// Lowercased prompt tokens, in order. Empty for an empty prompt.
    pub prompt_words: Vec<String>,
}

impl StorySlots {
    /// Value for a story slot; `None` for title-only kinds.
    pub fn get(&self, kind: SlotKind) -> Option<&str> {
        match kind {
            SlotKind::Character => Some(&self.character),
            SlotKind::Setting => Some(&self.setting),
            SlotKind::Object => Some(&self.object),
            SlotKind::Conflict => Some(&self.conflict),
            SlotKind::First | SlotKind::Second => None,
        }
    }
}

/// Draw all four slots for one request, uniformly from the genre's
/// pools with per-slot fallback to the generic pools. Pure function of
/// its inputs and the RNG state; never fails.
pub fn extract(
    library: &StoryLibrary,
    genre: Option<Genre>,
    prompt: &str,
    rng: &mut StdRng,
) -> StorySlots {
    StorySlots {
        character: pick(library.slot_candidates(genre, SlotKind::Character), rng),
        setting: pick(library.slot_candidates(genre, SlotKind::Setting), rng),
        object: pick(library.slot_candidates(genre, SlotKind::Object), rng),
        conflict: pick(library.slot_candidates(genre, SlotKind::Conflict), rng),
        prompt_words: prompt
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect(),
    }
}

fn pick(pool: &[String], rng: &mut StdRng) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}
