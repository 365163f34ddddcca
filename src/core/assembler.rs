/// Beat assembly: role sequence selection and template resolution.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::core::elements::StorySlots;
use crate::core::library::StoryLibrary;
use crate::core::template::TemplateError;
use crate::schema::request::{Genre, LengthTier};

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("no beat templates available for role '{0}'")]
    NoCandidates(&'static str),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Resolve one paragraph per narrative role of the tier, in arc order.
///
/// Each role's candidates come from the library's two-level fallback
/// (genre-specific, then role-generic); one candidate is picked
/// uniformly at random and filled with the request's slots. The same
/// slots flow into every beat.
pub fn assemble(
    library: &StoryLibrary,
    slots: &StorySlots,
    genre: Option<Genre>,
    length: LengthTier,
    rng: &mut StdRng,
) -> Result<Vec<String>, AssembleError> {
    let roles = length.roles();
    let mut paragraphs = Vec::with_capacity(roles.len());
    for role in roles {
        let template = library
            .beat_candidates(genre, *role)
            .choose(rng)
            .ok_or(AssembleError::NoCandidates(role.name()))?;
        paragraphs.push(template.fill(|kind| slots.get(kind))?);
    }
    Ok(paragraphs)
}
