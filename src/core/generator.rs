/// The generator facade: request in, story out, errors absorbed.
///
/// Wires together element extraction, title composition, and beat
/// assembly. This is the only place errors are caught: the inner
/// components are built not to fail on malformed-but-typed input, and
/// anything that still goes wrong is converted into the minimal
/// fallback story rather than surfaced to the caller.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::assembler::{self, AssembleError};
use crate::core::elements;
use crate::core::library::{LibraryError, StoryLibrary};
use crate::core::title::{self, TitleError};
use crate::schema::request::{Genre, LengthTier, StoryRequest};
use crate::schema::story::{StoryResult, StorySource};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("library error: {0}")]
    Library(#[from] LibraryError),
    #[error("title error: {0}")]
    Title(#[from] TitleError),
    #[error("assembly error: {0}")]
    Assemble(#[from] AssembleError),
}

/// Separator between content paragraphs. Downstream renderers split on
/// this, so it is part of the boundary contract.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// The story generation engine. Built via `StoryGenerator::builder()`.
///
/// Holds the immutable story library plus the RNG seed state. One
/// generator serves one caller at a time (`generate` takes `&mut
/// self`); for concurrent handling, give each worker its own generator
/// over a shared library clone.
pub struct StoryGenerator {
    library: StoryLibrary,
    seed: u64,
    generation_count: u64,
}

/// Builder for constructing a `StoryGenerator`.
pub struct StoryGeneratorBuilder {
    data_dir: Option<String>,
    library: Option<StoryLibrary>,
    seed: Option<u64>,
}

impl StoryGenerator {
    pub fn builder() -> StoryGeneratorBuilder {
        StoryGeneratorBuilder {
            data_dir: None,
            library: None,
            seed: None,
        }
    }

    /// Generate a story for a request. Never fails: an unrecognized
    /// genre or length degrades to the generic/medium tiers, and any
    /// internal error is absorbed into the fallback story, tagged via
    /// `source`.
    pub fn generate(&mut self, request: &StoryRequest) -> StoryResult {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;

        match self.generate_primary(request, &mut rng) {
            Ok(result) => {
                debug!(title = %result.title, genre = %request.genre, "story generated");
                result
            }
            Err(error) => {
                warn!(%error, "generation failed, producing fallback story");
                fallback_story(request)
            }
        }
    }

    fn generate_primary(
        &self,
        request: &StoryRequest,
        rng: &mut StdRng,
    ) -> Result<StoryResult, GeneratorError> {
        let genre = Genre::parse(&request.genre);
        let length = LengthTier::parse(&request.length).unwrap_or(LengthTier::Medium);

        let slots = elements::extract(&self.library, genre, &request.prompt, rng);
        let title = title::compose(&self.library, genre, &request.prompt, rng)?;
        let paragraphs = assembler::assemble(&self.library, &slots, genre, length, rng)?;

        Ok(StoryResult {
            title,
            content: paragraphs.join(PARAGRAPH_SEPARATOR),
            prompt: request.prompt.clone(),
            genre: request.genre.clone(),
            length: request.length.clone(),
            source: StorySource::Primary,
        })
    }

    pub fn library(&self) -> &StoryLibrary {
        &self.library
    }
}

/// The last-resort story: deterministic, no library or RNG involved.
fn fallback_story(request: &StoryRequest) -> StoryResult {
    StoryResult {
        title: format!("Story: {}", request.prompt),
        content: format!(
            "This is a {} {} story about {}.",
            request.length, request.genre, request.prompt
        ),
        prompt: request.prompt.clone(),
        genre: request.genre.clone(),
        length: request.length.clone(),
        source: StorySource::Fallback,
    }
}

impl StoryGeneratorBuilder {
    /// Seed for the per-request RNG stream. Without an explicit seed
    /// the generator seeds itself from OS entropy; structure is the
    /// same either way, only wording varies.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load genre data from a directory of RON files instead of the
    /// embedded set.
    pub fn data_dir(mut self, path: &str) -> Self {
        self.data_dir = Some(path.to_string());
        self
    }

    /// Provide a library directly (for testing without files). The
    /// library is used as-is; call `StoryLibrary::validate` first if
    /// the fallback invariants matter.
    pub fn with_library(mut self, library: StoryLibrary) -> Self {
        self.library = Some(library);
        self
    }

    pub fn build(self) -> Result<StoryGenerator, GeneratorError> {
        let library = if let Some(library) = self.library {
            library
        } else if let Some(ref dir) = self.data_dir {
            let mut library = StoryLibrary::default();
            library.load_dir(Path::new(dir))?;
            library.validate()?;
            library
        } else {
            StoryLibrary::builtin()?
        };

        Ok(StoryGenerator {
            library,
            seed: self.seed.unwrap_or_else(rand::random),
            generation_count: 0,
        })
    }
}
