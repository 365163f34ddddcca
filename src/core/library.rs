/// Static story data: slot pools, title templates, and the beat table.
///
/// One `GenreLibrary` per genre plus a generic tier. Lookups fall back
/// genre-specific → generic, so a request can never leave a narrative
/// role unresolved once the library passes `validate`.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::template::{SlotKind, Template, TemplateError};
use crate::schema::request::Genre;
use crate::schema::story::NarrativeRole;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("unknown genre '{0}' in data file")]
    UnknownGenre(String),
    #[error("unknown narrative role '{0}' in data file")]
    UnknownRole(String),
    #[error("generic set has no templates for role '{0}'")]
    MissingGenericRole(&'static str),
    #[error("generic slot pool '{0}' is empty")]
    EmptySlotPool(&'static str),
    #[error("generic set has no title templates")]
    NoGenericTitles,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Candidate values for the four story slots.
#[derive(Debug, Clone, Default)]
pub struct SlotPools {
    pub characters: Vec<String>,
    pub settings: Vec<String>,
    pub objects: Vec<String>,
    pub conflicts: Vec<String>,
}

impl SlotPools {
    /// The pool backing a story slot; `None` for title-only kinds.
    pub fn pool(&self, slot: SlotKind) -> Option<&[String]> {
        match slot {
            SlotKind::Character => Some(&self.characters),
            SlotKind::Setting => Some(&self.settings),
            SlotKind::Object => Some(&self.objects),
            SlotKind::Conflict => Some(&self.conflicts),
            SlotKind::First | SlotKind::Second => None,
        }
    }
}

/// Templates and pools for a single genre (or the generic tier).
#[derive(Debug, Clone, Default)]
pub struct GenreLibrary {
    pub slots: SlotPools,
    pub titles: Vec<Template>,
    pub beats: FxHashMap<NarrativeRole, Vec<Template>>,
}

/// The full static table shared by every request.
///
/// Loaded once at startup and read-only afterwards; concurrent reads
/// need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct StoryLibrary {
    pub genres: FxHashMap<Genre, GenreLibrary>,
    pub generic: GenreLibrary,
}

// RON deserialization helper: the file shape keeps role names and
// templates as plain strings, converted to typed entries at load.

#[derive(Debug, Deserialize)]
#[serde(rename = "GenreData")]
struct RonGenreData {
    genre: String,
    #[serde(default)]
    characters: Vec<String>,
    #[serde(default)]
    settings: Vec<String>,
    #[serde(default)]
    objects: Vec<String>,
    #[serde(default)]
    conflicts: Vec<String>,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    beats: HashMap<String, Vec<String>>,
}

/// Embedded default data set, one file per genre plus the generic tier.
const BUILTIN_DATA: [&str; 8] = [
    include_str!("../../story_data/fantasy.ron"),
    include_str!("../../story_data/sci-fi.ron"),
    include_str!("../../story_data/mystery.ron"),
    include_str!("../../story_data/romance.ron"),
    include_str!("../../story_data/adventure.ron"),
    include_str!("../../story_data/horror.ron"),
    include_str!("../../story_data/comedy.ron"),
    include_str!("../../story_data/generic.ron"),
];

impl StoryLibrary {
    /// The built-in data set, validated.
    pub fn builtin() -> Result<StoryLibrary, LibraryError> {
        let mut library = StoryLibrary::default();
        for data in BUILTIN_DATA {
            library.insert_ron(data)?;
        }
        library.validate()?;
        Ok(library)
    }

    /// Parse one genre data file and insert it. A file for an already
    /// loaded genre replaces that genre's entry; the genre name
    /// `"generic"` targets the generic tier.
    pub fn insert_ron(&mut self, input: &str) -> Result<(), LibraryError> {
        let raw: RonGenreData = ron::from_str(input)?;

        let mut titles = Vec::with_capacity(raw.titles.len());
        for text in &raw.titles {
            titles.push(Template::parse_title(text)?);
        }

        let mut beats: FxHashMap<NarrativeRole, Vec<Template>> = FxHashMap::default();
        for (role_name, texts) in &raw.beats {
            let role = NarrativeRole::parse(role_name)
                .ok_or_else(|| LibraryError::UnknownRole(role_name.clone()))?;
            let mut templates = Vec::with_capacity(texts.len());
            for text in texts {
                templates.push(Template::parse_beat(text)?);
            }
            beats.insert(role, templates);
        }

        let entry = GenreLibrary {
            slots: SlotPools {
                characters: raw.characters,
                settings: raw.settings,
                objects: raw.objects,
                conflicts: raw.conflicts,
            },
            titles,
            beats,
        };

        if raw.genre == "generic" {
            self.generic = entry;
        } else {
            let genre = Genre::parse(&raw.genre)
                .ok_or(LibraryError::UnknownGenre(raw.genre))?;
            self.genres.insert(genre, entry);
        }
        Ok(())
    }

    /// Load a single genre data file.
    pub fn load_from_ron(&mut self, path: &Path) -> Result<(), LibraryError> {
        let contents = std::fs::read_to_string(path)?;
        self.insert_ron(&contents)
    }

    /// Load every `.ron` file from a directory.
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), LibraryError> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                self.load_from_ron(&path)?;
            }
        }
        Ok(())
    }

    /// Check the invariants the lookup fallbacks rely on: the generic
    /// tier must cover every narrative role, carry at least one title
    /// template, and have a non-empty pool for each story slot.
    pub fn validate(&self) -> Result<(), LibraryError> {
        for role in NarrativeRole::ALL {
            if self
                .generic
                .beats
                .get(&role)
                .map_or(true, |templates| templates.is_empty())
            {
                return Err(LibraryError::MissingGenericRole(role.name()));
            }
        }
        if self.generic.titles.is_empty() {
            return Err(LibraryError::NoGenericTitles);
        }
        for slot in SlotKind::STORY {
            if self
                .generic
                .slots
                .pool(slot)
                .map_or(true, |pool| pool.is_empty())
            {
                return Err(LibraryError::EmptySlotPool(slot.name()));
            }
        }
        Ok(())
    }

    /// Beat candidates for a (genre, role) cell.
    ///
    /// Two-level fallback: the genre's own cell when present and
    /// non-empty, the generic cell for that role otherwise. An
    /// unrecognized genre goes straight to the generic tier.
    pub fn beat_candidates(
        &self,
        genre: Option<Genre>,
        role: NarrativeRole,
    ) -> &[Template] {
        if let Some(templates) = genre
            .and_then(|g| self.genres.get(&g))
            .and_then(|lib| lib.beats.get(&role))
        {
            if !templates.is_empty() {
                return templates;
            }
        }
        self.generic
            .beats
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Title candidates for a genre, falling back to the generic set.
    pub fn title_candidates(&self, genre: Option<Genre>) -> &[Template] {
        match genre.and_then(|g| self.genres.get(&g)) {
            Some(lib) if !lib.titles.is_empty() => &lib.titles,
            _ => &self.generic.titles,
        }
    }

    /// Candidate pool for one story slot, falling back to the generic
    /// pool when the genre is unrecognized or its pool is empty.
    pub fn slot_candidates(&self, genre: Option<Genre>, slot: SlotKind) -> &[String] {
        let generic = self.generic.slots.pool(slot).unwrap_or(&[]);
        match genre.and_then(|g| self.genres.get(&g)) {
            Some(lib) => match lib.slots.pool(slot) {
                Some(pool) if !pool.is_empty() => pool,
                _ => generic,
            },
            None => generic,
        }
    }
}
