/// End-to-end generation tests: request in, structured story out.

use storyforge::core::generator::{StoryGenerator, PARAGRAPH_SEPARATOR};
use storyforge::core::library::StoryLibrary;
use storyforge::schema::request::{Genre, LengthTier, StoryRequest};
use storyforge::schema::story::StorySource;

fn generator(seed: u64) -> StoryGenerator {
    StoryGenerator::builder().seed(seed).build().unwrap()
}

#[test]
fn paragraph_counts_match_length_tiers() {
    let mut gen = generator(11);
    for genre in Genre::ALL {
        for (length, expected) in [("short", 3), ("medium", 4), ("long", 6)] {
            let request = StoryRequest::new("a stranger at the door", genre.tag(), length);
            let result = gen.generate(&request);
            assert_eq!(result.source, StorySource::Primary);
            assert_eq!(
                result.paragraphs().count(),
                expected,
                "genre '{}', length '{}'",
                genre.tag(),
                length
            );
        }
    }
}

#[test]
fn character_recurs_in_every_paragraph() {
    // The drawn character must appear verbatim in each beat; no
    // paragraph may introduce a different protagonist.
    let fantasy_names = ["Elara", "Kaelen", "Sorin", "Lyra", "Theron", "Isolde"];
    for seed in 0..10 {
        let mut gen = generator(seed);
        let result = gen.generate(&StoryRequest::new("a dragon's bargain", "fantasy", "long"));
        let paragraphs: Vec<&str> = result.paragraphs().collect();
        assert_eq!(paragraphs.len(), 6);

        let recurring = fantasy_names
            .iter()
            .find(|name| paragraphs.iter().all(|p| p.contains(*name)));
        assert!(
            recurring.is_some(),
            "no single character recurs across all paragraphs (seed {}):\n{}",
            seed,
            result.content
        );
    }
}

#[test]
fn unknown_genre_degrades_to_generic() {
    let mut gen = generator(5);
    let result = gen.generate(&StoryRequest::new("a forgotten song", "western", "long"));
    assert_eq!(result.source, StorySource::Primary);
    assert_eq!(result.paragraphs().count(), 6);
    // Generic pools drive the slots.
    assert!(result.content.contains("Morgan"));
    assert_eq!(result.genre, "western");
}

#[test]
fn unknown_length_defaults_to_medium() {
    let mut gen = generator(5);
    let result = gen.generate(&StoryRequest::new("a forgotten song", "fantasy", "epic"));
    assert_eq!(result.source, StorySource::Primary);
    assert_eq!(result.paragraphs().count(), 4);
    assert_eq!(result.length, "epic");
}

#[test]
fn empty_prompt_is_tolerated() {
    let mut gen = generator(5);
    let result = gen.generate(&StoryRequest::new("", "fantasy", "short"));
    assert_eq!(result.source, StorySource::Primary);
    assert_eq!(result.paragraphs().count(), 3);
    assert!(
        result.title.contains("Mysterious") || result.title.contains("Adventure"),
        "expected stock title tokens, got '{}'",
        result.title
    );
}

#[test]
fn structure_is_idempotent_across_seeds() {
    // Identical inputs always produce the same paragraph count and
    // ordering, even though the wording differs with the seed.
    let request = StoryRequest::new("the last train north", "mystery", "medium");
    let mut gen_a = generator(1);
    let mut gen_b = generator(999);
    let a = gen_a.generate(&request);
    let b = gen_b.generate(&request);
    assert_eq!(a.paragraphs().count(), b.paragraphs().count());
    assert_eq!(a.source, b.source);
}

#[test]
fn fantasy_short_scenario() {
    let mut gen = generator(21);
    let result = gen.generate(&StoryRequest::new(
        "a chef who discovers magical ingredients",
        "fantasy",
        "short",
    ));
    assert_eq!(result.paragraphs().count(), 3);
    let title = &result.title;
    assert!(
        title.starts_with("The ")
            || title.starts_with("Quest for the ")
            || title.ends_with("'s Legacy"),
        "title '{}' does not match any fantasy template shape",
        title
    );
}

#[test]
fn raw_request_strings_are_echoed() {
    let mut gen = generator(2);
    let result = gen.generate(&StoryRequest::new("A Robot!", "SCI-FI", "LONG"));
    // Normalization still applies internally...
    assert_eq!(result.paragraphs().count(), 6);
    // ...but the echoes are verbatim.
    assert_eq!(result.prompt, "A Robot!");
    assert_eq!(result.genre, "SCI-FI");
    assert_eq!(result.length, "LONG");
}

#[test]
fn content_has_no_empty_paragraphs() {
    let mut gen = generator(8);
    let result = gen.generate(&StoryRequest::new("an island that moves", "adventure", "long"));
    assert!(!result.content.starts_with(PARAGRAPH_SEPARATOR));
    assert!(!result.content.ends_with(PARAGRAPH_SEPARATOR));
    for paragraph in result.paragraphs() {
        assert!(!paragraph.trim().is_empty());
    }
}

#[test]
fn assembly_failure_produces_fallback_story() {
    // A library whose beat table is gutted can still compose a title
    // but cannot assemble; the facade must absorb the failure.
    let mut library = StoryLibrary::builtin().unwrap();
    library.genres.clear();
    library.generic.beats.clear();

    let mut gen = StoryGenerator::builder()
        .seed(4)
        .with_library(library)
        .build()
        .unwrap();
    let result = gen.generate(&StoryRequest::new("a haunted violin", "horror", "short"));
    assert_eq!(result.source, StorySource::Fallback);
    assert_eq!(result.title, "Story: a haunted violin");
    assert_eq!(
        result.content,
        "This is a short horror story about a haunted violin."
    );
}

#[test]
fn data_dir_builder_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("generic.ron"),
        r#"GenreData(
            genre: "generic",
            characters: ["Quinn"],
            settings: ["the docks"],
            objects: ["a ledger"],
            conflicts: ["a rumor"],
            titles: ["The {first} Story"],
            beats: {
                "introduction": ["{character} arrived.", "{character} woke early."],
                "development": ["{character} worked.", "{character} asked around."],
                "complication": ["{character} hit a wall.", "{character} was followed."],
                "climax": ["{character} acted.", "{character} took the leap."],
                "resolution": ["{character} rested.", "{character} let it go."],
                "conclusion": ["{character} moved on.", "{character} smiled at last."],
            },
        )"#,
    )
    .unwrap();

    let mut gen = StoryGenerator::builder()
        .seed(6)
        .data_dir(dir.path().to_str().unwrap())
        .build()
        .unwrap();
    let result = gen.generate(&StoryRequest::new("dockside rumors", "noir", "short"));
    assert_eq!(result.source, StorySource::Primary);
    assert_eq!(result.paragraphs().count(), 3);
    assert!(result.content.contains("Quinn"));
}

#[test]
fn medium_tier_roles_are_a_prefix_plus_resolution() {
    // Structural arc contract at the boundary: medium = the short arc
    // with a complication inserted before the resolution.
    let medium = LengthTier::Medium.roles();
    let short = LengthTier::Short.roles();
    assert_eq!(&medium[..2], &short[..2]);
    assert_eq!(medium.last(), short.last());
}
