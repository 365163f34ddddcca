/// Story data validation tests: coverage and well-formedness of the
/// built-in genre files.

use storyforge::core::library::StoryLibrary;
use storyforge::core::template::SlotKind;
use storyforge::schema::request::Genre;
use storyforge::schema::story::NarrativeRole;

#[test]
fn builtin_validates() {
    let library = StoryLibrary::builtin().unwrap();
    library.validate().unwrap();
}

#[test]
fn builtin_covers_every_genre() {
    let library = StoryLibrary::builtin().unwrap();
    for genre in Genre::ALL {
        assert!(
            library.genres.contains_key(&genre),
            "missing data file for genre '{}'",
            genre.tag()
        );
    }
}

#[test]
fn every_genre_covers_every_role() {
    let library = StoryLibrary::builtin().unwrap();
    for genre in Genre::ALL {
        let entry = &library.genres[&genre];
        for role in NarrativeRole::ALL {
            let templates = entry.beats.get(&role);
            assert!(
                templates.is_some_and(|t| !t.is_empty()),
                "genre '{}' has no templates for role '{}'",
                genre.tag(),
                role.name()
            );
        }
    }
}

#[test]
fn every_stocked_cell_has_minimum_alternatives() {
    let library = StoryLibrary::builtin().unwrap();
    let mut entries: Vec<(&str, &storyforge::core::library::GenreLibrary)> =
        vec![("generic", &library.generic)];
    for genre in Genre::ALL {
        entries.push((genre.tag(), &library.genres[&genre]));
    }

    for (name, entry) in entries {
        for (role, templates) in &entry.beats {
            assert!(
                templates.len() >= 2,
                "cell ({}, {}) has only {} alternative(s)",
                name,
                role.name(),
                templates.len()
            );
        }
        assert!(
            !entry.titles.is_empty(),
            "genre '{}' has no title templates",
            name
        );
    }
}

#[test]
fn every_beat_template_names_the_character() {
    // The per-request slot draw only reads as one narrative if every
    // paragraph carries the character; the data files must keep that
    // property.
    let library = StoryLibrary::builtin().unwrap();
    let mut entries = vec![&library.generic];
    entries.extend(Genre::ALL.iter().map(|g| &library.genres[g]));

    for entry in entries {
        for (role, templates) in &entry.beats {
            for template in templates {
                assert!(
                    template.slots().any(|s| s == SlotKind::Character),
                    "a '{}' template never names the character",
                    role.name()
                );
            }
        }
    }
}

#[test]
fn every_genre_has_full_slot_pools() {
    let library = StoryLibrary::builtin().unwrap();
    for genre in Genre::ALL {
        for slot in SlotKind::STORY {
            let pool = library.slot_candidates(Some(genre), slot);
            assert!(
                !pool.is_empty(),
                "genre '{}' has an empty '{}' pool",
                genre.tag(),
                slot.name()
            );
        }
    }
}

#[test]
fn load_dir_reads_ron_files_only() {
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
    std::fs::write(dir.path().join("notes.txt"), "not a data file").unwrap();

    let mut library = StoryLibrary::default();
    library.load_dir(dir.path()).unwrap();
    library.validate().unwrap();
    assert_eq!(
        library.slot_candidates(None, SlotKind::Character),
        ["Quinn".to_string()]
    );
}

#[test]
fn load_dir_missing_directory_errors() {
    let mut library = StoryLibrary::default();
    assert!(library
        .load_dir(std::path::Path::new("no/such/dir"))
        .is_err());
}
