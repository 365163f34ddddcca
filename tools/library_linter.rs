/// Library linter: validates story data files for coverage and quality.
///
/// Usage: library_linter <data_dir_or_file>
///
/// Errors (exit 1): files that fail to parse, templates with bad
/// placeholders, a generic tier that cannot back the role fallback.
/// Warnings: stocked cells with fewer than 2 alternatives, genre cells
/// that will silently fall back to the generic tier.

use std::path::Path;
use std::process;

use storyforge::core::library::StoryLibrary;
use storyforge::schema::request::Genre;
use storyforge::schema::story::NarrativeRole;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: library_linter <data_dir_or_file>");
        process::exit(0);
    }

    let data_path = Path::new(&args[1]);
    let mut library = StoryLibrary::default();

    let load_result = if data_path.is_file() {
        library.load_from_ron(data_path)
    } else if data_path.is_dir() {
        library.load_dir(data_path)
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    };

    if let Err(e) = load_result {
        eprintln!("ERROR: Failed to load story data: {}", e);
        process::exit(1);
    }

    println!(
        "Loaded {} genre entr{} plus {}generic tier",
        library.genres.len(),
        if library.genres.len() == 1 { "y" } else { "ies" },
        if library.generic.titles.is_empty() && library.generic.beats.is_empty() {
            "no "
        } else {
            ""
        }
    );

    if let Err(e) = library.validate() {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }

    let mut warnings = 0;

    for genre in Genre::ALL {
        let Some(entry) = library.genres.get(&genre) else {
            println!(
                "WARN: no data for genre '{}'; requests will use the generic tier",
                genre.tag()
            );
            warnings += 1;
            continue;
        };

        for role in NarrativeRole::ALL {
            match entry.beats.get(&role) {
                None => {
                    println!(
                        "WARN: ({}, {}) falls back to the generic tier",
                        genre.tag(),
                        role.name()
                    );
                    warnings += 1;
                }
                Some(templates) if templates.len() < 2 => {
                    println!(
                        "WARN: ({}, {}) has only {} alternative(s); output will repeat",
                        genre.tag(),
                        role.name(),
                        templates.len()
                    );
                    warnings += 1;
                }
                Some(_) => {}
            }
        }

        if entry.titles.len() < 2 {
            println!(
                "WARN: genre '{}' has {} title template(s)",
                genre.tag(),
                entry.titles.len()
            );
            warnings += 1;
        }
    }

    if warnings == 0 {
        println!("OK: all checks passed");
    } else {
        println!("Done: {} warning(s)", warnings);
    }
}
