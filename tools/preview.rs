/// Preview: interactive generation shell for exercising story data.
///
/// Usage: preview [--data <dir>] [--seed <n>]
///
/// Commands:
///   gen <genre> <length> <prompt...>  — generate one story
///   seed <n>                          — reseed the generator
///   examples                          — list canned example prompts
///   help                              — list commands
///   quit                              — exit

use std::io::{self, BufRead, Write};

use storyforge::core::generator::StoryGenerator;
use storyforge::schema::request::StoryRequest;
use storyforge::schema::story::StorySource;

const EXAMPLE_PROMPTS: &[(&str, &str)] = &[
    ("A time traveler who accidentally changes a minor historical event", "sci-fi"),
    ("A detective who can speak to ghosts", "mystery"),
    ("A world where dreams become reality", "fantasy"),
    ("A chef who discovers magical ingredients", "fantasy"),
    ("A librarian who finds a book that writes itself", "mystery"),
    ("An explorer who finds a map of possibilities", "adventure"),
    ("A reflection that develops its own consciousness", "horror"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut data_dir = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" if i + 1 < args.len() => {
                i += 1;
                data_dir = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut generator = match build_generator(data_dir.as_deref(), seed) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("ERROR: Failed to build generator: {}", e);
            std::process::exit(1);
        }
    };

    println!("storyforge preview. Type 'help' for commands.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["examples"] => {
                for (prompt, genre) in EXAMPLE_PROMPTS {
                    println!("  [{}] {}", genre, prompt);
                }
            }
            ["seed", value] => match value.parse::<u64>() {
                Ok(n) => match build_generator(data_dir.as_deref(), n) {
                    Ok(g) => {
                        generator = g;
                        println!("Seed set to {}", n);
                    }
                    Err(e) => eprintln!("ERROR: {}", e),
                },
                Err(_) => eprintln!("ERROR: seed must be an integer"),
            },
            ["gen", genre, length, prompt_words @ ..] => {
                let prompt = prompt_words.join(" ");
                let request = StoryRequest::new(&prompt, genre, length);
                let result = generator.generate(&request);
                println!("\n=== {} ===", result.title);
                println!("{}\n", result.content);
                if result.source == StorySource::Fallback {
                    println!("(fallback story)");
                }
            }
            _ => {
                eprintln!("Unrecognized command. Type 'help' for commands.");
            }
        }
    }
}

fn build_generator(
    data_dir: Option<&str>,
    seed: u64,
) -> Result<StoryGenerator, storyforge::core::generator::GeneratorError> {
    let mut builder = StoryGenerator::builder().seed(seed);
    if let Some(dir) = data_dir {
        builder = builder.data_dir(dir);
    }
    builder.build()
}

fn print_usage() {
    println!("Usage: preview [--data <dir>] [--seed <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  gen <genre> <length> <prompt...>  generate one story");
    println!("  seed <n>                          reseed the generator");
    println!("  examples                          list canned example prompts");
    println!("  help                              this list");
    println!("  quit                              exit");
}
