/// Campfire: generate one story per genre and length tier.
///
/// Run with: cargo run --example campfire

use storyforge::core::generator::StoryGenerator;
use storyforge::schema::request::{Genre, LengthTier, StoryRequest};

fn main() {
    let mut generator = StoryGenerator::builder()
        .seed(2026)
        .build()
        .expect("failed to build generator");

    let prompts = [
        "a dragon who hoards books instead of gold",
        "a signal from a dead colony",
        "a locked room with no body",
        "two rivals stranded by the same storm",
        "a map drawn in a language nobody reads",
        "footsteps in a house that should be empty",
        "a wedding cake delivered to the wrong address",
    ];

    for (genre, prompt) in Genre::ALL.into_iter().zip(prompts) {
        let length = LengthTier::Medium;
        let request = StoryRequest::new(prompt, genre.tag(), length.tag());
        let story = generator.generate(&request);

        println!("=== [{}/{}] {} ===", genre.tag(), length.tag(), story.title);
        println!("{}\n", story.content);
    }

    // Same prompt across tiers: the arc grows, the shape holds.
    for length in LengthTier::ALL {
        let request = StoryRequest::new(
            "a lighthouse keeper who hears the sea speak",
            "fantasy",
            length.tag(),
        );
        let story = generator.generate(&request);
        println!(
            "--- {} tier: {} paragraphs, \"{}\"",
            length.tag(),
            story.paragraphs().count(),
            story.title
        );
    }
}
