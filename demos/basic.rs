//! Basic guide example with a canned backend
//!
//! Run with: RUST_LOG=stepwise=debug cargo run --example basic

use stepwise::{AgeGroup, Guide, GuideConfig, GuideResponse, PromptBackend, Result};
use tracing_subscriber::EnvFilter;

/// Stand-in for a real text-generation service
struct DemoBackend;

impl PromptBackend for DemoBackend {
    async fn submit(&self, prompt: &str) -> Result<String> {
        if prompt.starts_with("Write a comprehensive") {
            Ok("TITLE: How to Make a Paper Airplane\n\
                INTRODUCTION: A classic dart that flies far.\n\
                PREREQUISITES:\n- One sheet of A4 paper\n\
                STEPS:\n\
                STEP 1: Fold in half\nFold the paper lengthwise and unfold.\n\
                TIPS:\n- Crease sharply\n\
                STEP 2: Fold the corners\nFold the top corners to the center line.\n\
                STEP 3: Fold the wings\nFold each side down to form wings.\n\
                CONCLUSION: Throw it gently and level.\n\
                RELATED:\n- Paper helicopters\n- Origami cranes"
                .to_string())
        } else if prompt.starts_with("A user is searching") {
            Ok("1. How to make a paper airplane that flies far\n\
                2. How to make a paper airplane glider\n\
                3. How to fold a paper dart\n\
                4. How to make a stunt paper airplane"
                .to_string())
        } else {
            Ok(
                "Here are the steps:\n1. Take a piece of paper\n2. Fold it in half\n3. Throw it!"
                    .to_string(),
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let guide = Guide::new(DemoBackend, GuideConfig::default());

    // Step-by-step view
    if let GuideResponse::Steps(steps) = guide
        .ask(AgeGroup::Toddler, "How to make a paper airplane?")
        .await?
    {
        for (i, step) in steps.iter().enumerate() {
            println!("Step {}: {}", i + 1, step);
        }
    }

    // Short query: suggestions instead of an article
    if let GuideResponse::Suggestions(list) = guide.search("paper airplane").await? {
        println!("\nDid you mean:");
        for suggestion in &list {
            println!("  - {suggestion}");
        }
    }

    // Full article
    if let GuideResponse::Article(article) = guide
        .ask(AgeGroup::Adult, "how to make a paper airplane")
        .await?
    {
        println!("\n{} ({} min, {})", article.title, article.read_time, article.difficulty);
        for (i, step) in article.steps.iter().enumerate() {
            println!("  {}. {}: {}", i + 1, step.title, step.description);
        }
        for link in article.related_links.unwrap_or_default() {
            println!("  see also: {} <{}>", link.title, link.url);
        }
    }

    Ok(())
}
