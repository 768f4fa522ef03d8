//! Article Builder Tests
//!
//! Tests for ArticleBuilder and tagged-text serialization.

use stepwise::article::ArticleBuilder;
use stepwise::{RelatedLink, Step, parse_article};

#[test]
fn test_builder_minimal() {
    let article = ArticleBuilder::new("How to Juggle").build();

    assert_eq!(article.title, "How to Juggle");
    assert!(article.steps.is_empty());
    assert_eq!(article.read_time, 3);
    assert_eq!(article.difficulty, "Intermediate");
    assert_eq!(article.introduction, None);
}

#[test]
fn test_builder_read_time_from_steps() {
    let article = ArticleBuilder::new("Juggle")
        .steps((1..=4).map(|n| Step::new(format!("Ball {n}"))).collect())
        .build();

    assert_eq!(article.read_time, 6);
}

#[test]
fn test_builder_explicit_values() {
    let article = ArticleBuilder::new("Juggle")
        .step(Step::new("One ball"))
        .read_time(12)
        .difficulty("Advanced")
        .build();

    assert_eq!(article.read_time, 12);
    assert_eq!(article.difficulty, "Advanced");
}

#[test]
fn test_builder_lists() {
    let article = ArticleBuilder::new("Juggle")
        .add_prerequisite("Three balls")
        .add_prerequisite("Patience")
        .related("Circus skills")
        .related_link(RelatedLink {
            title: "Club juggling".to_string(),
            url: "https://example.com/clubs".to_string(),
        })
        .build();

    assert_eq!(
        article.prerequisites,
        Some(vec!["Three balls".to_string(), "Patience".to_string()])
    );
    let links = article.related_links.unwrap();
    assert_eq!(links[0].url, "https://www.google.com/search?q=Circus%20skills");
    assert_eq!(links[1].url, "https://example.com/clubs");
}

#[test]
fn test_built_article_round_trips_through_text() {
    let article = ArticleBuilder::new("How to Juggle Three Balls")
        .introduction("Juggling improves coordination.")
        .prerequisites(vec!["Three soft balls"])
        .step(
            Step::new("Start with one ball")
                .with_description("Toss it from hand to hand at eye level.")
                .with_tips(vec!["Keep elbows in", "Watch the top of the arc"]),
        )
        .step(
            Step::new("Add a second ball").with_description("Throw the second as the first peaks."),
        )
        .step(Step::new("Add the third"))
        .conclusion("Practice daily.")
        .related("Juggling clubs")
        .build();

    let text = article.to_tagged_text();
    let reparsed = parse_article(&text, "ignored");

    assert_eq!(reparsed, article);
}

#[test]
fn test_tagged_text_skips_absent_sections() {
    let text = ArticleBuilder::new("Bare").build().to_tagged_text();

    assert_eq!(text, "TITLE: Bare\n\nSTEPS:\n");
}
