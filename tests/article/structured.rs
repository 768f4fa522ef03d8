//! Tagged Article Parsing Tests
//!
//! Tests for turning template-formatted model output into articles.

use stepwise::article::read_time_for;
use stepwise::{Article, RelatedLink, Step, parse_article};

const BREAD: &str = "\
TITLE: How to Bake Bread at Home

INTRODUCTION: Baking bread is rewarding.
It takes a few hours.

PREREQUISITES:
- Flour
• Yeast
* Oven

STEPS:
STEP 1: Mix the dough
Combine flour, water and yeast.
Stir until shaggy.
TIPS:
- Use lukewarm water
- Weigh your flour

STEP 2: Knead
Knead for ten minutes.

STEP 3: Bake
Bake at 230C for 35 minutes.
TIPS: Let it cool before slicing

CONCLUSION: Homemade bread beats store-bought.
Practice makes perfect.

RELATED:
- Bread machines
- Sourdough starters
";

#[test]
fn test_parse_full_article() {
    let article = parse_article(BREAD, "bake bread");

    assert_eq!(article.title, "How to Bake Bread at Home");
    assert_eq!(
        article.introduction.as_deref(),
        Some("Baking bread is rewarding. It takes a few hours.")
    );
    assert_eq!(
        article.prerequisites,
        Some(vec!["Flour".to_string(), "Yeast".to_string(), "Oven".to_string()])
    );
    assert_eq!(article.steps.len(), 3);
    assert_eq!(
        article.conclusion.as_deref(),
        Some("Homemade bread beats store-bought. Practice makes perfect.")
    );
    assert_eq!(article.read_time, 5);
    assert_eq!(article.difficulty, "Intermediate");
}

#[test]
fn test_step_descriptions_and_tips() {
    let article = parse_article(BREAD, "bake bread");

    let mix = &article.steps[0];
    assert_eq!(mix.title, "Mix the dough");
    assert_eq!(
        mix.description,
        "Combine flour, water and yeast. Stir until shaggy."
    );
    assert_eq!(
        mix.tips,
        Some(vec![
            "Use lukewarm water".to_string(),
            "Weigh your flour".to_string()
        ])
    );

    assert_eq!(article.steps[1].title, "Knead");
    assert_eq!(article.steps[1].tips, None);
}

#[test]
fn test_tips_header_content_is_dropped() {
    let article = parse_article(BREAD, "bake bread");

    // Inline text after TIPS: is not kept anywhere
    let bake = &article.steps[2];
    assert_eq!(bake.description, "Bake at 230C for 35 minutes.");
    assert_eq!(bake.tips, None);
}

#[test]
fn test_related_links() {
    let article = parse_article(BREAD, "bake bread");

    assert_eq!(
        article.related_links,
        Some(vec![
            RelatedLink {
                title: "Bread machines".to_string(),
                url: "https://www.google.com/search?q=Bread%20machines".to_string(),
            },
            RelatedLink {
                title: "Sourdough starters".to_string(),
                url: "https://www.google.com/search?q=Sourdough%20starters".to_string(),
            },
        ])
    );
}

#[test]
fn test_prerequisites_none() {
    let text = "TITLE: Nap\nPREREQUISITES:\nNone\nSTEPS:\nSTEP 1: Lie down";
    let article = parse_article(text, "nap");

    assert_eq!(article.prerequisites, Some(Vec::new()));
    assert_eq!(article.steps.len(), 1);
}

#[test]
fn test_prerequisites_inline_suffix_ignored() {
    let text = "PREREQUISITES: None\n- Pillow";
    let article = parse_article(text, "nap");

    assert_eq!(article.prerequisites, Some(vec!["Pillow".to_string()]));
}

#[test]
fn test_empty_input_uses_fallback() {
    let article = parse_article("", "how to whistle");

    assert_eq!(
        article,
        Article {
            title: "how to whistle".to_string(),
            introduction: None,
            prerequisites: None,
            steps: Vec::new(),
            conclusion: None,
            related_links: None,
            read_time: 3,
            difficulty: "Intermediate".to_string(),
        }
    );
}

#[test]
fn test_untagged_prose_is_discarded() {
    let article = parse_article(
        "Sure! Whistling is easy.\nPurse your lips and blow.",
        "how to whistle",
    );

    assert_eq!(article.title, "how to whistle");
    assert!(article.steps.is_empty());
    assert_eq!(article.introduction, None);
}

#[test]
fn test_step_count_matches_markers() {
    let mut text = String::from("TITLE: Many\nSTEPS:\n");
    for n in 1..=9 {
        text.push_str(&format!("STEP {n}: Step number {n}\nDo thing {n}.\n"));
    }
    let article = parse_article(&text, "many");

    assert_eq!(article.steps.len(), 9);
    assert_eq!(article.read_time, 14);
    for (i, step) in article.steps.iter().enumerate() {
        assert_eq!(step.title, format!("Step number {}", i + 1));
    }
}

#[test]
fn test_read_time_formula() {
    for count in 0..20 {
        let mut text = String::from("STEPS:\n");
        for n in 1..=count {
            text.push_str(&format!("STEP {n}: s\n"));
        }
        let article = parse_article(&text, "q");
        let expected = std::cmp::max(3, (count as f64 * 1.5).ceil() as u32);
        assert_eq!(article.read_time, expected);
        assert_eq!(article.read_time, read_time_for(count));
    }
}

#[test]
fn test_step_without_steps_section_gets_no_description() {
    let text = "INTRODUCTION: Hello\nSTEP 1: Early\nMore intro text";
    let article = parse_article(text, "q");

    assert_eq!(article.steps, vec![Step::new("Early")]);
    assert_eq!(article.introduction.as_deref(), Some("Hello More intro text"));
}

#[test]
fn test_steps_header_before_title() {
    let text = "STEPS:\nSTEP 1: First\nbody\nTITLE: Late title";
    let article = parse_article(text, "q");

    assert_eq!(article.title, "Late title");
    assert_eq!(article.steps[0].description, "body");
    assert_eq!(article.introduction, None);
    assert_eq!(article.conclusion, None);
}

#[test]
fn test_empty_conclusion_swallows_lines() {
    let text = "CONCLUSION:\nDropped line";
    let article = parse_article(text, "q");

    assert_eq!(article.conclusion, Some(String::new()));
}

#[test]
fn test_bullet_before_any_step_is_dropped() {
    let text = "STEPS:\n- orphan tip\nSTEP 1: A\n- real tip";
    let article = parse_article(text, "q");

    assert_eq!(article.steps.len(), 1);
    assert_eq!(article.steps[0].tips, Some(vec!["real tip".to_string()]));
}

#[test]
fn test_crlf_and_indentation() {
    let text = "TITLE: Tea\r\n   STEPS:\r\n\tSTEP 1: Boil  \r\n  water first\r\n";
    let article = parse_article(text, "q");

    assert_eq!(article.title, "Tea");
    assert_eq!(article.steps[0].title, "Boil");
    assert_eq!(article.steps[0].description, "water first");
}

#[test]
fn test_related_percent_encoding() {
    let text = "RELATED:\n* Salt & pepper grinders\nCafé culture";
    let article = parse_article(text, "q");
    let links = article.related_links.unwrap();

    assert_eq!(
        links[0].url,
        "https://www.google.com/search?q=Salt%20%26%20pepper%20grinders"
    );
    assert_eq!(links[1].title, "Café culture");
    assert_eq!(
        links[1].url,
        "https://www.google.com/search?q=Caf%C3%A9%20culture"
    );
}

#[test]
fn test_reparse_tagged_text_is_stable() {
    let article = parse_article(BREAD, "bake bread");
    let reparsed = parse_article(&article.to_tagged_text(), "something else");

    assert_eq!(reparsed, article);
}

#[test]
fn test_reparse_minimal_article() {
    let article = parse_article("STEPS:\nSTEP 1: Only\nSTEP 2: Two\n- tip", "q");
    let reparsed = parse_article(&article.to_tagged_text(), "q");

    assert_eq!(reparsed, article);
}

#[test]
fn test_tips_header_outside_steps_is_dropped() {
    let text = "\
TITLE: How to Plant Tulips
INTRODUCTION: Tulips bloom in spring.
TIPS:
Plant them in autumn.
PREREQUISITES:
- Bulbs
TIPS:
- Trowel
STEPS:
STEP 1: Dig
CONCLUSION: Wait for spring.
RELATED:
TIPS:
- Planting daffodils";

    let article = parse_article(text, "tulips");

    assert_eq!(
        article.introduction.as_deref(),
        Some("Tulips bloom in spring. Plant them in autumn.")
    );
    assert_eq!(
        article.prerequisites,
        Some(vec!["Bulbs".to_string(), "Trowel".to_string()])
    );
    assert_eq!(article.steps, vec![Step::new("Dig")]);
    assert_eq!(article.conclusion.as_deref(), Some("Wait for spring."));
    assert_eq!(
        article.related_links,
        Some(vec![RelatedLink::search("Planting daffodils")])
    );
}
