//! Article builder for constructing articles in code
//!
//! This module provides the ArticleBuilder for assembling articles without parsing text.

use super::types::{Article, DEFAULT_DIFFICULTY, RelatedLink, Step, read_time_for};

#[must_use]
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    title: String,
    introduction: Option<String>,
    prerequisites: Option<Vec<String>>,
    steps: Vec<Step>,
    conclusion: Option<String>,
    related_links: Option<Vec<RelatedLink>>,
    read_time: Option<u32>,
    difficulty: Option<String>,
}

impl ArticleBuilder {
    /// Create a new ArticleBuilder with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            introduction: None,
            prerequisites: None,
            steps: Vec::new(),
            conclusion: None,
            related_links: None,
            read_time: None,
            difficulty: None,
        }
    }

    /// Set the introduction
    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    /// Set the prerequisites list
    pub fn prerequisites(mut self, prerequisites: Vec<impl Into<String>>) -> Self {
        self.prerequisites = Some(prerequisites.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Add a single prerequisite
    pub fn add_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisites
            .get_or_insert_with(Vec::new)
            .push(prerequisite.into());
        self
    }

    /// Add a step
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Replace all steps
    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    /// Set the conclusion
    pub fn conclusion(mut self, conclusion: impl Into<String>) -> Self {
        self.conclusion = Some(conclusion.into());
        self
    }

    /// Add a related topic, linked to a search for its title
    pub fn related(mut self, title: impl Into<String>) -> Self {
        self.related_links
            .get_or_insert_with(Vec::new)
            .push(RelatedLink::search(title));
        self
    }

    /// Add a related link with an explicit URL
    pub fn related_link(mut self, link: RelatedLink) -> Self {
        self.related_links.get_or_insert_with(Vec::new).push(link);
        self
    }

    /// Set the read time in minutes (computed from the step count if not provided)
    pub fn read_time(mut self, minutes: u32) -> Self {
        self.read_time = Some(minutes);
        self
    }

    /// Set the difficulty (default: "Intermediate")
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Build the article
    pub fn build(self) -> Article {
        let read_time = self
            .read_time
            .unwrap_or_else(|| read_time_for(self.steps.len()));

        Article {
            title: self.title,
            introduction: self.introduction,
            prerequisites: self.prerequisites,
            steps: self.steps,
            conclusion: self.conclusion,
            related_links: self.related_links,
            read_time,
            difficulty: self
                .difficulty
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        }
    }
}
