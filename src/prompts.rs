//! Prompt templates and audience routing
//!
//! Each age group is served by one of two views: a plain step-by-step view
//! fed by [`parse_steps`](crate::parse_steps), or a full article view fed by
//! [`parse_article`](crate::parse_article).

use std::fmt;
use std::str::FromStr;

use crate::error::GuideError;

/// Audience a guide is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AgeGroup {
    /// Young children: short, simple steps
    Toddler,
    /// Teens and adults: full articles
    Adult,
    /// Older users: short, simple steps
    Elderly,
}

/// How an answer is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideView {
    /// One plain step at a time
    Steps,
    /// Structured article with sections
    Article,
}

impl AgeGroup {
    /// View used for this audience
    pub fn view(self) -> GuideView {
        match self {
            AgeGroup::Toddler | AgeGroup::Elderly => GuideView::Steps,
            AgeGroup::Adult => GuideView::Article,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Toddler => "toddler",
            AgeGroup::Adult => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toddler" => Ok(AgeGroup::Toddler),
            "adult" | "teen" | "teen-adult" | "teen-adults" => Ok(AgeGroup::Adult),
            "elderly" => Ok(AgeGroup::Elderly),
            _ => Err(GuideError::InvalidAgeGroup(s.to_string())),
        }
    }
}

/// Prompt asking for a tagged how-to article about `query`
///
/// The response format matches what [`parse_article`](crate::parse_article) reads.
pub fn article_prompt(query: &str) -> String {
    format!(
        "Write a comprehensive, professional how-to article about: {query}.

Format the response EXACTLY as follows:

TITLE: [Clear, descriptive title]

INTRODUCTION: [Brief introduction explaining what will be covered and why it's useful]

PREREQUISITES: [List any prerequisites, one per line, or write \"None\"]

STEPS:
STEP 1: [Step title]
[Detailed description]
TIPS: [Optional tips, one per line]

STEP 2: [Step title]
[Detailed description]
TIPS: [Optional tips, one per line]

[Continue for all steps...]

CONCLUSION: [Summary and final thoughts]

RELATED: [3-5 related topics or resources, one per line]"
    )
}

/// Prompt asking for four more specific versions of a short query
pub fn suggestion_prompt(short_query: &str) -> String {
    format!(
        "A user is searching for \"{short_query}\". This query is too short. \
         Generate 4 complete, professional \"How to\" tutorial queries that the user \
         might be looking for. Each should be detailed and specific (at least 4-5 words). \
         Return ONLY the 4 queries, numbered 1-4, nothing else."
    )
}

/// Prompt for the step-by-step view: the question itself
pub fn steps_prompt(question: &str) -> String {
    question.trim().to_string()
}
