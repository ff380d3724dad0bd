pub mod assess;
pub mod suggest;
pub mod validator;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ArticleConfig, Difficulty};

pub use assess::assess_content_quality;
pub use suggest::generate_suggestions;
pub use validator::validate_technical_content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// Subject area a technical term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Tool,
    Technique,
    Development,
    General,
}

impl fmt::Display for TermCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TermCategory::Tool => "tool",
            TermCategory::Technique => "technique",
            TermCategory::Development => "development",
            TermCategory::General => "general",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub score: u8,
    pub issues: Vec<Issue>,
    pub category: TermCategory,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    pub structure: u8,
    pub accuracy: u8,
    pub readability: u8,
    pub seo: u8,
    pub engagement: u8,
    pub overall: u8,
}

/// Everything the review pass produces for one article.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub validation: ValidationResult,
    pub quality: QualityScore,
    pub suggestions: Vec<String>,
}

/// Validate `content` as the body of `config`, checking coverage of the
/// article's SEO keywords. Every caller that scores a config goes through here.
pub fn validate_article(config: &ArticleConfig, content: &str) -> ValidationResult {
    validate_technical_content(&config.title, content, &config.seo.keywords)
}

/// Validate, assess and collect suggestions for a generated article.
pub fn review(config: &ArticleConfig) -> Review {
    let content = config.full_content();
    let validation = validate_article(config, &content);
    let quality = assess_content_quality(config, &content);
    let suggestions = generate_suggestions(&validation, &quality);
    Review {
        validation,
        quality,
        suggestions,
    }
}

/// Start-at-100 score with deductions, clamped to `0..=100`.
fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
