use std::sync::LazyLock;

use regex::Regex;

use super::{clamp_score, validate_article, QualityScore};
use crate::model::{ArticleConfig, SectionType};

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

const MIN_SECTIONS: usize = 4;
const MAX_SECTIONS: usize = 8;
const MIN_CONTENT_CHARS: usize = 1_500;
const MAX_CONTENT_CHARS: usize = 20_000;

const MIN_PARAGRAPH_CHARS: usize = 40;
const MAX_PARAGRAPH_CHARS: usize = 1_200;
const SHORT_PARAGRAPH_RATIO: f64 = 0.3;
const LONG_PARAGRAPH_RATIO: f64 = 0.2;

const MIN_KEYWORDS: usize = 5;
const MAX_KEYWORDS: usize = 15;
const MIN_DESCRIPTION_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 160;

/// Five sub-scores and their rounded mean. `content` is normally
/// [`ArticleConfig::full_content`].
pub fn assess_content_quality(config: &ArticleConfig, content: &str) -> QualityScore {
    let structure = structure_score(config, content);
    let accuracy = validate_article(config, content).score;
    let readability = readability_score(content);
    let seo = seo_score(config);
    let engagement = engagement_score(config);

    let overall = mean_score(&[structure, accuracy, readability, seo, engagement]);

    QualityScore {
        structure,
        accuracy,
        readability,
        seo,
        engagement,
        overall,
    }
}

/// Rounded mean of the sub-scores.
fn mean_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    (f64::from(sum) / scores.len() as f64).round() as u8
}

fn structure_score(config: &ArticleConfig, content: &str) -> u8 {
    let mut score = 100;
    let sections = config.content.sections.len();
    if sections < MIN_SECTIONS {
        score -= 20;
    }
    if sections > MAX_SECTIONS {
        score -= 10;
    }
    if SectionType::REQUIRED.iter().any(|kind| !config.has_section(*kind)) {
        score -= 15;
    }
    let chars = content.chars().count();
    if chars < MIN_CONTENT_CHARS {
        score -= 15;
    }
    if chars > MAX_CONTENT_CHARS {
        score -= 10;
    }
    clamp_score(score)
}

fn readability_score(content: &str) -> u8 {
    let lengths: Vec<usize> = paragraphs(content).map(|p| p.chars().count()).collect();
    if lengths.is_empty() {
        return 100;
    }
    let total = lengths.len() as f64;
    let short = lengths.iter().filter(|n| **n < MIN_PARAGRAPH_CHARS).count() as f64;
    let long = lengths.iter().filter(|n| **n > MAX_PARAGRAPH_CHARS).count() as f64;

    let mut score = 100;
    if short / total > SHORT_PARAGRAPH_RATIO {
        score -= 10;
    }
    if long / total > LONG_PARAGRAPH_RATIO {
        score -= 15;
    }
    clamp_score(score)
}

fn seo_score(config: &ArticleConfig) -> u8 {
    let mut score = 100;
    let keywords = config.seo.keywords.len();
    if keywords < MIN_KEYWORDS {
        score -= 10;
    }
    if keywords > MAX_KEYWORDS {
        score -= 5;
    }
    let description = config.description.chars().count();
    if description < MIN_DESCRIPTION_CHARS {
        score -= 10;
    }
    if description > MAX_DESCRIPTION_CHARS {
        score -= 5;
    }
    clamp_score(score)
}

fn engagement_score(config: &ArticleConfig) -> u8 {
    let sections = &config.content.sections;
    let mut score = 100;
    if !sections.iter().any(|s| s.is_interactive()) {
        score -= 20;
    }
    let has_image = sections
        .iter()
        .filter_map(|s| s.examples.as_ref())
        .flatten()
        .any(|e| e.image.is_some());
    if !has_image {
        score -= 15;
    }
    clamp_score(score)
}

/// Non-blank paragraphs, split on blank lines.
fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK_RE
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}
