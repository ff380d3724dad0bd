use tracing::debug;

use super::{clamp_score, Issue, Severity, TermCategory, ValidationResult};
use crate::model::Difficulty;

struct TechnicalTerm {
    term: &'static str,
    category: TermCategory,
    difficulty: Difficulty,
}

const fn term(term: &'static str, category: TermCategory, difficulty: Difficulty) -> TechnicalTerm {
    TechnicalTerm {
        term,
        category,
        difficulty,
    }
}

/// Known vocabulary, matched as lowercase substrings of title and content.
/// Row order breaks ties when two categories are found equally often.
const TECHNICAL_TERMS: &[TechnicalTerm] = &[
    term("nano banana", TermCategory::Tool, Difficulty::Beginner),
    term("gemini", TermCategory::Tool, Difficulty::Beginner),
    term("google ai studio", TermCategory::Tool, Difficulty::Beginner),
    term("prompt", TermCategory::Technique, Difficulty::Beginner),
    term("image editing", TermCategory::Technique, Difficulty::Beginner),
    term("background removal", TermCategory::Technique, Difficulty::Beginner),
    term("style transfer", TermCategory::Technique, Difficulty::Intermediate),
    term("character consistency", TermCategory::Technique, Difficulty::Intermediate),
    term("inpainting", TermCategory::Technique, Difficulty::Intermediate),
    term("multi-image fusion", TermCategory::Technique, Difficulty::Advanced),
    term("api", TermCategory::Development, Difficulty::Advanced),
    term("sdk", TermCategory::Development, Difficulty::Advanced),
    term("python", TermCategory::Development, Difficulty::Advanced),
    term("curl", TermCategory::Development, Difficulty::Advanced),
    term("batch processing", TermCategory::Development, Difficulty::Advanced),
];

const COMPETITOR_TOOLS: &[&str] = &[
    "midjourney",
    "dall-e",
    "dalle",
    "stable diffusion",
    "leonardo.ai",
    "adobe firefly",
];

const STEP_MARKERS: &[&str] = &["step", "步骤"];
const CODE_MARKERS: &[&str] = &["```", "<pre", "<code"];

/// Occurrences per term above which it counts as stuffing. Counted on the
/// lowercased body, so "Gemini" and "gemini" add up.
const TERM_OVERUSE_LIMIT: usize = 20;
const PASS_SCORE: u8 = 70;

const OVERUSE_PENALTY: i32 = 5;
const COMPETITOR_PENALTY: i32 = 15;
const MISSING_BRAND_PENALTY: i32 = 10;
const MISSING_STEPS_PENALTY: i32 = 5;
const MISSING_CODE_PENALTY: i32 = 10;

/// Score an article against the static terminology rules.
///
/// Never fails: a bad article is reported through `is_valid` and `issues`.
pub fn validate_technical_content(
    title: &str,
    content: &str,
    keywords: &[String],
) -> ValidationResult {
    let lower_title = title.to_lowercase();
    let lower_content = content.to_lowercase();
    let mentions = |needle: &str| lower_title.contains(needle) || lower_content.contains(needle);

    let found: Vec<&TechnicalTerm> = TECHNICAL_TERMS.iter().filter(|t| mentions(t.term)).collect();
    let category = dominant_category(&found);
    let difficulty = highest_difficulty(&found);

    let mut score: i32 = 100;
    let mut issues = Vec::new();

    for t in &found {
        let count = lower_content.matches(t.term).count();
        if count > TERM_OVERUSE_LIMIT {
            issues.push(Issue {
                severity: Severity::Warning,
                message: format!(
                    "\"{}\" appears {} times, which reads as keyword stuffing",
                    t.term, count
                ),
                suggestion: Some(format!(
                    "Replace some mentions of \"{}\" with synonyms or pronouns.",
                    t.term
                )),
            });
            score -= OVERUSE_PENALTY;
        }
    }

    let competitors: Vec<&str> = COMPETITOR_TOOLS
        .iter()
        .copied()
        .filter(|name| lower_content.contains(name))
        .collect();
    if !competitors.is_empty() {
        issues.push(Issue {
            severity: Severity::Error,
            message: format!("Content mentions other tools: {}", competitors.join(", ")),
            suggestion: Some(
                "Remove references to other tools and keep the focus on Nano Banana.".to_string(),
            ),
        });
        score -= COMPETITOR_PENALTY;
    }

    if found.iter().any(|t| t.term == "nano banana") && !mentions("gemini") && !mentions("google") {
        issues.push(Issue {
            severity: Severity::Warning,
            message: "Nano Banana is mentioned without tying it to Google Gemini".to_string(),
            suggestion: Some(
                "Explain that Nano Banana is the image model inside Google Gemini.".to_string(),
            ),
        });
        score -= MISSING_BRAND_PENALTY;
    }

    let has_marker = |markers: &[&str]| markers.iter().any(|m| lower_content.contains(m));

    if category == TermCategory::Technique && !has_marker(STEP_MARKERS) {
        issues.push(Issue {
            severity: Severity::Info,
            message: "Technique tutorial has no step-by-step walkthrough".to_string(),
            suggestion: Some("Break the walkthrough into numbered steps.".to_string()),
        });
        score -= MISSING_STEPS_PENALTY;
    }

    if category == TermCategory::Development && !has_marker(CODE_MARKERS) {
        issues.push(Issue {
            severity: Severity::Warning,
            message: "Development tutorial has no code example".to_string(),
            suggestion: Some("Add at least one code sample in a code block.".to_string()),
        });
        score -= MISSING_CODE_PENALTY;
    }

    // Coverage is advisory only and never costs points
    for keyword in keywords {
        let k = keyword.trim().to_lowercase();
        if !k.is_empty() && !mentions(&k) {
            issues.push(Issue {
                severity: Severity::Info,
                message: format!(
                    "Keyword \"{}\" never appears in the title or body",
                    keyword.trim()
                ),
                suggestion: Some(format!(
                    "Work \"{}\" into the introduction or a heading.",
                    keyword.trim()
                )),
            });
        }
    }

    let score = clamp_score(score);
    let has_error = issues.iter().any(|i| i.severity == Severity::Error);
    debug!(score, found = found.len(), issues = issues.len(), %category, "validated content");

    ValidationResult {
        is_valid: score >= PASS_SCORE && !has_error,
        score,
        issues,
        category,
        difficulty,
    }
}

/// Most frequent category among found terms; ties go to the earlier table row.
fn dominant_category(found: &[&TechnicalTerm]) -> TermCategory {
    let mut counts: Vec<(TermCategory, usize)> = Vec::new();
    for t in found {
        match counts.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((t.category, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(TermCategory, usize)>, (c, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((c, n)),
        })
        .map(|(c, _)| c)
        .unwrap_or(TermCategory::General)
}

fn highest_difficulty(found: &[&TechnicalTerm]) -> Difficulty {
    if found.iter().any(|t| t.difficulty == Difficulty::Advanced) {
        Difficulty::Advanced
    } else if found.iter().any(|t| t.difficulty == Difficulty::Intermediate) {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}
