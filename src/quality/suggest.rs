use super::{QualityScore, ValidationResult};

const LOW_SCORE: u8 = 70;

/// Issue suggestions first, in issue order, then one fixed sentence per weak sub-score.
pub fn generate_suggestions(validation: &ValidationResult, quality: &QualityScore) -> Vec<String> {
    let mut suggestions: Vec<String> = validation
        .issues
        .iter()
        .filter_map(|issue| issue.suggestion.clone())
        .collect();

    let canned = [
        (
            quality.structure,
            "Restructure the article: include introduction, guide and conclusion sections and keep the length reasonable.",
        ),
        (
            quality.accuracy,
            "Improve technical accuracy by resolving the validation issues above.",
        ),
        (
            quality.readability,
            "Rebalance paragraph lengths: merge very short paragraphs and split overly long ones.",
        ),
        (
            quality.seo,
            "Tune SEO: use 5 to 15 keywords and keep the description between 50 and 160 characters.",
        ),
        (
            quality.engagement,
            "Add steps, examples or tips, and include at least one example image.",
        ),
    ];
    suggestions.extend(
        canned
            .iter()
            .filter(|(score, _)| *score < LOW_SCORE)
            .map(|(_, text)| text.to_string()),
    );
    suggestions
}
