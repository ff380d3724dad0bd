pub mod assemble;
pub mod classify;
pub mod seo;
pub mod sources;
pub mod tables;
pub mod templates;

pub use assemble::Generator;

/// Keyword sets used when no input is given: the first drives `report`,
/// the whole list drives `batch`.
pub const SAMPLE_KEYWORD_SETS: &[&[&str]] = &[
    &["style transfer", "artistic transformation", "creative editing", "visual styles"],
    &["character consistency", "portrait", "multi-image fusion"],
    &["product photography", "background replacement", "ecommerce"],
    &["nano banana api", "batch processing", "automation"],
    &["prompt writing", "beginner", "first edit"],
];

pub fn sample_keywords(index: usize) -> Vec<String> {
    SAMPLE_KEYWORD_SETS
        .get(index)
        .map(|set| set.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

pub fn sample_keyword_sets() -> Vec<Vec<String>> {
    (0..SAMPLE_KEYWORD_SETS.len()).map(sample_keywords).collect()
}
