use crate::model::{Category, Difficulty};

/// Ordered category table. The first category with a matching substring wins,
/// so reordering rows changes results for overlapping keyword sets.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Character,
        &["character", "portrait", "face", "person", "avatar", "consistency"],
    ),
    (
        Category::Product,
        &["product", "ecommerce", "e-commerce", "commercial", "packshot", "merchandise"],
    ),
    (
        Category::Development,
        &["api", "sdk", "developer", "integration", "code", "programming"],
    ),
    (
        Category::Creative,
        &["style", "creative", "artistic", "art", "transfer", "visual"],
    ),
    (
        Category::Technique,
        &["technique", "prompt", "edit", "workflow", "tip"],
    ),
];

/// Checked hardest-first; anything unmatched is a beginner topic.
const DIFFICULTY_KEYWORDS: &[(Difficulty, &[&str])] = &[
    (
        Difficulty::Advanced,
        &["api", "sdk", "batch", "advanced", "professional", "automation", "integration"],
    ),
    (
        Difficulty::Intermediate,
        &["intermediate", "workflow", "optimization", "multi-image", "fusion", "technique"],
    ),
    (
        Difficulty::Beginner,
        &["beginner", "basic", "getting started", "introduction", "first"],
    ),
];

/// Classify a keyword list into one category and one difficulty.
pub fn classify(keywords: &[String]) -> (Category, Difficulty) {
    (detect_category(keywords), detect_difficulty(keywords))
}

pub fn detect_category(keywords: &[String]) -> Category {
    first_match(CATEGORY_KEYWORDS, keywords).unwrap_or(Category::General)
}

pub fn detect_difficulty(keywords: &[String]) -> Difficulty {
    first_match(DIFFICULTY_KEYWORDS, keywords).unwrap_or(Difficulty::Beginner)
}

fn first_match<T: Copy>(table: &[(T, &[&str])], keywords: &[String]) -> Option<T> {
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    table.iter().find_map(|(label, needles)| {
        let hit = lowered
            .iter()
            .any(|k| needles.iter().any(|needle| k.contains(needle)));
        hit.then_some(*label)
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn style_transfer_is_creative_beginner() {
        let keywords = kw(&[
            "style transfer",
            "artistic transformation",
            "creative editing",
            "visual styles",
        ]);
        assert_eq!(classify(&keywords), (Category::Creative, Difficulty::Beginner));
    }

    #[test]
    fn classification_is_repeatable() {
        let keywords = kw(&["Product Photo", "API batch"]);
        assert_eq!(classify(&keywords), classify(&keywords));
    }

    #[test]
    fn table_order_breaks_ties() {
        // "character" (first row) and "api" (third row) both match
        let keywords = kw(&["api usage", "character sheet"]);
        assert_eq!(detect_category(&keywords), Category::Character);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let keywords = kw(&["NANO BANANA API"]);
        assert_eq!(classify(&keywords), (Category::Development, Difficulty::Advanced));
    }

    #[test]
    fn intermediate_keywords() {
        let keywords = kw(&["multi-image fusion", "scene blending"]);
        assert_eq!(detect_difficulty(&keywords), Difficulty::Intermediate);
    }

    #[test]
    fn unmatched_falls_back_to_defaults() {
        assert_eq!(classify(&kw(&["zzz"])), (Category::General, Difficulty::Beginner));
        assert_eq!(classify(&[]), (Category::General, Difficulty::Beginner));
    }
}
