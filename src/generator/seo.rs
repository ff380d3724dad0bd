use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Category;

static SLUG_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}]+").unwrap());

const BASE_KEYWORDS: &[&str] = &["nano banana", "ai image editing", "google gemini"];
const BASE_TAGS: &[&str] = &["Nano Banana", "AI Image Editing"];
const MAX_EXPANDED_TAGS: usize = 8;

/// URL slug for a keyword list: lowercase, separator runs collapsed to `-`.
pub fn slugify(keywords: &[String]) -> String {
    let joined = keywords.join(" ").to_lowercase();
    let slug = SLUG_SEPARATOR_RE
        .replace_all(&joined, "-")
        .trim_matches('-')
        .to_string();
    if slug.is_empty() {
        "tutorial".to_string()
    } else {
        slug
    }
}

/// Base SEO terms followed by the lowercased input keywords.
pub fn seo_keywords(keywords: &[String]) -> Vec<String> {
    BASE_KEYWORDS
        .iter()
        .map(|s| s.to_string())
        .chain(keywords.iter().map(|k| k.to_lowercase()))
        .collect()
}

/// Tags attached by the assembler: the input keywords, capitalized.
pub fn keyword_tags(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| capitalize(k)).collect()
}

/// Broader tag suggestion: base tags, keyword tags, then two category tags,
/// deduplicated and capped.
///
/// Accepts raw keywords or the output of [`keyword_tags`]; capitalizing an
/// already-capitalized tag is a no-op, so both give the same list.
pub fn generate_tags(keywords: &[String], category: Category) -> Vec<String> {
    let mut seen = HashSet::new();
    BASE_TAGS
        .iter()
        .map(|s| s.to_string())
        .chain(keyword_tags(keywords))
        .chain(category_tags(category).iter().map(|s| s.to_string()))
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .take(MAX_EXPANDED_TAGS)
        .collect()
}

fn category_tags(category: Category) -> [&'static str; 2] {
    match category {
        Category::Character => ["Character Design", "Consistency"],
        Category::Product => ["Product Photography", "E-commerce"],
        Category::Development => ["API", "Automation"],
        Category::Creative => ["Creative Editing", "Art Styles"],
        Category::Technique => ["Techniques", "Prompting"],
        Category::General => ["Tutorial", "Getting Started"],
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify(&kw(&["Style Transfer", "  API & SDK!"])), "style-transfer-api-sdk");
        assert_eq!(slugify(&kw(&["风格 迁移"])), "风格-迁移");
        assert_eq!(slugify(&kw(&["!!!"])), "tutorial");
    }

    #[test]
    fn seo_keywords_prefix_base_terms() {
        let got = seo_keywords(&kw(&["Style Transfer"]));
        assert_eq!(
            got,
            kw(&["nano banana", "ai image editing", "google gemini", "style transfer"])
        );
    }

    #[test]
    fn keyword_tags_are_capitalized() {
        assert_eq!(
            keyword_tags(&kw(&["style transfer", "éclair"])),
            kw(&["Style transfer", "Éclair"])
        );
    }

    #[test]
    fn expanded_tags_accept_built_tags() {
        let keywords = kw(&["style transfer", "visual styles"]);
        let tags = keyword_tags(&keywords);
        assert_eq!(
            generate_tags(&tags, Category::Creative),
            generate_tags(&keywords, Category::Creative)
        );
    }

    #[test]
    fn expanded_tags_dedup_and_cap() {
        let tags = generate_tags(&kw(&["nano banana", "api"]), Category::Development);
        // "Nano banana" duplicates a base tag, "API" duplicates a category tag
        assert_eq!(tags, kw(&["Nano Banana", "AI Image Editing", "Api", "Automation"]));

        let many = kw(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(generate_tags(&many, Category::General).len(), MAX_EXPANDED_TAGS);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("style  transfer"), "Style Transfer");
    }
}
