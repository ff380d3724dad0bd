use crate::generator::seo::generate_tags;
use crate::model::{ArticleConfig, SectionType};
use crate::quality::Review;

/// Print the human-readable summary for one generated article.
pub fn print_report(config: &ArticleConfig, review: &Review) {
    println!("{}", config.title);
    println!("{}", "=".repeat(config.title.chars().count().min(80)));
    println!("ID:          {}", config.id);
    println!("Category:    {} ({})", config.category, config.category.slug());
    println!("Difficulty:  {}", config.difficulty);
    println!("Author:      {}", config.author.name);
    println!("Sections:    {}", section_list(config));
    if let Some(guide) = config.section(SectionType::Guide) {
        println!("Guide steps: {}", guide.steps.as_ref().map_or(0, Vec::len));
    }
    println!("Description: {}", config.description);

    print_review(review);

    println!("\n--- SEO ---");
    println!("  Keywords: {}", config.seo.keywords.join(", "));
    println!("  Tags:     {}", config.seo.tags.join(", "));
    // raw keywords are not kept on the config; the built tags expand the same way
    println!(
        "  Suggested tags: {}",
        generate_tags(&config.seo.tags, config.category).join(", ")
    );
}

/// Scores, issues and suggestions. Shared by `report` and `validate`.
pub fn print_review(review: &Review) {
    let v = &review.validation;
    let q = &review.quality;

    println!("\n--- Scores ---");
    println!("  Structure:   {:>3}", q.structure);
    println!("  Accuracy:    {:>3}", q.accuracy);
    println!("  Readability: {:>3}", q.readability);
    println!("  SEO:         {:>3}", q.seo);
    println!("  Engagement:  {:>3}", q.engagement);
    println!("  Overall:     {:>3}", q.overall);
    println!(
        "  Validation:  {} (score {}, detected {} / {})",
        if v.is_valid { "PASS" } else { "FAIL" },
        v.score,
        v.category,
        v.difficulty
    );

    if v.issues.is_empty() {
        println!("\n--- Issues ---\n  none");
    } else {
        println!("\n--- Issues ---");
        for issue in &v.issues {
            println!("  [{}] {}", issue.severity, issue.message);
        }
    }

    if !review.suggestions.is_empty() {
        println!("\n--- Suggestions ---");
        for (i, s) in review.suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, s);
        }
    }
}

/// Compact one-row-per-article table for batch runs.
pub fn print_batch_table(rows: &[(ArticleConfig, Review)]) {
    println!(
        "{:>3} | {:<40} | {:<12} | {:<12} | {:>5} | {:>7} | {:<5}",
        "#", "Article", "Category", "Difficulty", "Score", "Overall", "Valid"
    );
    println!("{}", "-".repeat(102));
    for (i, (config, review)) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<40} | {:<12} | {:<12} | {:>5} | {:>7} | {:<5}",
            i + 1,
            truncate(&config.id, 40),
            config.category.slug(),
            config.difficulty,
            review.validation.score,
            review.quality.overall,
            if review.validation.is_valid { "yes" } else { "no" },
        );
    }
}

fn section_list(config: &ArticleConfig) -> String {
    config
        .content
        .sections
        .iter()
        .map(|s| s.kind.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_width() {
        assert_eq!(truncate("short", 10), "short");
        let t = truncate("style-transfer-artistic-transformation", 10);
        assert_eq!(t, "style-t...");
        assert_eq!(t.chars().count(), 10);
    }
}
