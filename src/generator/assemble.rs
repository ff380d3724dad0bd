use tracing::{debug, info, warn};

use super::classify::classify;
use super::seo::{keyword_tags, seo_keywords, slugify, title_case};
use super::sources::{Clock, Jitter, SystemClock, UniformJitter};
use super::tables;
use super::templates::{build_sections, TemplateInput};
use crate::error::{GenerateError, Result};
use crate::model::{ArticleConfig, ArticleContent, Category, Difficulty, Seo, Stats};
use crate::quality::validate_article;

const DEFAULT_RATING_JITTER: f64 = 0.1;
const MAX_RATING: f64 = 5.0;

/// Builds article configs. Holds the clock and rating source so tests can pin both.
pub struct Generator {
    clock: Box<dyn Clock>,
    jitter: Box<dyn Jitter>,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::system(DEFAULT_RATING_JITTER)
    }
}

impl Generator {
    pub fn new(clock: impl Clock + 'static, jitter: impl Jitter + 'static) -> Self {
        Generator {
            clock: Box::new(clock),
            jitter: Box::new(jitter),
        }
    }

    /// Wall clock and a uniform rating offset of at most `rating_jitter`.
    pub fn system(rating_jitter: f64) -> Self {
        Generator::new(SystemClock, UniformJitter::new(rating_jitter))
    }

    /// Generate one article config from a keyword list.
    ///
    /// Keywords are trimmed and blank ones dropped; an input with nothing left
    /// is rejected. Validation runs afterwards but only logs.
    pub fn generate(&self, keywords: &[String]) -> Result<ArticleConfig> {
        let keywords = normalize_keywords(keywords)?;
        let (category, difficulty) = classify(&keywords);
        let topic = keywords.join(" ");
        debug!(%category, %difficulty, %topic, "classified keywords");

        let sections = build_sections(TemplateInput {
            topic: &topic,
            difficulty,
            category,
        });

        let config = ArticleConfig {
            id: slugify(&keywords),
            title: render_title(&keywords, category, difficulty),
            description: render_description(&topic, category, difficulty),
            category,
            difficulty,
            author: tables::author_for(difficulty),
            content: ArticleContent {
                hero_image: tables::hero_image(category),
                badge: tables::badge_for(difficulty, category),
                sections,
                sidebar: tables::sidebar(),
            },
            seo: Seo {
                keywords: seo_keywords(&keywords),
                tags: keyword_tags(&keywords),
            },
            stats: self.stats(difficulty),
        };

        let validation = validate_article(&config, &config.full_content());
        if !validation.is_valid {
            warn!(
                id = %config.id,
                score = validation.score,
                issues = validation.issues.len(),
                "generated content failed validation"
            );
        }

        info!(id = %config.id, sections = config.content.sections.len(), "generated article");
        Ok(config)
    }

    /// Generate one config per keyword set, in order. Stops at the first rejected set.
    pub fn generate_batch(&self, keyword_sets: &[Vec<String>]) -> Result<Vec<ArticleConfig>> {
        keyword_sets.iter().map(|set| self.generate(set)).collect()
    }

    fn stats(&self, difficulty: Difficulty) -> Stats {
        let (read_time, base_rating, rating_count, views) = tables::base_stats(difficulty);
        let rating = ((base_rating + self.jitter.rating_offset()) * 10.0).round() / 10.0;
        let now = self.clock.now();
        Stats {
            read_time,
            rating: rating.clamp(0.0, MAX_RATING),
            rating_count,
            views,
            published_at: now,
            updated_at: now,
        }
    }
}

fn normalize_keywords(keywords: &[String]) -> Result<Vec<String>> {
    let cleaned: Vec<String> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    if cleaned.is_empty() {
        return Err(GenerateError::EmptyKeywords);
    }
    Ok(cleaned)
}

fn render_title(keywords: &[String], category: Category, difficulty: Difficulty) -> String {
    let primary = keywords.first().map(|k| title_case(k)).unwrap_or_default();
    tables::title_templates(category)[difficulty.index()].replace("{primary}", &primary)
}

fn render_description(topic: &str, category: Category, difficulty: Difficulty) -> String {
    tables::description_templates(category)[difficulty.index()].replace("{topic}", topic)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::generator::sources::{FixedClock, NoJitter};
    use crate::model::SectionType;
    use crate::quality::{assess_content_quality, review, validate_technical_content, Severity};

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn fixed() -> Generator {
        let at = Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap();
        Generator::new(FixedClock(at), NoJitter)
    }

    fn style_keywords() -> Vec<String> {
        kw(&[
            "style transfer",
            "artistic transformation",
            "creative editing",
            "visual styles",
        ])
    }

    struct MaxJitter;

    impl Jitter for MaxJitter {
        fn rating_offset(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn style_transfer_fixture() {
        let config = fixed().generate(&style_keywords()).unwrap();
        assert_eq!(config.category, Category::Creative);
        assert_eq!(config.category.label(), "创意制作");
        assert_eq!(config.difficulty, Difficulty::Beginner);
        assert_eq!(
            config.id,
            "style-transfer-artistic-transformation-creative-editing-visual-styles"
        );

        let keywords = &config.seo.keywords;
        for expected in ["nano banana", "ai image editing", "google gemini"] {
            assert!(keywords.iter().any(|k| k == expected), "missing {expected}");
        }
        for k in style_keywords() {
            assert!(keywords.contains(&k.to_lowercase()));
        }
        assert!(keywords.len() >= 7);

        assert_eq!(
            config.seo.tags,
            kw(&[
                "Style transfer",
                "Artistic transformation",
                "Creative editing",
                "Visual styles",
            ])
        );
    }

    #[test]
    fn required_sections_in_order() {
        let sets = [
            kw(&["style transfer"]),
            kw(&["nano banana api", "batch automation"]),
            kw(&["product photo", "workflow"]),
            kw(&["zzz"]),
        ];
        for set in &sets {
            let config = fixed().generate(set).unwrap();
            let kinds: Vec<SectionType> = config.content.sections.iter().map(|s| s.kind).collect();
            let pos = |k: SectionType| kinds.iter().position(|x| *x == k).unwrap();
            assert!(pos(SectionType::Introduction) < pos(SectionType::Guide));
            assert!(pos(SectionType::Guide) < pos(SectionType::Conclusion));
            assert_eq!(kinds.first(), Some(&SectionType::Introduction));
            assert_eq!(kinds.last(), Some(&SectionType::Conclusion));
        }
    }

    #[test]
    fn advanced_api_article_has_examples() {
        let config = fixed().generate(&kw(&["nano banana api", "batch automation"])).unwrap();
        assert_eq!(config.category, Category::Development);
        assert_eq!(config.difficulty, Difficulty::Advanced);
        assert!(config.has_section(SectionType::Examples));
        assert_eq!(config.section(SectionType::Tips).unwrap().tips.as_ref().unwrap().len(), 4);

        let r = review(&config);
        assert!(r.validation.is_valid);
        assert!(r.validation.score >= 90, "score {}", r.validation.score);
    }

    #[test]
    fn generated_article_validates_cleanly() {
        let config = fixed().generate(&style_keywords()).unwrap();
        let content = config.full_content();
        let r = validate_technical_content(&config.title, &content, &config.seo.keywords);
        assert!(r.is_valid);
        assert!(r.score >= 90, "score {}", r.score);
        assert!(config.section(SectionType::Guide).unwrap().content.contains("step"));
    }

    #[test]
    fn competitor_injection_invalidates() {
        let config = fixed().generate(&style_keywords()).unwrap();
        let content = config.full_content();
        let clean = validate_technical_content(&config.title, &content, &config.seo.keywords);

        let tainted =
            format!("{content}\n\n<p>Midjourney can do this too, but not conversationally.</p>");
        let dirty = validate_technical_content(&config.title, &tainted, &config.seo.keywords);
        assert!(clean.score - dirty.score >= 15);
        assert!(!dirty.is_valid);
    }

    #[test]
    fn accuracy_is_validator_score() {
        let config = fixed().generate(&kw(&["character", "consistency"])).unwrap();
        let content = config.full_content();
        let quality = assess_content_quality(&config, &content);
        let validation = validate_technical_content(&config.title, &content, &config.seo.keywords);
        assert_eq!(quality.accuracy, validation.score);

        let tainted = format!("{content}\n\nstable diffusion");
        assert_eq!(
            assess_content_quality(&config, &tainted).accuracy,
            validate_technical_content(&config.title, &tainted, &[]).score
        );
    }

    #[test]
    fn generated_article_scores_well() {
        let config = fixed().generate(&style_keywords()).unwrap();
        let q = review(&config).quality;
        assert_eq!(q.structure, 100);
        assert_eq!(q.seo, 100);
        assert_eq!(q.engagement, 100);
        assert!(q.overall >= 90, "{q:?}");
    }

    #[test]
    fn review_checks_coverage_of_seo_keywords() {
        let mut config = fixed().generate(&style_keywords()).unwrap();
        let content = config.full_content();
        assert_eq!(review(&config).validation, validate_article(&config, &content));

        config.seo.keywords.push("sky replacement".to_string());
        let r = review(&config);
        assert_eq!(r.validation, validate_article(&config, &content));
        assert!(r
            .validation
            .issues
            .iter()
            .any(|i| i.severity == Severity::Info && i.message.contains("sky replacement")));
    }

    #[test]
    fn stats_come_from_table_and_clock() {
        let config = fixed().generate(&kw(&["first edit"])).unwrap();
        assert_eq!(config.stats.read_time, 8);
        assert_eq!(config.stats.rating, 4.8);
        assert_eq!(config.stats.rating_count, 1_250);
        assert_eq!(config.stats.published_at, config.stats.updated_at);
        assert_eq!(config.stats.published_at.to_rfc3339(), "2025-09-01T08:00:00+00:00");
    }

    #[test]
    fn rating_is_capped() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let generator = Generator::new(FixedClock(at), MaxJitter);
        let config = generator.generate(&kw(&["api"])).unwrap();
        assert_eq!(config.stats.rating, MAX_RATING);
    }

    #[test]
    fn oversized_jitter_setting_still_generates() {
        let config = Generator::system(1e308).generate(&kw(&["portrait"])).unwrap();
        assert!((0.0..=MAX_RATING).contains(&config.stats.rating));
    }

    #[test]
    fn system_rating_stays_near_baseline() {
        let generator = Generator::default();
        for _ in 0..20 {
            let config = generator.generate(&kw(&["portrait"])).unwrap();
            assert!((4.7..=4.9).contains(&config.stats.rating), "{}", config.stats.rating);
        }
    }

    #[test]
    fn blank_keywords_are_rejected() {
        assert!(matches!(fixed().generate(&[]), Err(GenerateError::EmptyKeywords)));
        assert!(matches!(
            fixed().generate(&kw(&["  ", ""])),
            Err(GenerateError::EmptyKeywords)
        ));
        let config = fixed().generate(&kw(&["  style transfer ", " "])).unwrap();
        assert_eq!(config.seo.tags, kw(&["Style transfer"]));
    }

    #[test]
    fn batch_preserves_order() {
        let sets = vec![kw(&["product shot"]), kw(&["portrait"]), kw(&["gemini api advanced"])];
        let configs = fixed().generate_batch(&sets).unwrap();
        let categories: Vec<Category> = configs.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![Category::Product, Category::Character, Category::Development]
        );

        let with_blank = vec![kw(&["portrait"]), Vec::new()];
        assert!(fixed().generate_batch(&with_blank).is_err());
    }

    #[test]
    fn title_uses_first_keyword() {
        let config = fixed().generate(&style_keywords()).unwrap();
        assert_eq!(
            config.title,
            "Style Transfer: A Beginner's Guide to Creative Editing with Nano Banana"
        );
    }
}
