use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse subject label a keyword set is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "角色设计")]
    Character,
    #[serde(rename = "产品摄影")]
    Product,
    #[serde(rename = "API开发")]
    Development,
    #[serde(rename = "创意制作")]
    Creative,
    #[serde(rename = "技巧教程")]
    Technique,
    #[serde(rename = "综合教程")]
    General,
}

impl Category {
    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Character => "角色设计",
            Category::Product => "产品摄影",
            Category::Development => "API开发",
            Category::Creative => "创意制作",
            Category::Technique => "技巧教程",
            Category::General => "综合教程",
        }
    }

    /// Short ASCII name used in prose and file names.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::Product => "product",
            Category::Development => "development",
            Category::Creative => "creative",
            Category::Technique => "technique",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Bucket index into the per-difficulty template tables.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Beginner => 0,
            Difficulty::Intermediate => 1,
            Difficulty::Advanced => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Introduction,
    Guide,
    Examples,
    Tips,
    Mistakes,
    Conclusion,
}

impl SectionType {
    /// Assembly order. `Examples` is dropped when it comes back empty.
    pub const ORDER: [SectionType; 6] = [
        SectionType::Introduction,
        SectionType::Guide,
        SectionType::Examples,
        SectionType::Tips,
        SectionType::Mistakes,
        SectionType::Conclusion,
    ];

    /// Section types every article must carry.
    pub const REQUIRED: [SectionType; 3] = [
        SectionType::Introduction,
        SectionType::Guide,
        SectionType::Conclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Introduction => "introduction",
            SectionType::Guide => "guide",
            SectionType::Examples => "examples",
            SectionType::Tips => "tips",
            SectionType::Mistakes => "mistakes",
            SectionType::Conclusion => "conclusion",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleConfig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub author: Author,
    pub content: ArticleContent,
    pub seo: Seo,
    pub stats: Stats,
}

impl ArticleConfig {
    /// All section bodies joined by blank lines, the text the validators read.
    pub fn full_content(&self) -> String {
        self.content
            .sections
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn has_section(&self, kind: SectionType) -> bool {
        self.content.sections.iter().any(|s| s.kind == kind)
    }

    pub fn section(&self, kind: SectionType) -> Option<&Section> {
        self.content.sections.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub bio: String,
    pub followers: u32,
    pub expertise: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContent {
    pub hero_image: String,
    pub badge: Badge,
    pub sections: Vec<Section>,
    pub sidebar: Vec<RelatedTutorial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTutorial {
    pub title: String,
    pub href: String,
    pub read_time: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub title: String,
    pub background: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<Tip>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mistakes: Option<Vec<Mistake>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
}

impl Section {
    /// True when the section carries steps, examples or tips.
    pub fn is_interactive(&self) -> bool {
        let non_empty = |len: Option<usize>| len.is_some_and(|n| n > 0);
        non_empty(self.steps.as_ref().map(Vec::len))
            || non_empty(self.examples.as_ref().map(Vec::len))
            || non_empty(self.tips.as_ref().map(Vec::len))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Info,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: TipKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub title: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seo {
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub read_time: u32,
    pub rating: f64,
    pub rating_count: u32,
    pub views: u32,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Creative).unwrap();
        assert_eq!(json, "\"创意制作\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Creative);
    }

    #[test]
    fn section_type_field_is_named_type() {
        let section = Section {
            id: "intro".into(),
            kind: SectionType::Introduction,
            title: "Intro".into(),
            background: "white".into(),
            icon: "BookOpen".into(),
            gradient: None,
            content: "<p>hi</p>".into(),
            steps: None,
            examples: None,
            tips: None,
            mistakes: None,
            cta: None,
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "introduction");
        assert!(value.get("steps").is_none());
        assert!(!section.is_interactive());
    }

    #[test]
    fn any_non_empty_list_is_interactive() {
        let section = Section {
            id: "tips".into(),
            kind: SectionType::Tips,
            title: "Tips".into(),
            background: "gray".into(),
            icon: "Lightbulb".into(),
            gradient: None,
            content: String::new(),
            steps: Some(Vec::new()),
            examples: None,
            tips: Some(vec![Tip {
                title: "t".into(),
                content: "c".into(),
                kind: TipKind::Info,
            }]),
            mistakes: None,
            cta: None,
        };
        assert!(section.is_interactive());
    }
}
