//! Fixed lookup tables the assembler draws from. Nothing here is mutated at runtime.

use crate::model::{Author, Badge, Category, Difficulty, RelatedTutorial};

/// Title templates per category, one per difficulty bucket.
/// `{primary}` is the first keyword in title case.
pub fn title_templates(category: Category) -> [&'static str; 3] {
    match category {
        Category::Character => [
            "{primary} for Beginners: Consistent Characters with Nano Banana",
            "Mastering {primary}: Character Workflows in Nano Banana",
            "Advanced {primary}: Production Character Pipelines with Nano Banana",
        ],
        Category::Product => [
            "{primary} Made Simple: Product Photos with Nano Banana",
            "{primary} in Practice: Better Product Shots with Nano Banana",
            "Advanced {primary}: Scaling Product Imagery with Nano Banana",
        ],
        Category::Development => [
            "Getting Started with {primary} and the Gemini API",
            "{primary} in Practice: Building on the Nano Banana API",
            "Advanced {primary}: Automating Image Edits with the Gemini API",
        ],
        Category::Creative => [
            "{primary}: A Beginner's Guide to Creative Editing with Nano Banana",
            "{primary} Techniques: Creative Workflows in Nano Banana",
            "Advanced {primary}: Pushing Creative Limits with Nano Banana",
        ],
        Category::Technique => [
            "{primary} Basics: Essential Nano Banana Editing Techniques",
            "Sharpen Your {primary}: Intermediate Nano Banana Techniques",
            "Expert {primary}: Advanced Nano Banana Editing Techniques",
        ],
        Category::General => [
            "{primary}: A Nano Banana Tutorial for Beginners",
            "{primary}: Level Up Your Nano Banana Skills",
            "{primary}: An Advanced Nano Banana Tutorial",
        ],
    }
}

/// Description sentences per category, one per difficulty bucket.
/// `{topic}` is the space-joined keyword list.
pub fn description_templates(category: Category) -> [&'static str; 3] {
    match category {
        Category::Character => [
            "Learn {topic} with Nano Banana: keep faces and outfits consistent across every edit.",
            "Build reliable {topic} workflows in Nano Banana for characters that stay on model.",
            "Design production-grade {topic} pipelines with Nano Banana and Google Gemini.",
        ],
        Category::Product => [
            "Create clean product photos with {topic} in Nano Banana, no studio required.",
            "Improve product imagery with {topic} techniques in Nano Banana and Gemini.",
            "Scale {topic} across whole catalogs with Nano Banana and the Gemini API.",
        ],
        Category::Development => [
            "Make your first {topic} request to Nano Banana through Google Gemini.",
            "Integrate {topic} into your apps with the Nano Banana image editing API.",
            "Automate {topic} at scale with Nano Banana, the Gemini API and batch jobs.",
        ],
        Category::Creative => [
            "Explore {topic} with Nano Banana and turn ordinary photos into creative artwork.",
            "Develop creative {topic} workflows with Nano Banana in Google Gemini.",
            "Push {topic} further with advanced creative control in Nano Banana.",
        ],
        Category::Technique => [
            "Master the basics of {topic} with simple Nano Banana editing techniques.",
            "Refine your {topic} skills with proven Nano Banana editing techniques.",
            "Go deep on {topic} with expert-level Nano Banana editing techniques.",
        ],
        Category::General => [
            "A friendly introduction to {topic} using Nano Banana in Google Gemini.",
            "Take your {topic} skills further with Nano Banana in Google Gemini.",
            "An in-depth, advanced look at {topic} with Nano Banana and Google Gemini.",
        ],
    }
}

pub fn author_for(difficulty: Difficulty) -> Author {
    let (name, bio, followers, expertise): (&str, &str, u32, [&str; 3]) = match difficulty {
        Difficulty::Beginner => (
            "Mia Zhang",
            "Photographer and educator who has helped thousands of newcomers make their first AI edits.",
            12_500,
            ["Beginner tutorials", "Photo retouching", "Prompt writing"],
        ),
        Difficulty::Intermediate => (
            "Leo Wang",
            "Visual designer focused on repeatable creative workflows and brand-consistent imagery.",
            8_600,
            ["Creative workflows", "Character consistency", "Brand imagery"],
        ),
        Difficulty::Advanced => (
            "Ethan Liu",
            "Machine learning engineer building large-scale image pipelines on Google Gemini.",
            5_400,
            ["Gemini API", "Automation", "Image pipelines"],
        ),
    };
    Author {
        name: name.to_string(),
        bio: bio.to_string(),
        followers,
        expertise: expertise.iter().map(|s| s.to_string()).collect(),
    }
}

/// Baseline stats before the rating offset: (read minutes, rating, rating count, views).
pub fn base_stats(difficulty: Difficulty) -> (u32, f64, u32, u32) {
    match difficulty {
        Difficulty::Beginner => (8, 4.8, 1_250, 15_800),
        Difficulty::Intermediate => (12, 4.7, 860, 9_400),
        Difficulty::Advanced => (18, 4.9, 420, 5_200),
    }
}

pub fn badge_for(difficulty: Difficulty, category: Category) -> Badge {
    let text = match difficulty {
        Difficulty::Beginner => "Beginner Friendly",
        Difficulty::Intermediate => "Skill Builder",
        Difficulty::Advanced => "Expert Level",
    };
    let icon = match category {
        Category::Character => "User",
        Category::Product => "ShoppingBag",
        Category::Development => "Code",
        Category::Creative => "Palette",
        Category::Technique => "Wand2",
        Category::General => "Sparkles",
    };
    Badge {
        text: text.to_string(),
        icon: icon.to_string(),
    }
}

pub fn hero_image(category: Category) -> String {
    format!("/images/tutorials/{}-hero.jpg", category.slug())
}

const RELATED_TUTORIALS: &[(&str, &str, u32)] = &[
    ("Nano Banana Basics: Your First Edit", "/tutorials/nano-banana-basics", 6),
    ("Writing Prompts That Actually Work", "/tutorials/writing-prompts", 9),
    ("Keeping Characters Consistent", "/tutorials/character-consistency", 12),
    ("Product Photos Without a Studio", "/tutorials/product-photos", 10),
    ("Blending Multiple Images", "/tutorials/multi-image-fusion", 14),
    ("Automating Edits with the Gemini API", "/tutorials/gemini-api-automation", 18),
];

/// Sidebar entries, always the first three of the static table.
pub fn sidebar() -> Vec<RelatedTutorial> {
    RELATED_TUTORIALS
        .iter()
        .take(3)
        .map(|(title, href, read_time)| RelatedTutorial {
            title: title.to_string(),
            href: href.to_string(),
            read_time: *read_time,
        })
        .collect()
}
