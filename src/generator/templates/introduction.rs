use super::{escape_html, shell, TemplateInput};
use crate::model::{Category, Difficulty, Example, Section, SectionType, Tip, TipKind};

pub fn build(input: TemplateInput<'_>) -> Section {
    let topic = escape_html(input.topic);
    let level = match input.difficulty {
        Difficulty::Beginner => "beginner-friendly",
        Difficulty::Intermediate => "intermediate",
        Difficulty::Advanced => "advanced",
    };

    let focus = focus_line(input.category);

    let content = format!(
        "<p>Welcome to this {level} tutorial on {topic}. Nano Banana is the AI image editing model \
         built into Google Gemini, and it lets you change a photo by describing the result in \
         plain language instead of working with layers, masks and brushes. {focus}</p>\n\n\
         <p>This guide walks through how {topic} works in practice: how to phrase an instruction \
         so the model understands it, how to keep the parts of an image you care about, and how \
         to recover when a result drifts away from what you asked for. Everything shown here can \
         be tried for free in Google AI Studio or in the Gemini app.</p>\n\n\
         <p>By the end you will have a repeatable routine for {topic} that you can reuse on your \
         own images and projects.</p>"
    );

    let mut section = shell(
        SectionType::Introduction,
        format!("Getting to know {}", input.topic),
        content,
    );
    section.examples = Some(vec![Example {
        title: "Before and after".to_string(),
        description: "A street photo turned into a watercolor painting with one sentence: \
                      \"repaint this scene as a soft watercolor, keep the people in place\"."
            .to_string(),
        image: Some("/images/examples/before-after-watercolor.jpg".to_string()),
        code: None,
    }]);
    section.tips = Some(vec![Tip {
        title: "Pro tip".to_string(),
        content: "Say what must stay the same as well as what should change. The model edits \
                  far more precisely when it knows which details to protect."
            .to_string(),
        kind: TipKind::Success,
    }]);
    section
}

fn focus_line(category: Category) -> &'static str {
    match category {
        Category::Character => {
            "Keeping a person recognizable from one edit to the next is the main theme here."
        }
        Category::Product => "The focus is on product shots that stay faithful to the real item.",
        Category::Development => {
            "The focus is on calling the model from code rather than from the chat window."
        }
        Category::Creative => {
            "The focus is on creative transformations that change mood and style but keep the layout."
        }
        Category::Technique => {
            "The focus is on editing techniques you can reuse across many kinds of images."
        }
        Category::General => "The focus is on the core ideas that every later tutorial builds on.",
    }
}
