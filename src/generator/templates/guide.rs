use super::{escape_html, render_list, shell, to_strings, TemplateInput};
use crate::model::{Difficulty, Section, SectionType};

const BEGINNER_STEPS: &[&str] = &[
    "Open Google AI Studio or the Gemini app and sign in with your Google account.",
    "Upload the photo you want to change, ideally a well-lit image at least 1024 pixels wide.",
    "Write one short instruction that describes the change, for example \"turn the sky into a warm sunset\".",
    "Review the result and refine the instruction by adding a single detail at a time.",
    "Download the final image once it matches what you pictured.",
];

const INTERMEDIATE_STEPS: &[&str] = &[
    "Collect reference images that show the subject, look or product you want to keep consistent.",
    "Write a structured prompt that names the subject, the change and the details to preserve.",
    "Generate several variations and compare them side by side before choosing a direction.",
    "Feed the strongest result back in and iterate on lighting, color and composition.",
    "Save the prompts that worked as reusable templates for the next project.",
];

const ADVANCED_STEPS: &[&str] = &[
    "Create a key in Google AI Studio and install the official Gemini SDK for your language.",
    "Wrap each edit in a function that takes the source image and a prompt template.",
    "Combine several input images in one request to control identity, style and background together.",
    "Validate every output automatically for size, format and obvious artifacts before saving it.",
    "Run the pipeline over a whole folder and log the prompt used for each generated file.",
];

/// Canned step list for a difficulty bucket.
pub fn steps_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Beginner => BEGINNER_STEPS,
        Difficulty::Intermediate => INTERMEDIATE_STEPS,
        Difficulty::Advanced => ADVANCED_STEPS,
    }
}

pub fn build(input: TemplateInput<'_>) -> Section {
    let steps = to_strings(steps_for(input.difficulty));
    let content = format!(
        "<p>Follow these {} steps to put {} into practice. Each step builds on the previous one, \
         so work through them in order the first time.</p>\n\n{}",
        steps.len(),
        escape_html(input.topic),
        render_list("ol", &steps),
    );

    let mut section = shell(
        SectionType::Guide,
        "Step-by-step guide".to_string(),
        content,
    );
    section.steps = Some(steps);
    section
}
