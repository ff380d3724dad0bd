use super::{escape_html, render_list, shell, to_strings, TemplateInput};
use crate::model::{CallToAction, Difficulty, Section, SectionType};

const PRACTICE_LINK: &str = "/prompts";

fn next_steps_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Beginner => &[
            "Repeat the guide on three of your own photos.",
            "Try the same instruction with different wording and compare the results.",
            "Move on to an intermediate tutorial about consistent characters.",
        ],
        Difficulty::Intermediate => &[
            "Build a small library of prompt templates for your recurring edits.",
            "Experiment with combining two or three reference images in one request.",
            "Explore the advanced tutorials on automating edits in code.",
        ],
        Difficulty::Advanced => &[
            "Add automatic quality checks and retries to your pipeline.",
            "Measure cost and latency per image and tune request sizes.",
            "Share your scripts with your team and document the prompt conventions.",
        ],
    }
}

pub fn build(input: TemplateInput<'_>) -> Section {
    let next_steps = to_strings(next_steps_for(input.difficulty));
    let content = format!(
        "<p>You now have a working approach to {}. The fastest way to improve from here is \
         deliberate practice on real images, paying attention to which instructions the model \
         follows well.</p>\n\n<p>Suggested next moves:</p>\n{}",
        escape_html(input.topic),
        render_list("ul", &next_steps),
    );

    let mut section = shell(SectionType::Conclusion, "Wrapping up".to_string(), content);
    section.cta = Some(CallToAction {
        title: "Ready to practice?".to_string(),
        description: "Browse the prompt library and try these techniques on your own images."
            .to_string(),
        button_text: "Explore prompts".to_string(),
        button_link: PRACTICE_LINK.to_string(),
    });
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn always_links_to_practice_page() {
        for difficulty in [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced] {
            let s = build(TemplateInput {
                topic: "t",
                difficulty,
                category: Category::General,
            });
            let cta = s.cta.expect("conclusion carries a call to action");
            assert_eq!(cta.button_link, "/prompts");
            assert_eq!(s.content.matches("<li>").count(), 3);
        }
    }
}
