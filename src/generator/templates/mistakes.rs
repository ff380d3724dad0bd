use super::{escape_html, shell, TemplateInput};
use crate::model::{Mistake, Section, SectionType};

pub fn canned_mistakes() -> Vec<Mistake> {
    vec![
        Mistake {
            title: "Vague instructions".to_string(),
            description: "Requests like \"make it look better\" leave the model guessing, so \
                          every generation goes in a different direction."
                .to_string(),
            solution: "Name the exact change: which subject, which attribute and what the result \
                       should look like."
                .to_string(),
        },
        Mistake {
            title: "Overloading a single request".to_string(),
            description: "Asking for a new background, new clothing and a new lighting setup at \
                          once usually breaks at least one of them."
                .to_string(),
            solution: "Split large edits into a sequence of smaller ones and check each result \
                       before moving on."
                .to_string(),
        },
    ]
}

pub fn build(_input: TemplateInput<'_>) -> Section {
    let mistakes = canned_mistakes();
    let mut blocks = vec![
        "<p>Most disappointing results come from a handful of habits that are easy to fix once \
         you know to look for them.</p>"
            .to_string(),
    ];
    blocks.extend(mistakes.iter().map(|m| {
        format!(
            "<h3>{}</h3>\n<p>{}</p>\n<p><strong>Fix:</strong> {}</p>",
            escape_html(&m.title),
            escape_html(&m.description),
            escape_html(&m.solution),
        )
    }));

    let mut section = shell(
        SectionType::Mistakes,
        "Common mistakes to avoid".to_string(),
        blocks.join("\n\n"),
    );
    section.mistakes = Some(mistakes);
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty};

    #[test]
    fn independent_of_input() {
        let a = build(TemplateInput {
            topic: "one",
            difficulty: Difficulty::Beginner,
            category: Category::General,
        });
        let b = build(TemplateInput {
            topic: "two",
            difficulty: Difficulty::Advanced,
            category: Category::Development,
        });
        assert_eq!(a.content, b.content);
        assert_eq!(a.mistakes, b.mistakes);
        assert_eq!(a.mistakes.map(|m| m.len()), Some(2));
    }
}
