use super::{escape_html, heading_block, shell, TemplateInput};
use crate::model::{Difficulty, Section, SectionType, Tip, TipKind};

fn tip(title: &str, content: &str, kind: TipKind) -> Tip {
    Tip {
        title: title.to_string(),
        content: content.to_string(),
        kind,
    }
}

pub fn tips_for(difficulty: Difficulty) -> Vec<Tip> {
    let mut tips = vec![
        tip(
            "Be specific about what to keep",
            "List the details that must survive the edit, such as faces, logos or text. \
             Anything you leave unmentioned is fair game for the model to change.",
            TipKind::Info,
        ),
        tip(
            "Change one thing at a time",
            "Small, focused instructions are easier to judge and easier to undo. Chain several \
             short edits instead of packing everything into one request.",
            TipKind::Success,
        ),
        tip(
            "Start from a good source image",
            "Blurry, tiny or heavily compressed photos limit what any edit can achieve. Use the \
             sharpest original you have.",
            TipKind::Warning,
        ),
    ];
    if difficulty == Difficulty::Advanced {
        tips.push(tip(
            "Use batch processing for large jobs",
            "When the same edit applies to dozens of images, script it once and run it over the \
             whole set so every output shares identical settings.",
            TipKind::Info,
        ));
    }
    tips
}

pub fn build(input: TemplateInput<'_>) -> Section {
    let tips = tips_for(input.difficulty);
    let mut blocks = vec![format!(
        "<p>These habits make the biggest difference when working on {}, whatever your \
         experience level.</p>",
        escape_html(input.topic)
    )];
    blocks.extend(tips.iter().map(|t| heading_block(&t.title, &t.content)));

    let mut section = shell(
        SectionType::Tips,
        "Tips and best practices".to_string(),
        blocks.join("\n\n"),
    );
    section.tips = Some(tips);
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tips_below_advanced() {
        assert_eq!(tips_for(Difficulty::Beginner).len(), 3);
        assert_eq!(tips_for(Difficulty::Intermediate).len(), 3);
    }

    #[test]
    fn advanced_adds_batch_processing() {
        let tips = tips_for(Difficulty::Advanced);
        assert_eq!(tips.len(), 4);
        assert!(tips[3].title.to_lowercase().contains("batch processing"));
    }
}
