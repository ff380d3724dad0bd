pub mod conclusion;
pub mod examples;
pub mod guide;
pub mod introduction;
pub mod mistakes;
pub mod tips;

use crate::model::{Category, Difficulty, Section, SectionType};

/// Inputs shared by every section template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateInput<'a> {
    pub topic: &'a str,
    pub difficulty: Difficulty,
    pub category: Category,
}

/// Run the template for every section type in assembly order.
/// Templates that produce nothing (currently only `examples`) are skipped.
pub fn build_sections(input: TemplateInput<'_>) -> Vec<Section> {
    SectionType::ORDER
        .iter()
        .filter_map(|kind| build(*kind, input))
        .collect()
}

pub fn build(kind: SectionType, input: TemplateInput<'_>) -> Option<Section> {
    match kind {
        SectionType::Introduction => Some(introduction::build(input)),
        SectionType::Guide => Some(guide::build(input)),
        SectionType::Examples => examples::build(input),
        SectionType::Tips => Some(tips::build(input)),
        SectionType::Mistakes => Some(mistakes::build(input)),
        SectionType::Conclusion => Some(conclusion::build(input)),
    }
}

/// Empty section shell with the per-type presentation tags filled in.
fn shell(kind: SectionType, title: String, content: String) -> Section {
    let (background, icon, gradient) = match kind {
        SectionType::Introduction => ("white", "BookOpen", Some("from-blue-50 to-indigo-50")),
        SectionType::Guide => ("gray", "ListOrdered", None),
        SectionType::Examples => ("white", "Code", None),
        SectionType::Tips => ("gray", "Lightbulb", None),
        SectionType::Mistakes => ("white", "AlertTriangle", None),
        SectionType::Conclusion => ("gray", "Flag", Some("from-purple-50 to-pink-50")),
    };
    Section {
        id: kind.as_str().to_string(),
        kind,
        title,
        background: background.to_string(),
        icon: icon.to_string(),
        gradient: gradient.map(str::to_string),
        content,
        steps: None,
        examples: None,
        tips: None,
        mistakes: None,
        cta: None,
    }
}

fn render_list(tag: &str, items: &[String]) -> String {
    let body: Vec<String> = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<{tag}>\n{}\n</{tag}>", body.join("\n"))
}

fn heading_block(title: &str, body: &str) -> String {
    format!(
        "<h3>{}</h3>\n<p>{}</p>",
        escape_html(title),
        escape_html(body)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn input(topic: &str, difficulty: Difficulty) -> TemplateInput<'_> {
        TemplateInput {
            topic,
            difficulty,
            category: Category::General,
        }
    }

    fn kinds(sections: &[Section]) -> Vec<SectionType> {
        sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn examples_skipped_without_api_topic() {
        let sections = build_sections(input("portrait retouch", Difficulty::Advanced));
        assert_eq!(
            kinds(&sections),
            vec![
                SectionType::Introduction,
                SectionType::Guide,
                SectionType::Tips,
                SectionType::Mistakes,
                SectionType::Conclusion,
            ]
        );
    }

    #[test]
    fn examples_included_for_advanced_api_topic() {
        let sections = build_sections(input("gemini API batch", Difficulty::Advanced));
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[2].kind, SectionType::Examples);
    }

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn render_list_wraps_items() {
        let html = render_list("ol", &to_strings(&["one", "two"]));
        assert_eq!(html, "<ol>\n<li>one</li>\n<li>two</li>\n</ol>");
    }
}
