use super::{escape_html, shell, TemplateInput};
use crate::model::{Difficulty, Example, Section, SectionType};

const PYTHON_SAMPLE: &str = r#"from google import genai
from PIL import Image
client = genai.Client(api_key="YOUR_API_KEY")
source = Image.open("product.png")
response = client.models.generate_content(
    model="gemini-2.5-flash-image-preview",
    contents=["Replace the background with a clean white studio backdrop", source],
)
for part in response.candidates[0].content.parts:
    if part.inline_data:
        open("product-edited.png", "wb").write(part.inline_data.data)"#;

const CURL_SAMPLE: &str = r#"curl -s -X POST \
  "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image-preview:generateContent" \
  -H "x-goog-api-key: $GEMINI_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{"contents":[{"parts":[{"text":"Add soft morning light to this room"},{"inline_data":{"mime_type":"image/jpeg","data":"'"$IMG_BASE64"'"}}]}]}'"#;

/// Code samples for the topic. Empty unless the article is advanced and about the API.
pub fn samples_for(topic: &str, difficulty: Difficulty) -> Vec<Example> {
    if difficulty != Difficulty::Advanced || !topic.to_lowercase().contains("api") {
        return Vec::new();
    }
    vec![
        Example {
            title: "Edit an image with the Python SDK".to_string(),
            description: "Send a source image and an instruction in one request, then save the \
                          returned image bytes."
                .to_string(),
            image: None,
            code: Some(PYTHON_SAMPLE.to_string()),
        },
        Example {
            title: "Call the REST endpoint with curl".to_string(),
            description: "The same edit without any SDK, handy for shell scripts and quick tests."
                .to_string(),
            image: None,
            code: Some(CURL_SAMPLE.to_string()),
        },
    ]
}

pub fn build(input: TemplateInput<'_>) -> Option<Section> {
    let samples = samples_for(input.topic, input.difficulty);
    if samples.is_empty() {
        return None;
    }

    let mut blocks = vec![format!(
        "<p>The samples below call Nano Banana through the Gemini API. Swap in your own key and \
         image path to reproduce the {} workflow locally.</p>",
        escape_html(input.topic)
    )];
    for sample in &samples {
        blocks.push(format!(
            "<h3>{}</h3>\n<p>{}</p>\n<pre><code>{}</code></pre>",
            escape_html(&sample.title),
            escape_html(&sample.description),
            escape_html(sample.code.as_deref().unwrap_or_default()),
        ));
    }

    let mut section = shell(
        SectionType::Examples,
        "Code examples".to_string(),
        blocks.join("\n\n"),
    );
    section.examples = Some(samples);
    Some(section)
}
