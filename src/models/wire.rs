//! Request payloads and response types for the Gemini `generateContent`
//! endpoint, as used for reference-guided image generation.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::config::GenerationConfig;
use crate::models::image::SourceImage;

/// Thinking budget attached to pro-tier engines only.
const PRO_THINKING_BUDGET: u32 = 4000;

/// Builds the JSON body for one slot request: the inline reference image,
/// the composed prompt, and the engine-dependent image options.
pub fn build_generation_payload(
    source: &SourceImage,
    prompt: &str,
    config: &GenerationConfig,
) -> Value {
    let parts = vec![
        json!({
            "inlineData": {
                "mimeType": source.mime_type,
                "data": source.data,
            }
        }),
        json!({ "text": prompt }),
    ];

    let mut image_config = Map::new();
    image_config.insert(
        "aspectRatio".to_string(),
        json!(config.aspect_ratio.as_str()),
    );
    if config.engine.supports_4k() {
        image_config.insert("imageSize".to_string(), json!("4K"));
    }

    let mut generation_config = Map::new();
    generation_config.insert(
        "responseModalities".to_string(),
        json!(["TEXT", "IMAGE"]),
    );
    generation_config.insert("imageConfig".to_string(), Value::Object(image_config));
    if config.engine.is_pro() {
        generation_config.insert(
            "thinkingConfig".to_string(),
            json!({ "thinkingBudget": PRO_THINKING_BUDGET }),
        );
    }

    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": Value::Object(generation_config),
    })
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// Base64 payload of the first part carrying inline image data, in
    /// declaration order across candidates.
    pub fn first_inline_image(self) -> Option<String> {
        for candidate in self.candidates.unwrap_or_default() {
            let parts = candidate.content.and_then(|c| c.parts).unwrap_or_default();
            for part in parts {
                if let Part::InlineData { inline_data } = part {
                    if inline_data.mime_type.starts_with("image/") {
                        return Some(inline_data.data);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelEngine;

    fn sample_source() -> SourceImage {
        SourceImage::from_data_uri("data:image/jpeg;base64,Zm9v")
    }

    #[test]
    fn test_pro_payload_carries_size_hint_and_thinking_budget() {
        let config = GenerationConfig::new().with_engine(ModelEngine::Gemini3ProImagePreview);
        let payload = build_generation_payload(&sample_source(), "prompt", &config);

        assert_eq!(
            payload.pointer("/generationConfig/imageConfig/imageSize"),
            Some(&json!("4K"))
        );
        assert_eq!(
            payload.pointer("/generationConfig/thinkingConfig/thinkingBudget"),
            Some(&json!(4000))
        );
    }

    #[test]
    fn test_flash_payload_carries_neither_capability_flag() {
        let config = GenerationConfig::new().with_engine(ModelEngine::Gemini25FlashImage);
        let payload = build_generation_payload(&sample_source(), "prompt", &config);

        assert!(payload
            .pointer("/generationConfig/imageConfig/imageSize")
            .is_none());
        assert!(payload.pointer("/generationConfig/thinkingConfig").is_none());
        assert_eq!(
            payload.pointer("/generationConfig/imageConfig/aspectRatio"),
            Some(&json!("3:4"))
        );
    }

    #[test]
    fn test_parts_order_image_then_prompt() {
        let config = GenerationConfig::default();
        let payload = build_generation_payload(&sample_source(), "the prompt", &config);

        let parts = payload
            .pointer("/contents/0/parts")
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].pointer("/inlineData/mimeType"), Some(&json!("image/jpeg")));
        assert_eq!(parts[0].pointer("/inlineData/data"), Some(&json!("Zm9v")));
        assert_eq!(parts[1], json!({ "text": "the prompt" }));
    }

    #[test]
    fn test_first_inline_image_skips_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "rendering notes" },
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "inlineData": { "mimeType": "image/png", "data": "REVG" } }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.first_inline_image(), Some("QUJD".to_string()));
    }

    #[test]
    fn test_no_image_part_yields_none() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "sorry, no image" }] }
            }]
        }))
        .unwrap();
        assert_eq!(response.first_inline_image(), None);

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_inline_image(), None);
    }
}
