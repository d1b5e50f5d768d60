use crate::{
    config::{GeminiConfig, GenerationConfig, ModelEngine},
    error::{LumiereError, Result},
    models::{
        wire::{build_generation_payload, GenerateContentResponse},
        EngineInfo, SourceImage,
    },
};
use serde_json::Value;

/// Issues one `generateContent` call per batch slot and extracts the
/// returned image payload.
#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Sends a single slot request and returns the base64 image payload.
    ///
    /// No retry, no backoff, and no timeout beyond the transport's own;
    /// failures surface directly so the batch can apply its all-or-nothing
    /// policy.
    pub async fn generate_slot(
        &self,
        source: &SourceImage,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LumiereError::CredentialError("no Gemini API key configured".to_string())
            })?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url,
            config.engine.id()
        );
        let payload = build_generation_payload(source, prompt, config);

        log::debug!(
            "Dispatching slot request: engine={}, aspect={}",
            config.engine.id(),
            config.aspect_ratio.as_str()
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LumiereError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body);
            log::error!("Gemini API error: status={}, message={}", status, message);
            return Err(LumiereError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LumiereError::ResponseError(e.to_string()))?;

        parsed.first_inline_image().ok_or_else(|| {
            LumiereError::ResponseError(format!(
                "no image produced (engine: {})",
                config.engine.id()
            ))
        })
    }

    pub fn supported_engines() -> Vec<EngineInfo> {
        vec![
            EngineInfo {
                id: ModelEngine::Gemini3ProImagePreview.id().to_string(),
                name: "Gemini 3 Pro Image Preview".to_string(),
                provider: "Google".to_string(),
                supports_4k: true,
                extended_thinking: true,
                description: "Pro-tier image engine with 4K output and an extended thinking budget; requires a paid project".to_string(),
            },
            EngineInfo {
                id: ModelEngine::Gemini25FlashImage.id().to_string(),
                name: "Gemini 2.5 Flash Image".to_string(),
                provider: "Google".to_string(),
                supports_4k: false,
                extended_thinking: false,
                description: "Fast standard-resolution image engine".to_string(),
            },
        ]
    }
}

/// Pulls the human-readable message out of a Gemini error body, falling
/// back to the raw text when the body is not the usual error envelope.
fn api_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = value.pointer("/error/message").and_then(Value::as_str) {
            return message.to_string();
        }
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_message_is_extracted() {
        let body = r#"{"error":{"code":403,"message":"PERMISSION_DENIED: billing required","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            api_error_message(body),
            "PERMISSION_DENIED: billing required"
        );
    }

    #[test]
    fn test_non_json_body_passes_through() {
        assert_eq!(api_error_message("  upstream exploded  "), "upstream exploded");
        assert_eq!(api_error_message(""), "empty response body");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_network_call() {
        let client = ImageClient::new(GeminiConfig::new());
        let source = SourceImage::from_data_uri("data:image/png;base64,AAAA");
        let err = client
            .generate_slot(&source, "prompt", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LumiereError::CredentialError(_)));
    }

    #[test]
    fn test_engine_catalog_lists_both_engines() {
        let engines = ImageClient::supported_engines();
        assert_eq!(engines.len(), 2);
        assert!(engines[0].supports_4k && engines[0].extended_thinking);
        assert!(!engines[1].supports_4k && !engines[1].extended_thinking);
    }
}
