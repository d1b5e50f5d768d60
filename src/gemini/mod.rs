pub mod image_client;

use crate::{
    config::{GeminiConfig, GenerationConfig},
    credentials::CredentialProvider,
    error::{LumiereError, Result},
    models::{GeneratedImage, SourceImage},
    prompt::compose_prompt,
};
use futures::future::try_join_all;

pub use image_client::ImageClient;

/// Client for the Gemini image generation API.
///
/// One `generate_batch` call fans out into `quantity` concurrent slot
/// requests and either returns every result in slot order or fails as a
/// whole. In-flight requests are not cancellable and there is no reentrancy
/// guard; callers that need an "in progress" gate keep their own (see
/// `SessionState`).
#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            return Err(LumiereError::CredentialError(
                "a Gemini API key is required".to_string(),
            ));
        }

        Ok(Self {
            image_client: ImageClient::new(config),
        })
    }

    /// Resolves the credential through the injected provider, then builds
    /// the client. Absence of a credential fails here, before any batch.
    pub async fn from_provider(provider: &dyn CredentialProvider) -> Result<Self> {
        let api_key = provider.request_credential().await?;
        Self::new(GeminiConfig::new().with_api_key(api_key))
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    /// Generates a lookbook batch from a single product photo.
    ///
    /// `source_data_uri` is the uploaded photo as a data URI. Each of the
    /// `quantity` slots gets its own perspective-cycled prompt; all slots
    /// run concurrently and the batch is all-or-nothing: any slot failure
    /// discards the whole batch. Results come back in slot order,
    /// regardless of network completion order.
    pub async fn generate_batch(
        &self,
        source_data_uri: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<GeneratedImage>> {
        let source = SourceImage::from_data_uri(source_data_uri);
        let quantity = config.quantity as usize;

        log::info!(
            "Generating lookbook batch: engine={}, quantity={}, styles=[{}]",
            config.engine.id(),
            quantity,
            config.joined_styles()
        );

        let slots = (0..quantity).map(|slot_index| {
            let prompt = compose_prompt(config, slot_index);
            let source = &source;
            async move {
                let image_base64 = self
                    .image_client
                    .generate_slot(source, &prompt, config)
                    .await?;
                log::debug!("Slot {} completed", slot_index);
                Ok::<GeneratedImage, LumiereError>(GeneratedImage::completed(
                    &image_base64,
                    config,
                ))
            }
        });

        let results = try_join_all(slots).await?;
        log::info!("Batch completed: {} assets", results.len());
        Ok(results)
    }
}
