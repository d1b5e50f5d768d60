use base64::Engine;
use lumiere::{
    classify_failure, EnvCredentialProvider, FailureClass, GeminiClient, GenerationConfig,
    ImageClient, LookbookStyle, ModelEngine,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("No .env file found, using system environment variables"),
    }

    lumiere::logger::init_with_config(
        lumiere::logger::LoggerConfig::development()
            .with_level(lumiere::logger::LogLevel::Debug),
    )?;

    log::info!("Checking Gemini environment...");
    match env::var("GEMINI_API_KEY") {
        Ok(key) => {
            log::info!("GEMINI_API_KEY found in environment");
            log::debug!("Key starts with: {}...", &key[..5.min(key.len())]);
        }
        Err(_) => {
            log::error!("GEMINI_API_KEY is not set; generation will fail the precondition");
        }
    }

    log::info!("Available image engines:");
    for engine in ImageClient::supported_engines() {
        log::info!(
            "  {} - {} ({}){}",
            engine.id,
            engine.name,
            engine.provider,
            if engine.supports_4k { " [4K]" } else { "" }
        );
    }

    let source_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "product.png".to_string());
    log::info!("Reading source photo: {}", source_path);
    let bytes = fs::read(&source_path)?;
    let source_uri = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    );

    let client = GeminiClient::from_provider(&EnvCredentialProvider::new()).await?;

    let mut config = GenerationConfig::new()
        .with_quantity(2)
        .with_engine(ModelEngine::Gemini25FlashImage);
    config.toggle_style(LookbookStyle::Editorial);

    let batch_timer = lumiere::logger::timer("lookbook_batch");
    match client.generate_batch(&source_uri, &config).await {
        Ok(assets) => {
            batch_timer.stop();
            for (idx, asset) in assets.iter().enumerate() {
                let filename = format!("lookbook_{}_{}.png", idx, asset.id);
                let payload = asset
                    .url
                    .strip_prefix("data:image/png;base64,")
                    .unwrap_or(&asset.url);
                let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
                fs::write(&filename, bytes)?;
                log::info!("Saved {} ({} generated at {})", filename, asset.id, asset.timestamp);
            }
        }
        Err(e) => match classify_failure(&e) {
            FailureClass::AccessDenied => {
                log::error!("Access error: {}", e);
                log::error!("The selected API key lacks permission for this engine; re-authenticate with a key from a paid project.");
            }
            FailureClass::Other => {
                log::error!("Generation failed: {}", e);
            }
        },
    }

    Ok(())
}
