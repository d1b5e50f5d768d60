use base64::Engine;
use lumiere::{AspectRatio, GeminiClient, GeminiConfig, GenerationConfig, ModelEngine, ModelType};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("No .env file found"),
    }
    lumiere::logger::init()?;

    let api_key = env::var("GEMINI_API_KEY")?;
    let source_path = env::args().nth(1).expect("usage: lookbook <photo.png>");
    let bytes = fs::read(&source_path)?;
    let source_uri = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    );

    let client = GeminiClient::new(GeminiConfig::new().with_api_key(api_key))?;
    let config = GenerationConfig::new()
        .with_model_type(ModelType::Mannequin)
        .with_aspect_ratio(AspectRatio::Square)
        .with_engine(ModelEngine::Gemini25FlashImage)
        .with_quantity(4);

    let assets = client.generate_batch(&source_uri, &config).await?;
    for asset in &assets {
        println!("{} {} {}", asset.id, asset.timestamp, &asset.url[..40.min(asset.url.len())]);
    }

    Ok(())
}
