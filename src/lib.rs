//! Lumiere: AI fashion lookbook generation.
//!
//! Turns a single product photo plus a `GenerationConfig` into a batch of
//! 1-8 lookbook images via the Gemini image generation API. Each batch slot
//! gets its own perspective-cycled prompt; slots run concurrently and the
//! batch is all-or-nothing.
//!
//! ```no_run
//! use lumiere::{EnvCredentialProvider, GeminiClient, GenerationConfig};
//!
//! # async fn run(photo_data_uri: &str) -> lumiere::Result<()> {
//! let client = GeminiClient::from_provider(&EnvCredentialProvider::new()).await?;
//! let config = GenerationConfig::new().with_quantity(4);
//! let assets = client.generate_batch(photo_data_uri, &config).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod session;

pub use config::{
    AspectRatio, BackgroundType, CameraAngle, FabricEmphasis, GeminiConfig, Gender,
    GenerationConfig, LightingMood, LookbookStyle, ModelEngine, ModelType, PoseVariation,
    ShotScale,
};
pub use credentials::{CredentialProvider, EnvCredentialProvider, StaticCredentialProvider};
pub use error::{classify_failure, FailureClass, LumiereError, Result};
pub use gemini::{GeminiClient, ImageClient};
pub use models::{EngineInfo, GeneratedImage, GenerationStatus, SourceImage};
pub use session::SessionState;
