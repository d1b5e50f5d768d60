use serde::{Deserialize, Serialize};
use std::env;

/// Smallest and largest number of images a single batch may request.
pub const MIN_BATCH_QUANTITY: u8 = 1;
pub const MAX_BATCH_QUANTITY: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Unisex,
}

impl Gender {
    /// The noun interpolated into model archetype clauses.
    pub fn subject_term(&self) -> &'static str {
        match self {
            Gender::Female => "woman",
            Gender::Male => "man",
            Gender::Unisex => "model",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookbookStyle {
    Mannequin,
    Lifestyle,
    Cyclorama,
    Editorial,
    FlatLay,
}

impl LookbookStyle {
    pub fn label(&self) -> &'static str {
        match self {
            LookbookStyle::Mannequin => "mannequin",
            LookbookStyle::Lifestyle => "lifestyle",
            LookbookStyle::Cyclorama => "cyclorama",
            LookbookStyle::Editorial => "editorial",
            LookbookStyle::FlatLay => "flat-lay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    None,
    Mannequin,
    Asian,
    Western,
    African,
    Latino,
    MiddleEastern,
    SouthAsian,
    PlusSize,
    Mature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Studio,
    Indoor,
    Cyclorama,
    Minimalist,
    Concrete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    /// Ratio string as the Gemini API expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Wide => "16:9",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoseVariation {
    Static,
    SlightAngle,
    Editorial,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightingMood {
    SoftDaylight,
    StudioNeutral,
    DramaticShadow,
    WarmIndoor,
}

impl LightingMood {
    pub fn label(&self) -> &'static str {
        match self {
            LightingMood::SoftDaylight => "soft daylight",
            LightingMood::StudioNeutral => "neutral studio",
            LightingMood::DramaticShadow => "dramatic shadow",
            LightingMood::WarmIndoor => "warm indoor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraAngle {
    EyeLevel,
    LowAngle,
    HighAngle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FabricEmphasis {
    Normal,
    HighDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelEngine {
    #[serde(rename = "gemini-3-pro-image-preview")]
    Gemini3ProImagePreview,
    #[serde(rename = "gemini-2.5-flash-image")]
    Gemini25FlashImage,
}

impl ModelEngine {
    pub fn id(&self) -> &'static str {
        match self {
            ModelEngine::Gemini3ProImagePreview => "gemini-3-pro-image-preview",
            ModelEngine::Gemini25FlashImage => "gemini-2.5-flash-image",
        }
    }

    /// Pro-tier engines get an extended thinking budget attached to requests.
    pub fn is_pro(&self) -> bool {
        self.id().contains("pro")
    }

    /// Only the pro preview engine accepts the 4K image-size hint.
    pub fn supports_4k(&self) -> bool {
        matches!(self, ModelEngine::Gemini3ProImagePreview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotScale {
    Standard,
    FullBody,
    CloseUp,
}

/// The full set of presentation options for one lookbook batch.
///
/// Created with defaults, adjusted through the `with_*` setters or the
/// toggle/set methods, and read (never mutated) by the generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub gender: Gender,
    pub styles: Vec<LookbookStyle>,
    pub model_type: ModelType,
    pub background_type: BackgroundType,
    pub aspect_ratio: AspectRatio,
    pub quantity: u8,
    pub pose: PoseVariation,
    pub lighting: LightingMood,
    pub angle: CameraAngle,
    pub fabric_detail: FabricEmphasis,
    pub engine: ModelEngine,
    pub shot_scale: ShotScale,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            gender: Gender::Female,
            styles: vec![LookbookStyle::Cyclorama],
            model_type: ModelType::Western,
            background_type: BackgroundType::Studio,
            aspect_ratio: AspectRatio::Portrait,
            quantity: 2,
            pose: PoseVariation::Static,
            lighting: LightingMood::StudioNeutral,
            angle: CameraAngle::EyeLevel,
            fabric_detail: FabricEmphasis::HighDetail,
            engine: ModelEngine::Gemini3ProImagePreview,
            shot_scale: ShotScale::FullBody,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_model_type(mut self, model_type: ModelType) -> Self {
        self.model_type = model_type;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Clamps to the 1..=8 batch range.
    pub fn with_quantity(mut self, quantity: u8) -> Self {
        self.quantity = quantity.clamp(MIN_BATCH_QUANTITY, MAX_BATCH_QUANTITY);
        self
    }

    pub fn with_lighting(mut self, lighting: LightingMood) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn with_fabric_detail(mut self, fabric_detail: FabricEmphasis) -> Self {
        self.fabric_detail = fabric_detail;
        self
    }

    pub fn with_engine(mut self, engine: ModelEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_shot_scale(mut self, shot_scale: ShotScale) -> Self {
        self.shot_scale = shot_scale;
        self
    }

    pub fn with_styles(mut self, styles: Vec<LookbookStyle>) -> Self {
        if !styles.is_empty() {
            self.styles = styles;
        }
        self
    }

    /// Adds the style if absent, removes it if present. Removing the last
    /// remaining style is a no-op: a configuration always carries at least
    /// one style tag.
    pub fn toggle_style(&mut self, style: LookbookStyle) {
        if let Some(pos) = self.styles.iter().position(|s| *s == style) {
            if self.styles.len() > 1 {
                self.styles.remove(pos);
            }
        } else {
            self.styles.push(style);
        }
    }

    /// Style labels joined for prompt interpolation.
    pub fn joined_styles(&self) -> String {
        self.styles
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();

        GeminiConfig {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
