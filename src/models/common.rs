use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub supports_4k: bool,
    pub extended_thinking: bool,
    pub description: String,
}
