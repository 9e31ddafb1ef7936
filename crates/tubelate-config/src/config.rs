use serde::{Deserialize, Serialize};

/// Contents of `config.json`. Every field is optional on disk; missing
/// strings load as empty and are left for the API clients to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TubelateConfig {
    pub deepl_api_key: String,
    pub youtube_api_key: String,
    pub youtube_video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepl_api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
