use reqwest::Client;
use serde::Deserialize;
use tubelate_core::{
    TubelateError, TubelateResult, VideoMetadata, connection_error, endpoint, read_success_body,
    validate_url,
};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone)]
pub struct YoutubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> TubelateResult<Self> {
        let base_url = base_url.into();
        validate_url(&base_url)?;
        self.base_url = base_url;
        Ok(self)
    }

    pub async fn fetch_video(&self, video_id: &str) -> TubelateResult<VideoMetadata> {
        let url = endpoint(&self.base_url, "videos");
        log::debug!("GET {url} id={video_id}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("id", video_id),
                ("key", self.api_key.as_str()),
                ("part", "snippet"),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| connection_error("youtube request failed", err))?;

        let body = read_success_body(response, "youtube").await?;
        let payload: VideoListResponse = serde_json::from_str(&body).map_err(|err| {
            TubelateError::Parse(format!("youtube response parse failed: {err}"))
        })?;

        let item = payload
            .items
            .into_iter()
            .next()
            .ok_or_else(|| TubelateError::NotFound {
                video_id: video_id.to_string(),
            })?;

        Ok(VideoMetadata {
            id: video_id.to_string(),
            title: item.snippet.title,
            description: item.snippet.description,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Snippet {
    title: String,
    description: String,
    channel_title: Option<String>,
    published_at: Option<String>,
}
