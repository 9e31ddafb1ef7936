pub mod api;
pub mod parsers;

pub use api::youtube::{DEFAULT_BASE_URL, YoutubeClient};
pub use parsers::parse_video_id;
