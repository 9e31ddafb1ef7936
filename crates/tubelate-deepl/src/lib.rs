pub mod api;

pub use api::deepl::{DEFAULT_BASE_URL, DeeplClient};
