mod error;
mod http;
mod result;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{TubelateError, TubelateResult};
pub use http::{
    DEFAULT_TIMEOUT, HttpSettings, USER_AGENT, build_http_client, connection_error, endpoint,
    read_success_body,
};
pub use result::{Language, Translation, VideoMetadata};

pub fn validate_url(url: &str) -> TubelateResult<()> {
    let parsed = url::Url::parse(url)
        .map_err(|err| TubelateError::InvalidInput(format!("invalid url: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(TubelateError::InvalidInput(format!(
            "invalid url: unsupported scheme {scheme}"
        ))),
    }
}
