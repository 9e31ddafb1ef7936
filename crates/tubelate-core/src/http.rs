use std::time::Duration;

use reqwest::{Client, Response};

use crate::{TubelateError, TubelateResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("tubelate/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl HttpSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            connect_timeout: timeout,
            timeout,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

pub fn build_http_client(settings: &HttpSettings) -> TubelateResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.timeout)
        .build()
        .map_err(|err| TubelateError::Config(format!("failed to build http client: {err}")))
}

/// Drains the response body, failing with `HttpStatus` on a non-success
/// status before the caller attempts to decode anything.
pub async fn read_success_body(response: Response, api: &str) -> TubelateResult<String> {
    let status = response.status();
    if !status.is_success() {
        log::warn!("{api} returned status {status}");
        let body = response.text().await.unwrap_or_default();
        return Err(TubelateError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    response
        .text()
        .await
        .map_err(|err| connection_error(&format!("{api} response read failed"), err))
}

/// Wraps a transport failure. The request URL is stripped because query
/// strings can carry API keys.
pub fn connection_error(context: &str, err: reqwest::Error) -> TubelateError {
    TubelateError::Connection(format!("{context}: {}", err.without_url()))
}

/// Joins an endpoint path onto a base URL that may or may not end in `/`.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_handles_trailing_slash() {
        assert_eq!(
            endpoint("https://api-free.deepl.com/v2/", "languages"),
            "https://api-free.deepl.com/v2/languages"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080", "videos"),
            "http://127.0.0.1:8080/videos"
        );
    }

    #[test]
    fn default_settings_use_ten_second_timeouts() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert!(build_http_client(&settings).is_ok());
    }
}
