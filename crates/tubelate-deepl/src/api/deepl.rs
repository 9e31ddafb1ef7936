use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tubelate_core::{
    Language, Translation, TubelateError, TubelateResult, connection_error, endpoint,
    read_success_body, validate_url,
};

pub const DEFAULT_BASE_URL: &str = "https://api-free.deepl.com/v2";

#[derive(Debug, Clone)]
pub struct DeeplClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DeeplClient {
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

    /// Lists every language the account supports, in the order DeepL
    /// returns them.
    pub async fn languages(&self) -> TubelateResult<Vec<Language>> {
        let url = endpoint(&self.base_url, "languages");
        log::debug!("GET {url}");

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|err| connection_error("deepl request failed", err))?;

        let body = read_success_body(response, "deepl").await?;
        serde_json::from_str(&body)
            .map_err(|err| TubelateError::Parse(format!("deepl languages parse failed: {err}")))
    }

    pub async fn translate(&self, text: &str, target_lang: &str) -> TubelateResult<Translation> {
        self.translate_from(text, None, target_lang).await
    }

    pub async fn translate_from(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> TubelateResult<Translation> {
        let url = endpoint(&self.base_url, "translate");
        log::debug!("POST {url} target_lang={target_lang}");

        let request = TranslateRequest {
            text: [text],
            source_lang,
            target_lang,
        };
        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await
            .map_err(|err| connection_error("deepl request failed", err))?;

        let body = read_success_body(response, "deepl").await?;
        let payload: TranslateResponse = serde_json::from_str(&body)
            .map_err(|err| TubelateError::Parse(format!("deepl translate parse failed: {err}")))?;

        payload
            .translations
            .into_iter()
            .next()
            .ok_or(TubelateError::NoTranslation)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .header("Accept", "application/json")
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tubelate_core::testing::{MockResponse, MockServer, unreachable_url};
    use tubelate_core::{HttpSettings, build_http_client};

    use super::*;

    fn client_for(base_url: &str) -> DeeplClient {
        let http = build_http_client(&HttpSettings::default()).unwrap();
        DeeplClient::new(http, "secret:fx")
            .with_base_url(base_url)
            .unwrap()
    }

    #[tokio::test]
    async fn languages_preserve_order() {
        let body = r#"[{"language":"EN","name":"English"},{"language":"DE","name":"German"}]"#;
        let server = MockServer::start(vec![MockResponse::ok(body)]).unwrap();

        let languages = client_for(server.url()).languages().await.unwrap();
        assert_eq!(
            languages,
            vec![
                Language {
                    code: "EN".to_string(),
                    name: "English".to_string()
                },
                Language {
                    code: "DE".to_string(),
                    name: "German".to_string()
                },
            ]
        );

        let requests = server.finish();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path(), "/languages");
        assert_eq!(
            requests[0].header("authorization"),
            Some("DeepL-Auth-Key secret:fx")
        );
    }

    #[tokio::test]
    async fn languages_ignore_extra_fields() {
        let body = r#"[{"language":"PT-BR","name":"Portuguese (Brazilian)","supports_formality":true}]"#;
        let server = MockServer::start(vec![MockResponse::ok(body)]).unwrap();

        let languages = client_for(server.url()).languages().await.unwrap();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code, "PT-BR");
        server.finish();
    }

    #[tokio::test]
    async fn languages_check_status_before_decoding() {
        for status in [401u16, 403, 500] {
            let server = MockServer::start(vec![MockResponse::new(
                status,
                r#"{"message":"Wrong endpoint"}"#,
            )])
            .unwrap();

            match client_for(server.url()).languages().await {
                Err(TubelateError::HttpStatus { status: got, body }) => {
                    assert_eq!(got, status);
                    assert!(body.contains("Wrong endpoint"));
                }
                other => panic!("Expected HttpStatus error, got {other:?}"),
            }
            server.finish();
        }
    }

    #[tokio::test]
    async fn languages_reject_non_array_body() {
        let server = MockServer::start(vec![MockResponse::ok(r#"{"languages":[]}"#)]).unwrap();

        let result = client_for(server.url()).languages().await;
        assert!(matches!(result, Err(TubelateError::Parse(_))));
        server.finish();
    }

    #[tokio::test]
    async fn translate_returns_first_translation() {
        let body = r#"{"translations":[{"detected_source_language":"EN","text":"Hallo"}]}"#;
        let server = MockServer::start(vec![MockResponse::ok(body)]).unwrap();

        let translation = client_for(server.url())
            .translate("Hello", "DE")
            .await
            .unwrap();
        assert_eq!(translation.text, "Hallo");
        assert_eq!(translation.detected_source_language.as_deref(), Some("EN"));

        let requests = server.finish();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path(), "/translate");
        assert_eq!(
            requests[0].header("authorization"),
            Some("DeepL-Auth-Key secret:fx")
        );
        assert!(
            requests[0]
                .header("content-type")
                .is_some_and(|value| value.starts_with("application/json"))
        );
        let sent: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(sent, json!({"text": ["Hello"], "target_lang": "DE"}));
    }

    #[tokio::test]
    async fn translate_from_sends_source_lang() {
        let body = r#"{"translations":[{"text":"Bonjour"}]}"#;
        let server = MockServer::start(vec![MockResponse::ok(body)]).unwrap();

        let translation = client_for(server.url())
            .translate_from("Hello", Some("EN"), "FR")
            .await
            .unwrap();
        assert_eq!(translation.text, "Bonjour");
        assert_eq!(translation.detected_source_language, None);

        let requests = server.finish();
        let sent: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(
            sent,
            json!({"text": ["Hello"], "source_lang": "EN", "target_lang": "FR"})
        );
    }

    #[tokio::test]
    async fn empty_translations_is_no_translation() {
        let server = MockServer::start(vec![MockResponse::ok(r#"{"translations":[]}"#)]).unwrap();

        let result = client_for(server.url()).translate("Hello", "DE").await;
        assert!(matches!(result, Err(TubelateError::NoTranslation)));
        server.finish();
    }

    #[tokio::test]
    async fn translate_error_statuses_carry_their_code() {
        for status in [401u16, 403, 456, 500] {
            let server = MockServer::start(vec![MockResponse::new(status, "{}")]).unwrap();

            match client_for(server.url()).translate("Hello", "DE").await {
                Err(TubelateError::HttpStatus { status: got, .. }) => assert_eq!(got, status),
                other => panic!("Expected HttpStatus error, got {other:?}"),
            }
            server.finish();
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_connection_error() {
        let client = client_for(&unreachable_url().unwrap());
        assert!(matches!(
            client.languages().await,
            Err(TubelateError::Connection(_))
        ));
        assert!(matches!(
            client.translate("Hello", "DE").await,
            Err(TubelateError::Connection(_))
        ));
    }
}
