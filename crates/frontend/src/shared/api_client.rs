//! Request executor and fallback wrapper shared by every endpoint module

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_error::ApiError;
use super::api_utils::join_url;
use super::config::ClientConfig;
use super::fetched::Fetched;
use super::transport::{
    GlooTransport, HeaderList, HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport,
    UploadFile,
};
use crate::system::auth::storage::{LocalTokenStorage, TokenStorage, TokenStore};

/// Backend a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Primary,
    Analytics,
}

/// Request relative to one of the configured origins
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub origin: Origin,
    pub headers: HeaderList,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            origin: Origin::Primary,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn on(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.body = RequestBody::Json(text);
        Ok(self)
    }

    pub fn multipart(mut self, field: impl Into<String>, file: UploadFile) -> Self {
        self.body = RequestBody::Multipart {
            field: field.into(),
            file,
        };
        self
    }

    /// Append a query string serialized from `params`
    pub fn query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ApiError> {
        let query = serde_qs::to_string(params).map_err(|e| ApiError::Serialize(e.to_string()))?;
        if !query.is_empty() {
            let separator = if self.path.contains('?') { '&' } else { '?' };
            self.path = format!("{}{}{}", self.path, separator, query);
        }
        Ok(self)
    }
}

/// Client owning the configuration, transport and token store
///
/// Cheap to clone; clones share the same token.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    tokens: Arc<TokenStore>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let tokens = TokenStore::new(storage, config.auth.scheme.clone());
        Self {
            config: Arc::new(config),
            transport,
            tokens: Arc::new(tokens),
        }
    }

    /// Client for the browser: `fetch` transport and localStorage token
    pub fn browser(config: ClientConfig) -> Self {
        let storage = LocalTokenStorage::new(config.auth.storage_key.clone());
        Self::new(config, Arc::new(GlooTransport), Arc::new(storage))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn base_url(&self, origin: Origin) -> &str {
        match origin {
            Origin::Primary => &self.config.api.base_url,
            Origin::Analytics => &self.config.api.analytics_base_url,
        }
    }

    /// Resolve the URL and merge caller headers over the default ones
    pub fn resolve(&self, request: ApiRequest) -> HttpRequest {
        let mut headers = self.tokens.headers();
        if matches!(request.body, RequestBody::Multipart { .. }) {
            // the browser must write its own multipart boundary
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
        }
        for (name, value) in request.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        HttpRequest {
            method: request.method,
            url: join_url(self.base_url(request.origin), &request.path),
            headers,
            body: request.body,
        }
    }

    /// Perform a request and decode the JSON answer, surfacing every failure
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let http = self.resolve(request);
        log::debug!("{} {}", http.method.as_str(), http.url);

        let response = self.transport.execute(http).await?;
        if !response.ok() {
            return Err(classify_failure(response));
        }
        decode_body(&response.body)
    }

    /// Perform a read; on any failure log it and serve `fallback` instead
    pub async fn fetch_or<R: DeserializeOwned>(&self, request: ApiRequest, fallback: R) -> Fetched<R> {
        let path = request.path.clone();
        match self.send(request).await {
            Ok(value) => Fetched::Fresh(value),
            Err(error) => {
                log::error!("API request failed for {}: {}", path, error);
                Fetched::Fallback {
                    value: fallback,
                    error,
                }
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

fn classify_failure(response: HttpResponse) -> ApiError {
    if response.is_json() {
        if let Ok(body) = serde_json::from_str::<Value>(&response.body) {
            return ApiError::Api {
                status: response.status,
                body,
            };
        }
    }
    ApiError::Http {
        status: response.status,
        text: response.body,
    }
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    // 204 and empty 200 answers decode like JSON null, which fits `()`
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{test_client, MockTransport};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[tokio::test]
    async fn test_send_decodes_success() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"id": 5}));
        let client = test_client(&transport);

        let item: Item = client.send(ApiRequest::get("/items/5")).await.unwrap();
        assert_eq!(item, Item { id: 5 });

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://127.0.0.1:8000/items/5");
        assert_eq!(sent.method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_json_error_is_structured() {
        let transport = MockTransport::new();
        transport.push_json(409, json!({"detail": "duplicada"}));
        let client = test_client(&transport);

        let err = client.send::<Item>(ApiRequest::post("/items")).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                status: 409,
                body: json!({"detail": "duplicada"})
            }
        );
    }

    #[tokio::test]
    async fn test_text_error_keeps_raw_body() {
        let transport = MockTransport::new();
        transport.push_text(500, "Internal Server Error");
        let client = test_client(&transport);

        let err = client.send::<Item>(ApiRequest::get("/items")).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                text: "Internal Server Error".into()
            }
        );
    }

    #[tokio::test]
    async fn test_json_content_type_with_invalid_body() {
        let transport = MockTransport::new();
        transport.push_raw(400, Some("application/json"), "not json");
        let client = test_client(&transport);

        let err = client.send::<Item>(ApiRequest::get("/items")).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(matches!(err, ApiError::Http { .. }));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"name": "sin id"}));
        let client = test_client(&transport);

        let err = client.send::<Item>(ApiRequest::get("/items/1")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        let transport = MockTransport::new();
        transport.push_raw(204, None, "");
        let client = test_client(&transport);

        client.send::<()>(ApiRequest::delete("/items/1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_or_returns_fallback_on_network_error() {
        let transport = MockTransport::new();
        transport.push_network_error("connection refused");
        let client = test_client(&transport);

        let fetched = client
            .fetch_or(ApiRequest::get("/items"), vec![Item { id: 0 }])
            .await;
        assert!(fetched.is_fallback());
        assert_eq!(fetched.into_inner(), vec![Item { id: 0 }]);
    }

    #[tokio::test]
    async fn test_fetch_or_fresh_on_success() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([{"id": 1}]));
        let client = test_client(&transport);

        let fetched = client.fetch_or(ApiRequest::get("/items"), Vec::<Item>::new()).await;
        assert_eq!(fetched, Fetched::Fresh(vec![Item { id: 1 }]));
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let transport = MockTransport::new();
        let client = test_client(&transport);
        client.tokens().set_token("abc");

        let http = client.resolve(
            ApiRequest::get("/x")
                .header("content-type", "text/csv")
                .header("X-Trace", "1"),
        );
        assert_eq!(http.header("Content-Type"), Some("text/csv"));
        assert_eq!(http.header("Authorization"), Some("Bearer abc"));
        assert_eq!(http.header("x-trace"), Some("1"));
        assert_eq!(
            http.headers
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
                .count(),
            1
        );
    }

    #[test]
    fn test_multipart_drops_content_type() {
        let transport = MockTransport::new();
        let client = test_client(&transport);
        client.tokens().set_token("abc");

        let file = UploadFile::new("consumos.csv", "text/csv", b"a,b\n1,2".to_vec());
        let http = client.resolve(ApiRequest::post("/upload").multipart("file", file));
        assert_eq!(http.header("Content-Type"), None);
        assert_eq!(http.header("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_query_and_origin() {
        #[derive(Serialize)]
        struct Params {
            meses: u32,
            ver_todo_historial: bool,
        }

        let transport = MockTransport::new();
        let client = test_client(&transport);
        let request = ApiRequest::get("/prediccion")
            .on(Origin::Analytics)
            .query(&Params {
                meses: 3,
                ver_todo_historial: true,
            })
            .unwrap();
        let http = client.resolve(request);
        assert_eq!(
            http.url,
            "http://localhost:8001/prediccion?meses=3&ver_todo_historial=true"
        );
    }
}
