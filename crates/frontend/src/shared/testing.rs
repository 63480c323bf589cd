//! Recording transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::api_client::ApiClient;
use super::api_error::ApiError;
use super::config::ClientConfig;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::system::auth::storage::{MemoryTokenStorage, TokenStorage};

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_raw(&self, status: u16, content_type: Option<&str>, body: &str) {
        self.state.lock().unwrap().responses.push_back(Ok(HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, Some("application/json"), &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push_raw(status, Some("text/plain"), body);
    }

    pub fn push_network_error(&self, message: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no mock response queued".into())))
    }
}

pub fn test_client(transport: &MockTransport) -> ApiClient {
    test_client_with_storage(transport, Arc::new(MemoryTokenStorage::new()))
}

pub fn test_client_with_storage(
    transport: &MockTransport,
    storage: Arc<dyn TokenStorage>,
) -> ApiClient {
    ApiClient::new(ClientConfig::default(), Arc::new(transport.clone()), storage)
}
