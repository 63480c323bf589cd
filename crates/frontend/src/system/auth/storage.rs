use std::sync::{Arc, Mutex, RwLock};

use web_sys::window;

use crate::shared::transport::HeaderList;

/// Durable side-store for the bearer token (survives page reloads)
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Token kept in the browser's localStorage under a fixed key
#[derive(Debug, Clone)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Process-local storage, for tests and hosts without a window
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    value: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a token, as after a reload
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn remove(&self) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Bearer token held in memory and mirrored to a durable store
///
/// No expiry or validation: a stale token is only discovered when the
/// backend rejects the next request.
pub struct TokenStore {
    memory: RwLock<Option<String>>,
    durable: Arc<dyn TokenStorage>,
    scheme: String,
}

impl TokenStore {
    pub fn new(durable: Arc<dyn TokenStorage>, scheme: impl Into<String>) -> Self {
        Self {
            memory: RwLock::new(None),
            durable,
            scheme: scheme.into(),
        }
    }

    pub fn set_token(&self, token: &str) {
        *self.memory.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        self.durable.save(token);
        log::info!("Auth token stored");
    }

    pub fn clear_token(&self) {
        *self.memory.write().unwrap_or_else(|e| e.into_inner()) = None;
        self.durable.remove();
        log::info!("Auth token cleared");
    }

    /// Current token: memory first, then the durable store (cached on hit)
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.memory.read().unwrap_or_else(|e| e.into_inner()).clone() {
            return Some(token);
        }
        let stored = self.durable.load()?;
        *self.memory.write().unwrap_or_else(|e| e.into_inner()) = Some(stored.clone());
        Some(stored)
    }

    pub fn auth_header(&self) -> Option<String> {
        self.token().map(|token| format!("{} {}", self.scheme, token))
    }

    /// Default headers of every JSON request
    pub fn headers(&self) -> HeaderList {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(value) = self.auth_header() {
            headers.push(("Authorization".to_string(), value));
        }
        headers
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("scheme", &self.scheme)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(headers: &'a HeaderList, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_set_token_adds_authorization() {
        let store = TokenStore::new(Arc::new(MemoryTokenStorage::new()), "Bearer");
        store.set_token("abc");
        let headers = store.headers();
        assert_eq!(header(&headers, "Authorization"), Some("Bearer abc"));
        assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_clear_token_removes_authorization() {
        let durable = Arc::new(MemoryTokenStorage::new());
        let store = TokenStore::new(durable.clone(), "Bearer");
        store.set_token("abc");
        store.clear_token();
        assert_eq!(header(&store.headers(), "Authorization"), None);
        assert_eq!(durable.load(), None);
    }

    #[test]
    fn test_token_loaded_from_durable_store() {
        let store = TokenStore::new(Arc::new(MemoryTokenStorage::with_token("persisted")), "Bearer");
        assert_eq!(store.token().as_deref(), Some("persisted"));
        assert_eq!(
            header(&store.headers(), "authorization"),
            Some("Bearer persisted")
        );
    }

    #[test]
    fn test_set_token_writes_through() {
        let durable = Arc::new(MemoryTokenStorage::new());
        let store = TokenStore::new(durable.clone(), "Bearer");
        store.set_token("xyz");
        assert_eq!(durable.load().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_last_write_wins() {
        let store = TokenStore::new(Arc::new(MemoryTokenStorage::new()), "Bearer");
        store.set_token("first");
        store.set_token("second");
        assert_eq!(store.token().as_deref(), Some("second"));
    }
}
