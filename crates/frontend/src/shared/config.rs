use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Primary REST backend
    pub base_url: String,
    /// Analytics backend (resource hierarchy, projection, AI analysis)
    pub analytics_base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// localStorage key holding the bearer token
    pub storage_key: String,
    /// Prefix of the Authorization header value
    pub scheme: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    /// Multipart field carrying the consumption file
    pub field_name: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:8000"
analytics_base_url = "http://localhost:8001"

[auth]
storage_key = "auth_token"
scheme = "Bearer"

[upload]
field_name = "file"
"#;

/// Load client configuration
///
/// Uses the given TOML document when present (for example one injected by
/// the hosting page), otherwise falls back to the embedded default config.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<ClientConfig> {
    match overrides {
        Some(contents) => {
            log::info!("Loading client config from supplied document");
            let config: ClientConfig = toml::from_str(contents)?;
            Ok(config)
        }
        None => {
            log::debug!("Using default embedded client configuration");
            let config: ClientConfig = toml::from_str(DEFAULT_CONFIG)?;
            Ok(config)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
                analytics_base_url: "http://localhost:8001".to_string(),
            },
            auth: AuthConfig {
                storage_key: "auth_token".to_string(),
                scheme: "Bearer".to_string(),
            },
            upload: UploadConfig {
                field_name: "file".to_string(),
            },
        }
    }
}
