use serde::{Deserialize, Serialize};

use crate::system::users::Usuario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    /// The backend spells this key `acces_token`
    #[serde(rename = "acces_token", alias = "access_token")]
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: Usuario,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
