use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Dashboard user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub nombre_usuario: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<EntityId>,
}

/// Authorization role, displayed next to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id: EntityId,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUsuarioDto {
    pub nombre: String,
    pub nombre_usuario: String,
    pub email: String,
    pub contrasena: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<EntityId>,
}

/// Full replacement body for PUT /usuarios/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsuarioDto {
    pub nombre: String,
    pub nombre_usuario: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchUsuarioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// None leaves the password unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<EntityId>,
}
