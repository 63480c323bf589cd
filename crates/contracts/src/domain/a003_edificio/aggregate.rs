use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Edificio (building owned by a dependencia)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edificio {
    pub id: EntityId,
    pub dependencia_id: EntityId,
    #[serde(default)]
    pub nombre: Option<String>,
    pub direccion: String,
    #[serde(default)]
    pub latitud: Option<f64>,
    #[serde(default)]
    pub longitud: Option<f64>,
    /// Free text describing the installation
    #[serde(default)]
    pub caracteristicas: Option<String>,
}

/// Body for POST /dependencias/{id}/edificios and PUT /edificios/{id}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdificioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitud: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitud: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caracteristicas: Option<String>,
}
