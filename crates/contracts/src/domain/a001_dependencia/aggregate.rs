use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::a002_sector::Sector;
use crate::domain::a003_edificio::Edificio;
use crate::domain::common::EntityId;

// ============================================================================
// Aggregate
// ============================================================================

/// Dependencia (government department or agency)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependencia {
    pub id: EntityId,

    /// Display name. Older payloads send it as `name`.
    #[serde(alias = "name")]
    pub nombre: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edificios: Option<Vec<Edificio>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<NaiveDateTime>,
}

impl Dependencia {
    /// Placeholder used when a single record could not be loaded
    pub fn empty(id: EntityId) -> Self {
        Self {
            id,
            nombre: String::new(),
            sector_id: None,
            sector: None,
            edificios: None,
            fecha_creacion: None,
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body for POST /dependencias and PUT /dependencias/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDependenciaDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<EntityId>,
}

/// Body for PATCH /dependencias/{id}; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDependenciaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<EntityId>,
}
