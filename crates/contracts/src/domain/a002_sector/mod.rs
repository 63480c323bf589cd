use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Sector classification attached to a dependencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}
