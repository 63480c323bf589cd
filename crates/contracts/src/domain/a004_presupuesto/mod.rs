use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Presupuesto (budget assigned to a dependencia for one quarter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presupuesto {
    pub id: EntityId,
    pub dependencia_id: EntityId,
    pub anio: i32,
    pub trimestre: u8,
    pub monto_asignado: f64,
}

/// Body for POST /dependencias/{id}/presupuestos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePresupuestoDto {
    pub anio: i32,
    pub trimestre: u8,
    pub monto_asignado: f64,
}
