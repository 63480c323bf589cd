//! Payloads of the analytics backend (resource hierarchy, projection, AI analysis)

use serde::{Deserialize, Serialize};

// ============================================================================
// Resource hierarchy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecursoEdificio {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecursoDependencia {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub edificios: Vec<RecursoEdificio>,
}

/// Response of GET /analisis/dashboard/mis-recursos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespuestaRecursos {
    pub usuario_id: i64,
    #[serde(default)]
    pub dependencias: Vec<RecursoDependencia>,
}

// ============================================================================
// Projection
// ============================================================================

/// Query string shared by the projection and AI analysis endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProyeccionQuery {
    pub meses: u32,
    pub ver_todo_historial: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencia_id: Option<i64>,
}

impl ProyeccionQuery {
    pub const DEFAULT_MESES: u32 = 6;

    pub fn new(dependencia_id: Option<i64>, meses: u32) -> Self {
        Self {
            meses,
            ver_todo_historial: true,
            dependencia_id,
        }
    }
}

impl Default for ProyeccionQuery {
    fn default() -> Self {
        Self::new(None, Self::DEFAULT_MESES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoPunto {
    Real,
    Prediccion,
}

/// One month of actual or projected consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPunto {
    pub anio: i32,
    pub mes: u32,
    #[serde(default)]
    pub total_kwh: Option<f64>,
    #[serde(default)]
    pub total_costo: Option<f64>,
    pub tipo: TipoPunto,
    #[serde(default)]
    pub rango_costo_min: Option<f64>,
    #[serde(default)]
    pub rango_costo_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangoPrecios {
    pub minimo: f64,
    pub maximo: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumenProyeccion {
    pub tendencia_detectada: String,
    pub rango_precios_estimado: RangoPrecios,
}

/// Response of GET /prediccion/proyeccion-matematica
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProyeccionResponse {
    pub status: String,
    pub metodo: String,
    pub resumen_proyeccion: ResumenProyeccion,
    #[serde(default)]
    pub detalle_proyeccion: Vec<DataPunto>,
    #[serde(default)]
    pub datos_para_grafica: Vec<DataPunto>,
}

// ============================================================================
// AI analysis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalisisIa {
    pub titulo: String,
    pub resumen_ejecutivo: String,
    #[serde(default)]
    pub acciones_estrategicas: Vec<String>,
}

/// Response of GET /prediccion/ia-analisis-estrategico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalisisIaResponse {
    pub status: String,
    pub analisis_ia: AnalisisIa,
}
