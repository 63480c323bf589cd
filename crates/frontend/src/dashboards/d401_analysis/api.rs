//! Read-only analytics of the primary backend
//!
//! Every call here is served through the fallback wrapper: an empty object
//! (or empty list) stands in for the document when the backend fails.

use contracts::domain::common::EntityId;
use contracts::shared::json::JsonObject;
use serde_json::Value;

use crate::shared::api_utils::encode_segment;
use crate::shared::{ApiClient, ApiRequest, Fetched};

async fn fetch_document(client: &ApiClient, path: &str) -> Fetched<JsonObject> {
    client
        .fetch_or(ApiRequest::get(path), JsonObject::new())
        .await
}

async fn fetch_list(client: &ApiClient, path: String) -> Fetched<Vec<Value>> {
    client.fetch_or(ApiRequest::get(path), Vec::new()).await
}

pub async fn fetch_ranking_dependencias(client: &ApiClient) -> Fetched<Vec<Value>> {
    fetch_list(client, "/analisis/ranking-dependencias".to_string()).await
}

// ============================================================================
// Dashboard analytics
// ============================================================================

pub async fn fetch_kpis(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/dashboard/kpis").await
}

pub async fn fetch_evolucion(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/dashboard/evolucion").await
}

pub async fn fetch_tendencia(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/dashboard/tendencia").await
}

pub async fn fetch_ranking(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/dashboard/ranking").await
}

// ============================================================================
// Predictions (primary backend)
// ============================================================================

pub async fn fetch_proyeccion_matematica(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/prediccion/proyeccion-matematica").await
}

pub async fn fetch_ia_analisis_estrategico(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/prediccion/ia-analisis-estrategico").await
}

// ============================================================================
// Catalogs
// ============================================================================

/// Fetch a catalog, optionally narrowed to the children of `parent_id`
pub async fn fetch_catalogos(
    client: &ApiClient,
    catalog_type: &str,
    parent_id: Option<&EntityId>,
) -> Fetched<Vec<Value>> {
    let mut path = format!("/catalogos/{}", encode_segment(catalog_type));
    if let Some(parent_id) = parent_id {
        path = format!("{}/{}", path, encode_segment(&parent_id.to_string()));
    }
    fetch_list(client, path).await
}

// ============================================================================
// Public transparency views
// ============================================================================

pub async fn fetch_publico_comparativa_consumo(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/publico/comparativa-consumo").await
}

pub async fn fetch_publico_comparativa_costos(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/publico/comparativa-costos").await
}

pub async fn fetch_publico_ranking(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/publico/ranking").await
}

pub async fn fetch_publico_presupuesto_vs_gasto(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/analisis/publico/presupuesto-vs-gasto").await
}

/// State government integration status
pub async fn fetch_integracion_gobierno(client: &ApiClient) -> Fetched<JsonObject> {
    fetch_document(client, "/integracion/gobierno").await
}
