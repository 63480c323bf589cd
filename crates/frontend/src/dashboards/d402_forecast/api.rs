//! Analytics backend: resource hierarchy, projection and AI consulting
//!
//! Shares the bearer token with the primary backend. Failures propagate.

use contracts::dashboards::d402_forecast::{
    AnalisisIaResponse, ProyeccionQuery, ProyeccionResponse, RespuestaRecursos,
};

use crate::shared::{ApiClient, ApiError, ApiRequest, Origin};

/// Dependencias and buildings visible to the logged-in user
pub async fn fetch_mis_recursos(client: &ApiClient) -> Result<RespuestaRecursos, ApiError> {
    client
        .send(ApiRequest::get("/analisis/dashboard/mis-recursos").on(Origin::Analytics))
        .await
}

/// Mathematical cost projection
///
/// A 404 means the backend has too little history for the selection and is
/// reported as [`ApiError::InsufficientHistory`].
pub async fn fetch_proyeccion(
    client: &ApiClient,
    query: &ProyeccionQuery,
) -> Result<ProyeccionResponse, ApiError> {
    let request = ApiRequest::get("/prediccion/proyeccion-matematica")
        .on(Origin::Analytics)
        .query(query)?;

    client.send(request).await.map_err(|e| match e.status() {
        Some(404) => ApiError::InsufficientHistory,
        _ => e,
    })
}

/// Strategic analysis written by the AI consultant
pub async fn fetch_analisis_ia(
    client: &ApiClient,
    query: &ProyeccionQuery,
) -> Result<AnalisisIaResponse, ApiError> {
    let request = ApiRequest::get("/prediccion/ia-analisis-estrategico")
        .on(Origin::Analytics)
        .query(query)?;

    client.send(request).await
}
