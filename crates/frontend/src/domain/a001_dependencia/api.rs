use contracts::domain::a001_dependencia::{CreateDependenciaDto, Dependencia, PatchDependenciaDto};
use contracts::domain::common::EntityId;

use crate::shared::{ApiClient, ApiError, ApiRequest, Fetched};

/// Fetch all dependencias
pub async fn fetch_dependencias(client: &ApiClient) -> Fetched<Vec<Dependencia>> {
    client.fetch_or(ApiRequest::get("/dependencias"), Vec::new()).await
}

pub async fn create_dependencia(
    client: &ApiClient,
    dto: &CreateDependenciaDto,
) -> Result<Dependencia, ApiError> {
    client.send(ApiRequest::post("/dependencias").json(dto)?).await
}

/// Fetch one dependencia; a failed load yields a record with an empty name
pub async fn fetch_dependencia(client: &ApiClient, id: &EntityId) -> Fetched<Dependencia> {
    client
        .fetch_or(
            ApiRequest::get(format!("/dependencias/{}", id)),
            Dependencia::empty(id.clone()),
        )
        .await
}

pub async fn update_dependencia(
    client: &ApiClient,
    id: &EntityId,
    dto: &CreateDependenciaDto,
) -> Result<Dependencia, ApiError> {
    client
        .send(ApiRequest::put(format!("/dependencias/{}", id)).json(dto)?)
        .await
}

pub async fn patch_dependencia(
    client: &ApiClient,
    id: &EntityId,
    dto: &PatchDependenciaDto,
) -> Result<Dependencia, ApiError> {
    client
        .send(ApiRequest::patch(format!("/dependencias/{}", id)).json(dto)?)
        .await
}

pub async fn delete_dependencia(client: &ApiClient, id: &EntityId) -> Result<(), ApiError> {
    client
        .send::<serde_json::Value>(ApiRequest::delete(format!("/dependencias/{}", id)))
        .await
        .map(|_| ())
}
