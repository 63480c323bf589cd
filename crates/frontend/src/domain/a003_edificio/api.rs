use contracts::domain::a003_edificio::{Edificio, EdificioDto};
use contracts::domain::common::EntityId;

use crate::shared::{ApiClient, ApiError, ApiRequest, Fetched};

/// Fetch buildings of a dependencia
pub async fn fetch_edificios(client: &ApiClient, dependencia_id: &EntityId) -> Fetched<Vec<Edificio>> {
    client
        .fetch_or(
            ApiRequest::get(format!("/dependencias/{}/edificios", dependencia_id)),
            Vec::new(),
        )
        .await
}

pub async fn create_edificio(
    client: &ApiClient,
    dependencia_id: &EntityId,
    dto: &EdificioDto,
) -> Result<Edificio, ApiError> {
    client
        .send(ApiRequest::post(format!("/dependencias/{}/edificios", dependencia_id)).json(dto)?)
        .await
}

pub async fn update_edificio(
    client: &ApiClient,
    id: &EntityId,
    dto: &EdificioDto,
) -> Result<Edificio, ApiError> {
    client
        .send(ApiRequest::put(format!("/edificios/{}", id)).json(dto)?)
        .await
}

pub async fn delete_edificio(client: &ApiClient, id: &EntityId) -> Result<(), ApiError> {
    client
        .send::<serde_json::Value>(ApiRequest::delete(format!("/edificios/{}", id)))
        .await
        .map(|_| ())
}
