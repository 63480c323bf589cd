use contracts::domain::a004_presupuesto::{CreatePresupuestoDto, Presupuesto};
use contracts::domain::common::EntityId;

use crate::shared::{ApiClient, ApiError, ApiRequest, Fetched};

/// Fetch budgets of a dependencia
pub async fn fetch_presupuestos(
    client: &ApiClient,
    dependencia_id: &EntityId,
) -> Fetched<Vec<Presupuesto>> {
    client
        .fetch_or(
            ApiRequest::get(format!("/dependencias/{}/presupuestos", dependencia_id)),
            Vec::new(),
        )
        .await
}

pub async fn create_presupuesto(
    client: &ApiClient,
    dependencia_id: &EntityId,
    dto: &CreatePresupuestoDto,
) -> Result<Presupuesto, ApiError> {
    client
        .send(
            ApiRequest::post(format!("/dependencias/{}/presupuestos", dependencia_id)).json(dto)?,
        )
        .await
}
