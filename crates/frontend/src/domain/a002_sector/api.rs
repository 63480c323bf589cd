use contracts::domain::a002_sector::Sector;

use crate::shared::{ApiClient, ApiRequest, Fetched};

/// Fetch sector classifications
pub async fn fetch_sectores(client: &ApiClient) -> Fetched<Vec<Sector>> {
    client.fetch_or(ApiRequest::get("/sectores"), Vec::new()).await
}
