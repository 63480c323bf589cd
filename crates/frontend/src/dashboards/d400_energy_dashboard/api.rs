use contracts::dashboards::d400_energy_dashboard::DashboardPayload;

use super::mock::mock_dashboard;
use crate::shared::{ApiClient, ApiRequest, Fetched};

/// Fetch the dashboard summary; on failure the synthetic dashboard is served
pub async fn fetch_dashboard(client: &ApiClient) -> Fetched<DashboardPayload> {
    client
        .fetch_or(ApiRequest::get("/dashboard"), mock_dashboard())
        .await
}
