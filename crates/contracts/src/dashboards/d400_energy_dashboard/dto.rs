use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Response of GET /dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub departments: Vec<DashboardDepartment>,
    pub history: Vec<HistoricalRecord>,
    pub predictions: Vec<Prediction>,
    pub summary: BudgetSummary,
}

/// Department as summarized by the dashboard endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDepartment {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Consumption of one department in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    pub department_id: EntityId,
    /// Period in format "YYYY-MM"
    pub month: String,
    pub kwh: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub department_id: EntityId,
    pub month: String,
    pub predicted_cost: f64,
}

/// Totals over a set of historical records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_departments: usize,
    pub total_kwh: f64,
    pub total_cost: f64,
    pub avg_cost_per_kwh: f64,
}
