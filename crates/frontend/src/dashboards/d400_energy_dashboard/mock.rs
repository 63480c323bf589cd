//! Synthetic dashboard shown when the backend is unreachable

use contracts::dashboards::d400_energy_dashboard::{
    BudgetSummary, DashboardDepartment, DashboardPayload, HistoricalRecord, Prediction,
};
use contracts::domain::common::EntityId;

static MONTHS: [&str; 4] = ["2025-06", "2025-07", "2025-08", "2025-09"];
const FORECAST_MONTH: &str = "2025-10";

/// (code, name, building, city, monthly kWh, monthly cost, predicted cost)
static DEPARTMENTS: [(&str, &str, &str, &str, f64, f64, f64); 3] = [
    (
        "fin",
        "Secretaría de Finanzas",
        "Edificio Central",
        "Chetumal",
        42000.0,
        980000.0,
        1005000.0,
    ),
    (
        "sal",
        "Secretaría de Salud",
        "Hospital General",
        "Cancún",
        68000.0,
        1520000.0,
        1548000.0,
    ),
    (
        "edu",
        "Secretaría de Educación",
        "Complejo Administrativo",
        "Playa del Carmen",
        51000.0,
        1100000.0,
        1134000.0,
    ),
];

pub fn mock_dashboard() -> DashboardPayload {
    let departments: Vec<DashboardDepartment> = DEPARTMENTS
        .iter()
        .map(|(id, name, building, city, ..)| DashboardDepartment {
            id: EntityId::from(*id),
            name: name.to_string(),
            building: Some(building.to_string()),
            city: Some(city.to_string()),
        })
        .collect();

    let history: Vec<HistoricalRecord> = MONTHS
        .iter()
        .flat_map(|month| {
            DEPARTMENTS
                .iter()
                .map(move |(id, _, _, _, kwh, cost, _)| HistoricalRecord {
                    department_id: EntityId::from(*id),
                    month: month.to_string(),
                    kwh: *kwh,
                    cost: *cost,
                })
        })
        .collect();

    let predictions = DEPARTMENTS
        .iter()
        .map(|(id, _, _, _, _, _, predicted)| Prediction {
            department_id: EntityId::from(*id),
            month: FORECAST_MONTH.to_string(),
            predicted_cost: *predicted,
        })
        .collect();

    let summary = summarize(departments.len(), &history);

    DashboardPayload {
        departments,
        history,
        predictions,
        summary,
    }
}

/// Totals over `history`; `total_kwh` must be non-zero
fn summarize(total_departments: usize, history: &[HistoricalRecord]) -> BudgetSummary {
    let total_kwh: f64 = history.iter().map(|r| r.kwh).sum();
    let total_cost: f64 = history.iter().map(|r| r.cost).sum();
    BudgetSummary {
        total_departments,
        total_kwh,
        total_cost,
        avg_cost_per_kwh: total_cost / total_kwh,
    }
}
