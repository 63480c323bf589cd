pub mod dto;

pub use dto::{BudgetSummary, DashboardDepartment, DashboardPayload, HistoricalRecord, Prediction};
