use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters shared by all dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// Session whose selection state drives the filters.
    pub session_id: Uuid,
}

/// Headline numbers shown above every dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalNumbers {
    /// Total revenue over the filtered rows, currency-formatted.
    pub total_revenue: String,
    /// Mean review rating rounded to 3 decimals; `None` when the filtered
    /// set is empty (the client renders an explicit no-data state).
    pub average_rating: Option<f64>,
    /// Count of rows with a non-null customer id.
    pub total_customers: u64,
    /// Number of rows that passed the filters.
    pub row_count: u64,
}

/// One bar/slice of a revenue chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub label: String,
    pub revenue: f64,
}

/// One bar/slice of a count chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountPoint {
    pub label: String,
    pub count: u64,
}
