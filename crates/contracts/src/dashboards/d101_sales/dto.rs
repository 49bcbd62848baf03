use serde::{Deserialize, Serialize};

use crate::dashboards::common::{CountPoint, GlobalNumbers};

/// Response for the Sales dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDashboardResponse {
    pub globals: GlobalNumbers,
    /// Customer count per clothing size (pie chart).
    pub size_distribution: Vec<CountPoint>,
    /// Customer count per gender (pie chart).
    pub gender_distribution: Vec<CountPoint>,
    /// Customer count per promo-code usage flag (pie chart).
    pub promo_code_distribution: Vec<CountPoint>,
    /// Customer count per shipping type (bar chart).
    pub shipping_type_distribution: Vec<CountPoint>,
    /// Revenue per US state postal abbreviation (choropleth input).
    pub state_revenue: Vec<StateRevenue>,
    /// Revenue of rows whose location has no entry in the state lookup.
    /// Excluded from `state_revenue` but still part of `globals.total_revenue`.
    pub unmatched_revenue: f64,
    /// Raw ages of the filtered rows (histogram input).
    pub ages: Vec<i64>,
}

/// Revenue aggregate for one US state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRevenue {
    /// Two-letter postal abbreviation, e.g. "CA".
    pub abbreviation: String,
    pub revenue: f64,
}
