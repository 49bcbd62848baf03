use serde::{Deserialize, Serialize};

use crate::dashboards::common::{CountPoint, RevenuePoint};

/// Response for the Insights dashboard. Filtered on payment method AND season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsDashboardResponse {
    /// Purchase count per payment method (bar chart).
    pub purchases_by_payment_method: Vec<CountPoint>,
    /// Revenue per season (bar chart).
    pub revenue_by_season: Vec<RevenuePoint>,
    /// Revenue and purchase count per item (two-axis combo chart).
    pub item_amount_count: Vec<ItemAmountCount>,
    /// Customer count per (age range, payment method).
    pub customers_by_age_and_payment: Vec<BreakdownPoint>,
    /// Customer count per (age range, purchase frequency).
    pub customers_by_age_and_frequency: Vec<BreakdownPoint>,
    /// Customer count per (purchase frequency, payment method).
    pub customers_by_frequency_and_payment: Vec<BreakdownPoint>,
}

/// One item of the amount-vs-count combo chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAmountCount {
    pub item_purchased: String,
    pub revenue: f64,
    pub purchases: u64,
}

/// Customer count for one (primary, secondary) grouping pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownPoint {
    pub primary: String,
    pub secondary: String,
    pub customers: u64,
}
