use serde::{Deserialize, Serialize};

use crate::dashboards::common::{GlobalNumbers, RevenuePoint};

/// Response for the Product dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDashboardResponse {
    pub globals: GlobalNumbers,
    /// Revenue per item, descending (vertical bar chart).
    pub revenue_by_item: Vec<RevenuePoint>,
    /// Revenue per category, descending (horizontal bar chart).
    pub revenue_by_category: Vec<RevenuePoint>,
    /// Customer count and formatted revenue per (category, item) pair.
    pub category_items: Vec<CategoryItemRow>,
}

/// One row of the customers-and-revenue-per-category-item table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryItemRow {
    pub category: String,
    pub item_purchased: String,
    pub customers: u64,
    /// Currency-formatted revenue, matching the table rendering.
    pub revenue: String,
}
