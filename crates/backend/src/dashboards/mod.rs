pub mod d100_product;
pub mod d101_sales;
pub mod d102_insights;

use contracts::dashboards::common::{GlobalNumbers, RevenuePoint};
use std::collections::BTreeMap;

use crate::dataset::loader::DatasetView;
use crate::shared::format::{format_currency, EN_CA};

/// Headline numbers shared by the dashboards. An empty view reports
/// `average_rating: None` and `row_count: 0`, which the client renders as an
/// explicit no-data state instead of a zero.
pub(crate) fn global_numbers(view: &DatasetView) -> GlobalNumbers {
    GlobalNumbers {
        total_revenue: format_currency(view.total_revenue(), &EN_CA),
        average_rating: view.average_rating().ok(),
        total_customers: view.total_customers(),
        row_count: view.len() as u64,
    }
}

/// Chart series sorted by revenue descending, label ascending on ties.
pub(crate) fn revenue_points_desc(totals: BTreeMap<String, f64>) -> Vec<RevenuePoint> {
    let mut points: Vec<RevenuePoint> = totals
        .into_iter()
        .map(|(label, revenue)| RevenuePoint { label, revenue })
        .collect();
    points.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    points
}
