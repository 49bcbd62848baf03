use anyhow::Result;
use contracts::dashboards::d100_product::{CategoryItemRow, ProductDashboardResponse};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::dashboards::{global_numbers, revenue_points_desc};
use crate::dataset::loader::{load_dataset, DatasetView, LoaderConfig};
use crate::shared::config::get_config;
use crate::shared::format::{format_currency, EN_CA};
use crate::shared::session::sessions;
use crate::shared::store::PinotClient;

/// Build the Product dashboard for one session.
pub async fn get_product_dashboard(session_id: Uuid) -> Result<ProductDashboardResponse> {
    let selection = sessions().selection(session_id);
    // Fresh store connection per render, dropped on every exit path.
    let store = PinotClient::new(&get_config().store)?;
    let view = load_dataset(&store, &selection, &LoaderConfig::ITEMS).await?;
    Ok(build_response(&view))
}

fn build_response(view: &DatasetView) -> ProductDashboardResponse {
    let mut by_item: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_pair: BTreeMap<(String, String), (u64, f64)> = BTreeMap::new();

    for row in view.rows() {
        *by_item.entry(row.item_purchased.clone()).or_insert(0.0) += row.purchase_amount_usd;
        *by_category.entry(row.category.clone()).or_insert(0.0) += row.purchase_amount_usd;

        let pair = by_pair
            .entry((row.category.clone(), row.item_purchased.clone()))
            .or_insert((0, 0.0));
        if row.customer_id.is_some() {
            pair.0 += 1;
        }
        pair.1 += row.purchase_amount_usd;
    }

    let category_items = by_pair
        .into_iter()
        .map(
            |((category, item_purchased), (customers, revenue))| CategoryItemRow {
                category,
                item_purchased,
                customers,
                revenue: format_currency(revenue, &EN_CA),
            },
        )
        .collect();

    ProductDashboardResponse {
        globals: global_numbers(view),
        revenue_by_item: revenue_points_desc(by_item),
        revenue_by_category: revenue_points_desc(by_category),
        category_items,
    }
}
