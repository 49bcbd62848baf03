use anyhow::Result;
use contracts::dashboards::common::{CountPoint, RevenuePoint};
use contracts::dashboards::d102_insights::{
    BreakdownPoint, InsightsDashboardResponse, ItemAmountCount,
};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::dataset::loader::{load_dataset, DatasetView, LoaderConfig};
use crate::dataset::metrics::age_bucket;
use crate::shared::config::get_config;
use crate::shared::session::sessions;
use crate::shared::store::PinotClient;

/// Build the Insights dashboard for one session. Filters on the session's
/// payment-method and season selections combined with AND.
pub async fn get_insights_dashboard(session_id: Uuid) -> Result<InsightsDashboardResponse> {
    let selection = sessions().selection(session_id);
    let store = PinotClient::new(&get_config().store)?;
    let view = load_dataset(&store, &selection, &LoaderConfig::PAYMENT_AND_SEASON).await?;
    Ok(build_response(&view))
}

fn build_response(view: &DatasetView) -> InsightsDashboardResponse {
    let mut by_method: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_season: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_item: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    let mut age_payment: BTreeMap<(String, String), u64> = BTreeMap::new();
    let mut age_frequency: BTreeMap<(String, String), u64> = BTreeMap::new();
    let mut frequency_payment: BTreeMap<(String, String), u64> = BTreeMap::new();

    for row in view.rows() {
        *by_season.entry(row.season.clone()).or_insert(0.0) += row.purchase_amount_usd;

        let item = by_item.entry(row.item_purchased.clone()).or_insert((0.0, 0));
        item.0 += row.purchase_amount_usd;

        // Purchase and customer counts follow the non-null customer id rule.
        if row.customer_id.is_some() {
            *by_method.entry(row.payment_method.clone()).or_insert(0) += 1;
            item.1 += 1;

            let range = age_bucket(row.age).label().to_string();
            *age_payment
                .entry((range.clone(), row.payment_method.clone()))
                .or_insert(0) += 1;
            *age_frequency
                .entry((range, row.frequency_of_purchases.clone()))
                .or_insert(0) += 1;
            *frequency_payment
                .entry((
                    row.frequency_of_purchases.clone(),
                    row.payment_method.clone(),
                ))
                .or_insert(0) += 1;
        }
    }

    InsightsDashboardResponse {
        purchases_by_payment_method: by_method
            .into_iter()
            .map(|(label, count)| CountPoint { label, count })
            .collect(),
        revenue_by_season: by_season
            .into_iter()
            .map(|(label, revenue)| RevenuePoint { label, revenue })
            .collect(),
        item_amount_count: by_item
            .into_iter()
            .map(|(item_purchased, (revenue, purchases))| ItemAmountCount {
                item_purchased,
                revenue,
                purchases,
            })
            .collect(),
        customers_by_age_and_payment: breakdown_points(age_payment),
        customers_by_age_and_frequency: breakdown_points(age_frequency),
        customers_by_frequency_and_payment: breakdown_points(frequency_payment),
    }
}

fn breakdown_points(counts: BTreeMap<(String, String), u64>) -> Vec<BreakdownPoint> {
    counts
        .into_iter()
        .map(|((primary, secondary), customers)| BreakdownPoint {
            primary,
            secondary,
            customers,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::sample_row;
    use contracts::shared::catalog::SelectionState;
    use serde_json::json;

    fn view(rows: Vec<Vec<serde_json::Value>>) -> DatasetView {
        DatasetView::build(
            &rows,
            &SelectionState::default(),
            &LoaderConfig::PAYMENT_AND_SEASON,
        )
        .unwrap()
    }

    #[test]
    fn test_purchases_counted_per_payment_method() {
        let view = view(vec![
            sample_row(&[("payment_method", json!("Cash"))]),
            sample_row(&[("payment_method", json!("Cash"))]),
            sample_row(&[("payment_method", json!("Venmo"))]),
            sample_row(&[("payment_method", json!("Venmo")), ("customer_id", json!(null))]),
        ]);
        let response = build_response(&view);
        let methods: Vec<(&str, u64)> = response
            .purchases_by_payment_method
            .iter()
            .map(|p| (p.label.as_str(), p.count))
            .collect();
        assert_eq!(methods, vec![("Cash", 2), ("Venmo", 1)]);
    }

    #[test]
    fn test_revenue_summed_per_season() {
        let view = view(vec![
            sample_row(&[("season", json!("Fall")), ("purchase_amount_usd", json!(12.0))]),
            sample_row(&[("season", json!("Fall")), ("purchase_amount_usd", json!(8.0))]),
            sample_row(&[("season", json!("Winter")), ("purchase_amount_usd", json!(5.0))]),
        ]);
        let response = build_response(&view);
        let seasons: Vec<(&str, f64)> = response
            .revenue_by_season
            .iter()
            .map(|p| (p.label.as_str(), p.revenue))
            .collect();
        assert_eq!(seasons, vec![("Fall", 20.0), ("Winter", 5.0)]);
    }

    #[test]
    fn test_item_combo_carries_both_axes() {
        let view = view(vec![
            sample_row(&[
                ("item_purchased", json!("Dress")),
                ("purchase_amount_usd", json!(30.0)),
            ]),
            sample_row(&[
                ("item_purchased", json!("Dress")),
                ("purchase_amount_usd", json!(20.0)),
            ]),
        ]);
        let response = build_response(&view);
        assert_eq!(response.item_amount_count.len(), 1);
        let point = &response.item_amount_count[0];
        assert_eq!(point.item_purchased, "Dress");
        assert_eq!(point.revenue, 50.0);
        assert_eq!(point.purchases, 2);
    }

    #[test]
    fn test_age_ranges_group_customers() {
        let view = view(vec![
            sample_row(&[("age", json!(25)), ("payment_method", json!("Cash"))]),
            sample_row(&[("age", json!(29)), ("payment_method", json!("Cash"))]),
            sample_row(&[("age", json!(52)), ("payment_method", json!("Cash"))]),
        ]);
        let response = build_response(&view);
        let breakdown: Vec<(&str, &str, u64)> = response
            .customers_by_age_and_payment
            .iter()
            .map(|p| (p.primary.as_str(), p.secondary.as_str(), p.customers))
            .collect();
        assert_eq!(
            breakdown,
            vec![("senior", "Cash", 1), ("twenties", "Cash", 2)]
        );
    }
}
