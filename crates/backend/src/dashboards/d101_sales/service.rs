use anyhow::Result;
use contracts::dashboards::common::CountPoint;
use contracts::dashboards::d101_sales::SalesDashboardResponse;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::dashboards::global_numbers;
use crate::dataset::loader::{load_dataset, DatasetView, LoaderConfig};
use crate::dataset::schema::TransactionRecord;
use crate::shared::config::{get_config, resolve_reference_path};
use crate::shared::geo::{revenue_by_state, StateLookup};
use crate::shared::session::sessions;
use crate::shared::store::PinotClient;

/// Build the Sales dashboard for one session.
pub async fn get_sales_dashboard(session_id: Uuid) -> Result<SalesDashboardResponse> {
    let selection = sessions().selection(session_id);
    let store = PinotClient::new(&get_config().store)?;
    let view = load_dataset(&store, &selection, &LoaderConfig::ITEMS).await?;

    // Reference data is read fresh per render, never mutated.
    let lookup_path = resolve_reference_path(&get_config().reference.us_states_path);
    let lookup = StateLookup::load(&lookup_path)?;

    Ok(build_response(&view, &lookup))
}

fn build_response(view: &DatasetView, lookup: &StateLookup) -> SalesDashboardResponse {
    let (state_revenue, unmatched_revenue) = revenue_by_state(view, lookup);

    SalesDashboardResponse {
        globals: global_numbers(view),
        size_distribution: count_distribution(view, |r| &r.size),
        gender_distribution: count_distribution(view, |r| &r.gender),
        promo_code_distribution: count_distribution(view, |r| &r.promo_code_used),
        shipping_type_distribution: count_distribution(view, |r| &r.shipping_type),
        state_revenue,
        unmatched_revenue,
        ages: view.rows().iter().map(|r| r.age).collect(),
    }
}

/// Customer count per value of one categorical column. Rows without a
/// customer id do not count, matching the revenue table's customer column.
fn count_distribution<F>(view: &DatasetView, key: F) -> Vec<CountPoint>
where
    F: Fn(&TransactionRecord) -> &str,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in view.rows() {
        if row.customer_id.is_some() {
            *counts.entry(key(row).to_string()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(label, count)| CountPoint { label, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::sample_row;
    use contracts::shared::catalog::SelectionState;
    use serde_json::json;

    fn view(rows: Vec<Vec<serde_json::Value>>) -> DatasetView {
        DatasetView::build(&rows, &SelectionState::default(), &LoaderConfig::ITEMS).unwrap()
    }

    fn lookup() -> StateLookup {
        StateLookup::from_pairs([("California".to_string(), "CA".to_string())])
    }

    #[test]
    fn test_distributions_count_customers_per_value() {
        let view = view(vec![
            sample_row(&[("size", json!("M")), ("gender", json!("Female"))]),
            sample_row(&[("size", json!("M")), ("gender", json!("Male"))]),
            sample_row(&[("size", json!("L")), ("gender", json!("Female"))]),
        ]);
        let response = build_response(&view, &lookup());
        let sizes: Vec<(&str, u64)> = response
            .size_distribution
            .iter()
            .map(|p| (p.label.as_str(), p.count))
            .collect();
        assert_eq!(sizes, vec![("L", 1), ("M", 2)]);
        assert_eq!(response.gender_distribution.len(), 2);
    }

    #[test]
    fn test_ages_are_passed_through_for_histogram() {
        let view = view(vec![
            sample_row(&[("age", json!(22))]),
            sample_row(&[("age", json!(51))]),
        ]);
        let response = build_response(&view, &lookup());
        assert_eq!(response.ages, vec![22, 51]);
    }

    #[test]
    fn test_unmatched_state_revenue_is_separate() {
        let view = view(vec![
            sample_row(&[
                ("location", json!("California")),
                ("purchase_amount_usd", json!(40.0)),
            ]),
            sample_row(&[
                ("location", json!("Unknownstan")),
                ("purchase_amount_usd", json!(2.0)),
            ]),
        ]);
        let response = build_response(&view, &lookup());
        assert_eq!(response.state_revenue.len(), 1);
        assert_eq!(response.unmatched_revenue, 2.0);
        // Global revenue keeps the unmatched row.
        assert_eq!(response.globals.total_revenue, "$42.00");
    }
}
