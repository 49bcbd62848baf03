use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use contracts::dashboards::d101_sales::StateRevenue;

use crate::dataset::loader::DatasetView;

/// Read-only lookup from US state name to postal abbreviation.
pub struct StateLookup {
    by_name: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct StateEntry {
    name: String,
    abbreviation: String,
}

impl StateLookup {
    /// Load the reference file (a JSON array of `{name, abbreviation}`).
    /// Loaded fresh at render time; the file is small and never written.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<StateEntry> = serde_json::from_str(&contents)?;
        Ok(Self {
            by_name: entries
                .into_iter()
                .map(|e| (e.name, e.abbreviation))
                .collect(),
        })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            by_name: pairs.into_iter().collect(),
        }
    }

    pub fn abbreviation(&self, state_name: &str) -> Option<&str> {
        self.by_name.get(state_name).map(|s| s.as_str())
    }
}

/// Left-join the filtered rows against the lookup and sum revenue per
/// abbreviation. Locations without a lookup entry accumulate into the second
/// return value: they stay out of the choropleth series but remain visible,
/// and the global total-revenue scalar never consults this join.
pub fn revenue_by_state(view: &DatasetView, lookup: &StateLookup) -> (Vec<StateRevenue>, f64) {
    let mut by_state: BTreeMap<String, f64> = BTreeMap::new();
    let mut unmatched = 0.0;

    for row in view.rows() {
        match lookup.abbreviation(&row.location) {
            Some(abbr) => {
                *by_state.entry(abbr.to_string()).or_insert(0.0) += row.purchase_amount_usd
            }
            None => unmatched += row.purchase_amount_usd,
        }
    }

    let series = by_state
        .into_iter()
        .map(|(abbreviation, revenue)| StateRevenue {
            abbreviation,
            revenue,
        })
        .collect();
    (series, unmatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::{DatasetView, LoaderConfig};
    use crate::dataset::testdata::sample_row;
    use contracts::shared::catalog::SelectionState;
    use serde_json::json;

    fn lookup() -> StateLookup {
        StateLookup::from_pairs([
            ("California".to_string(), "CA".to_string()),
            ("Texas".to_string(), "TX".to_string()),
        ])
    }

    fn view(rows: Vec<Vec<serde_json::Value>>) -> DatasetView {
        DatasetView::build(&rows, &SelectionState::default(), &LoaderConfig::ITEMS).unwrap()
    }

    #[test]
    fn test_revenue_summed_per_abbreviation() {
        let view = view(vec![
            sample_row(&[("location", json!("California")), ("purchase_amount_usd", json!(10.0))]),
            sample_row(&[("location", json!("California")), ("purchase_amount_usd", json!(15.0))]),
            sample_row(&[("location", json!("Texas")), ("purchase_amount_usd", json!(7.0))]),
        ]);
        let (series, unmatched) = revenue_by_state(&view, &lookup());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].abbreviation, "CA");
        assert_eq!(series[0].revenue, 25.0);
        assert_eq!(series[1].abbreviation, "TX");
        assert_eq!(series[1].revenue, 7.0);
        assert_eq!(unmatched, 0.0);
    }

    #[test]
    fn test_unmatched_location_excluded_but_not_lost() {
        let view = view(vec![
            sample_row(&[("location", json!("California")), ("purchase_amount_usd", json!(10.0))]),
            sample_row(&[("location", json!("Unknownstan")), ("purchase_amount_usd", json!(99.0))]),
        ]);
        let (series, unmatched) = revenue_by_state(&view, &lookup());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].abbreviation, "CA");
        assert_eq!(unmatched, 99.0);
        // The unmatched row still counts toward the global revenue scalar.
        assert_eq!(view.total_revenue(), 109.0);
    }

    #[test]
    fn test_lookup_file_format_parses() {
        let raw = r#"[{"name": "California", "abbreviation": "CA"}]"#;
        let entries: Vec<StateEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries[0].abbreviation, "CA");
    }
}
