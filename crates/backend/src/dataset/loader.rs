use contracts::shared::catalog::SelectionState;
use serde_json::Value;

use super::schema::TransactionRecord;
use crate::shared::error::DatasetError;
use crate::shared::format::round3;
use crate::shared::store::{SqlStore, SALES_QUERY};

/// Selection dimensions a dashboard can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    ItemPurchased,
    PaymentMethod,
    Season,
}

/// Per-dashboard loader configuration: which selection dimensions apply.
/// One parameterized loader replaces the per-page copies of the original.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub dimensions: &'static [FilterDimension],
}

impl LoaderConfig {
    /// Product and Sales dashboards filter on the item multi-select.
    pub const ITEMS: LoaderConfig = LoaderConfig {
        dimensions: &[FilterDimension::ItemPurchased],
    };

    /// Insights dashboard filters on payment method AND season.
    pub const PAYMENT_AND_SEASON: LoaderConfig = LoaderConfig {
        dimensions: &[FilterDimension::PaymentMethod, FilterDimension::Season],
    };
}

/// The filtered transaction table consumed by every visualization.
///
/// Immutable after construction; a filter change produces a new view rather
/// than patching this one.
#[derive(Debug)]
pub struct DatasetView {
    rows: Vec<TransactionRecord>,
}

impl DatasetView {
    /// Materialize raw rows per the schema contract, then keep a row iff its
    /// value on every configured dimension is a member of the corresponding
    /// selection subset. An empty subset yields an empty view, not "no
    /// filter".
    pub fn build(
        raw_rows: &[Vec<Value>],
        selection: &SelectionState,
        config: &LoaderConfig,
    ) -> Result<Self, DatasetError> {
        let mut rows = Vec::with_capacity(raw_rows.len());
        for raw in raw_rows {
            let record = TransactionRecord::from_row(raw)?;
            if config
                .dimensions
                .iter()
                .all(|dim| matches_dimension(dim, &record, selection))
            {
                rows.push(record);
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[TransactionRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of `purchase_amount_usd` over the filtered rows.
    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.purchase_amount_usd).sum()
    }

    /// Mean review rating rounded to 3 decimals. Signals on an empty view
    /// instead of returning NaN or a misleading zero.
    pub fn average_rating(&self) -> Result<f64, DatasetError> {
        if self.rows.is_empty() {
            return Err(DatasetError::EmptyResultAggregation("average_rating"));
        }
        let sum: f64 = self.rows.iter().map(|r| r.review_rating).sum();
        Ok(round3(sum / self.rows.len() as f64))
    }

    /// Count of rows with a non-null customer id.
    pub fn total_customers(&self) -> u64 {
        self.rows.iter().filter(|r| r.customer_id.is_some()).count() as u64
    }
}

fn matches_dimension(
    dim: &FilterDimension,
    record: &TransactionRecord,
    selection: &SelectionState,
) -> bool {
    match dim {
        FilterDimension::ItemPurchased => selection
            .selected_items
            .iter()
            .any(|v| v == &record.item_purchased),
        FilterDimension::PaymentMethod => selection
            .selected_payment_methods
            .iter()
            .any(|v| v == &record.payment_method),
        FilterDimension::Season => selection
            .selected_seasons
            .iter()
            .any(|v| v == &record.season),
    }
}

/// Execute the fixed sales query against the store and build the view.
/// Every render goes through here; results are never cached.
pub async fn load_dataset(
    store: &dyn SqlStore,
    selection: &SelectionState,
    config: &LoaderConfig,
) -> Result<DatasetView, DatasetError> {
    let raw_rows = store.execute(SALES_QUERY).await?;
    DatasetView::build(&raw_rows, selection, config)
}
