use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::shared::error::DatasetError;

/// Column order of the SalesTxs result set. Rows returned by the store must
/// match this list in arity and order; a mismatch is a fatal schema error,
/// never a silently misaligned table.
pub const SALES_COLUMNS: [&str; 19] = [
    "age",
    "category",
    "color",
    "customer_id",
    "discount_applied",
    "frequency_of_purchases",
    "gender",
    "item_purchased",
    "location",
    "payment_method",
    "previous_purchases",
    "promo_code_used",
    "purchase_amount_usd",
    "purchase_time",
    "review_rating",
    "season",
    "shipping_type",
    "size",
    "subscription_status",
];

static COLUMN_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    SALES_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect()
});

/// One typed row of the sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub age: i64,
    pub category: String,
    pub color: String,
    pub customer_id: Option<String>,
    pub discount_applied: String,
    pub frequency_of_purchases: String,
    pub gender: String,
    pub item_purchased: String,
    pub location: String,
    pub payment_method: String,
    pub previous_purchases: i64,
    pub promo_code_used: String,
    pub purchase_amount_usd: f64,
    pub purchase_time: String,
    pub review_rating: f64,
    pub season: String,
    pub shipping_type: String,
    pub size: String,
    pub subscription_status: String,
}

fn field<'a>(row: &'a [Value], name: &'static str) -> &'a Value {
    &row[COLUMN_INDEX[name]]
}

fn str_field(row: &[Value], name: &'static str) -> Result<String, DatasetError> {
    field(row, name)
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| DatasetError::SchemaMismatch(format!("column '{name}' is not a string")))
}

fn opt_str_field(row: &[Value], name: &'static str) -> Result<Option<String>, DatasetError> {
    let value = field(row, name);
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_str()
        .map(|s| Some(s.to_string()))
        .ok_or_else(|| DatasetError::SchemaMismatch(format!("column '{name}' is not a string")))
}

fn int_field(row: &[Value], name: &'static str) -> Result<i64, DatasetError> {
    field(row, name)
        .as_i64()
        .ok_or_else(|| DatasetError::SchemaMismatch(format!("column '{name}' is not an integer")))
}

fn float_field(row: &[Value], name: &'static str) -> Result<f64, DatasetError> {
    field(row, name)
        .as_f64()
        .ok_or_else(|| DatasetError::SchemaMismatch(format!("column '{name}' is not numeric")))
}

impl TransactionRecord {
    /// Zip one positional row against the named column list.
    ///
    /// `age` has a single canonical type (integer) asserted here; a value of
    /// any other type is schema drift and fails, it is not re-cast per page.
    pub fn from_row(row: &[Value]) -> Result<Self, DatasetError> {
        if row.len() != SALES_COLUMNS.len() {
            return Err(DatasetError::SchemaMismatch(format!(
                "expected {} columns, got {}",
                SALES_COLUMNS.len(),
                row.len()
            )));
        }

        Ok(Self {
            age: int_field(row, "age")?,
            category: str_field(row, "category")?,
            color: str_field(row, "color")?,
            customer_id: opt_str_field(row, "customer_id")?,
            discount_applied: str_field(row, "discount_applied")?,
            frequency_of_purchases: str_field(row, "frequency_of_purchases")?,
            gender: str_field(row, "gender")?,
            item_purchased: str_field(row, "item_purchased")?,
            location: str_field(row, "location")?,
            payment_method: str_field(row, "payment_method")?,
            previous_purchases: int_field(row, "previous_purchases")?,
            promo_code_used: str_field(row, "promo_code_used")?,
            purchase_amount_usd: float_field(row, "purchase_amount_usd")?,
            purchase_time: str_field(row, "purchase_time")?,
            review_rating: float_field(row, "review_rating")?,
            season: str_field(row, "season")?,
            shipping_type: str_field(row, "shipping_type")?,
            size: str_field(row, "size")?,
            subscription_status: str_field(row, "subscription_status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testdata::sample_row;
    use serde_json::json;

    #[test]
    fn test_from_row_zips_by_name() {
        let row = sample_row(&[
            ("purchase_amount_usd", json!(123.45)),
            ("item_purchased", json!("Hat")),
            ("age", json!(47)),
        ]);
        let record = TransactionRecord::from_row(&row).unwrap();
        assert_eq!(record.purchase_amount_usd, 123.45);
        assert_eq!(record.item_purchased, "Hat");
        assert_eq!(record.age, 47);

        // The value must land in the position named by the contract, not at
        // a hard-coded index.
        let expected_pos = SALES_COLUMNS
            .iter()
            .position(|c| *c == "purchase_amount_usd")
            .unwrap();
        assert_eq!(row[expected_pos], json!(123.45));
    }

    #[test]
    fn test_from_row_rejects_wrong_arity() {
        let mut row = sample_row(&[]);
        row.pop();
        let err = TransactionRecord::from_row(&row).unwrap_err();
        assert!(matches!(err, DatasetError::SchemaMismatch(_)));

        let mut row = sample_row(&[]);
        row.push(json!("extra"));
        let err = TransactionRecord::from_row(&row).unwrap_err();
        assert!(matches!(err, DatasetError::SchemaMismatch(_)));
    }

    #[test]
    fn test_age_has_one_canonical_type() {
        let row = sample_row(&[("age", json!("35"))]);
        let err = TransactionRecord::from_row(&row).unwrap_err();
        assert!(matches!(err, DatasetError::SchemaMismatch(_)));

        let row = sample_row(&[("age", json!(35.5))]);
        let err = TransactionRecord::from_row(&row).unwrap_err();
        assert!(matches!(err, DatasetError::SchemaMismatch(_)));
    }

    #[test]
    fn test_null_customer_id_is_allowed() {
        let row = sample_row(&[("customer_id", json!(null))]);
        let record = TransactionRecord::from_row(&row).unwrap();
        assert!(record.customer_id.is_none());
    }

    #[test]
    fn test_integer_amount_is_accepted_as_numeric() {
        let row = sample_row(&[("purchase_amount_usd", json!(50))]);
        let record = TransactionRecord::from_row(&row).unwrap();
        assert_eq!(record.purchase_amount_usd, 50.0);
    }
}
