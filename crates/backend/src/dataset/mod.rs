pub mod loader;
pub mod metrics;
pub mod schema;

#[cfg(test)]
pub(crate) mod testdata {
    use serde_json::{json, Value};
    use std::collections::HashMap;

    use super::schema::SALES_COLUMNS;

    /// Build one positional row in schema order, with named overrides on top
    /// of a plausible default transaction.
    pub(crate) fn sample_row(overrides: &[(&str, Value)]) -> Vec<Value> {
        let mut values: HashMap<&str, Value> = HashMap::from([
            ("age", json!(30)),
            ("category", json!("Clothing")),
            ("color", json!("Blue")),
            ("customer_id", json!("c0")),
            ("discount_applied", json!("No")),
            ("frequency_of_purchases", json!("Weekly")),
            ("gender", json!("Female")),
            ("item_purchased", json!("Dress")),
            ("location", json!("California")),
            ("payment_method", json!("PayPal")),
            ("previous_purchases", json!(5)),
            ("promo_code_used", json!("No")),
            ("purchase_amount_usd", json!(10.0)),
            ("purchase_time", json!("2023-06-01 12:00:00")),
            ("review_rating", json!(4.0)),
            ("season", json!("Spring")),
            ("shipping_type", json!("Standard")),
            ("size", json!("M")),
            ("subscription_status", json!("No")),
        ]);
        for (name, value) in overrides {
            values.insert(name, value.clone());
        }
        SALES_COLUMNS.iter().map(|c| values[*c].clone()).collect()
    }
}
