use serde::{Deserialize, Serialize};

/// The 25 item names carried by the SalesTxs catalog. Rows are not constrained
/// to this list, but the item multi-select offers exactly these values.
pub const PRODUCT_ITEMS: [&str; 25] = [
    "Blouse",
    "Jewelry",
    "Pants",
    "Shirt",
    "Dress",
    "Sweater",
    "Jacket",
    "Belt",
    "Sunglasses",
    "Coat",
    "Sandals",
    "Socks",
    "Skirt",
    "Shorts",
    "Scarf",
    "Hat",
    "Handbag",
    "Hoodie",
    "Shoes",
    "T-shirt",
    "Sneakers",
    "Boots",
    "Backpack",
    "Gloves",
    "Jeans",
];

/// Known payment methods.
pub const PAYMENT_METHODS: [&str; 6] = [
    "PayPal",
    "Credit Card",
    "Cash",
    "Debit Card",
    "Venmo",
    "Bank Transfer",
];

/// Known seasons.
pub const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// Multi-select filter state owned by one user session.
///
/// An empty list on a dimension means "nothing selected" and filters every
/// row out; it is not treated as "no filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_items: Vec<String>,
    pub selected_payment_methods: Vec<String>,
    pub selected_seasons: Vec<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_items: PRODUCT_ITEMS.iter().map(|s| s.to_string()).collect(),
            selected_payment_methods: PAYMENT_METHODS.iter().map(|s| s.to_string()).collect(),
            selected_seasons: SEASONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Partial selection write. Dimensions left as `None` keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_payment_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_seasons: Option<Vec<String>>,
}
