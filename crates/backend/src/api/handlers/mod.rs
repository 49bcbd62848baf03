// Dashboard handlers (d100-d102)
pub mod d100_product;
pub mod d101_sales;
pub mod d102_insights;

// Session/selection handlers
pub mod session;

use axum::http::StatusCode;

use crate::shared::error::DatasetError;

/// A store outage is the caller's 502; everything else is a 500.
pub(crate) fn error_status(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<DatasetError>() {
        Some(DatasetError::Connection(_)) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
