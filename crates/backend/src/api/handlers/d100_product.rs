use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::common::DashboardRequest;
use contracts::dashboards::d100_product::ProductDashboardResponse;

use crate::dashboards::d100_product::service;

/// GET /api/d100/product?session_id=...
pub async fn get_product_dashboard(
    Query(request): Query<DashboardRequest>,
) -> Result<Json<ProductDashboardResponse>, StatusCode> {
    match service::get_product_dashboard(request.session_id).await {
        Ok(response) => {
            tracing::info!(
                "D100 Product: returning {} filtered rows for session {}",
                response.globals.row_count,
                request.session_id
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D100 Product: failed to build dashboard: {}", e);
            Err(super::error_status(&e))
        }
    }
}
