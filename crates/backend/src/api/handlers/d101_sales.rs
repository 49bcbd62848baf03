use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::common::DashboardRequest;
use contracts::dashboards::d101_sales::SalesDashboardResponse;

use crate::dashboards::d101_sales::service;

/// GET /api/d101/sales?session_id=...
pub async fn get_sales_dashboard(
    Query(request): Query<DashboardRequest>,
) -> Result<Json<SalesDashboardResponse>, StatusCode> {
    match service::get_sales_dashboard(request.session_id).await {
        Ok(response) => {
            tracing::info!(
                "D101 Sales: returning {} states for session {}",
                response.state_revenue.len(),
                request.session_id
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D101 Sales: failed to build dashboard: {}", e);
            Err(super::error_status(&e))
        }
    }
}
