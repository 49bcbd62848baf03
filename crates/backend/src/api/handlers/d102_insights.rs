use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::common::DashboardRequest;
use contracts::dashboards::d102_insights::InsightsDashboardResponse;

use crate::dashboards::d102_insights::service;

/// GET /api/d102/insights?session_id=...
pub async fn get_insights_dashboard(
    Query(request): Query<DashboardRequest>,
) -> Result<Json<InsightsDashboardResponse>, StatusCode> {
    match service::get_insights_dashboard(request.session_id).await {
        Ok(response) => {
            tracing::info!(
                "D102 Insights: returning {} payment methods for session {}",
                response.purchases_by_payment_method.len(),
                request.session_id
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D102 Insights: failed to build dashboard: {}", e);
            Err(super::error_status(&e))
        }
    }
}
