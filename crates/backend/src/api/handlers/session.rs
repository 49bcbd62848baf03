use axum::{extract::Path, Json};
use contracts::shared::catalog::{SelectionState, SelectionUpdate};
use contracts::system::session::NewSessionResponse;
use uuid::Uuid;

use crate::shared::session::sessions;

/// POST /api/session
pub async fn create_session() -> Json<NewSessionResponse> {
    let session_id = Uuid::new_v4();
    // First read populates the full-catalog default selection.
    let _ = sessions().selection(session_id);
    tracing::info!("Session {} created", session_id);
    Json(NewSessionResponse { session_id })
}

/// GET /api/session/:id/selection
pub async fn get_selection(Path(session_id): Path<Uuid>) -> Json<SelectionState> {
    Json(sessions().selection(session_id))
}

/// PUT /api/session/:id/selection
pub async fn update_selection(
    Path(session_id): Path<Uuid>,
    Json(update): Json<SelectionUpdate>,
) -> Json<SelectionState> {
    tracing::info!("Session {}: selection updated", session_id);
    Json(sessions().update(session_id, update))
}
