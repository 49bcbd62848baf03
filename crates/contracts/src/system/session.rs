use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for POST /api/session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionResponse {
    pub session_id: Uuid,
}
