use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
