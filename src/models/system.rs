use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::EventState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SystemStateResponse {
    pub state: EventState,
}
