use serde::{Deserialize, Serialize};

/// Request body for POST /add
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddRequest {
    pub key: String,
    pub value: String,
}

/// Confirmation message for mutating operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single key-value entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EntryResponse {
    pub key: String,
    pub value: String,
}

/// Response type for list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub entries: Vec<EntryResponse>,
}
