pub mod reports;
pub mod sessions;
pub mod users;

use serde::{Deserialize, Serialize};

/// Body of the endpoints that only report success.
#[derive(Debug, Deserialize, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
        }
    }
}
