pub mod actors;
pub mod categories;
pub mod feature_types;
pub mod features;
pub mod movies;

use serde::Serialize;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize)]
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
