use serde::{Deserialize, Serialize};

/// Error body returned by the API on any non-2xx response.
/// The frontend shows `message` verbatim when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: Option<String>,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> ErrorMessage {
        ErrorMessage {
            message: Some(message.into()),
        }
    }
}

/// Query parameters accepted by the public listing endpoints.
/// Everything is optional; defaults are applied server-side.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
