//! Shared response envelope types for API handlers.
//!
//! Every successful response is `{ "success": true, "data": ... }`. Lists put
//! their rows under `data.items` with `data.total`; deletes answer with a bare
//! success flag in `data`.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(project)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload of every list operation.
#[derive(Debug, Serialize)]
pub struct ListData<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> From<Vec<T>> for ListData<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Payload of delete operations.
#[derive(Debug, Serialize)]
pub struct DeleteData {
    pub success: bool,
}

impl DeleteData {
    pub fn done() -> Self {
        Self { success: true }
    }
}
