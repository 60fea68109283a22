use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use inkpanel_core::error::CoreError;
use inkpanel_db::error::FOREIGN_KEY_VIOLATION;
use inkpanel_db::StoreError;
use serde::Serialize;

/// Message sent for every 500; the cause only goes to the log.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error type returned by every handler and extractor in this crate.
///
/// Domain failures arrive as [`CoreError`], store failures as [`StoreError`].
/// All of them render as `{ "success": false, "error": ..., "code": ... }`,
/// including requests the router could not match.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No route for {method} {uri}")]
    NoRoute { method: Method, uri: Uri },

    #[error("Method {method} not allowed for {uri}")]
    MethodNotAllowed { method: Method, uri: Uri },
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of a failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    code: &'static str,
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. })
            | AppError::Store(StoreError::MissingParent { .. })
            | AppError::NoRoute { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::MethodNotAllowed { .. } => {
                (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED")
            }
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
        }
    }

    /// Client-facing message. Internal causes are logged here and replaced.
    fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id })
            | AppError::Store(StoreError::MissingParent { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg) | CoreError::Unauthorized(msg)) => {
                msg.clone()
            }
            AppError::NoRoute { .. } | AppError::MethodNotAllowed { .. } => self.to_string(),
            AppError::Store(StoreError::Database(err)) => match classify_sqlx_error(err) {
                (StatusCode::NOT_FOUND, _) => "Resource not found".to_string(),
                _ => {
                    tracing::error!(error = %err, "Database error");
                    INTERNAL_MESSAGE.to_string()
                }
            },
        }
    }
}

/// Map a raw sqlx error to a status and code.
///
/// A missing row and a foreign-key violation both mean a referenced resource
/// is gone. Everything else is a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        let body = ErrorBody {
            success: false,
            error: self.public_message(),
            code,
        };
        (status, Json(body)).into_response()
    }
}

/// Router fallback for paths with no route.
pub async fn no_route(method: Method, uri: Uri) -> AppError {
    AppError::NoRoute { method, uri }
}

/// Router fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed { method, uri }
}
