use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::error;

use crate::models::responses::{ErrorBody, ErrorResponse};
use crate::models::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingFields(String),
    #[error("{0}")]
    MissingId(String),
    #[error("ID inválido: {0}")]
    InvalidId(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("Algún autor no existe: {}", .missing.join(", "))]
    UnknownAuthors { missing: Vec<String> },
    #[error("{0}")]
    NotFound(String),
    #[error("Bad request, no path : {path} found for method : {method}")]
    NoEndpoint { method: String, path: String },
    #[error("internal server error")]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFields(_) => "missing_fields",
            ApiError::MissingId(_) => "missing_id",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::UnknownAuthors { .. } => "unknown_author",
            ApiError::NotFound(_) => "not_found",
            ApiError::NoEndpoint { .. } => "no_endpoint",
            ApiError::Storage(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(err) = &self {
            error!("storage failure: {}", err);
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        let err = ApiError::MissingFields("Faltan campos".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "missing_fields");
        assert_eq!(err.to_string(), "Faltan campos");
    }

    #[test]
    fn unknown_authors_lists_the_missing_ids() {
        let err = ApiError::UnknownAuthors {
            missing: vec!["aaa".to_string(), "bbb".to_string()],
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Algún autor no existe: aaa, bbb");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound("Libro no encontrado.".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn unrouted_requests_keep_the_original_wording() {
        let err = ApiError::NoEndpoint {
            method: "PATCH".to_string(),
            path: "/nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bad request, no path : /nope found for method : PATCH"
        );
    }
}
