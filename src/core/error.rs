use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shared::views::{render_view, ViewError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("View error: {0}")]
    Template(#[from] ViewError),

    /// Nonexistent record. Rendered exactly like `Forbidden`.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Not allowed to touch the record. Rendered exactly like `NotFound`.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Submitted CSRF token does not match the session token
    #[error("Invalid CSRF token")]
    InvalidToken,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorPage {
    status: u16,
}

fn error_page(status: StatusCode) -> Response {
    let page = ErrorPage {
        status: status.as_u16(),
    };
    match render_view("error/unknown.html", &page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (status, "An unknown error occurred.").into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Template(ref e) => {
                tracing::error!("View error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::NotFound(ref msg) | AppError::Forbidden(ref msg) => {
                tracing::debug!("Unknown error page: {}", msg);
                error_page(StatusCode::NOT_FOUND)
            }
            AppError::InvalidToken => {
                tracing::warn!("CSRF token mismatch, mutation skipped");
                error_page(StatusCode::FORBIDDEN)
            }
            AppError::Unauthorized(ref msg) => {
                tracing::debug!("Redirecting to login: {}", msg);
                Redirect::to("/login").into_response()
            }
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Bad request: {}", msg);
                error_page(StatusCode::BAD_REQUEST)
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_and_forbidden_are_indistinguishable() {
        let not_found = AppError::NotFound("Report x not found".to_string()).into_response();
        let forbidden = AppError::Forbidden("not the author".to_string()).into_response();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(forbidden.status(), not_found.status());
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let response = AppError::Unauthorized("no session".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[test]
    fn test_invalid_token_is_forbidden() {
        let response = AppError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
