use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::services::UpstreamError;

/// Application-level error type
///
/// Everything a handler can fail with collapses into one of two outcomes:
/// the upstream did not know the resource, or something else went wrong.
/// No other failure shape ever reaches a caller.
#[derive(Debug)]
pub enum AppError {
    /// The requested gist or revision does not exist upstream
    NotFound,
    /// Any other upstream failure (network error, non-404 status,
    /// malformed response body)
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: &'static str,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Gist not found"),
            Self::Upstream(detail) => write!(f, "Upstream failure: {detail}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                message: "Gist not found",
            }),
            Self::Upstream(detail) => {
                // The detail stays in the logs; callers only ever see the
                // generic message.
                tracing::error!(%detail, "upstream failure");
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: "Something went wrong",
                })
            }
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound => Self::NotFound,
            other => Self::Upstream(other.to_string()),
        }
    }
}
