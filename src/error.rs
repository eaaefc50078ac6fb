use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorBody;
use crate::provider::ProviderError;

pub const PROMPT_REQUIRED: &str = "`prompt` is required.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", PROMPT_REQUIRED)]
    Validation,

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    // Display is forwarded verbatim to the caller
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
