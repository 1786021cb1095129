use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eyre;
use shiki_core::model::ValidationError;

#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    Internal(eyre::Error),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            HttpError::Internal(err) => {
                tracing::error!("{:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server error: {}", err),
                )
                    .into_response()
            }
        }
    }
}

macro_rules! impl_from {
    ($from:ty) => {
        impl From<$from> for HttpError {
            fn from(err: $from) -> Self {
                Self::Internal(err.into())
            }
        }
    };
}

impl_from!(std::io::Error);
impl_from!(eyre::Report);

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, HttpError>;

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) | HttpError::BadRequest(msg) => write!(f, "{}", msg),
            HttpError::Internal(err) => write!(f, "{}", err),
        }
    }
}
