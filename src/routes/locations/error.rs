use crate::{domain::LocationNotFound, errors::error_chain_fmt};
use actix_web::{ResponseError, http::StatusCode};
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum LocationError {
    #[error(transparent)]
    NotFound(#[from] LocationNotFound),
}
impl ResponseError for LocationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
impl std::fmt::Debug for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
