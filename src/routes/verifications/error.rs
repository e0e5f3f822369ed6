use crate::{
    domain::{LocationNotFound, position::PositionUnavailable},
    errors::error_chain_fmt,
};
use actix_web::{ResponseError, http::StatusCode};
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum VerificationError {
    #[error(transparent)]
    LocationNotFound(#[from] LocationNotFound),
    #[error("Position unavailable: {0}")]
    PositionUnavailable(#[from] PositionUnavailable),
}
impl ResponseError for VerificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::LocationNotFound(_) => StatusCode::NOT_FOUND,
            Self::PositionUnavailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
impl std::fmt::Debug for VerificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
