use crate::domain::position::PositionMode;
use crate::domain::{Coordinate, VerificationResult};
use chrono::{DateTime, Utc};

mod error;
mod post;

pub use error::VerificationError;
pub use post::{VerificationRequest, create};

/// A proximity verdict together with the position it was computed from.
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Verification {
    pub location_id: String,
    pub mode: PositionMode,
    pub position: Coordinate,
    #[serde(flatten)]
    pub result: VerificationResult,
    pub checked_at: DateTime<Utc>,
}
