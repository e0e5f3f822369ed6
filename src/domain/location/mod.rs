mod id;
mod name;
mod radius;
mod rarity;

// Public re-exports
pub use id::{LocationId, LocationIdError};
pub use name::{LocationName, LocationNameError};
pub use radius::{VerificationRadius, VerificationRadiusError};
pub use rarity::Rarity;

use crate::domain::Coordinate;

/// One verifiable destination.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: LocationName,
    pub coordinate: Coordinate,
    pub radius_km: VerificationRadius,
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}
