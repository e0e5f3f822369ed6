mod coordinate;
mod distance;
pub mod location;
pub mod position;
mod registry;
mod verifier;

#[cfg(test)]
pub(crate) mod test_data;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use location::LocationRecord;
pub use registry::{LocationNotFound, Registry, RegistryError};
pub use verifier::{VerificationResult, verify_proximity};
