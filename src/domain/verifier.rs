use crate::domain::registry::{LocationNotFound, Registry};
use crate::domain::{Coordinate, distance};

/// Outcome of a single proximity check.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub verified: bool,
    pub distance_km: f64,
}

/// Check whether `user` lies within the verification radius of `location_id`.
///
/// An identifier missing from `registry` is surfaced as [`LocationNotFound`];
/// deciding whether that means "not verified" is left to the caller.
pub fn verify_proximity(
    user: Coordinate,
    location_id: &str,
    registry: &Registry,
) -> Result<VerificationResult, LocationNotFound> {
    let record = registry.lookup(location_id)?;

    let distance_km = distance::distance_km(user, record.coordinate);
    let verified = record.radius_km.contains(distance_km);

    tracing::debug!(
        location_id,
        distance_km,
        radius_km = record.radius_km.km(),
        verified,
        "Checked proximity"
    );

    Ok(VerificationResult {
        verified,
        distance_km,
    })
}
