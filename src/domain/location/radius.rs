use thiserror::Error;

/// Maximum distance, in kilometres, at which a visit still counts as verified.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VerificationRadius(f64);

#[derive(Debug, Error)]
pub enum VerificationRadiusError {
    #[error("Verification radius must be a finite number of kilometres, got {0}")]
    NotFinite(f64),

    #[error("Verification radius must be greater than zero, got {0}")]
    NotPositive(f64),
}

impl VerificationRadius {
    pub fn parse(km: f64) -> Result<Self, VerificationRadiusError> {
        if !km.is_finite() {
            return Err(VerificationRadiusError::NotFinite(km));
        }

        if km <= 0.0 {
            return Err(VerificationRadiusError::NotPositive(km));
        }

        Ok(Self(km))
    }

    pub fn km(&self) -> f64 {
        self.0
    }

    /// Inclusive: a distance equal to the radius is within it.
    pub fn contains(&self, distance_km: f64) -> bool {
        distance_km <= self.0
    }
}

impl std::fmt::Display for VerificationRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl serde::Serialize for VerificationRadius {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for VerificationRadius {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let km = f64::deserialize(deserializer)?;
        VerificationRadius::parse(km).map_err(serde::de::Error::custom)
    }
}
