use crate::domain::distance;
use thiserror::Error;

/// A WGS-84 geographic position in decimal degrees.
///
/// `new` is unchecked so the distance formula can be fed any pair of numbers;
/// everything crossing the service boundary goes through `try_new`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lng")]
    longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid coordinate format. Expected 'latitude,longitude' (e.g., '7.9570,80.7603')")]
    InvalidFormat,

    #[error("Invalid latitude: {0}. Must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}. Must be between -180 and 180")]
    InvalidLongitude(f64),
}

#[derive(serde::Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::try_new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting anything that is not a position on Earth
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Self::new(latitude, longitude))
    }

    /// Parse from "latitude,longitude" string format
    ///
    /// Expected format: "latitude,longitude" (e.g., "7.9570,80.7603")
    pub fn parse(s: &str) -> Result<Self, CoordinateError> {
        let parts: Vec<&str> = s.split(',').collect();

        if parts.len() != 2 {
            return Err(CoordinateError::InvalidFormat);
        }

        let lat = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat)?;

        let lng = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat)?;

        Self::try_new(lat, lng)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other`, in kilometres.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        distance::distance_km(self, other)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
