//! Read-only catalogue of verifiable locations.
//!
//! Built once at startup and shared by reference; nothing mutates it after
//! construction. Lookups are exact matches on the identifier and a miss is
//! always reported as [`LocationNotFound`], never mapped to another entry.

use crate::domain::Coordinate;
use crate::domain::location::{
    LocationId, LocationName, LocationRecord, Rarity, VerificationRadius,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug)]
pub struct Registry {
    records: Vec<LocationRecord>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Error, PartialEq)]
#[error("Location '{0}' is not registered")]
pub struct LocationNotFound(pub String);

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("A registry needs at least one location")]
    Empty,

    #[error("Location id '{0}' is registered more than once")]
    DuplicateId(LocationId),

    #[error("Invalid seed location: {0}")]
    InvalidSeed(String),
}

struct Seed {
    id: &'static str,
    name: &'static str,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    rarity: Rarity,
    description: &'static str,
    image_url: &'static str,
}

const SEED: [Seed; 3] = [
    Seed {
        id: "sigiriya",
        name: "Sigiriya",
        latitude: 7.9570,
        longitude: 80.7603,
        radius_km: 2.0,
        rarity: Rarity::Epic,
        description: "Ancient palace and fortress complex",
        image_url: "ipfs://bafybeif6yw4a6hnrvwujp4ku34dsreqj4fyivswgujebck2kj5quz5yzoa",
    },
    Seed {
        id: "kandy",
        name: "Temple of the Sacred Tooth Relic",
        latitude: 7.2906,
        longitude: 80.6337,
        radius_km: 1.5,
        rarity: Rarity::Rare,
        description: "Sacred Buddhist temple",
        image_url: "ipfs://bafybeihbdfet2q6yuhipcakjuo5lzahiub4jft7nejfto75jolqiduefpy",
    },
    Seed {
        id: "galle",
        name: "Galle Fort",
        latitude: 6.0535,
        longitude: 80.2210,
        radius_km: 1.0,
        rarity: Rarity::Common,
        description: "Historic coastal fortress",
        image_url: "ipfs://bafkreibxsbzpjqp7kufdyohqaj7c5qgymfxmkrw4rewp57g6zgvc6k6x3i",
    },
];

impl Seed {
    fn to_record(&self) -> Result<LocationRecord, RegistryError> {
        Ok(LocationRecord {
            id: LocationId::parse(self.id.to_string()).map_err(|e| self.invalid(e))?,
            name: LocationName::parse(self.name.to_string()).map_err(|e| self.invalid(e))?,
            coordinate: Coordinate::try_new(self.latitude, self.longitude)
                .map_err(|e| self.invalid(e))?,
            radius_km: VerificationRadius::parse(self.radius_km).map_err(|e| self.invalid(e))?,
            rarity: self.rarity,
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
        })
    }

    fn invalid(&self, e: impl std::fmt::Display) -> RegistryError {
        RegistryError::InvalidSeed(format!("{}: {}", self.id, e))
    }
}

impl Registry {
    pub fn new(records: Vec<LocationRecord>) -> Result<Self, RegistryError> {
        if records.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.as_str().to_string(), position).is_some() {
                return Err(RegistryError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// The built-in Sri Lankan landmarks.
    pub fn seed() -> Result<Self, RegistryError> {
        let records = SEED
            .iter()
            .map(Seed::to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    pub fn lookup(&self, id: &str) -> Result<&LocationRecord, LocationNotFound> {
        self.index
            .get(id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| LocationNotFound(id.to_string()))
    }

    /// Records in the order they were registered.
    pub fn iter(&self) -> impl Iterator<Item = &LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
