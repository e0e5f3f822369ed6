//! Where candidate positions come from.
//!
//! The verifier only ever sees a [`Coordinate`]. This module holds the two
//! ways of producing one: relaying what the client's platform location
//! service reported ([`ReportedPosition`]) or fabricating a point near a
//! landmark for demos and tests ([`SyntheticPosition`]). Neither falls back
//! to the other; that choice belongs to whoever calls them.

use crate::domain::Coordinate;
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    #[serde(alias = "real")]
    Live,
    #[serde(alias = "mock")]
    Synthetic,
}

impl PositionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Synthetic => "synthetic",
        }
    }
}

/// The position provider could not produce a coordinate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionUnavailable {
    #[error("Permission to read the device position was denied")]
    PermissionDenied,

    #[error("Timed out waiting for a position")]
    Timeout,

    #[error("The device could not determine its position")]
    #[serde(alias = "position_unavailable")]
    NoSignal,

    #[error("Position sensing is not supported by this client")]
    Unsupported,

    #[error("No position was reported")]
    NotReported,
}

#[allow(async_fn_in_trait)]
pub trait PositionSource {
    async fn acquire(&mut self) -> Result<Coordinate, PositionUnavailable>;
}

/// Bound `source` by `timeout`; an elapsed timer becomes [`PositionUnavailable::Timeout`].
pub async fn acquire_within<S>(
    source: &mut S,
    timeout: Duration,
) -> Result<Coordinate, PositionUnavailable>
where
    S: PositionSource,
{
    match tokio::time::timeout(timeout, source.acquire()).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Position acquisition timed out");
            Err(PositionUnavailable::Timeout)
        }
    }
}

// ── Live ──────────────────────────────────────────────────────────────────────

/// Outcome of a live position read performed by the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportedPosition(Result<Coordinate, PositionUnavailable>);

impl ReportedPosition {
    /// A reported failure wins over a coordinate sent alongside it.
    pub fn new(position: Option<Coordinate>, failure: Option<PositionUnavailable>) -> Self {
        let outcome = match (failure, position) {
            (Some(failure), _) => Err(failure),
            (None, Some(position)) => Ok(position),
            (None, None) => Err(PositionUnavailable::NotReported),
        };
        Self(outcome)
    }
}

impl PositionSource for ReportedPosition {
    async fn acquire(&mut self) -> Result<Coordinate, PositionUnavailable> {
        self.0
    }
}

// ── Synthetic ─────────────────────────────────────────────────────────────────

/// Source of uniform samples in `[0, 1)` used to perturb synthetic positions.
pub trait OffsetSource {
    fn unit(&mut self) -> f64;
}

/// Reproducible offsets from a seeded `StdRng`.
pub struct SeededOffsets(StdRng);

impl SeededOffsets {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream; the parent advances by one draw.
    pub fn fork(&mut self) -> SeededOffsets {
        let seed: u64 = StandardUniform.sample(&mut self.0);
        Self::new(seed ^ MIXING_CONSTANT)
    }
}

impl OffsetSource for SeededOffsets {
    fn unit(&mut self) -> f64 {
        StandardUniform.sample(&mut self.0)
    }
}

/// Offsets from the thread-local generator; not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadOffsets;

impl OffsetSource for ThreadOffsets {
    fn unit(&mut self) -> f64 {
        StandardUniform.sample(&mut rand::rng())
    }
}

/// Per-request offset stream handed out by [`SharedOffsets`].
pub enum RequestOffsets {
    Seeded(SeededOffsets),
    Thread(ThreadOffsets),
}

impl OffsetSource for RequestOffsets {
    fn unit(&mut self) -> f64 {
        match self {
            Self::Seeded(offsets) => offsets.unit(),
            Self::Thread(offsets) => offsets.unit(),
        }
    }
}

/// Process-wide offset state shared between request handlers.
///
/// A seeded root only forks children under the lock, so a request never holds
/// it while acquiring a position.
pub enum SharedOffsets {
    Seeded(Mutex<SeededOffsets>),
    Unseeded,
}

impl SharedOffsets {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Mutex::new(SeededOffsets::new(seed))),
            None => Self::Unseeded,
        }
    }

    pub fn for_request(&self) -> RequestOffsets {
        match self {
            Self::Seeded(root) => {
                let mut root = root.lock().unwrap_or_else(PoisonError::into_inner);
                RequestOffsets::Seeded(root.fork())
            }
            Self::Unseeded => RequestOffsets::Thread(ThreadOffsets),
        }
    }
}

/// Full width, in degrees, of the square a synthetic position is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBound(f64);

#[derive(Debug, Error)]
#[error("Synthetic offset bound must be a finite, non-negative number of degrees, got {0}")]
pub struct OffsetBoundError(f64);

impl OffsetBound {
    pub fn parse(degrees: f64) -> Result<Self, OffsetBoundError> {
        if !degrees.is_finite() || degrees < 0.0 {
            return Err(OffsetBoundError(degrees));
        }
        Ok(Self(degrees))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

/// Reference coordinate plus a bounded uniform perturbation on each axis.
pub struct SyntheticPosition<O> {
    reference: Coordinate,
    bound: OffsetBound,
    offsets: O,
}

impl<O: OffsetSource> SyntheticPosition<O> {
    pub fn new(reference: Coordinate, bound: OffsetBound, offsets: O) -> Self {
        Self {
            reference,
            bound,
            offsets,
        }
    }

    /// Each axis moves by at most half the bound in either direction.
    pub fn next(&mut self) -> Coordinate {
        let span = self.bound.degrees();
        let latitude = self.reference.latitude() + (self.offsets.unit() - 0.5) * span;
        let longitude = self.reference.longitude() + (self.offsets.unit() - 0.5) * span;

        Coordinate::new(latitude.clamp(-90.0, 90.0), wrap_longitude(longitude))
    }
}

impl<O: OffsetSource> PositionSource for SyntheticPosition<O> {
    async fn acquire(&mut self) -> Result<Coordinate, PositionUnavailable> {
        Ok(self.next())
    }
}

/// Acquire a position the way `mode` asks for.
///
/// `reported` is only consulted in live mode. Synthetic mode draws around
/// `reference` from a fresh per-request stream forked off `offsets`.
pub async fn get_position(
    mode: PositionMode,
    reported: ReportedPosition,
    reference: Coordinate,
    bound: OffsetBound,
    offsets: &SharedOffsets,
    timeout: Duration,
) -> Result<Coordinate, PositionUnavailable> {
    match mode {
        PositionMode::Live => {
            let mut source = reported;
            acquire_within(&mut source, timeout).await
        }
        PositionMode::Synthetic => {
            let mut source = SyntheticPosition::new(reference, bound, offsets.for_request());
            acquire_within(&mut source, timeout).await
        }
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}
