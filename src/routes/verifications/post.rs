use crate::{
    domain::{
        Coordinate, Registry,
        position::{PositionMode, PositionUnavailable, ReportedPosition, get_position},
        verify_proximity,
    },
    routes::verifications::{Verification, VerificationError},
    startup::PositionPolicy,
};
use actix_web::{HttpResponse, web};
use chrono::Utc;

#[derive(serde::Deserialize)]
pub struct VerificationRequest {
    location_id: String,
    mode: PositionMode,
    /// What the client's location service returned, for `live` mode.
    #[serde(default)]
    position: Option<Coordinate>,
    /// Why the client's location service failed, for `live` mode.
    #[serde(default)]
    position_error: Option<PositionUnavailable>,
}

#[tracing::instrument(
    name = "Verifying a visit",
    skip(body, registry, policy),
    fields(
        location_id = %body.location_id,
        mode = body.mode.as_str(),
        distance_km = tracing::field::Empty,
        verified = tracing::field::Empty
    )
)]
pub async fn create(
    body: web::Json<VerificationRequest>,
    registry: web::Data<Registry>,
    policy: web::Data<PositionPolicy>,
) -> Result<HttpResponse, VerificationError> {
    let body = body.into_inner();
    let location = registry.lookup(&body.location_id)?;

    let position = get_position(
        body.mode,
        ReportedPosition::new(body.position, body.position_error),
        location.coordinate,
        policy.offset_bound,
        &policy.offsets,
        policy.live_timeout,
    )
    .await?;

    let result = verify_proximity(position, location.id.as_str(), &registry)?;

    let span = tracing::Span::current();
    span.record("distance_km", result.distance_km);
    span.record("verified", result.verified);

    Ok(HttpResponse::Ok().json(Verification {
        location_id: body.location_id,
        mode: body.mode,
        position,
        result,
        checked_at: Utc::now(),
    }))
}
