use crate::{
    domain::{LocationRecord, Registry},
    routes::locations::LocationError,
};
use actix_web::{HttpResponse, web};

#[tracing::instrument(name = "Listing locations", skip(registry))]
pub async fn get_all(registry: web::Data<Registry>) -> HttpResponse {
    let locations: Vec<&LocationRecord> = registry.iter().collect();

    HttpResponse::Ok().json(locations)
}

#[tracing::instrument(name = "Looking up a location", skip(registry))]
pub async fn get_one(
    path: web::Path<String>,
    registry: web::Data<Registry>,
) -> Result<HttpResponse, LocationError> {
    let location = registry.lookup(&path)?;

    Ok(HttpResponse::Ok().json(location))
}
