use crate::configuration::Settings;
use crate::domain::Registry;
use crate::domain::position::{OffsetBound, SharedOffsets};
use crate::routes::{health_check, locations, verifications};
use actix_web::{App, HttpServer, dev::Server, web, web::Data};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// How positions are produced for verification requests.
pub struct PositionPolicy {
    pub live_timeout: Duration,
    pub offset_bound: OffsetBound,
    pub offsets: SharedOffsets,
}

pub struct Application {
    port: u16,
    server: Server,
}
impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let registry = configuration.registry()?;
        tracing::info!(locations = registry.len(), "Location registry loaded");

        let position_policy = PositionPolicy {
            live_timeout: configuration.position.live_timeout(),
            offset_bound: configuration.position.offset_bound()?,
            offsets: SharedOffsets::new(configuration.position.synthetic_seed),
        };

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, registry, position_policy)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    registry: Registry,
    position_policy: PositionPolicy,
) -> Result<Server, anyhow::Error> {
    // Wrap the shared state in a smart pointer
    let registry = Data::new(registry);
    let position_policy = Data::new(position_policy);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/locations", web::get().to(locations::get_all))
            .route("/locations/{id}", web::get().to(locations::get_one))
            .route("/verifications", web::post().to(verifications::create))
            // Get pointer copy and attach it to the application state
            .app_data(registry.clone())
            .app_data(position_policy.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
