use once_cell::sync::Lazy;
use pov::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so the two
    // branches cannot share a single binding.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to install tracing subscriber");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to install tracing subscriber");
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}
impl TestApp {
    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health_check", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_locations(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/locations", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_location(&self, id: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/locations/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verification(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/verifications", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

// Launch the application in the background
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Launch the application after letting the caller tweak its configuration
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".to_string();
        // Random available port
        c.application.port = 0;
        customise(&mut c);

        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();

    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client,
    }
}
