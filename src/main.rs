use api_rest::{app, AppState, DEMO_USER_ID};
use hms_core::{HospitalStore, UpsertUser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the hospital administration service.
///
/// Builds the in-memory store (seeded with the sample departments and
/// doctors plus the demo user), then serves the REST API until shutdown.
/// State lives in process memory only and does not survive a restart.
///
/// # Environment Variables
/// - `HMS_ADDR`: listen address (default: "0.0.0.0:3000")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hms_run=info".parse()?)
                .add_directive("hms_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HMS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let mut store = HospitalStore::new();
    store.upsert_user(UpsertUser {
        id: DEMO_USER_ID.into(),
        email: Some("admin@hospital.local".into()),
        first_name: Some("Demo".into()),
        last_name: Some("Admin".into()),
        profile_image_url: None,
    });

    tracing::info!("++ Starting HMS REST on {}", addr);

    let state = AppState::new(store);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
