use checkin_backend::{
    build_app,
    config::{get_config, init_config},
    database::{pool::create_pool, run_migrations},
    middleware::cors::cors_layer,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    run_migrations(&pool).await?;

    let app_state = AppState::new(pool);

    if let Some(dir) = &config.fixtures_dir {
        info!("Loading fixtures from {}", dir);
        let report = app_state.fixture_service.load_dir(dir).await?;
        info!(
            events = report.events_inserted,
            hardware = report.hardware_inserted,
            users = report.users_inserted,
            "Fixtures applied"
        );
    }

    let app = build_app(app_state).layer(cors_layer(&config.cors_allowed_origins));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
