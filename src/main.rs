use std::net::SocketAddr;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewee_api::config::Config;
use crewee_api::routes::build_router;
use crewee_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::load();

    init_tracing(&config);

    tracing::info!(env = %config.env, port = %config.port, "Starting crewee api server...");

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_open_conns)
        .max_lifetime(config.database.conn_max_lifetime)
        .connect(&config.connection_string())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connection established.");

    let app = build_router(AppState::new(pool));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .expect("PORT is not in the correct format");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Connect info is attached so the request logger can see remote IPs
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server.");
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
