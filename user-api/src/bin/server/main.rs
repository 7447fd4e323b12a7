use std::sync::Arc;

use anyhow::Context;
use authn::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_api::config::Config;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;
use user_api::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Missing database URL or signing secret fails here, never at request time.
    let config = Config::load().context("failed to load configuration")?;
    anyhow::ensure!(
        !config.auth.secret.is_empty(),
        "auth.secret must not be empty"
    );

    tracing::info!(
        port = config.server.port,
        token_ttl_hours = config.auth.token_ttl_hours,
        require_gate = config.auth.require_gate,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;
    tracing::info!(max_connections = 5, "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!("Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.auth.secret.as_bytes(),
        config.auth.token_ttl_hours,
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let user_service = Arc::new(UserService::new(user_repository));

    let address = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Http server listening");

    let application = create_router(user_service, authenticator, config.auth.require_gate);
    axum::serve(listener, application).await?;

    Ok(())
}
