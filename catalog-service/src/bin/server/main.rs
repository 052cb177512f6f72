use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use catalog_service::config::Config;
use catalog_service::domain::authentication::service::AuthService;
use catalog_service::domain::book::service::BookService;
use catalog_service::domain::seller::service::SellerService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::PostgresBookRepository;
use catalog_service::outbound::repositories::PostgresSellerRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        lookup_timeout_ms = config.database.lookup_timeout_ms,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let signing_key = match config.jwt.secret() {
        Some(secret) => secret.to_vec(),
        None => {
            tracing::warn!(
                "No signing key configured; generated a per-process key. \
                 Tokens will not survive a restart."
            );
            JwtHandler::generate_secret().to_vec()
        }
    };

    let password_hasher = PasswordHasher::with_params(
        config.password.memory_cost_kib,
        config.password.time_cost,
        config.password.parallelism,
    )?;

    let authenticator = Arc::new(
        Authenticator::new(&signing_key)
            .with_password_hasher(password_hasher.clone())
            .with_token_ttl(chrono::Duration::minutes(config.jwt.expiration_minutes)),
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let seller_repository = Arc::new(PostgresSellerRepository::new(pg_pool.clone()));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool));

    let seller_service = Arc::new(SellerService::new(
        Arc::clone(&seller_repository),
        password_hasher,
    ));
    let book_service = Arc::new(BookService::new(
        book_repository,
        Arc::clone(&seller_repository),
    ));
    let auth_service = Arc::new(
        AuthService::new(seller_repository, authenticator)
            .with_lookup_timeout(Duration::from_millis(config.database.lookup_timeout_ms)),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(seller_service, book_service, auth_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
