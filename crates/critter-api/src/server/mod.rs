//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use critter_common::{AppConfig, AppError};
use critter_db::{
    create_pool, run_migrations, DatabaseConfig, PgAccountRepository, PgGameRepository,
    PgRosterRepository, PgVerificationRepository,
};
use critter_mail::SmtpMailer;
use critter_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), &state.config().cors);
    let router = router.merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Schema migrations applied");

    // Create repositories
    let account_repo = Arc::new(PgAccountRepository::new(pool.clone()));
    let game_repo = Arc::new(PgGameRepository::new(pool.clone()));
    let roster_repo = Arc::new(PgRosterRepository::new(pool.clone()));
    let verification_repo = Arc::new(PgVerificationRepository::new(pool.clone()));

    // Build service context; the mailer is optional and absent credentials
    // only disable verification emails, not the whole server
    let mut builder = ServiceContextBuilder::new()
        .account_repo(account_repo)
        .game_repo(game_repo)
        .roster_repo(roster_repo)
        .verification_repo(verification_repo);

    if let Some((username, password)) = config.mail.credentials() {
        let mailer = SmtpMailer::new(
            &config.mail.smtp_host,
            config.mail.smtp_port,
            username,
            password,
        )
        .map_err(|e| AppError::Config(e.to_string()))?;
        builder = builder.mailer(Arc::new(mailer));
        info!(host = %config.mail.smtp_host, "SMTP mailer configured");
    } else {
        warn!("SMTP credentials not configured; verification emails disabled");
    }

    let service_context = builder.build().map_err(AppError::Config)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
