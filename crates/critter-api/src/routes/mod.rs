//! Route definitions
//!
//! The paths mirror the wire contract the game clients already speak, so
//! everything is mounted at the root rather than under a versioned prefix.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accounts, games, health, rosters, verification};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(game_routes())
        .merge(roster_routes())
        .merge(verification_routes())
}

/// Health check routes (exported separately so probes skip the middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(accounts::signup))
        .route("/allusers/:username", get(accounts::check_user))
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/start_game", post(games::start_game))
        .route("/end_game", post(games::end_game))
}

/// Roster routes
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/creatures/:username", get(rosters::get_roster))
        .route("/creatures/add", post(rosters::add_creature))
        .route("/creatures/remove", post(rosters::remove_creature))
        .route("/creatures/data", post(rosters::update_creature_data))
}

/// Verification routes
fn verification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/send-verification-email",
            post(verification::send_verification_email),
        )
        .route("/codes", post(verification::get_verification_code))
}
