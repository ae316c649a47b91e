//! # critter-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `critter-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations
//! - Schema migrations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use critter_db::pool::{create_pool, DatabaseConfig};
//! use critter_db::PgAccountRepository;
//! use critter_core::traits::AccountRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     critter_db::run_migrations(&pool).await?;
//!     let accounts = PgAccountRepository::new(pool);
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAccountRepository, PgGameRepository, PgRosterRepository, PgVerificationRepository,
};
