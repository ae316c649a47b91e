//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod accounts;
pub mod games;
pub mod health;
pub mod rosters;
pub mod verification;
