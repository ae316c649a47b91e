//! Entity <-> model mappers

mod account;
mod creature;
mod game;
mod verification;
