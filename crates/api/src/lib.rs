//! Falcone back-office API server library.
//!
//! Exposes the building blocks (config, state, error handling, extractors,
//! routes) so integration tests, the server binary and the seed binary can
//! all reach them.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
