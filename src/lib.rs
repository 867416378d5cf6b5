//! CampusConnect - Request Validation Gateway
//!
//! This library provides the request validation layer of the CampusConnect
//! backend: declarative schemas for the signup and login bodies, and the axum
//! middleware that enforces them before the route handlers run.
//!
//! # Architecture
//!
//! - **Validation**: field constraint tables and the engine that evaluates them
//! - **Middleware**: body validators and request logging
//! - **Handlers**: HTTP routes, each fronted by its validator

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
pub use validation::{RequestSchema, ValidationFailure, ValidationSchemas};
