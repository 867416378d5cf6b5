//! Authentication handlers
//!
//! Each route runs its body validator first; the handlers only ever see
//! requests that passed it.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, middleware::from_fn_with_state, routing::post};

use crate::{
    middleware::{login_validation, signup_validation},
    state::AppState,
};

/// Authentication routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/signup",
            post(handler::signup).layer(from_fn_with_state(state.clone(), signup_validation)),
        )
        .route(
            "/login",
            post(handler::login).layer(from_fn_with_state(state.clone(), login_validation)),
        )
}
