//! # api-server
//!
//! HTTP API over stored channel data and LLM analytics (axum).
//!
//! - [`AppState`] – services shared by every handler
//! - [`ApiError`] – error type rendered as `{"detail": ...}`
//! - [`create_router`] – root route plus every API route under the configured prefix
//! - [`serve`] – binds and runs the server until the shutdown future resolves

mod error;
mod extract;
mod handlers;
mod response;
mod router;
mod server;
mod state;

pub use error::ApiError;
pub use router::create_router;
pub use server::serve;
pub use state::AppState;
