//! Axum-based HTTP server exposing the timing engine.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use self::error::{ApiError, AppError};
pub use self::router::create_router;
pub use self::state::AppState;
