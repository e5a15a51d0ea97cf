//! Web layer for the opening-hours service.
//!
//! Serves the current status as JSON and as an embeddable HTML fragment.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
