use crate::state::AppState;
use axum::Router;

pub mod events;
pub mod fixtures;
pub mod handlers;
pub mod stats;
pub mod ticker;

pub use stats::Dashboard;

pub fn router() -> Router<AppState> {
    handlers::dashboard_routes()
}
