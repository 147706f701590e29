use crate::state::AppState;
use axum::Router;

mod dto;
pub mod directory;
mod error;
pub mod handlers;

pub use directory::{PublicUser, UserDirectory, UserRecord};
pub use error::AuthError;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
