use std::time::Duration;

use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        directory::UserDirectory,
        dto::{AuthResponse, LoginRequest, SocialLoginRequest},
        error::AuthError,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/social", post(social_login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let user = match state.directory.validate(&payload.email, &payload.password) {
        Ok(u) => u,
        Err(e) => {
            warn!(email = %payload.email, "login rejected");
            return Err(e);
        }
    };

    info!(user_id = user.id, email = %user.email, role = %user.role, "user logged in");
    Ok(Json(AuthResponse { user }))
}

/// Always succeeds after a fixed delay; there is no real provider behind it.
#[instrument(skip(state, payload))]
pub async fn social_login(
    State(state): State<AppState>,
    Json(payload): Json<SocialLoginRequest>,
) -> Json<AuthResponse> {
    tokio::time::sleep(Duration::from_millis(state.config.social_login_delay_ms)).await;

    let user = UserDirectory::social_profile(&payload.provider);
    info!(provider = %payload.provider, email = %user.email, "social login simulated");
    Json(AuthResponse { user })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_serializes_the_profile() {
        let directory = UserDirectory::seeded();
        let user = directory
            .validate("client@ztai-block.com", "client123")
            .expect("seeded account");
        let json = serde_json::to_string(&AuthResponse { user }).unwrap();
        assert!(json.contains("client@ztai-block.com"));
        assert!(json.contains("Sarah Johnson"));
        assert!(!json.contains("client123"));
    }
}
