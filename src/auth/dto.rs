use serde::{Deserialize, Serialize};

use crate::auth::directory::PublicUser;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for the social-login simulation.
#[derive(Debug, Deserialize)]
pub struct SocialLoginRequest {
    pub provider: String,
}

/// Response returned after a successful login.
///
/// The client persists this profile under the `user` key in its local store
/// and removes it on logout; the server keeps no session state.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
}
