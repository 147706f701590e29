use axum::{http::StatusCode, response::IntoResponse};

/// The only failure the demo knows. The message is deliberately generic so
/// callers cannot tell an unknown email from a wrong password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials or unauthorized access")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
