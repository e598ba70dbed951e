use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::middleware::BearerToken;
use crate::inbound::http::router::AppState;

pub async fn me<R: UserRepository>(
    State(state): State<AppState<R>>,
    Extension(token): Extension<BearerToken>,
) -> Result<Json<UserPublic>, ApiError> {
    state
        .auth_service
        .current_user(token.as_str())
        .await
        .map_err(ApiError::from)
        .map(|ref user| Json(user.into()))
}

/// Public projection of a user; the password hash never leaves the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPublic {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
