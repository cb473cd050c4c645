//! Auth REST API handler
//!
//! One stateless endpoint handling both signup and login, dispatched on
//! the `action` field like the original client expects. No session or
//! token is issued; the response body is the whole authentication result.

use crate::{ApiError, ApiResult, AuthRequest, AuthResponse};

use rolo_db::UserRepository;

use crate::state::AppState;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/auth
pub async fn auth(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    match req.action.as_str() {
        "signup" => signup(&repo, &req).await,
        "login" => login(&repo, &req).await,
        other => Err(ApiError::BadRequest {
            message: format!("Invalid action: {}", other),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

async fn signup(repo: &UserRepository, req: &AuthRequest) -> ApiResult<Json<AuthResponse>> {
    if repo.find_by_username(&req.username).await?.is_some() {
        return Err(ApiError::Validation {
            message: "Username already exists".to_string(),
            field: Some("username".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // A racing signup can still collide here; the unique index surfaces
    // it as DuplicateUsername, which maps to the same 400.
    let user = repo.create_user(&req.username, &req.password).await?;

    log::info!("Created user {} via signup", user.id);

    Ok(Json(AuthResponse {
        id: user.id.to_string(),
        username: user.username,
    }))
}

async fn login(repo: &UserRepository, req: &AuthRequest) -> ApiResult<Json<AuthResponse>> {
    let user = repo
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !UserRepository::verify_password(&user, &req.password) {
        return Err(ApiError::Unauthorized {
            message: "Invalid password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(AuthResponse {
        id: user.id.to_string(),
        username: user.username,
    }))
}
