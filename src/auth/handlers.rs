use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderName},
    routing::{post, put},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        cookie::{clear_session_cookie, session_cookie},
        dto::{
            missing_required_fields, non_blank, normalize_age, LoginRequest, MessageResponse,
            RegisterRequest, UpdateProfileRequest, UpdateProfileResponse,
        },
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::{is_unique_violation, NewUser},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/profile", put(update_profile))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Some(message) = missing_required_fields(&payload) {
        warn!(%message, "register rejected");
        return Err(ApiError::Validation(message));
    }

    payload.email = payload.email.trim().to_lowercase();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    let age = normalize_age(payload.age.as_ref())?;
    let profile_image = non_blank(payload.profile_image.as_deref());
    let hash = hash_password(&payload.password)?;

    let user = match User::create(
        &state.db,
        NewUser {
            name: payload.name.trim(),
            email: &payload.email,
            phone: payload.phone.trim(),
            password_hash: &hash,
            profile_image: profile_image.as_deref(),
            age,
        },
    )
    .await
    {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already registered");
            return Err(ApiError::Conflict);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(MessageResponse {
        message: "Registration successful!",
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<([(HeaderName, String); 1], Json<MessageResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    // Unknown email and bad password produce the same generic failure.
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::InvalidCredentials
        })?;

    let ok = verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.name, &user.email)?;
    let cookie = session_cookie(&token, keys.ttl, state.config.production);

    info!(user_id = %user.id, "user logged in");
    Ok((
        [(SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Login successful",
        }),
    ))
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
) -> ([(HeaderName, String); 1], Json<MessageResponse>) {
    let cookie = clear_session_cookie(state.config.production);
    (
        [(SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, ApiError> {
    let name = payload.name.trim();
    let phone = payload.phone.trim();
    if name.is_empty() || phone.is_empty() {
        warn!(user_id = %claims.sub, "profile update rejected");
        return Err(ApiError::Validation("Name and Phone are required".into()));
    }

    let age = normalize_age(payload.age.as_ref())?;
    let profile_image = non_blank(payload.profile_image.as_deref());

    let user = User::update_profile(
        &state.db,
        claims.sub,
        name,
        phone,
        age,
        profile_image.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully",
        user: user.into(),
    }))
}
