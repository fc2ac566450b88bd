use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo_types::User;
use crate::error::ApiError;

/// Request body for registration. Fields default to blank so validation can
/// report exactly which ones are missing instead of a serde reject.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub age: Option<AgeInput>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for profile update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: Option<AgeInput>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Age arrives from forms as either a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Public projection of a user record; the password hash has no field here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub age: Option<f64>,
    pub xp: f64,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            profile_image: user.profile_image,
            age: user.age,
            xp: user.xp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// Blank means unset; anything else must be a finite non-negative number.
pub fn normalize_age(age: Option<&AgeInput>) -> Result<Option<f64>, ApiError> {
    let parsed = match age {
        None => return Ok(None),
        Some(AgeInput::Number(n)) => *n,
        Some(AgeInput::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<f64>().map_err(|_| invalid_age())?
        }
    };
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(invalid_age());
    }
    Ok(Some(parsed))
}

fn invalid_age() -> ApiError {
    ApiError::Validation("Age must be a valid non-negative number".into())
}

/// Trims an optional text field; blank collapses to unset.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Names the required registration fields that are missing or blank.
pub fn missing_required_fields(req: &RegisterRequest) -> Option<String> {
    let mut missing = Vec::new();
    if req.name.trim().is_empty() {
        missing.push("Name");
    }
    if req.email.trim().is_empty() {
        missing.push("Email");
    }
    if req.phone.trim().is_empty() {
        missing.push("Phone");
    }
    if req.password.is_empty() {
        missing.push("Password");
    }
    if missing.is_empty() {
        return None;
    }
    let listed = match missing.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        _ => missing[0].to_string(),
    };
    let verb = if missing.len() == 1 { "is" } else { "are" };
    Some(format!("{listed} {verb} required"))
}
