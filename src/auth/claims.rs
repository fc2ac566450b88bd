use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload bound at login and carried on every gated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub name: String,
    pub email: String,
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}
