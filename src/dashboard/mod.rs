use crate::state::AppState;
use axum::{routing::get, Router};

pub mod handlers;
pub mod levels;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard))
}
