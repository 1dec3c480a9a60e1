//! Admin login.
//!
//! The check only tells the client whether the password matched. No session
//! or token is issued and no other endpoint consults it.

use axum::extract::State;
use axum::Json;
use maraton_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Envelope;
use crate::state::AppState;

/// Login body. `password` is kept as raw JSON so a number or `null` is a
/// wrong password (401) rather than a malformed body (400).
#[derive(Debug, Deserialize)]
pub struct AdminLogin {
    #[serde(default)]
    pub password: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct AdminFlag {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<AdminLogin>,
) -> AppResult<Json<Envelope<AdminFlag>>> {
    let given = input.password.as_ref().and_then(serde_json::Value::as_str);
    let matches = match (state.config.admin_password.as_deref(), given) {
        (Some(expected), Some(given)) => expected == given,
        _ => false,
    };

    if !matches {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized("Unauthorized".into())));
    }

    tracing::info!("Admin login accepted");

    Ok(Envelope::success(AdminFlag { is_admin: true }))
}
