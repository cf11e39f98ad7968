//! Auth Endpoints
//!
//! Email code delivery, code verification and account registration.

use serde::Serialize;

use super::{post_json, read_json};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{AuthResponse, SignupProfile};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SendCodeArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyCodeArgs<'a> {
    email: &'a str,
    code: &'a str,
}

// ========================
// Commands
// ========================

pub async fn send_code(config: &AppConfig, email: &str) -> Result<(), ApiError> {
    post_json(&config.endpoint("/api/auth/send-code"), &SendCodeArgs { email }).await?;
    Ok(())
}

pub async fn verify_code(config: &AppConfig, email: &str, code: &str) -> Result<(), ApiError> {
    post_json(&config.endpoint("/api/auth/verify-code"), &VerifyCodeArgs { email, code }).await?;
    Ok(())
}

pub async fn register(config: &AppConfig, profile: &SignupProfile) -> Result<AuthResponse, ApiError> {
    let response = post_json(&config.endpoint("/api/auth/register"), profile).await?;
    read_json(&response).await
}
