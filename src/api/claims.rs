//! Claim Request Endpoints

use web_sys::File;

use super::post_multipart;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::ClaimRequest;

/// Submit ownership evidence for an item
pub async fn create_claim(
    config: &AppConfig,
    claim: &ClaimRequest,
    image: Option<&File>,
    token: Option<&str>,
) -> Result<(), ApiError> {
    post_multipart(&config.endpoint("/api/requests"), &claim.form_fields(), image, token).await?;
    Ok(())
}
