//! Item Endpoints

use web_sys::File;

use super::{get_json, post_multipart};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{ItemDetailRecord, ItemRecord, NewItem};

pub async fn list_items(config: &AppConfig) -> Result<Vec<ItemRecord>, ApiError> {
    get_json(&config.endpoint("/api/items")).await
}

pub async fn get_item(config: &AppConfig, id: u32) -> Result<ItemDetailRecord, ApiError> {
    get_json(&config.endpoint(&format!("/api/items/{}", id))).await
}

/// Post a found item with its optional photo
pub async fn create_item(
    config: &AppConfig,
    item: &NewItem,
    image: Option<&File>,
    token: Option<&str>,
) -> Result<(), ApiError> {
    post_multipart(&config.endpoint("/api/items"), &item.form_fields(), image, token).await?;
    Ok(())
}
