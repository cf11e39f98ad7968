//! Item Data Gateway
//!
//! Fetches items from the server, reshapes them into view-models and
//! keeps the shared item list current.

use web_sys::File;

use crate::api;
use crate::config::AppConfig;
use crate::context::Session;
use crate::dialog;
use crate::error::ApiError;
use crate::models::{ItemDetail, ItemSummary, NewItem};
use crate::store::{store_set_items, AppStore};

#[derive(Clone, Copy)]
pub struct ItemGateway {
    config: AppConfig,
    store: AppStore,
    session: Session,
}

impl ItemGateway {
    pub fn new(config: AppConfig, store: AppStore, session: Session) -> Self {
        Self { config, store, session }
    }

    /// Refresh the shared list. On failure the current list stays as is.
    pub async fn fetch_items(&self) {
        match api::list_items(&self.config).await {
            Ok(records) => {
                let items: Vec<ItemSummary> = records
                    .into_iter()
                    .map(|r| ItemSummary::from_record(r, self.config.api_origin))
                    .collect();
                log::debug!("loaded {} items", items.len());
                store_set_items(&self.store, items);
            }
            Err(err) => log::error!("목록 로드 실패: {}", err),
        }
    }

    /// `None` means the item could not be loaded; callers show "not found"
    pub async fn get_item_detail(&self, id: u32) -> Option<ItemDetail> {
        match api::get_item(&self.config, id).await {
            Ok(record) => Some(ItemDetail::from_record(record, self.config.api_origin)),
            Err(err) => {
                log::error!("상세 정보 로드 실패 (item {}): {}", id, err);
                None
            }
        }
    }

    /// Post a found item. Returns whether the server accepted it.
    pub async fn add_item(&self, inputs: &NewItem, image: Option<File>) -> bool {
        let token = self.session.token();
        match api::create_item(&self.config, inputs, image.as_ref(), token.as_deref()).await {
            Ok(()) => {
                log::info!("registered item \"{}\"", inputs.title);
                self.fetch_items().await;
                true
            }
            Err(err) => {
                log::error!("등록 실패: {}", err);
                dialog::alert(&add_failure_text(&err));
                false
            }
        }
    }
}

/// `등록 실패: <server message>`, or the error's own description
fn add_failure_text(err: &ApiError) -> String {
    format!("등록 실패: {}", err.user_message(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_failure_text_uses_server_message() {
        let err = ApiError::Server { status: 400, message: Some("필수 항목이 누락되었습니다.".into()) };
        assert_eq!(add_failure_text(&err), "등록 실패: 필수 항목이 누락되었습니다.");
    }

    #[test]
    fn test_add_failure_text_falls_back_to_description() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(add_failure_text(&err), "등록 실패: server returned 500");

        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(add_failure_text(&err), "등록 실패: network error: Failed to fetch");
    }
}
