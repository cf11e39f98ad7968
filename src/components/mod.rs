//! UI Components
//!
//! Pages and the pieces they share.

mod claim_form;
mod item_detail;
mod item_list;
mod register_item_form;
mod signup_page;
mod terms_modal;

pub use claim_form::ClaimForm;
pub use item_detail::ItemDetailPage;
pub use item_list::ItemListPage;
pub use register_item_form::RegisterItemPage;
pub use signup_page::SignupPage;
pub use terms_modal::TermsModal;
