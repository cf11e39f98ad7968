//! Frontend Models
//!
//! Server records as they arrive on the wire, and the view-models pages render.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{category_id, DEFAULT_CATEGORY_LABEL};

/// Status label shown for every entry of the item list
pub const LIST_STATUS_LABEL: &str = "보관중";

// ========================
// Server Records
// ========================

/// Row of `GET /api/items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRecord {
    pub item_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `GET /api/items/:id`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetailRecord {
    pub item_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub found_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Item status as sent by the server; older rows carry a flag or code
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemStatus {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Text(text) => f.write_str(text),
            ItemStatus::Flag(flag) => write!(f, "{}", flag),
            ItemStatus::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            ItemStatus::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Logged-in user as returned by registration/login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Body of a successful `POST /api/auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ========================
// View Models
// ========================

/// Entry of the item list page
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub image: Option<String>,
    pub status: String,
}

impl ItemSummary {
    pub fn from_record(record: ItemRecord, origin: &str) -> Self {
        Self {
            id: record.item_id,
            title: record.name,
            date: date_only(record.created_at.as_deref()),
            image: absolute_image_url(origin, record.image_url.as_deref()),
            status: LIST_STATUS_LABEL.to_string(),
        }
    }
}

/// Everything the detail page renders for one item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub location: String,
    pub category: String,
    pub image: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

impl ItemDetail {
    pub fn from_record(record: ItemDetailRecord, origin: &str) -> Self {
        Self {
            id: record.item_id,
            title: record.name,
            date: date_only(record.found_date.as_deref()),
            location: record.address.unwrap_or_default(),
            category: record
                .category_name
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY_LABEL.to_string()),
            image: absolute_image_url(origin, record.image_url.as_deref()),
            status: record.status.map(|s| s.to_string()),
            description: record.desc.filter(|d| !d.is_empty()),
            is_available: record.is_available,
        }
    }

    /// Claims are refused only when the server explicitly says so
    pub fn accepts_claims(&self) -> bool {
        self.is_available != Some(false)
    }
}

/// Date part of an ISO timestamp (`2024-01-05T10:00:00Z` -> `2024-01-05`)
pub fn date_only(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|t| t.split('T').next())
        .unwrap_or_default()
        .to_string()
}

/// Prefix a server-relative image path with the server origin
pub fn absolute_image_url(origin: &str, path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", origin, p))
}

// ========================
// Form Payloads
// ========================

/// Inputs of the item registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub found_date: String,
    pub place_id: String,
    pub detail_location: String,
    pub category: String,
}

impl NewItem {
    /// Text parts of the multipart body, in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.title.clone()),
            ("description", self.description.clone()),
            ("found_date", self.found_date.clone()),
            ("place_id", self.place_id.clone()),
            ("detail_address", self.detail_location.clone()),
            ("category_id", category_id(&self.category).to_string()),
        ]
    }
}

/// Proof fields of a claim request; the optional image travels separately
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimRequest {
    pub item_id: u32,
    pub address_guess: String,
    pub description: String,
}

impl ClaimRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("item_id", self.item_id.to_string()),
            ("proof_detail_address", self.address_guess.clone()),
            ("proof_description", self.description.clone()),
        ]
    }
}

/// Profile fields posted to the registration endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupProfile {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: String,
}

impl SignupProfile {
    pub fn email_looks_valid(&self) -> bool {
        self.email.contains('@')
    }

    /// Step-1 gate: all four fields hold their shape
    pub fn is_valid(&self) -> bool {
        self.email_looks_valid()
            && self.password.chars().count() >= 4
            && !self.name.is_empty()
            && self.phone_number.chars().count() >= 10
    }
}
