//! REST API Bindings
//!
//! Frontend bindings to the lost-and-found server, organized by domain.

mod auth;
mod claims;
mod items;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, Response};

use crate::error::{js_error_text, ApiError, ErrorBody};

// Re-export all public items
pub use auth::*;
pub use claims::*;
pub use items::*;

// ========================
// Transport
// ========================

/// Issue the request; non-2xx responses become [`ApiError::Server`]
async fn send(url: &str, init: &RequestInit) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let request = Request::new_with_str_and_init(url, init).map_err(ApiError::from_js)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not resolve to a Response".into()))?;

    if response.ok() {
        return Ok(response);
    }
    let message = read_json::<ErrorBody>(&response)
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    Err(ApiError::Server { status: response.status(), message })
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error_text(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn bearer_headers(token: Option<&str>) -> Result<Headers, ApiError> {
    let headers = Headers::new().map_err(ApiError::from_js)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(ApiError::from_js)?;
    }
    Ok(headers)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let response = send(url, &init).await?;
    read_json(&response).await
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let headers = Headers::new().map_err(ApiError::from_js)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::from_js)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&json));
    send(url, &init).await
}

/// POST a multipart form. The browser supplies the boundary header.
async fn post_multipart(
    url: &str,
    fields: &[(&'static str, String)],
    image: Option<&File>,
    token: Option<&str>,
) -> Result<Response, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(ApiError::from_js)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(ApiError::from_js)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    let headers = bearer_headers(token)?;
    init.set_headers(&headers);
    init.set_body(&form);
    send(url, &init).await
}
