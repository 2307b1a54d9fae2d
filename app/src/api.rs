//! REST client for the user directory.
//!
//! Two endpoints, both unauthenticated: `GET /users` returns the full
//! directory, `PATCH /users/{id}` applies a partial update (used only
//! for the last-login timestamp). Any transport or decode failure maps
//! to [`AuthError::NetworkFailure`].

use lams_core::session::AuthError;
use lams_core::storage::API_URL;
use lams_core::user::User;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(value: JsValue) -> AuthError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    AuthError::NetworkFailure(message)
}

async fn request_text(method: &str, url: &str, body: Option<&str>) -> Result<String, AuthError> {
    let window = web_sys::window()
        .ok_or_else(|| AuthError::NetworkFailure("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers
            .append("Content-Type", "application/json")
            .map_err(js_error)?;
        opts.set_headers(headers.as_ref());
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| AuthError::NetworkFailure("unexpected fetch result".into()))?;

    if !response.ok() {
        return Err(AuthError::NetworkFailure(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| AuthError::NetworkFailure("non-text response body".into()))
}

/// Fetch the full user directory.
pub async fn fetch_users() -> Result<Vec<User>, AuthError> {
    let text = request_text("GET", &format!("{API_URL}/users"), None).await?;
    serde_json::from_str(&text).map_err(|e| AuthError::NetworkFailure(e.to_string()))
}

/// Record a last-login timestamp on the directory. Best-effort: the
/// caller swallows failures.
pub async fn update_last_login(user_id: u32, iso_timestamp: &str) -> Result<(), AuthError> {
    let body = serde_json::json!({ "lastLogin": iso_timestamp }).to_string();
    request_text("PATCH", &format!("{API_URL}/users/{user_id}"), Some(&body)).await?;
    Ok(())
}
