//! Asynchronous dataset loading.
//!
//! Each view section fetches its own file; a failed load is terminal for
//! that view only. The fetch goes through the browser's `fetch`, and the
//! body is decoded with serde into the caller's wire type.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;

/// Fetches `url` and decodes its JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
	let window = web_sys::window().ok_or_else(|| LoadError::request(url, "no window"))?;

	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|err| LoadError::request(url, js_error_text(&err)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| LoadError::request(url, "fetch did not yield a Response"))?;

	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let text = response
		.text()
		.map_err(|err| LoadError::request(url, js_error_text(&err)))?;
	let text = JsFuture::from(text)
		.await
		.map_err(|err| LoadError::request(url, js_error_text(&err)))?;
	let text = text
		.as_string()
		.ok_or_else(|| LoadError::request(url, "response body is not text"))?;

	serde_json::from_str(&text).map_err(|err| LoadError::Parse {
		url: url.to_string(),
		reason: err.to_string(),
	})
}

fn js_error_text(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}
