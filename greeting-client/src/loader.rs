use greeting_common::WishCatalog;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Fetch failed: {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Fetch the wishes document, substituting the builtin catalog on any failure.
pub async fn load_catalog(url: &str) -> WishCatalog {
    match fetch_text(url).await {
        Ok(text) => {
            log::info!("Wishes fetched from {}", url);
            WishCatalog::from_json_or_builtin(&text)
        }
        Err(e) => {
            log::warn!("Could not load {}: {:?}", url, e);
            WishCatalog::builtin()
        }
    }
}
