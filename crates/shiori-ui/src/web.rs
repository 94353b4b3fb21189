//! Browser bindings for the core traits.
//!
//! Everything that touches `window` lives here: the article index fetch,
//! the `localStorage` preference, the `light` class on `<html>`, and the
//! navigator share / clipboard / alert / prompt calls.

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Function, Object, Promise, Reflect};
use shiori_core::{
    ArticleIndex, CoreError, LIGHT_CLASS, Preferences, Result, ShareHost, SharePayload,
    ThemeSurface,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Fetch and parse the article index.
pub async fn fetch_index(url: &str) -> Result<ArticleIndex> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CoreError::network(e.to_string()))?;

    if !response.ok() {
        return Err(CoreError::Fetch {
            status: response.status(),
        });
    }

    let json = response
        .text()
        .await
        .map_err(|e| CoreError::network(format!("Failed to read response: {e}")))?;

    ArticleIndex::from_json(&json)
}

/// Today's date in the browser's local time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Title and URL of the current document.
pub fn current_page() -> SharePayload {
    let window = web_sys::window();
    let title = window
        .as_ref()
        .and_then(|w| w.document())
        .map(|d| d.title())
        .unwrap_or_default();
    let url = window
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    SharePayload::new(title, url)
}

/// Single `localStorage` key.
#[derive(Debug, Clone)]
pub struct LocalStoragePreferences {
    key: String,
}

impl LocalStoragePreferences {
    /// Bind to the `localStorage` entry named `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::storage("no window"))?
            .local_storage()
            .map_err(|e| CoreError::storage(describe(&e)))?
            .ok_or_else(|| CoreError::storage("localStorage unavailable"))
    }
}

impl Preferences for LocalStoragePreferences {
    fn get(&self) -> Option<String> {
        Self::storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|e| CoreError::storage(describe(&e)))
    }
}

/// The `light` class on the document root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRootTheme;

impl DocumentRootTheme {
    fn root() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

impl ThemeSurface for DocumentRootTheme {
    fn is_light(&self) -> bool {
        Self::root().is_some_and(|el| el.class_list().contains(LIGHT_CLASS))
    }

    fn set_light(&self, light: bool) {
        if let Some(el) = Self::root() {
            if let Err(err) = el.class_list().toggle_with_force(LIGHT_CLASS, light) {
                log::debug!("could not toggle theme class: {}", describe(&err));
            }
        }
    }
}

/// Navigator-backed share host.
///
/// `navigator.share` and `navigator.clipboard` are probed dynamically so
/// browsers lacking either simply fall through the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserShareHost;

impl BrowserShareHost {
    fn navigator() -> Result<web_sys::Navigator> {
        web_sys::window()
            .map(|w| w.navigator())
            .ok_or_else(|| CoreError::share("no window"))
    }
}

#[async_trait(?Send)]
impl ShareHost for BrowserShareHost {
    fn can_share_natively(&self) -> bool {
        Self::navigator()
            .ok()
            .and_then(|nav| Reflect::get(&nav, &JsValue::from_str("share")).ok())
            .is_some_and(|share| share.is_function())
    }

    async fn share_natively(&self, payload: &SharePayload) -> Result<()> {
        let nav = Self::navigator()?;
        let data = Object::new();
        set_field(&data, "title", &payload.title)?;
        set_field(&data, "url", &payload.url)?;

        let promise = method(&nav, "share")?
            .call1(&nav, &data)
            .map_err(|e| CoreError::share(describe(&e)))?;
        await_promise(promise).await
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        let nav = Self::navigator()?;
        let clipboard = Reflect::get(&nav, &JsValue::from_str("clipboard"))
            .map_err(|e| CoreError::share(describe(&e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(CoreError::share("clipboard API unavailable"));
        }

        let promise = method(&clipboard, "writeText")?
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| CoreError::share(describe(&e)))?;
        await_promise(promise).await
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::debug!("alert failed: {}", describe(&err));
            }
        }
    }

    fn prompt(&self, message: &str, default: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.prompt_with_message_and_default(message, default) {
                log::debug!("prompt failed: {}", describe(&err));
            }
        }
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| CoreError::share(describe(&e)))?
        .dyn_into::<Function>()
        .map_err(|_| CoreError::share(format!("{name} is not a function")))
}

fn set_field(target: &Object, key: &str, value: &str) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), &JsValue::from_str(value))
        .map(|_| ())
        .map_err(|e| CoreError::share(describe(&e)))
}

async fn await_promise(value: JsValue) -> Result<()> {
    let promise = value
        .dyn_into::<Promise>()
        .map_err(|_| CoreError::share("expected a promise"))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| CoreError::share(describe(&e)))
}

/// Human-readable text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
