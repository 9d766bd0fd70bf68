//! Thin wrappers over the browser APIs the workspace needs
//!
//! Everything here converts `JsValue` failures into [`Error`] so callers can
//! log or forward them as plain strings.

use snipdesk_app::KeyValueStore;
use snipdesk_core::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, File, FileReader, HtmlInputElement, Response, Storage, Window};

#[wasm_bindgen]
extern "C" {
    /// Prism.js, loaded by index.html. Throws if the script is missing.
    #[wasm_bindgen(catch, js_namespace = Prism, js_name = highlightElement)]
    fn prism_highlight_element(element: &Element) -> std::result::Result<(), JsValue>;
}

/// Readable text for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> Error {
    Error::browser(describe(&value))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::browser("no global window"))
}

fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::browser("window has no document"))
}

fn clamp_ms(ms: u64) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

// ─────────────────────────────────────────────────────────
// Network
// ─────────────────────────────────────────────────────────

/// GET `path` relative to the page and return the body as text.
/// Non-2xx responses are errors.
pub async fn fetch_text(path: &str) -> Result<String> {
    let fetch_error = |reason: String| Error::fetch(path, reason);

    let response = JsFuture::from(window()?.fetch_with_str(path))
        .await
        .map_err(|e| fetch_error(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| fetch_error("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response.text().map_err(|e| fetch_error(describe(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| fetch_error(describe(&e)))?;
    text.as_string()
        .ok_or_else(|| fetch_error("response body is not text".to_string()))
}

// ─────────────────────────────────────────────────────────
// Clipboard, files, prompt
// ─────────────────────────────────────────────────────────

pub async fn write_clipboard(text: &str) -> Result<()> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::clipboard(describe(&e)))
}

/// Read `file` as a data URL and hand the result to `on_loaded`
pub fn read_data_url(file: &File, on_loaded: impl FnOnce(Result<String>) + 'static) -> Result<()> {
    let reader = FileReader::new().map_err(js_error)?;
    let loaded = reader.clone();

    let onload = Closure::once(move || {
        let result = loaded.result().map_err(js_error).and_then(|value| {
            value
                .as_string()
                .ok_or_else(|| Error::browser("file reader produced no data URL"))
        });
        on_loaded(result);
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    reader.read_as_data_url(file).map_err(js_error)
}

/// First file selected in a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Open a file picker restricted to images and read the chosen file.
/// Nothing happens if the user cancels.
pub fn pick_image(on_loaded: impl FnOnce(Result<String>) + 'static) -> Result<()> {
    let input: HtmlInputElement = document()?
        .create_element("input")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| Error::browser("created element is not an input"))?;
    input.set_type("file");
    input.set_accept("image/*");

    let picked = input.clone();
    let onchange = Closure::once(move || match selected_file(&picked) {
        Some(file) => {
            if let Err(e) = read_data_url(&file, on_loaded) {
                error!("Failed to read {}: {}", file.name(), e);
            }
        }
        None => debug!("No image picked"),
    });
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    input.click();
    Ok(())
}

/// `window.prompt`; `None` when cancelled
pub fn prompt(message: &str) -> Result<Option<String>> {
    window()?.prompt_with_message(message).map_err(js_error)
}

pub fn highlight(element: &Element) {
    if let Err(e) = prism_highlight_element(element) {
        trace!("Syntax highlighting unavailable: {}", describe(&e));
    }
}

// ─────────────────────────────────────────────────────────
// Timers and listeners
// ─────────────────────────────────────────────────────────

pub fn set_timeout(delay_ms: u64, callback: impl FnOnce() + 'static) -> Result<i32> {
    let closure = Closure::once(callback);
    let handle = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_ms(delay_ms),
        )
        .map_err(js_error)?;
    closure.forget();
    Ok(handle)
}

pub fn set_interval(period_ms: u64, callback: impl FnMut() + 'static) -> Result<i32> {
    let closure = Closure::<dyn FnMut()>::new(callback);
    let handle = window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_ms(period_ms),
        )
        .map_err(js_error)?;
    closure.forget();
    Ok(handle)
}

/// Listen for `event` on the window for the lifetime of the page
pub fn on_window_event(event: &str, callback: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    window()?
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────

/// `window.localStorage` as a [`KeyValueStore`]
pub struct LocalStore(Storage);

impl LocalStore {
    pub fn open() -> Result<Self> {
        window()?
            .local_storage()
            .map_err(|e| Error::storage(describe(&e)))?
            .map(Self)
            .ok_or_else(|| Error::storage("localStorage is unavailable"))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| Error::storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| Error::storage(describe(&e)))
    }
}
