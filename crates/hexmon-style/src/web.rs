//! Browser bindings for the theme system.
//!
//! Enabled with the `web` feature. These types fetch `window` on every call,
//! so they hold no JS handles and satisfy the `Send + Sync` bounds of the
//! storage and surface traits.

use std::fmt;
use std::sync::Arc;

use hexmon_core::ConnectionId;
use hexmon_core::logging::targets;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement, Storage, Window};

use crate::store::ThemeStore;
use crate::surface::StyleSurface;
use crate::theme::{Theme, ThemeManager, ThemeRegistry};
use crate::{Error, Result};

/// Name of the window event dispatched after a theme change.
pub const THEME_CHANGE_EVENT: &str = "theme-change";

/// A JS exception or missing browser object.
#[derive(Debug)]
pub struct JsFailure(String);

impl fmt::Display for JsFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for JsFailure {}

impl From<JsValue> for JsFailure {
    fn from(value: JsValue) -> Self {
        Self(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn window() -> std::result::Result<Window, JsFailure> {
    web_sys::window().ok_or_else(|| JsFailure("no global `window`".into()))
}

fn local_storage() -> std::result::Result<Storage, JsFailure> {
    window()?
        .local_storage()?
        .ok_or_else(|| JsFailure("localStorage is unavailable".into()))
}

fn root_element() -> std::result::Result<HtmlElement, JsFailure> {
    let element = window()?
        .document()
        .ok_or_else(|| JsFailure("no document".into()))?
        .document_element()
        .ok_or_else(|| JsFailure("no document element".into()))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsFailure("document element is not an HTML element".into()))
}

/// `window.localStorage` as a [`ThemeStore`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()
            .and_then(|storage| storage.get_item(key).map_err(JsFailure::from))
            .map_err(|err| Error::storage(key, err))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        local_storage()
            .and_then(|storage| storage.set_item(key, value).map_err(JsFailure::from))
            .map_err(|err| Error::storage(key, err))
    }
}

/// `document.documentElement.style` as a [`StyleSurface`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStyle;

impl StyleSurface for DocumentStyle {
    fn set_property(&self, name: &str, value: &str) {
        let result = root_element()
            .and_then(|root| root.style().set_property(name, value).map_err(JsFailure::from));
        if let Err(err) = result {
            tracing::warn!(target: targets::THEME, property = name, error = %err, "failed to set style property");
        }
    }

    fn property(&self, name: &str) -> Option<String> {
        root_element()
            .and_then(|root| root.style().get_property_value(name).map_err(JsFailure::from))
            .ok()
            .filter(|value| !value.is_empty())
    }
}

/// Dispatch a `theme-change` event on `window` with
/// `detail = { name, colors: { <role>: "<hex>" } }`.
pub fn dispatch_theme_change(theme: &Theme) -> std::result::Result<bool, JsFailure> {
    let colors = Object::new();
    for (key, value) in detail_colors(theme) {
        Reflect::set(&colors, &JsValue::from_str(key), &JsValue::from_str(value))?;
    }

    let detail = Object::new();
    Reflect::set(&detail, &JsValue::from_str("name"), &JsValue::from_str(theme.name()))?;
    Reflect::set(&detail, &JsValue::from_str("colors"), &colors)?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init)?;

    Ok(window()?.dispatch_event(&event)?)
}

/// The `colors` entries of the event detail, keyed by role.
fn detail_colors(theme: &Theme) -> impl Iterator<Item = (&'static str, &str)> + '_ {
    theme
        .palette()
        .iter()
        .map(|(role, color)| (role.key(), color.as_str()))
}

/// Forward every theme change of `manager` to a `theme-change` window event.
pub fn connect_window_events(manager: &ThemeManager) -> ConnectionId {
    manager.theme_changed().connect(|theme| {
        if let Err(err) = dispatch_theme_change(theme) {
            tracing::warn!(target: targets::THEME, theme = theme.name(), error = %err, "failed to dispatch theme-change");
        }
    })
}

/// A manager wired to the browser: `localStorage`, the root element style,
/// and `theme-change` window events.
pub fn browser_manager(registry: Arc<ThemeRegistry>) -> ThemeManager {
    let manager = ThemeManager::new(registry, Arc::new(LocalStorage), Arc::new(DocumentStyle));
    connect_window_events(&manager);
    manager
}
