//! Application settings persisted to a file.
//!
//! [`SettingsStore`] is a hierarchical key-value store. When it is opened on
//! a file, every modification is written through to that file before it
//! becomes visible, so the in-memory view and the file never disagree.
//!
//! # Path-Based Access
//!
//! Keys may be nested using "." or "/" as separators:
//!
//! ```
//! use hexmon::storage::SettingsStore;
//!
//! let settings = SettingsStore::in_memory();
//! settings.set("theme", "dark")?;
//! settings.set("dashboard.refresh_secs", 5)?;
//!
//! assert_eq!(settings.get::<String>("theme").as_deref(), Some("dark"));
//! assert_eq!(settings.get_or("dashboard/refresh_secs", 10), 5);
//! # Ok::<(), hexmon::storage::StoreError>(())
//! ```
//!
//! # Change Notifications
//!
//! The `changed` signal carries the key of every committed modification.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hexmon_core::{PerfSpan, Signal};
use hexmon_core::logging::targets;
use hexmon_style::store::ThemeStore;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::atomic::atomic_write;
use super::error::{StoreError, StoreResult};

type Table = BTreeMap<String, SettingsValue>;

/// A value that can be stored in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingsValue {
    /// A null/empty value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A string value.
    String(String),
    /// An array of values.
    Array(Vec<SettingsValue>),
    /// A nested table.
    Object(BTreeMap<String, SettingsValue>),
}

impl SettingsValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, SettingsValue::Null)
    }

    /// Returns this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingsValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingsValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns this value as a float. Integers are converted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingsValue::Float(v) => Some(*v),
            SettingsValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingsValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl Default for SettingsValue {
    fn default() -> Self {
        SettingsValue::Null
    }
}

impl From<bool> for SettingsValue {
    fn from(v: bool) -> Self {
        SettingsValue::Bool(v)
    }
}

impl From<i32> for SettingsValue {
    fn from(v: i32) -> Self {
        SettingsValue::Integer(v as i64)
    }
}

impl From<i64> for SettingsValue {
    fn from(v: i64) -> Self {
        SettingsValue::Integer(v)
    }
}

impl From<f64> for SettingsValue {
    fn from(v: f64) -> Self {
        SettingsValue::Float(v)
    }
}

impl From<String> for SettingsValue {
    fn from(v: String) -> Self {
        SettingsValue::String(v)
    }
}

impl From<&str> for SettingsValue {
    fn from(v: &str) -> Self {
        SettingsValue::String(v.to_string())
    }
}

/// Trait for types that can be extracted from a [`SettingsValue`].
pub trait FromSettingsValue: Sized {
    /// Attempts to convert a `SettingsValue` to this type.
    fn from_settings_value(value: &SettingsValue) -> Option<Self>;
}

impl FromSettingsValue for bool {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromSettingsValue for i32 {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        value.as_integer().and_then(|v| i32::try_from(v).ok())
    }
}

impl FromSettingsValue for i64 {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromSettingsValue for f64 {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromSettingsValue for String {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromSettingsValue for SettingsValue {
    fn from_settings_value(value: &SettingsValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// The file format used for persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsFormat {
    /// JSON format.
    #[default]
    Json,
    /// TOML format.
    Toml,
}

impl SettingsFormat {
    /// Guess the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SettingsFormat::Toml,
            _ => SettingsFormat::Json,
        }
    }

    fn encode(self, data: &Table, path: &Path) -> StoreResult<String> {
        match self {
            SettingsFormat::Json => {
                serde_json::to_string_pretty(data).map_err(|e| StoreError::format(path, e))
            }
            SettingsFormat::Toml => {
                let data: Table = data
                    .iter()
                    .map(|(k, v)| (k.clone(), toml_compatible(v)))
                    .collect();
                toml::to_string_pretty(&data).map_err(|e| StoreError::format(path, e))
            }
        }
    }

    fn decode(self, content: &str, path: &Path) -> StoreResult<Table> {
        if content.trim().is_empty() {
            return Ok(Table::new());
        }
        match self {
            SettingsFormat::Json => {
                serde_json::from_str(content).map_err(|e| StoreError::format(path, e))
            }
            SettingsFormat::Toml => toml::from_str(content).map_err(|e| StoreError::format(path, e)),
        }
    }
}

#[derive(Debug, Clone)]
struct Backing {
    path: PathBuf,
    format: SettingsFormat,
}

/// A hierarchical key-value settings store with write-through persistence.
pub struct SettingsStore {
    data: RwLock<Table>,
    backing: Option<Backing>,
    changed: Signal<String>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SettingsStore {
    /// Creates an empty store that is not backed by a file.
    pub fn in_memory() -> Self {
        Self {
            data: RwLock::new(Table::new()),
            backing: None,
            changed: Signal::new(),
        }
    }

    /// Opens the settings file at `path`.
    ///
    /// A missing file yields an empty store; the file is created by the first
    /// modification.
    pub fn open(path: impl Into<PathBuf>, format: SettingsFormat) -> StoreResult<Self> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => format.decode(&content, &path)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(target: targets::STORAGE, path = %path.display(), "settings file not found, starting empty");
                Table::new()
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        tracing::debug!(target: targets::STORAGE, path = %path.display(), keys = data.len(), "opened settings");
        Ok(Self {
            data: RwLock::new(data),
            backing: Some(Backing { path, format }),
            changed: Signal::new(),
        })
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.backing.as_ref().map(|b| b.path.as_path())
    }

    /// Emitted with the key of every committed modification.
    pub fn changed(&self) -> &Signal<String> {
        &self.changed
    }

    /// Sets a value at `path`, creating intermediate tables.
    ///
    /// # Errors
    ///
    /// If the store is file-backed and the file cannot be written, the
    /// store is left unchanged and the error is returned.
    /// Returns [`StoreError::InvalidKey`] if `path` has no key segments.
    pub fn set<V: Into<SettingsValue>>(&self, path: &str, value: V) -> StoreResult<()> {
        let parts = parse_path(path);
        if parts.is_empty() {
            return Err(StoreError::InvalidKey {
                key: path.to_string(),
            });
        }
        let value = value.into();
        self.modify(path, |data| {
            set_nested(data, &parts, value);
            true
        })
        .map(|_| ())
    }

    /// Removes the value at `path`, returning it.
    pub fn remove(&self, path: &str) -> StoreResult<Option<SettingsValue>> {
        let parts = parse_path(path);
        let mut removed = None;
        self.modify(path, |data| {
            removed = remove_nested(data, &parts);
            removed.is_some()
        })?;
        Ok(removed)
    }

    /// Returns true if `path` names at least one key segment.
    pub fn is_valid_path(path: &str) -> bool {
        !parse_path(path).is_empty()
    }

    /// Gets the value at `path`, converted to `T`.
    pub fn get<T: FromSettingsValue>(&self, path: &str) -> Option<T> {
        let data = self.data.read();
        get_nested(&data, &parse_path(path)).and_then(T::from_settings_value)
    }

    /// Gets the value at `path`, or `default`.
    pub fn get_or<T: FromSettingsValue>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    /// Returns true if a value exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        get_nested(&self.data.read(), &parse_path(path)).is_some()
    }

    /// Top-level keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Writes the current contents to the backing file, if any.
    pub fn save(&self) -> StoreResult<()> {
        match &self.backing {
            Some(backing) => persist(backing, &self.data.read()),
            None => Ok(()),
        }
    }

    /// Apply `edit` to a copy of the data, persist the copy, then commit it.
    ///
    /// `edit` returns whether anything changed; unchanged edits are neither
    /// persisted nor signalled.
    fn modify(&self, key: &str, edit: impl FnOnce(&mut Table) -> bool) -> StoreResult<bool> {
        {
            let mut data = self.data.write();
            let mut next = data.clone();
            if !edit(&mut next) {
                return Ok(false);
            }
            if let Some(backing) = &self.backing {
                if let Err(err) = persist(backing, &next) {
                    tracing::error!(target: targets::STORAGE, key, error = %err, "failed to persist settings");
                    return Err(err);
                }
            }
            *data = next;
        }

        tracing::trace!(target: targets::STORAGE, key, "setting committed");
        self.changed.emit(key.to_string());
        Ok(true)
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path())
            .field("keys", &self.keys())
            .finish()
    }
}

impl ThemeStore for SettingsStore {
    fn load(&self, key: &str) -> hexmon_style::Result<Option<String>> {
        Ok(self.get::<String>(key))
    }

    fn store(&self, key: &str, value: &str) -> hexmon_style::Result<()> {
        self.set(key, value)
            .map_err(|err| hexmon_style::Error::storage(key, err))
    }
}

fn persist(backing: &Backing, data: &Table) -> StoreResult<()> {
    let _span = PerfSpan::new("persist_settings");
    let text = backing.format.encode(data, &backing.path)?;
    atomic_write(&backing.path, text.as_bytes())
}

/// TOML has no null; nulls are written as empty strings.
fn toml_compatible(value: &SettingsValue) -> SettingsValue {
    match value {
        SettingsValue::Null => SettingsValue::String(String::new()),
        SettingsValue::Array(items) => {
            SettingsValue::Array(items.iter().map(toml_compatible).collect())
        }
        SettingsValue::Object(obj) => SettingsValue::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), toml_compatible(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn parse_path(path: &str) -> Vec<&str> {
    path.split(['.', '/']).filter(|s| !s.is_empty()).collect()
}

fn get_nested<'a>(data: &'a Table, parts: &[&str]) -> Option<&'a SettingsValue> {
    let (first, rest) = parts.split_first()?;
    let value = data.get(*first)?;
    if rest.is_empty() {
        Some(value)
    } else {
        match value {
            SettingsValue::Object(obj) => get_nested(obj, rest),
            _ => None,
        }
    }
}

fn set_nested(data: &mut Table, parts: &[&str], value: SettingsValue) {
    let Some((first, rest)) = parts.split_first() else {
        return;
    };

    if rest.is_empty() {
        data.insert(first.to_string(), value);
        return;
    }

    let entry = data
        .entry(first.to_string())
        .or_insert_with(|| SettingsValue::Object(Table::new()));
    if !matches!(entry, SettingsValue::Object(_)) {
        *entry = SettingsValue::Object(Table::new());
    }
    if let SettingsValue::Object(obj) = entry {
        set_nested(obj, rest, value);
    }
}

fn remove_nested(data: &mut Table, parts: &[&str]) -> Option<SettingsValue> {
    let (first, rest) = parts.split_first()?;
    if rest.is_empty() {
        return data.remove(*first);
    }
    match data.get_mut(*first)? {
        SettingsValue::Object(obj) => remove_nested(obj, rest),
        _ => None,
    }
}
