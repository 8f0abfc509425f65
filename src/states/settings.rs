//! Persisted Settings
//!
//! Theme and language preferences plus the key-value storage they are
//! persisted through.

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use gpui_component::ThemeMode;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, info};

// ==================== Preferences ====================

/// Color theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the system appearance
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Resolve to a concrete mode, consulting the system appearance for `Auto`
    pub fn resolve(self, system_dark: bool) -> ThemeMode {
        match self {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
            Theme::Auto if system_dark => ThemeMode::Dark,
            Theme::Auto => ThemeMode::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(Error::Invalid {
                message: format!("unknown theme '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Text direction implied by this language
    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(Error::Invalid {
                message: format!("unknown language '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text layout direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

// ==================== Storage ====================

/// Durable string key-value storage for user preferences
pub trait SettingsStorage {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value durably
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: SettingsStorage + ?Sized> SettingsStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Settings persisted as a flat TOML table on disk
#[derive(Debug)]
pub struct TomlFileStorage {
    path: PathBuf,
    table: toml::Table,
}

impl TomlFileStorage {
    /// Open the settings file in the platform config directory
    pub fn open_default() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(SETTINGS_FILE_NAME);
        Self::open(path)
    }

    /// Open (or lazily create) a settings file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        info!(path = ?path, "Loading settings file");

        let table = if path.exists() {
            let value = std::fs::read_to_string(&path)?;
            if value.trim().is_empty() {
                toml::Table::new()
            } else {
                toml::from_str::<toml::Table>(&value)?
            }
        } else {
            toml::Table::new()
        };

        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStorage for TomlFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.table
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        let content = toml::to_string(&self.table)?;
        std::fs::write(&self.path, content)?;
        debug!(key, value, path = ?self.path, "Setting saved");
        Ok(())
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with values
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().extend(
            values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }

    /// Snapshot of a stored value
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl SettingsStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
