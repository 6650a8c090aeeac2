//! Layout persistence: the window set and the z-counter, one store key each, plus the wallpaper
//! choice.
//!
//! Loading never fails. Anything unreadable degrades to an empty window set and the baseline
//! counter, and the fault is logged. Writes report a [`PersistenceError`] that the window manager
//! logs and swallows.

use std::collections::HashSet;

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    config::WindowManagerConfig,
    model::{WindowDescriptor, ZCounter},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store refused the read or the stored JSON did not decode.
    #[error("failed to load `{key}`: {message}")]
    Load { key: String, message: String },
    /// Encoding failed or the store refused the write.
    #[error("failed to save `{key}`: {message}")]
    Save { key: String, message: String },
}

/// Window set and counter as restored at boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLayout {
    pub windows: Vec<WindowDescriptor>,
    pub z_counter: ZCounter,
}

/// Restores the persisted layout, repairing what it can.
///
/// Records that fail to decode are dropped individually, duplicate ids keep their first
/// occurrence, and the counter is raised to at least the highest restored `z_order` so the next
/// focus still produces a new maximum.
pub fn load_layout(store: &dyn PrefsStore, config: &WindowManagerConfig) -> PersistedLayout {
    let windows = match read_key::<Vec<Value>>(store, &config.windows_key) {
        Ok(Some(records)) => decode_windows(records, &config.windows_key),
        Ok(None) => Vec::new(),
        Err(err) => {
            logging::warn!("window set load failed, starting empty: {err}");
            Vec::new()
        }
    };

    let mut z_counter = match read_key::<u64>(store, &config.z_counter_key) {
        Ok(Some(z_top)) => ZCounter::new(z_top),
        Ok(None) => ZCounter::new(config.z_baseline),
        Err(err) => {
            logging::warn!("z-counter load failed, using baseline: {err}");
            ZCounter::new(config.z_baseline)
        }
    };
    if let Some(max_z) = windows.iter().map(|w| w.z_order).max() {
        z_counter.raise_to(max_z);
    }

    PersistedLayout { windows, z_counter }
}

fn decode_windows(records: Vec<Value>, key: &str) -> Vec<WindowDescriptor> {
    let mut seen = HashSet::new();
    let mut windows = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<WindowDescriptor>(record) {
            Ok(window) => {
                if seen.insert(window.id.clone()) {
                    windows.push(window);
                } else {
                    logging::warn!("dropping duplicate window `{}` from `{key}`", window.id);
                }
            }
            Err(err) => logging::warn!("dropping unreadable window record in `{key}`: {err}"),
        }
    }
    windows
}

/// Writes the full window set.
///
/// # Errors
///
/// Returns an error when encoding fails or the store rejects the write.
pub fn persist_windows(
    store: &dyn PrefsStore,
    config: &WindowManagerConfig,
    windows: &[WindowDescriptor],
) -> Result<(), PersistenceError> {
    write_key(store, &config.windows_key, &windows)
}

/// Writes the current top of the z-counter.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub fn persist_z_counter(
    store: &dyn PrefsStore,
    config: &WindowManagerConfig,
    z_counter: ZCounter,
) -> Result<(), PersistenceError> {
    write_key(store, &config.z_counter_key, &z_counter)
}

/// Reads the stored wallpaper id, if any. Whether the id is still in the catalog is for the
/// caller to decide.
///
/// # Errors
///
/// Returns an error when the store read fails or the value is not a JSON string.
pub fn load_wallpaper_id(
    store: &dyn PrefsStore,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    read_key(store, key)
}

/// Writes the selected wallpaper id.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub fn persist_wallpaper_id(
    store: &dyn PrefsStore,
    key: &str,
    wallpaper_id: &str,
) -> Result<(), PersistenceError> {
    write_key(store, key, &wallpaper_id)
}

fn read_key<T: DeserializeOwned>(
    store: &dyn PrefsStore,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    load_pref_with(store, key).map_err(|message| PersistenceError::Load {
        key: key.to_string(),
        message,
    })
}

fn write_key<T: Serialize>(
    store: &dyn PrefsStore,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    save_pref_with(store, key, value).map_err(|message| PersistenceError::Save {
        key: key.to_string(),
        message,
    })
}
