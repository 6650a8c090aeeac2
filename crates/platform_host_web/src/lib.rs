//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the desktop runtime's persistence to `window.localStorage` and its external
//! links to `window.open`. On non-wasm targets the adapters degrade to empty/no-op behavior so the
//! runtime and its tests build everywhere.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;
pub mod storage;

pub use adapters::{
    external_url_service, host_strategy_name, prefs_store, selected_host_strategy,
    ExternalUrlServiceAdapter, HostStrategy, PrefsStoreAdapter,
};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
