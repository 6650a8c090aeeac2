//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! This crate is the boundary for platform services the window manager depends on: the
//! key/value preference store used for layout persistence, the wall clock used to stamp window
//! ids, and the service that opens external links outside the shell. Concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod storage;
pub mod time;

pub use external_url::{ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
pub use time::{unix_time_ms_now, Clock, SystemClock};
