use platform_host::{ExternalUrlService, NoopExternalUrlService, NoopPrefsStore, PrefsStore};

use crate::{WebExternalUrlService, WebPrefsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// Placeholder adapters: nothing persists and external links are dropped.
    DesktopStub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::DesktopStub => "desktop-stub",
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// No-op fallback.
    DesktopStub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::DesktopStub(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::DesktopStub(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::DesktopStub(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete external-link backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser `window.open`.
    Browser(WebExternalUrlService),
    /// No-op fallback.
    DesktopStub(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::DesktopStub(service) => service.open_url(url),
        }
    }
}

/// Builds the preference-store adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::DesktopStub => PrefsStoreAdapter::DesktopStub(NoopPrefsStore),
    }
}

/// Builds the external URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::DesktopStub => ExternalUrlServiceAdapter::DesktopStub(NoopExternalUrlService),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_build_selects_browser_adapters() {
        if cfg!(feature = "desktop-host-stub") {
            assert_eq!(host_strategy_name(), "desktop-stub");
            assert!(matches!(prefs_store(), PrefsStoreAdapter::DesktopStub(_)));
        } else {
            assert_eq!(host_strategy_name(), "browser");
            assert!(matches!(prefs_store(), PrefsStoreAdapter::Browser(_)));
            assert!(matches!(
                external_url_service(),
                ExternalUrlServiceAdapter::Browser(_)
            ));
        }
    }
}
