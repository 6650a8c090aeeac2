//! Static application registry backing the dock.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    /// Opens inside a managed window.
    Native,
    /// Opens a link in a new browsing context and never creates a window.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub kind: AppKind,
    pub title: &'static str,
    pub icon: &'static str,
    /// Present iff `kind` is [`AppKind::External`].
    pub url: Option<&'static str>,
}

impl AppDescriptor {
    const fn native(app_id: &'static str, title: &'static str, icon: &'static str) -> Self {
        Self {
            app_id,
            kind: AppKind::Native,
            title,
            icon,
            url: None,
        }
    }

    const fn external(
        app_id: &'static str,
        title: &'static str,
        icon: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            app_id,
            kind: AppKind::External,
            title,
            icon,
            url: Some(url),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            AppKind::Native => self.url.is_none(),
            AppKind::External => self.url.is_some_and(|url| !url.trim().is_empty()),
        }
    }
}

const APP_REGISTRY: [AppDescriptor; 9] = [
    AppDescriptor::native("timeline", "Timeline", "/icons/timeline.svg"),
    AppDescriptor::native("gallery", "Gallery", "/icons/polaroid.svg"),
    AppDescriptor::native("letters", "Letters", "/icons/letter.svg"),
    AppDescriptor::native("music", "Music", "/icons/music.svg"),
    AppDescriptor::native("games", "Games", "/icons/gamepad.svg"),
    AppDescriptor::native("achievements", "Achievements", "/icons/badge.svg"),
    AppDescriptor::native("galaxy", "Memory Galaxy", "/icons/galaxy.svg"),
    AppDescriptor::external(
        "movie-night",
        "Movie Night",
        "/icons/projector.svg",
        "https://your-movie-site.example",
    ),
    AppDescriptor::external(
        "fortune-cookie",
        "Fortune Cookie",
        "/icons/cookie.svg",
        "https://your-cookie-site.example",
    ),
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: &str) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

/// Registry entries shown in the dock, in registry order. Malformed entries are skipped.
pub fn dock_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(AppDescriptor::is_well_formed)
        .collect()
}

pub fn native_app_ids() -> impl Iterator<Item = &'static str> {
    app_registry()
        .iter()
        .filter(|entry| entry.kind == AppKind::Native)
        .map(|entry| entry.app_id)
}

/// Title a new window gets: the registry title, or the raw id for unknown apps.
pub fn window_title_for(app_id: &str) -> String {
    app_descriptor(app_id)
        .map(|entry| entry.title.to_string())
        .unwrap_or_else(|| app_id.to_string())
}

/// What activating a dock entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppActivation {
    OpenWindow(String),
    OpenExternal(&'static str),
}

/// Resolves a dock click. Unknown ids still open a window so the click is never lost.
pub fn activation_for(app_id: &str) -> AppActivation {
    match app_descriptor(app_id) {
        Some(AppDescriptor {
            kind: AppKind::External,
            url: Some(url),
            ..
        }) => AppActivation::OpenExternal(url),
        _ => AppActivation::OpenWindow(app_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let ids: HashSet<_> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids.len(), app_registry().len());
    }

    #[test]
    fn url_is_present_iff_external() {
        for entry in app_registry() {
            assert!(entry.is_well_formed(), "{} is malformed", entry.app_id);
        }
        assert_eq!(dock_apps().len(), app_registry().len());
    }

    #[test]
    fn unknown_app_title_falls_back_to_id() {
        assert_eq!(window_title_for("galaxy"), "Memory Galaxy");
        assert_eq!(window_title_for("deleted-app"), "deleted-app");
    }

    #[test]
    fn activation_routes_external_apps_to_links() {
        assert_eq!(
            activation_for("movie-night"),
            AppActivation::OpenExternal("https://your-movie-site.example")
        );
        assert_eq!(
            activation_for("gallery"),
            AppActivation::OpenWindow("gallery".to_string())
        );
        assert_eq!(
            activation_for("nope"),
            AppActivation::OpenWindow("nope".to_string())
        );
    }

    #[test]
    fn native_ids_exclude_external_entries() {
        let ids: Vec<_> = native_app_ids().collect();
        assert_eq!(ids.len(), 7);
        assert!(!ids.contains(&"fortune-cookie"));
    }
}
