//! Lookup from application id to the content mounted inside its window.

use std::collections::HashMap;

/// What a window body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent<C> {
    App(C),
    /// No renderer is registered for `app_id`. Typically a window restored for an app that a
    /// newer registry no longer carries.
    Fallback { app_id: String },
}

impl<C> WindowContent<C> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

pub trait ContentHost {
    type Content;

    /// Renders content for `app_id`. Never fails; misses yield [`WindowContent::Fallback`].
    fn render(&self, app_id: &str) -> WindowContent<Self::Content>;
}

type Renderer<C> = Box<dyn Fn() -> C>;

/// [`ContentHost`] backed by a table of renderer closures.
pub struct ContentRegistry<C> {
    renderers: HashMap<String, Renderer<C>>,
}

impl<C> Default for ContentRegistry<C> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<C> ContentRegistry<C> {
    /// Registers `render` for `app_id`, replacing any earlier renderer for it.
    pub fn register(&mut self, app_id: impl Into<String>, render: impl Fn() -> C + 'static) {
        self.renderers.insert(app_id.into(), Box::new(render));
    }

    pub fn with(mut self, app_id: impl Into<String>, render: impl Fn() -> C + 'static) -> Self {
        self.register(app_id, render);
        self
    }

    pub fn contains(&self, app_id: &str) -> bool {
        self.renderers.contains_key(app_id)
    }
}

impl<C> ContentHost for ContentRegistry<C> {
    type Content = C;

    fn render(&self, app_id: &str) -> WindowContent<C> {
        match self.renderers.get(app_id) {
            Some(render) => WindowContent::App(render()),
            None => WindowContent::Fallback {
                app_id: app_id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registered_apps_render_and_misses_fall_back() {
        let host = ContentRegistry::default()
            .with("timeline", || "timeline body".to_string())
            .with("gallery", || "gallery body".to_string());

        assert_eq!(
            host.render("timeline"),
            WindowContent::App("timeline body".to_string())
        );
        let missing = host.render("deleted-app");
        assert!(missing.is_fallback());
        assert_eq!(
            missing,
            WindowContent::Fallback {
                app_id: "deleted-app".to_string()
            }
        );
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut host = ContentRegistry::default();
        host.register("music", || 1);
        host.register("music", || 2);
        assert!(host.contains("music"));
        assert_eq!(host.render("music"), WindowContent::App(2));
    }
}
