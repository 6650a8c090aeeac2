//! Built-in wallpaper catalog and the persisted wallpaper choice.

use std::rc::Rc;

use leptos::logging;
use platform_host::PrefsStore;

use crate::persistence;

/// One selectable desktop background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperDescriptor {
    pub wallpaper_id: &'static str,
    pub title: &'static str,
    pub src: &'static str,
}

impl WallpaperDescriptor {
    const fn new(wallpaper_id: &'static str, title: &'static str, src: &'static str) -> Self {
        Self {
            wallpaper_id,
            title,
            src,
        }
    }
}

pub const DEFAULT_WALLPAPER_ID: &str = "romantic";

static WALLPAPERS: [WallpaperDescriptor; 4] = [
    WallpaperDescriptor::new(
        "romantic",
        "Romantic",
        "/assets/wallpapers/romantic-gradient.svg",
    ),
    WallpaperDescriptor::new("night", "Night Sky", "/assets/wallpapers/night-sky.svg"),
    WallpaperDescriptor::new(
        "clouds",
        "Dreamy Clouds",
        "/assets/wallpapers/dreamy-clouds.svg",
    ),
    WallpaperDescriptor::new(
        "galaxy",
        "Galaxy Love",
        "/assets/wallpapers/galaxy-love.svg",
    ),
];

/// Built-in wallpapers in picker order.
pub fn builtin_wallpapers() -> &'static [WallpaperDescriptor] {
    &WALLPAPERS
}

pub fn builtin_wallpaper_by_id(wallpaper_id: &str) -> Option<&'static WallpaperDescriptor> {
    WALLPAPERS
        .iter()
        .find(|wallpaper| wallpaper.wallpaper_id == wallpaper_id)
}

fn default_wallpaper() -> &'static WallpaperDescriptor {
    &WALLPAPERS[0]
}

/// The current wallpaper plus the store it is written back to on change.
pub struct WallpaperPreference {
    store: Rc<dyn PrefsStore>,
    key: String,
    current: &'static WallpaperDescriptor,
}

impl WallpaperPreference {
    /// Restores the stored choice. Missing, unreadable, or unknown ids fall back to the default
    /// wallpaper; the latter two are logged.
    pub fn load(store: Rc<dyn PrefsStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match persistence::load_wallpaper_id(store.as_ref(), &key) {
            Ok(Some(wallpaper_id)) => builtin_wallpaper_by_id(&wallpaper_id).unwrap_or_else(|| {
                logging::warn!("unknown wallpaper `{wallpaper_id}` in `{key}`, using default");
                default_wallpaper()
            }),
            Ok(None) => default_wallpaper(),
            Err(err) => {
                logging::warn!("wallpaper load failed, using default: {err}");
                default_wallpaper()
            }
        };
        Self {
            store,
            key,
            current,
        }
    }

    pub fn current(&self) -> &'static WallpaperDescriptor {
        self.current
    }

    /// Switches to `wallpaper_id` and persists it. Unknown ids change nothing.
    pub fn select(&mut self, wallpaper_id: &str) -> bool {
        let Some(next) = builtin_wallpaper_by_id(wallpaper_id) else {
            return false;
        };
        self.current = next;
        if let Err(err) =
            persistence::persist_wallpaper_id(self.store.as_ref(), &self.key, next.wallpaper_id)
        {
            logging::warn!("wallpaper persist failed: {err}");
        }
        true
    }
}
