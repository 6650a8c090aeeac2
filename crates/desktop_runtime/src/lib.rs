//! Desktop window-manager runtime: window lifecycle, z-order, drag gestures, layout persistence,
//! and the leptos shell that drives them.

pub mod apps;
pub mod components;
pub mod config;
pub mod content;
pub mod drag;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use components::DesktopShell;
pub use config::WindowManagerConfig;
pub use content::{ContentHost, ContentRegistry, WindowContent};
pub use drag::{DragController, DragState, WindowPositioner};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopRuntime, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use wallpaper::{WallpaperDescriptor, WallpaperPreference};
pub use window_manager::WindowManager;
