//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::rc::Rc;

use platform_host::PrefsStore;

use crate::{
    apps::{self, AppActivation},
    config::WindowManagerConfig,
    drag::DragController,
    model::{PointerPosition, WindowId, WindowPosition},
    wallpaper::WallpaperPreference,
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`], one per discrete user event.
pub enum DesktopAction {
    /// Dock click: opens a window, or a link for external apps.
    ActivateApp {
        /// Registry id of the clicked entry.
        app_id: String,
    },
    /// Open a window for an app id regardless of its registry kind.
    OpenWindow {
        /// App id to host in the new window.
        app_id: String,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a visible window or restore a minimized one.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Move a window outside of a drag gesture.
    SetPosition {
        /// Window to move.
        window_id: WindowId,
        /// New top-left position.
        position: WindowPosition,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Switch the desktop background to a built-in wallpaper.
    SetWallpaper {
        /// Catalog id of the wallpaper.
        wallpaper_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell host to execute.
pub enum RuntimeEffect {
    /// Open an external URL in a new browsing context.
    OpenExternalUrl(String),
    /// Start routing global pointer-move/up events to the runtime for a drag.
    AcquirePointerCapture(WindowId),
    /// Stop routing global pointer events. Emitted on every path that ends a drag.
    ReleasePointerCapture,
}

/// Owns the window manager, the drag controller and the wallpaper choice for one running shell.
pub struct DesktopRuntime {
    manager: WindowManager,
    drag: DragController,
    wallpaper: WallpaperPreference,
}

impl DesktopRuntime {
    pub fn new(manager: WindowManager, wallpaper: WallpaperPreference) -> Self {
        Self {
            manager,
            drag: DragController::default(),
            wallpaper,
        }
    }

    /// Restores windows and wallpaper from `store`.
    pub fn load(store: Rc<dyn PrefsStore>, config: WindowManagerConfig) -> Self {
        let wallpaper = WallpaperPreference::load(store.clone(), config.wallpaper_key.clone());
        Self::new(WindowManager::load(store, config), wallpaper)
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn wallpaper(&self) -> &WallpaperPreference {
        &self.wallpaper
    }

    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(self, action)
    }
}

/// Applies a [`DesktopAction`] and collects the resulting side effects.
///
/// Actions naming windows that no longer exist change nothing and emit nothing.
pub fn reduce_desktop(runtime: &mut DesktopRuntime, action: DesktopAction) -> Vec<RuntimeEffect> {
    let DesktopRuntime {
        manager,
        drag,
        wallpaper,
    } = runtime;
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateApp { app_id } => match apps::activation_for(&app_id) {
            AppActivation::OpenExternal(url) => {
                effects.push(RuntimeEffect::OpenExternalUrl(url.to_string()));
            }
            AppActivation::OpenWindow(app_id) => {
                manager.open(&app_id);
            }
        },
        DesktopAction::OpenWindow { app_id } => {
            manager.open(&app_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            if drag.cancel_for(&window_id) {
                effects.push(RuntimeEffect::ReleasePointerCapture);
            }
            manager.close(&window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            manager.focus(&window_id);
        }
        DesktopAction::ToggleMinimize { window_id } => {
            manager.toggle_minimize(&window_id);
        }
        DesktopAction::SetPosition {
            window_id,
            position,
        } => {
            manager.set_position(&window_id, position);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if drag.begin_drag(manager, &window_id, pointer) {
                effects.push(RuntimeEffect::AcquirePointerCapture(window_id));
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            let was_dragging = drag.is_dragging();
            if drag.update_drag(manager, pointer).is_none() && was_dragging {
                effects.push(RuntimeEffect::ReleasePointerCapture);
            }
        }
        DesktopAction::EndMove => {
            if drag.end_drag(manager).is_some() {
                effects.push(RuntimeEffect::ReleasePointerCapture);
            }
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            wallpaper.select(&wallpaper_id);
        }
    }
    effects
}
