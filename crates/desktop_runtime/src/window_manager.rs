//! Window lifecycle, z-order arbitration, and persistence of the window set.
//!
//! The [`WindowManager`] is the single writer of the window set and the z-counter. Every
//! operation on an unknown id is a silent no-op (reported as `false`), and persistence faults are
//! logged without failing the in-memory operation.

use std::rc::Rc;

use leptos::logging;
use platform_host::{Clock, PrefsStore, SystemClock};
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{
    apps,
    config::WindowManagerConfig,
    drag::WindowPositioner,
    model::{focused_window, WindowDescriptor, WindowId, WindowPosition, ZCounter},
    persistence,
};

pub struct WindowManager {
    config: WindowManagerConfig,
    store: Rc<dyn PrefsStore>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    windows: Vec<WindowDescriptor>,
    z_counter: ZCounter,
    last_id_stamp: u64,
}

impl WindowManager {
    /// Restores the persisted layout from `store` using the wall clock and an entropy-seeded
    /// cascade generator.
    pub fn load(store: Rc<dyn PrefsStore>, config: WindowManagerConfig) -> Self {
        Self::with_services(
            store,
            config,
            Box::new(SystemClock),
            Box::new(StdRng::from_entropy()),
        )
    }

    pub fn with_services(
        store: Rc<dyn PrefsStore>,
        config: WindowManagerConfig,
        clock: Box<dyn Clock>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let layout = persistence::load_layout(store.as_ref(), &config);
        Self {
            config,
            store,
            clock,
            rng,
            windows: layout.windows,
            z_counter: layout.z_counter,
            last_id_stamp: 0,
        }
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    /// All tracked windows in insertion order.
    pub fn windows(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Last z value handed out.
    pub fn z_top(&self) -> u64 {
        self.z_counter.current()
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        focused_window(&self.windows).map(|w| &w.id)
    }

    /// Opens a new window for `app_id` on top of the stack.
    ///
    /// Unknown ids still open; the window is titled with the raw id.
    pub fn open(&mut self, app_id: &str) -> WindowDescriptor {
        let id = self.next_window_id(app_id);
        let position = self.config.cascade_position(&mut self.rng);
        let window = WindowDescriptor {
            id,
            app_id: app_id.to_string(),
            title: apps::window_title_for(app_id),
            position,
            z_order: self.z_counter.next(),
            minimized: false,
        };
        self.windows.push(window.clone());
        self.persist_z_counter();
        self.persist_windows();
        window
    }

    /// Removes a window. Closing an unknown or already-closed id does nothing.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before_len = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        if self.windows.len() == before_len {
            return false;
        }
        self.persist_windows();
        true
    }

    /// Stamps the window with a fresh top z value. Other windows keep theirs.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        let Some(index) = self.index_of(window_id) else {
            return false;
        };
        self.windows[index].z_order = self.z_counter.next();
        self.persist_z_counter();
        self.persist_windows();
        true
    }

    /// Flips `minimized`. Position and z-order are left as they are.
    pub fn toggle_minimize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.minimized = !window.minimized;
        self.persist_windows();
        true
    }

    /// Moves a window and persists the new position. No clamping is applied.
    pub fn set_position(&mut self, window_id: &WindowId, position: WindowPosition) -> bool {
        if !self.place_window(window_id, position) {
            return false;
        }
        self.persist_windows();
        true
    }

    /// Non-minimized windows in paint order: ascending `z_order`, topmost last.
    pub fn list_visible(&self) -> Vec<WindowDescriptor> {
        let mut visible: Vec<_> = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect();
        visible.sort_by_key(|w| w.z_order);
        visible
    }

    /// Minimized windows in insertion order, for the tray.
    pub fn list_minimized(&self) -> Vec<WindowDescriptor> {
        self.windows
            .iter()
            .filter(|w| w.minimized)
            .cloned()
            .collect()
    }

    fn index_of(&self, window_id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == window_id)
    }

    fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }

    /// `"{app_id}-{millis}"`, with the stamp bumped past the previous one and past any id
    /// already tracked (restored windows included).
    fn next_window_id(&mut self, app_id: &str) -> WindowId {
        let mut stamp = self
            .clock
            .now_ms()
            .max(self.last_id_stamp.saturating_add(1));
        loop {
            let candidate = WindowId(format!("{app_id}-{stamp}"));
            if self.index_of(&candidate).is_none() {
                self.last_id_stamp = stamp;
                return candidate;
            }
            stamp = stamp.saturating_add(1);
        }
    }

    fn persist_windows(&self) {
        if let Err(err) = persistence::persist_windows(self.store.as_ref(), &self.config, &self.windows)
        {
            logging::warn!("persist window set failed: {err}");
        }
    }

    fn persist_z_counter(&self) {
        if let Err(err) =
            persistence::persist_z_counter(self.store.as_ref(), &self.config, self.z_counter)
        {
            logging::warn!("persist z-counter failed: {err}");
        }
    }
}

impl WindowPositioner for WindowManager {
    fn window_position(&self, window_id: &WindowId) -> Option<WindowPosition> {
        self.window(window_id).map(|w| w.position)
    }

    fn place_window(&mut self, window_id: &WindowId, position: WindowPosition) -> bool {
        match self.window_mut(window_id) {
            Some(window) => {
                window.position = position;
                true
            }
            None => false,
        }
    }

    fn commit_positions(&mut self) {
        self.persist_windows();
    }
}
