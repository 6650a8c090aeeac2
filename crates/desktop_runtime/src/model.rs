use std::fmt;

use serde::{Deserialize, Serialize};

/// Stacking value the z-counter starts from when nothing is persisted.
pub const DEFAULT_Z_BASELINE: u64 = 1000;

/// Position given to persisted windows that were stored without one.
pub const FALLBACK_WINDOW_POSITION: WindowPosition = WindowPosition { x: 120, y: 80 };

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Pointer-to-window displacement captured when a drag gesture starts.
///
/// Arithmetic saturates at the `i32` bounds, so windows parked far off-screen pin to the edge of
/// the coordinate space instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOffset {
    pub dx: i32,
    pub dy: i32,
}

impl DragOffset {
    pub fn between(pointer: PointerPosition, window: WindowPosition) -> Self {
        Self {
            dx: pointer.x.saturating_sub(window.x),
            dy: pointer.y.saturating_sub(window.y),
        }
    }

    /// Window position that keeps this offset under `pointer`.
    pub fn place(self, pointer: PointerPosition) -> WindowPosition {
        WindowPosition {
            x: pointer.x.saturating_sub(self.dx),
            y: pointer.y.saturating_sub(self.dy),
        }
    }
}

fn fallback_window_position() -> WindowPosition {
    FALLBACK_WINDOW_POSITION
}

/// One open window instance. This is the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub app_id: String,
    /// Copied from the registry at open time and never re-synced.
    pub title: String,
    #[serde(default = "fallback_window_position")]
    pub position: WindowPosition,
    pub z_order: u64,
    #[serde(default)]
    pub minimized: bool,
}

/// Monotonic stacking counter. Holds the last value handed out and only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZCounter(u64);

impl ZCounter {
    pub fn new(baseline: u64) -> Self {
        Self(baseline)
    }

    pub fn current(self) -> u64 {
        self.0
    }

    /// Advances the counter and returns the new top value.
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    /// Moves the counter up to `floor` if it is behind it. Never lowers it.
    pub fn raise_to(&mut self, floor: u64) {
        self.0 = self.0.max(floor);
    }
}

impl Default for ZCounter {
    fn default() -> Self {
        Self(DEFAULT_Z_BASELINE)
    }
}

/// Returns the focused window: the visible window with the highest `z_order`.
///
/// Focus is derived, not stored. On a tie the later-inserted window wins.
pub fn focused_window(windows: &[WindowDescriptor]) -> Option<&WindowDescriptor> {
    windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.z_order)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(id: &str, z_order: u64, minimized: bool) -> WindowDescriptor {
        WindowDescriptor {
            id: WindowId::from(id),
            app_id: "timeline".to_string(),
            title: "Timeline".to_string(),
            position: WindowPosition { x: 10, y: 20 },
            z_order,
            minimized,
        }
    }

    #[test]
    fn z_counter_only_moves_up() {
        let mut counter = ZCounter::default();
        assert_eq!(counter.next(), DEFAULT_Z_BASELINE + 1);
        assert_eq!(counter.next(), DEFAULT_Z_BASELINE + 2);
        counter.raise_to(10);
        assert_eq!(counter.current(), DEFAULT_Z_BASELINE + 2);
        counter.raise_to(5000);
        assert_eq!(counter.next(), 5001);
    }

    #[test]
    fn focused_window_is_highest_visible_z() {
        let windows = vec![
            window("a", 1003, false),
            window("b", 1009, true),
            window("c", 1005, false),
        ];
        assert_eq!(focused_window(&windows).map(|w| w.id.as_str()), Some("c"));
        assert_eq!(focused_window(&[]), None);
    }

    #[test]
    fn focused_window_tie_prefers_later_insertion() {
        let windows = vec![window("a", 1001, false), window("b", 1001, false)];
        assert_eq!(focused_window(&windows).map(|w| w.id.as_str()), Some("b"));
    }

    #[test]
    fn drag_offset_places_window_under_pointer() {
        let offset = DragOffset::between(
            PointerPosition { x: 150, y: 95 },
            WindowPosition { x: 100, y: 80 },
        );
        assert_eq!(offset, DragOffset { dx: 50, dy: 15 });
        assert_eq!(
            offset.place(PointerPosition { x: 400, y: 300 }),
            WindowPosition { x: 350, y: 285 }
        );
    }

    #[test]
    fn descriptor_uses_camel_case_record_layout() {
        let json = serde_json::to_value(window("timeline-1", 1001, false)).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "timeline-1",
                "appId": "timeline",
                "title": "Timeline",
                "position": { "x": 10, "y": 20 },
                "zOrder": 1001,
                "minimized": false
            })
        );
    }

    #[test]
    fn descriptor_decodes_with_missing_optional_fields() {
        let decoded: WindowDescriptor = serde_json::from_str(
            r#"{"id":"music-7","appId":"music","title":"Music","zOrder":1002}"#,
        )
        .expect("decode");
        assert_eq!(decoded.position, FALLBACK_WINDOW_POSITION);
        assert!(!decoded.minimized);
    }
}
