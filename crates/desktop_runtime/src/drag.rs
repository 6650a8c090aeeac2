//! Pointer-driven window dragging.
//!
//! A [`DragController`] only keeps transient gesture state. Every position change goes through
//! the [`WindowPositioner`] it is handed, which is the window manager in the running shell.

use crate::model::{DragOffset, PointerPosition, WindowId, WindowPosition};

/// Position mutation interface a drag gesture writes through.
pub trait WindowPositioner {
    /// Current position of `window_id`, or `None` when it is not open.
    fn window_position(&self, window_id: &WindowId) -> Option<WindowPosition>;

    /// Moves a window in memory. Returns `false` when the window is not open.
    fn place_window(&mut self, window_id: &WindowId, position: WindowPosition) -> bool;

    /// Makes the positions placed so far durable.
    fn commit_positions(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub offset: DragOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_window(&self) -> Option<&WindowId> {
        match &self.state {
            DragState::Dragging(session) => Some(&session.window_id),
            DragState::Idle => None,
        }
    }

    /// Starts a gesture on `window_id`, capturing the pointer-to-window offset.
    ///
    /// Restarting on the window already being dragged recaptures the offset. Starting on a
    /// different window first commits the gesture in progress. Returns `false` and leaves the
    /// state untouched when the window is not open.
    pub fn begin_drag<W: WindowPositioner + ?Sized>(
        &mut self,
        windows: &mut W,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> bool {
        let Some(position) = windows.window_position(window_id) else {
            return false;
        };
        if self
            .dragged_window()
            .is_some_and(|dragged| dragged != window_id)
        {
            windows.commit_positions();
        }
        self.state = DragState::Dragging(DragSession {
            window_id: window_id.clone(),
            offset: DragOffset::between(pointer, position),
        });
        true
    }

    /// Moves the dragged window so the captured offset stays under `pointer`.
    ///
    /// A no-op while idle. If the dragged window has disappeared the gesture drops back to idle.
    pub fn update_drag<W: WindowPositioner + ?Sized>(
        &mut self,
        windows: &mut W,
        pointer: PointerPosition,
    ) -> Option<WindowPosition> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        let position = session.offset.place(pointer);
        if windows.place_window(&session.window_id, position) {
            Some(position)
        } else {
            self.state = DragState::Idle;
            None
        }
    }

    /// Ends the gesture and commits the final position. Idempotent.
    pub fn end_drag<W: WindowPositioner + ?Sized>(&mut self, windows: &mut W) -> Option<WindowId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                windows.commit_positions();
                Some(session.window_id)
            }
            DragState::Idle => None,
        }
    }

    /// Drops a gesture targeting `window_id` without committing anything. Used when the window
    /// is closed mid-drag.
    pub fn cancel_for(&mut self, window_id: &WindowId) -> bool {
        if self.dragged_window() == Some(window_id) {
            self.state = DragState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Board {
        positions: HashMap<WindowId, WindowPosition>,
        commits: usize,
    }

    impl Board {
        fn with(id: &str, x: i32, y: i32) -> Self {
            let mut board = Self::default();
            board
                .positions
                .insert(WindowId::from(id), WindowPosition { x, y });
            board
        }
    }

    impl WindowPositioner for Board {
        fn window_position(&self, window_id: &WindowId) -> Option<WindowPosition> {
            self.positions.get(window_id).copied()
        }

        fn place_window(&mut self, window_id: &WindowId, position: WindowPosition) -> bool {
            match self.positions.get_mut(window_id) {
                Some(slot) => {
                    *slot = position;
                    true
                }
                None => false,
            }
        }

        fn commit_positions(&mut self) {
            self.commits += 1;
        }
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn window_moves_by_exact_pointer_delta() {
        for (start_x, start_y) in [(0, 0), (120, 80), (-300, 4000)] {
            let id = WindowId::from("timeline-1");
            let mut board = Board::with("timeline-1", start_x, start_y);
            let mut drag = DragController::default();

            assert!(drag.begin_drag(&mut board, &id, pointer(500, 400)));
            drag.update_drag(&mut board, pointer(530, 360));
            assert_eq!(
                board.window_position(&id),
                Some(WindowPosition {
                    x: start_x + 30,
                    y: start_y - 40
                })
            );
        }
    }

    #[test]
    fn long_drags_do_not_drift() {
        let id = WindowId::from("music-1");
        let mut board = Board::with("music-1", 100, 100);
        let mut drag = DragController::default();
        drag.begin_drag(&mut board, &id, pointer(110, 105));
        for step in 0..1000 {
            drag.update_drag(&mut board, pointer(110 + step % 7, 105 + step % 3));
        }
        drag.update_drag(&mut board, pointer(110, 105));
        assert_eq!(
            board.window_position(&id),
            Some(WindowPosition { x: 100, y: 100 })
        );
    }

    #[test]
    fn updates_while_idle_are_ignored() {
        let id = WindowId::from("games-1");
        let mut board = Board::with("games-1", 10, 10);
        let mut drag = DragController::default();
        assert_eq!(drag.update_drag(&mut board, pointer(99, 99)), None);
        assert_eq!(
            board.window_position(&id),
            Some(WindowPosition { x: 10, y: 10 })
        );
    }

    #[test]
    fn end_drag_commits_once_and_is_idempotent() {
        let id = WindowId::from("games-1");
        let mut board = Board::with("games-1", 10, 10);
        let mut drag = DragController::default();
        drag.begin_drag(&mut board, &id, pointer(15, 15));
        assert_eq!(drag.end_drag(&mut board), Some(id));
        assert_eq!(drag.end_drag(&mut board), None);
        assert_eq!(board.commits, 1);
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn restarting_on_same_window_recaptures_offset() {
        let id = WindowId::from("letters-1");
        let mut board = Board::with("letters-1", 0, 0);
        let mut drag = DragController::default();
        drag.begin_drag(&mut board, &id, pointer(10, 10));
        drag.update_drag(&mut board, pointer(20, 20));
        drag.begin_drag(&mut board, &id, pointer(50, 50));
        drag.update_drag(&mut board, pointer(55, 50));
        assert_eq!(
            board.window_position(&id),
            Some(WindowPosition { x: 15, y: 10 })
        );
        assert_eq!(board.commits, 0);
    }

    #[test]
    fn switching_windows_commits_the_earlier_gesture() {
        let first = WindowId::from("letters-1");
        let second = WindowId::from("music-1");
        let mut board = Board::with("letters-1", 0, 0);
        board
            .positions
            .insert(second.clone(), WindowPosition { x: 200, y: 200 });
        let mut drag = DragController::default();

        drag.begin_drag(&mut board, &first, pointer(10, 10));
        drag.update_drag(&mut board, pointer(40, 30));
        assert!(drag.begin_drag(&mut board, &second, pointer(210, 210)));

        assert_eq!(board.commits, 1);
        assert_eq!(drag.dragged_window(), Some(&second));
        drag.update_drag(&mut board, pointer(215, 210));
        assert_eq!(
            board.window_position(&first),
            Some(WindowPosition { x: 30, y: 20 })
        );
        assert_eq!(
            board.window_position(&second),
            Some(WindowPosition { x: 205, y: 200 })
        );
    }

    #[test]
    fn windows_at_coordinate_limits_pin_instead_of_overflowing() {
        let low = WindowId::from("gallery-1");
        let mut board = Board::with("gallery-1", i32::MIN, 0);
        let mut drag = DragController::default();
        assert!(drag.begin_drag(&mut board, &low, pointer(10, 10)));
        drag.update_drag(&mut board, pointer(-50, 10));
        assert_eq!(
            board.window_position(&low),
            Some(WindowPosition { x: i32::MIN, y: 0 })
        );

        let high = WindowId::from("gallery-2");
        let mut board = Board::with("gallery-2", 2_147_483_000, i32::MAX);
        assert!(drag.begin_drag(&mut board, &high, pointer(10, 10)));
        drag.update_drag(&mut board, pointer(2000, 20));
        let placed = board.window_position(&high).expect("still on board");
        assert!(placed.x >= 2_147_483_000, "wrapped to {}", placed.x);
        assert_eq!(placed.y, i32::MAX);
    }

    #[test]
    fn begin_on_unknown_window_leaves_state_alone() {
        let mut board = Board::with("letters-1", 0, 0);
        let mut drag = DragController::default();
        assert!(!drag.begin_drag(&mut board, &WindowId::from("ghost"), pointer(0, 0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn vanished_window_returns_gesture_to_idle() {
        let id = WindowId::from("letters-1");
        let mut board = Board::with("letters-1", 0, 0);
        let mut drag = DragController::default();
        drag.begin_drag(&mut board, &id, pointer(0, 0));
        board.positions.clear();
        assert_eq!(drag.update_drag(&mut board, pointer(5, 5)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_only_targets_the_dragged_window() {
        let id = WindowId::from("letters-1");
        let mut board = Board::with("letters-1", 0, 0);
        let mut drag = DragController::default();
        drag.begin_drag(&mut board, &id, pointer(0, 0));
        assert!(!drag.cancel_for(&WindowId::from("other")));
        assert!(drag.is_dragging());
        assert!(drag.cancel_for(&id));
        assert_eq!(drag.dragged_window(), None);
        assert_eq!(board.commits, 0);
    }
}
