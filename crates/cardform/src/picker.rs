//! The 3×3 text-alignment picker.
//!
//! Wraps the pure grid math in [`cardwire::align`] with an input layer:
//! direct selection (a click equivalent) and keyboard navigation with two
//! equivalent binding sets (arrow keys and WASD). Anything else is a
//! no-op, and the active cell is always observable via [`AlignPicker::selected`].
//!
//! # Example
//!
//! ```rust
//! use cardform::picker::AlignPicker;
//! use cardwire::align::Cell;
//!
//! let mut picker = AlignPicker::new();
//! assert_eq!(picker.selected(), Cell::MiddleMiddle);
//!
//! picker.handle_key("up");
//! picker.handle_key("a");
//! assert_eq!(picker.selected(), Cell::TopLeft);
//!
//! // Clamped at the edge.
//! picker.handle_key("w");
//! assert_eq!(picker.selected(), Cell::TopLeft);
//! ```

use cardwire::align::{Cell, Direction};
use tracing::trace;

use crate::key::Binding;

/// Key bindings for grid navigation. Arrow keys and WASD are equivalent.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub up: Binding,
    pub down: Binding,
    pub left: Binding,
    pub right: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new().keys(&["up", "w", "W"]).help("↑/w", "move up"),
            down: Binding::new()
                .keys(&["down", "s", "S"])
                .help("↓/s", "move down"),
            left: Binding::new()
                .keys(&["left", "a", "A"])
                .help("←/a", "move left"),
            right: Binding::new()
                .keys(&["right", "d", "D"])
                .help("→/d", "move right"),
        }
    }
}

/// Alignment picker model: exactly one selected cell at any time.
#[derive(Debug, Clone, Default)]
pub struct AlignPicker {
    cell: Cell,
    /// Key bindings.
    pub key_map: KeyMap,
}

impl AlignPicker {
    /// Creates a picker with the center cell selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker with an explicit starting cell.
    #[must_use]
    pub fn with_selected(cell: Cell) -> Self {
        Self {
            cell,
            key_map: KeyMap::default(),
        }
    }

    /// The currently selected cell.
    #[must_use]
    pub const fn selected(&self) -> Cell {
        self.cell
    }

    /// Select a cell directly (click equivalent).
    pub fn select(&mut self, cell: Cell) {
        self.cell = cell;
    }

    /// Handle a key event. Unbound keys leave the selection untouched.
    /// Returns the active cell after the event.
    pub fn handle_key(&mut self, key: &str) -> Cell {
        let direction = if self.key_map.up.is_match(key) {
            Some(Direction::Up)
        } else if self.key_map.down.is_match(key) {
            Some(Direction::Down)
        } else if self.key_map.left.is_match(key) {
            Some(Direction::Left)
        } else if self.key_map.right.is_match(key) {
            Some(Direction::Right)
        } else {
            None
        };

        if let Some(direction) = direction {
            let next = self.cell.step(direction);
            trace!(from = %self.cell, to = %next, "picker navigation");
            self.cell = next;
        }
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_center() {
        assert_eq!(AlignPicker::new().selected(), Cell::MiddleMiddle);
    }

    #[test]
    fn test_arrow_and_wasd_are_equivalent() {
        let mut a = AlignPicker::new();
        let mut b = AlignPicker::new();
        a.handle_key("up");
        b.handle_key("w");
        assert_eq!(a.selected(), b.selected());
        a.handle_key("right");
        b.handle_key("D");
        assert_eq!(a.selected(), b.selected());
    }

    #[test]
    fn test_unknown_key_is_a_no_op() {
        let mut picker = AlignPicker::with_selected(Cell::BottomLeft);
        assert_eq!(picker.handle_key("enter"), Cell::BottomLeft);
        assert_eq!(picker.handle_key("x"), Cell::BottomLeft);
    }

    #[test]
    fn test_select_overrides_navigation_state() {
        let mut picker = AlignPicker::new();
        picker.select(Cell::TopRight);
        assert_eq!(picker.selected(), Cell::TopRight);
        picker.handle_key("s");
        assert_eq!(picker.selected(), Cell::MiddleRight);
    }

    #[test]
    fn test_navigation_clamps_at_corners() {
        let mut picker = AlignPicker::with_selected(Cell::BottomRight);
        picker.handle_key("down");
        picker.handle_key("right");
        assert_eq!(picker.selected(), Cell::BottomRight);
    }
}
