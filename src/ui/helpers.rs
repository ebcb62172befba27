//! Small layout and cursor arithmetic shared by the drawing code.

use std::cmp::min;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Pick the slice of cards to draw so `cursor` stays on screen. Returns the
/// half-open `(start, end)` range into a list of `len` items.
pub(crate) fn visible_window(cursor: usize, capacity: usize, len: usize) -> (usize, usize) {
    if len == 0 || capacity == 0 {
        return (0, 0);
    }
    let mut start = if cursor >= capacity {
        cursor + 1 - capacity
    } else {
        0
    };
    if start + capacity > len {
        start = len.saturating_sub(capacity);
    }
    (start, min(start + capacity, len))
}

/// Clamp a list cursor after the list length changed.
pub(crate) fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        min(cursor, len - 1)
    }
}

/// Move a cursor by `offset`, saturating at both ends.
pub(crate) fn offset_cursor(cursor: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = cursor as isize + offset;
    moved.clamp(0, len as isize - 1) as usize
}

/// Split the body into the control panel and the wider catalog panel.
pub(crate) fn split_body(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    (chunks[0], chunks[1])
}
