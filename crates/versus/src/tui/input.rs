//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use versus_core::Cell;

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Cell::new(row.wrapping_sub(1), col),
        KeyCode::Down => Cell::new(row + 1, col),
        KeyCode::Left => Cell::new(row, col.wrapping_sub(1)),
        KeyCode::Right => Cell::new(row, col + 1),
        _ => return cursor,
    };
    target.unwrap_or(cursor)
}

/// Maps digits 1-9 to cells in reading order.
pub fn digit_cell(c: char) -> Option<Cell> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Cell::from_index)
}
