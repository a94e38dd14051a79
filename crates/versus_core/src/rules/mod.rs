//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the bot can evaluate hypothetical boards with the same
//! code that judges the real one.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, line_winner, winning_line};
