//! Board state: spaces, rows, the authoritative grid, and seat projections.

pub mod space;
pub mod grid;
pub mod view;

pub use space::{Row, Space};
pub use grid::{Board, PLAYABLE_SPACES};
pub use view::BoardView;
