mod rect;
mod row;

pub use rect::{Constraints, Rect, Size};
pub use row::place_row;
