use super::{Rect, Size};

/// Place measured slots left to right starting at `origin`.
///
/// Slots are vertically centred on the tallest one, the way a horizontal
/// linear container lays out its children.
pub fn place_row(origin: (i32, i32), sizes: &[Size]) -> Vec<Rect> {
    let row_height = sizes.iter().map(|size| size.height).max().unwrap_or(0);
    let (mut x, y) = origin;

    sizes
        .iter()
        .map(|size| {
            let top = y + ((row_height - size.height) / 2) as i32;
            let rect = Rect::new(x, top, size.width, size.height);
            x += size.width as i32;
            rect
        })
        .collect()
}
