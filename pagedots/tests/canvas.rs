use pagedots::{Buffer, Canvas, CellCanvas, Color};

fn glyph(buffer: &Buffer, x: u16, y: u16) -> char {
    buffer.get(x, y).map_or('?', |cell| cell.glyph)
}

// =============================================================================
// Cell Canvas Tests
// =============================================================================

#[test]
fn test_circle_glyph_by_radius() {
    let mut buffer = Buffer::new(8, 1);
    let mut canvas = CellCanvas::new(&mut buffer);
    canvas.fill_circle(0.5, 0.5, 0.5, Color::WHITE);
    canvas.fill_circle(2.5, 0.5, 1.0, Color::WHITE);
    canvas.fill_circle(4.5, 0.5, 3.0, Color::WHITE);
    canvas.fill_circle(6.5, 0.5, 0.0, Color::WHITE);

    assert_eq!(glyph(&buffer, 0, 0), '·');
    assert_eq!(glyph(&buffer, 2, 0), '•');
    assert_eq!(glyph(&buffer, 4, 0), '●');
    assert_eq!(glyph(&buffer, 6, 0), ' ');
}

#[test]
fn test_wedge_glyph_by_sweep() {
    let mut buffer = Buffer::new(3, 1);
    let mut canvas = CellCanvas::new(&mut buffer);
    canvas.fill_wedge(0.0, 0.0, 1.0, 0.0, 0.0, Color::WHITE);
    canvas.fill_wedge(1.0, 0.0, 1.0, 0.0, 180.0, Color::WHITE);
    canvas.fill_wedge(2.0, 0.0, 1.0, 0.0, 400.0, Color::WHITE);

    assert_eq!(glyph(&buffer, 0, 0), '○');
    assert_eq!(glyph(&buffer, 1, 0), '◑');
    assert_eq!(glyph(&buffer, 2, 0), '●');
}

#[test]
fn test_text_is_clipped_to_grid() {
    let red = Color::rgb(255, 0, 0);
    let mut buffer = Buffer::new(3, 1);
    CellCanvas::new(&mut buffer).draw_text(1.0, 0.0, "50%", red);

    assert_eq!(glyph(&buffer, 0, 0), ' ');
    assert_eq!(glyph(&buffer, 1, 0), '5');
    assert_eq!(glyph(&buffer, 2, 0), '0');
    assert_eq!(buffer.get(2, 0).map(|cell| cell.color), Some(red));
    assert!(buffer.get(3, 0).is_none());
}

// =============================================================================
// Buffer Tests
// =============================================================================

#[test]
fn test_wide_glyph_marks_continuation() {
    let mut buffer = Buffer::new(4, 1);
    buffer.put(1, 0, '中', Color::WHITE);

    assert!(buffer.get(2, 0).is_some_and(|cell| cell.continuation));
    assert!(buffer.get(0, 0).is_some_and(|cell| !cell.continuation));
}

#[test]
fn test_changes_since_previous_frame() {
    let previous = Buffer::new(3, 2);
    let mut current = Buffer::new(3, 2);
    current.put(2, 1, 'x', Color::WHITE);
    current.put(-1, 0, 'y', Color::WHITE);

    let changed: Vec<(u16, u16, char)> = current
        .changes(&previous)
        .map(|(x, y, cell)| (x, y, cell.glyph))
        .collect();
    assert_eq!(changed, vec![(2, 1, 'x')]);

    current.clear();
    assert_eq!(current.changes(&previous).count(), 0);
}
