extern crate xpix;

use xpix::{Color, Pixmap, XpixError};

fn red() -> Color {
    Color::new("#FF0000", "R")
}

fn colored_cells(pix: &Pixmap, color: &Color) -> Vec<(i64, i64)> {
    let mut out = vec![];
    for y in 0..pix.height() as i64 {
        for x in 0..pix.width() as i64 {
            if pix.get(x, y) == Some(color) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn horizontal_line_covers_every_column() {
    let mut pix = Pixmap::new(8, 8);
    pix.line(1, 3, 6, 3, &red()).unwrap();
    let cells = colored_cells(&pix, &red());
    assert_eq!(
        cells,
        vec![(1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3)]
    );
}

#[test]
fn shallow_line_visits_major_axis_plus_one_cells() {
    let mut pix = Pixmap::new(10, 10);
    pix.line(0, 0, 7, 3, &red()).unwrap();
    assert_eq!(colored_cells(&pix, &red()).len(), 8);
}

#[test]
fn reversed_endpoints_give_the_same_cells() {
    let mut a = Pixmap::new(12, 12);
    let mut b = Pixmap::new(12, 12);
    a.line(1, 8, 9, 2, &red()).unwrap();
    b.line(9, 2, 1, 8, &red()).unwrap();
    assert_eq!(colored_cells(&a, &red()), colored_cells(&b, &red()));
}

#[test]
fn single_point_line_sets_one_cell() {
    let mut pix = Pixmap::new(5, 5);
    pix.line(2, 2, 2, 2, &red()).unwrap();
    assert_eq!(colored_cells(&pix, &red()), vec![(2, 2)]);
}

#[test]
fn out_of_bounds_line_leaves_grid_untouched() {
    let mut pix = Pixmap::new(5, 5);
    let err = pix.line(0, 0, 10, 0, &red()).unwrap_err();
    assert!(matches!(err, XpixError::OutOfBounds { x: 10, y: 0, .. }));
    assert!(colored_cells(&pix, &red()).is_empty());
    assert!(pix.palette().is_empty());
}

#[test]
fn negative_endpoint_is_out_of_bounds() {
    let mut pix = Pixmap::new(5, 5);
    let err = pix.line(-1, 2, 3, 2, &red()).unwrap_err();
    assert!(matches!(err, XpixError::OutOfBounds { x: -1, y: 2, .. }));
}

#[test]
fn glyph_width_is_fixed_by_first_color() {
    let mut pix = Pixmap::new(6, 6);
    pix.line(0, 0, 5, 0, &red()).unwrap();
    let wide = Color::new("#00FF00", "GG");
    let err = pix.line(0, 1, 5, 1, &wide).unwrap_err();
    assert!(matches!(
        err,
        XpixError::ColorWidthMismatch { expected: 1, found: 2 }
    ));
    // the failed call must not have painted anything
    assert!(colored_cells(&pix, &wide).is_empty());
    assert_eq!(colored_cells(&pix, &red()).len(), 6);
    assert_eq!(pix.chars_per_pixel(), Some(1));
}

#[test]
fn set_and_get_single_cells() {
    let mut pix = Pixmap::new(3, 3);
    assert_eq!(pix.get(1, 1), None);
    pix.set(1, 1, &red()).unwrap();
    assert_eq!(pix.get(1, 1), Some(&red()));
    assert_eq!(pix.get(0, 0), None);
    assert_eq!(pix.get(-1, 0), None);
    assert_eq!(pix.get(3, 0), None);
    assert!(matches!(
        pix.set(3, 0, &red()),
        Err(XpixError::OutOfBounds { .. })
    ));
}

#[test]
fn later_lines_overwrite_earlier_cells() {
    let mut pix = Pixmap::new(5, 5);
    let blue = Color::new("#0000FF", "B");
    pix.line(0, 2, 4, 2, &red()).unwrap();
    pix.line(2, 0, 2, 4, &blue).unwrap();
    assert_eq!(pix.get(2, 2), Some(&blue));
    assert_eq!(pix.get(1, 2), Some(&red()));
    assert_eq!(pix.palette().len(), 2);
}
