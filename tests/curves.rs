extern crate xpix;

use xpix::{Color, Pixmap, XpixError};

fn ink() -> Color {
    Color::new("#112233", "c")
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
fn two_control_points_reduce_to_a_line() {
    let mut curved = Pixmap::new(10, 10);
    let mut straight = Pixmap::new(10, 10);
    curved.bezier(&[(1, 1), (8, 4)], 0.1, &ink()).unwrap();
    straight.line(1, 1, 8, 4, &ink()).unwrap();
    assert_eq!(colored_cells(&curved, &ink()), colored_cells(&straight, &ink()));
}

#[test]
fn quadratic_arc_hits_its_midpoint() {
    let mut pix = Pixmap::new(10, 10);
    // weights at t=1/2 are 1/4, 1/2, 1/4, all exact
    pix.bezier(&[(0, 0), (4, 8), (8, 0)], 0.5, &ink()).unwrap();
    let mut expect = vec![];
    for i in 0..=4 {
        expect.push((i, i)); // (0,0) up to (4,4)
        expect.push((4 + i, 4 - i)); // (4,4) down to (8,0)
    }
    expect.sort_unstable();
    expect.dedup();
    let mut got = colored_cells(&pix, &ink());
    got.sort_unstable();
    assert_eq!(got, expect);
}

#[test]
fn curve_runs_from_last_control_point_to_first() {
    let mut pix = Pixmap::new(10, 10);
    pix.bezier(&[(0, 0), (5, 9), (9, 0)], 0.3, &ink()).unwrap();
    // t=0 lands on the last control point, the forced t=1 on the first
    assert_eq!(pix.get(9, 0), Some(&ink()));
    assert_eq!(pix.get(0, 0), Some(&ink()));
}

#[test]
fn single_control_point_sets_one_cell() {
    let mut pix = Pixmap::new(6, 6);
    pix.bezier(&[(3, 3)], 0.5, &ink()).unwrap();
    assert_eq!(colored_cells(&pix, &ink()), vec![(3, 3)]);
}

#[test]
fn no_control_points_is_a_noop() {
    let mut pix = Pixmap::new(6, 6);
    pix.bezier(&[], 0.5, &ink()).unwrap();
    assert!(colored_cells(&pix, &ink()).is_empty());
    assert!(pix.palette().is_empty());
}

#[test]
fn out_of_bounds_sample_is_atomic() {
    let mut pix = Pixmap::new(10, 10);
    let err = pix.bezier(&[(0, 0), (20, 20)], 0.1, &ink()).unwrap_err();
    assert!(matches!(err, XpixError::OutOfBounds { x: 20, y: 20, .. }));
    assert!(colored_cells(&pix, &ink()).is_empty());
}

#[test]
fn curve_control_points_pass_through_the_transform() {
    let mut pix = Pixmap::new(10, 10);
    pix.translate(1.0, 1.0);
    pix.bezier(&[(0, 0), (5, 5)], 0.25, &ink()).unwrap();
    let cells = colored_cells(&pix, &ink());
    assert_eq!(cells.first(), Some(&(1, 1)));
    assert_eq!(cells.last(), Some(&(6, 6)));
    assert_eq!(cells.len(), 6);
}

#[test]
#[should_panic(expected = "non-positive step")]
fn zero_step_panics() {
    let mut pix = Pixmap::new(4, 4);
    let _ = pix.bezier(&[(0, 0), (1, 1), (2, 2)], 0.0, &ink());
}
