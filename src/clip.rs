//! Clipping against an axis-aligned window
//!
//! Line segments go through Cohen-Sutherland outcodes, polygons
//! through a Sutherland-Hodgman edge sweep.

use crate::error::{Result, XpixError};

/// Inside the window
///
/// See <https://en.wikipedia.org/wiki/Cohen-Sutherland_algorithm>
pub const INSIDE: u8 = 0b0000;
/// Left of the window
pub const LEFT: u8 = 0b0000_0001;
/// Right of the window
pub const RIGHT: u8 = 0b0000_0010;
/// Below the window
pub const BOTTOM: u8 = 0b0000_0100;
/// Above the window
pub const TOP: u8 = 0b0000_1000;

/// Axis-aligned clip window in device coordinates
///
/// `(x1,y1)` is the minimum corner, `(x2,y2)` the maximum, and both
/// boundaries count as inside.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Window {
    /// Minimum x value
    pub x1: i64,
    /// Minimum y value
    pub y1: i64,
    /// Maximum x value
    pub x2: i64,
    /// Maximum y value
    pub y2: i64,
}

impl Window {
    /// Create a new window
    ///
    /// A min bound above a max bound is refused rather than repaired,
    /// so a swapped pair of corners surfaces at the call site.
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Result<Self> {
        if x1 > x2 || y1 > y2 {
            return Err(XpixError::InvalidClipWindow { x1, y1, x2, y2 });
        }
        Ok(Window { x1, y1, x2, y2 })
    }
    /// Location of a point relative to the window
    ///
    /// Returned is a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn outcode(&self, x: i64, y: i64) -> u8 {
        let mut code = INSIDE;
        if x < self.x1 {
            code |= LEFT;
        }
        if x > self.x2 {
            code |= RIGHT;
        }
        if y < self.y1 {
            code |= BOTTOM;
        }
        if y > self.y2 {
            code |= TOP;
        }
        code
    }
    /// Corners in counter-clockwise order, starting at the minimum
    fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x1 as f64, self.y1 as f64),
            (self.x2 as f64, self.y1 as f64),
            (self.x2 as f64, self.y2 as f64),
            (self.x1 as f64, self.y2 as f64),
        ]
    }
}

/// Clip a segment to a window, Cohen-Sutherland style
///
/// Returns the surviving sub-segment with its endpoints moved onto the
/// window boundary where the segment left it, or `None` when no part
/// of the segment touches the window. Intersections are computed in
/// `f64` and truncated back to lattice coordinates.
pub fn clip_line(
    win: &Window,
    mut x1: i64,
    mut y1: i64,
    mut x2: i64,
    mut y2: i64,
) -> Option<((i64, i64), (i64, i64))> {
    let mut code1 = win.outcode(x1, y1);
    let mut code2 = win.outcode(x2, y2);
    loop {
        if code1 | code2 == INSIDE {
            return Some(((x1, y1), (x2, y2)));
        }
        if code1 & code2 != INSIDE {
            log::trace!(
                "segment ({},{})-({},{}) rejected by window ({},{})-({},{})",
                x1, y1, x2, y2, win.x1, win.y1, win.x2, win.y2
            );
            return None;
        }
        let out = if code1 != INSIDE { code1 } else { code2 };
        let (fx1, fy1) = (x1 as f64, y1 as f64);
        let (fx2, fy2) = (x2 as f64, y2 as f64);
        // Resolve one bound at a time, top before bottom before right
        // before left
        let (x, y) = if out & TOP != INSIDE {
            let fy = win.y2 as f64;
            (fx1 + (fx2 - fx1) * (fy - fy1) / (fy2 - fy1), fy)
        } else if out & BOTTOM != INSIDE {
            let fy = win.y1 as f64;
            (fx1 + (fx2 - fx1) * (fy - fy1) / (fy2 - fy1), fy)
        } else if out & RIGHT != INSIDE {
            let fx = win.x2 as f64;
            (fx, fy1 + (fy2 - fy1) * (fx - fx1) / (fx2 - fx1))
        } else {
            let fx = win.x1 as f64;
            (fx, fy1 + (fy2 - fy1) * (fx - fx1) / (fx2 - fx1))
        };
        if out == code1 {
            x1 = x as i64;
            y1 = y as i64;
            code1 = win.outcode(x1, y1);
        } else {
            x2 = x as i64;
            y2 = y as i64;
            code2 = win.outcode(x2, y2);
        }
    }
}

/// Clip a polygon to a window, Sutherland-Hodgman style
///
/// Vertices sweep the four window edges in turn and the survivors
/// accumulate in `f64` coordinates; the result is empty when the
/// polygon lies fully outside. A polygon edge parallel to the clip
/// edge it crosses fails with
/// [`DegenerateIntersection`](crate::XpixError::DegenerateIntersection).
///
/// See <https://en.wikipedia.org/wiki/Sutherland-Hodgman_algorithm>
pub fn clip_poly(win: &Window, vertices: &[(f64, f64)]) -> Result<Vec<(f64, f64)>> {
    let corners = win.corners();
    let mut output = vertices.to_vec();
    for i in 0..4 {
        let e1 = corners[i];
        let e2 = corners[(i + 1) % 4];
        let input = std::mem::take(&mut output);
        if input.is_empty() {
            break;
        }
        for (j, &point) in input.iter().enumerate() {
            let prev = input[(j + input.len() - 1) % input.len()];
            let point_in = inside(e1, e2, point);
            let prev_in = inside(e1, e2, prev);
            if point_in {
                if !prev_in {
                    output.push(intersect(e1, e2, prev, point)?);
                }
                output.push(point);
            } else if prev_in {
                output.push(intersect(e1, e2, prev, point)?);
            }
        }
    }
    Ok(output)
}

/// Half-plane test: on or left of the directed edge `e1 -> e2`
fn inside(e1: (f64, f64), e2: (f64, f64), p: (f64, f64)) -> bool {
    (e2.0 - e1.0) * (p.1 - e1.1) - (e2.1 - e1.1) * (p.0 - e1.0) >= 0.0
}

/// Intersection of the infinite lines through `e1,e2` and `p1,p2`
fn intersect(
    e1: (f64, f64),
    e2: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
) -> Result<(f64, f64)> {
    let d = (e1.0 - e2.0) * (p1.1 - p2.1) - (e1.1 - e2.1) * (p1.0 - p2.0);
    if d == 0.0 {
        return Err(XpixError::DegenerateIntersection);
    }
    let a = e1.0 * e2.1 - e1.1 * e2.0;
    let b = p1.0 * p2.1 - p1.1 * p2.0;
    Ok((
        (a * (p1.0 - p2.0) - (e1.0 - e2.0) * b) / d,
        (a * (p1.1 - p2.1) - (e1.1 - e2.1) * b) / d,
    ))
}
