//! Scanline polygon fill

/// Horizontal spans covering a polygon interior
///
/// Even-odd parity over edge crossings, one integer scanline at a
/// time. An edge claims the half-open range `[min(y), max(y))`, so a
/// scanline through a shared vertex crosses exactly one of the two
/// edges meeting there, and horizontal edges never cross. Every
/// crossing is evaluated from its edge's low-y endpoint, so the spans
/// do not depend on which way the boundary was walked. Crossings
/// truncate toward zero; spans come back as `(y, x_start, x_end)`.
pub fn interior_spans(vertices: &[(f64, f64)]) -> Vec<(i64, i64, i64)> {
    let mut spans = vec![];
    if vertices.len() < 3 {
        return spans;
    }
    let ymin = vertices.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
    let ymax = vertices.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);
    let (ymin, ymax) = (ymin.ceil() as i64, ymax.floor() as i64);
    let mut crossings: Vec<f64> = vec![];
    for y in ymin..=ymax {
        let fy = y as f64;
        crossings.clear();
        for (j, &(x2, y2)) in vertices.iter().enumerate() {
            let (x1, y1) = vertices[(j + vertices.len() - 1) % vertices.len()];
            if y1 == y2 {
                continue;
            }
            // low-y endpoint first, so both windings of an edge
            // evaluate the identical expression
            let ((xa, ya), (xb, yb)) = if y1 < y2 {
                ((x1, y1), (x2, y2))
            } else {
                ((x2, y2), (x1, y1))
            };
            if fy < ya || fy >= yb {
                continue;
            }
            crossings.push(xa + (fy - ya) / (yb - ya) * (xb - xa));
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            spans.push((y, pair[0] as i64, pair[1] as i64));
        }
    }
    spans
}
