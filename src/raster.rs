//! Bresenham line rasterization

/// Integer line interpolator
///
/// Walks the closest lattice approximation of a segment, visiting
/// exactly `max(|dx|,|dy|) + 1` cells, the major axis advancing by one
/// cell per step. Endpoints are put in a canonical order before
/// stepping, so a segment and its reverse visit the same cells.
///
///     use xpix::Bresenham;
///
///     let cells: Vec<_> = Bresenham::new(0, 0, 3, 3).collect();
///     assert_eq!(cells, vec![(0,0), (1,1), (2,2), (3,3)]);
///
#[derive(Debug)]
pub struct Bresenham {
    x: i64,
    y: i64,
    x2: i64,
    y2: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    error: i64,
    done: bool,
}

impl Bresenham {
    /// Set up a walk between `(x1,y1)` and `(x2,y2)`
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        // Lexicographic endpoint order keeps half-step ties
        // direction-independent
        let ((x1, y1), (x2, y2)) = if (x1, y1) <= (x2, y2) {
            ((x1, y1), (x2, y2))
        } else {
            ((x2, y2), (x1, y1))
        };
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        Bresenham {
            x: x1,
            y: y1,
            x2,
            y2,
            dx,
            dy,
            sx: (x2 - x1).signum(),
            sy: (y2 - y1).signum(),
            error: dx - dy,
            done: false,
        }
    }
    /// Number of cells the walk visits
    pub fn len(&self) -> usize {
        (std::cmp::max(self.dx, self.dy) + 1) as usize
    }
    /// A walk always visits at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Iterator for Bresenham {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None;
        }
        let cell = (self.x, self.y);
        if cell == (self.x2, self.y2) {
            self.done = true;
        } else {
            let e2 = 2 * self.error;
            if e2 > -self.dy {
                self.error -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.error += self.dx;
                self.y += self.sy;
            }
        }
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(x1: i64, y1: i64, x2: i64, y2: i64) -> Vec<(i64, i64)> {
        Bresenham::new(x1, y1, x2, y2).collect()
    }

    #[test]
    fn single_cell() {
        assert_eq!(cells(4, 7, 4, 7), vec![(4, 7)]);
    }
    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(cells(1, 2, 4, 2), vec![(1, 2), (2, 2), (3, 2), (4, 2)]);
        assert_eq!(cells(2, 1, 2, 4), vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    }
    #[test]
    fn cell_count_is_major_axis_plus_one() {
        for &(x1, y1, x2, y2) in &[
            (0i64, 0i64, 7i64, 3i64),
            (0, 0, 3, 7),
            (-5, 2, 5, -2),
            (10, 10, 3, 4),
            (0, 0, 0, 9),
        ] {
            let n = std::cmp::max((x2 - x1).abs(), (y2 - y1).abs()) + 1;
            assert_eq!(cells(x1, y1, x2, y2).len(), n as usize);
            assert_eq!(Bresenham::new(x1, y1, x2, y2).len(), n as usize);
        }
    }
    #[test]
    fn reverse_visits_same_cells() {
        for &(x1, y1, x2, y2) in &[
            (0, 0, 2, 1),
            (0, 0, 5, 2),
            (3, -1, -4, 6),
            (0, 0, 9, 3),
            (1, 8, 6, 2),
        ] {
            let mut fwd = cells(x1, y1, x2, y2);
            let mut rev = cells(x2, y2, x1, y1);
            fwd.sort_unstable();
            rev.sort_unstable();
            assert_eq!(fwd, rev);
        }
    }
    #[test]
    fn endpoints_always_visited() {
        let walk = cells(-3, 5, 11, -2);
        assert!(walk.contains(&(-3, 5)));
        assert!(walk.contains(&(11, -2)));
    }
}
