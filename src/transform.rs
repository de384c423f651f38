//! Transformations

use std::ops::Mul;

/// 2D affine transform held as a 3x3 homogeneous matrix
///
/// Values are immutable; [`compose`](Transform::compose) returns the
/// product for the caller to keep. Points are column vectors `(x,y,1)`,
/// so in a product the right-hand matrix maps points first.
///
///     use xpix::Transform;
///
///     let t = Transform::new_translate(3.0, 4.0);
///     assert_eq!(t.apply(1, 1), (4, 5));
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    m: [[f64; 3]; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform
    pub fn identity() -> Self {
        Transform {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    /// Translation by `(dx,dy)`
    pub fn new_translate(dx: f64, dy: f64) -> Self {
        Transform {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }
    /// Rotation around a pivot, counter-clockwise, angle in degrees
    pub fn new_rotate(cx: f64, cy: f64, degrees: f64) -> Self {
        let a = degrees.to_radians();
        let (sin, cos) = (a.sin(), a.cos());
        let rot = Transform {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        };
        Self::new_translate(cx, cy)
            .compose(&rot)
            .compose(&Self::new_translate(-cx, -cy))
    }
    /// Scaling around a pivot by `(fx,fy)`
    pub fn new_scale(cx: f64, cy: f64, fx: f64, fy: f64) -> Self {
        let sc = Transform {
            m: [[fx, 0.0, 0.0], [0.0, fy, 0.0], [0.0, 0.0, 1.0]],
        };
        Self::new_translate(cx, cy)
            .compose(&sc)
            .compose(&Self::new_translate(-cx, -cy))
    }
    /// Matrix product `self * rhs`
    pub fn compose(&self, rhs: &Transform) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Transform { m }
    }
    /// Map a lattice point, truncating the result toward zero
    pub fn apply(&self, x: i64, y: i64) -> (i64, i64) {
        let (fx, fy) = self.apply_f64(x as f64, y as f64);
        (fx as i64, fy as i64)
    }
    /// Map a point without truncation
    pub fn apply_f64(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m[0][0] * x + self.m[0][1] * y + self.m[0][2],
            self.m[1][0] * x + self.m[1][1] * y + self.m[1][2],
        )
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.compose(&rhs)
    }
}
