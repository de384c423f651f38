//! Bezier curve sampling

/// Binomial coefficient C(n,k)
fn binomial(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        c = c * (n - i) as u128 / (i + 1) as u128;
    }
    c as f64
}

/// Point on a Bezier curve at parameter `t`
///
/// Bernstein basis with the exponents reversed, so the curve runs from
/// the last control point at `t = 0` to the first at `t = 1`:
///
/// ```text
/// P(t) = sum_k cp[k] * C(n-1,k) * t^(n-1-k) * (1-t)^k
/// ```
///
/// Panics if `control` is empty.
pub fn point_at(control: &[(i64, i64)], t: f64) -> (f64, f64) {
    assert!(!control.is_empty(), "Cannot evaluate a curve with no control points");
    let n = control.len() as u32;
    let (mut x, mut y) = (0.0, 0.0);
    for (k, &(px, py)) in control.iter().enumerate() {
        let k = k as u32;
        let w = binomial(n - 1, k)
            * t.powi((n - 1 - k) as i32)
            * (1.0 - t).powi(k as i32);
        x += px as f64 * w;
        y += py as f64 * w;
    }
    (x, y)
}

/// Parameter sweep `0, step, 2*step, ...` capped with a final `t = 1`
///
/// Multiplying the index instead of accumulating keeps the sweep free
/// of additive drift.
pub fn params(step: f64) -> Vec<f64> {
    let mut ts = vec![];
    let mut i = 0u64;
    loop {
        let t = i as f64 * step;
        if t >= 1.0 {
            break;
        }
        ts.push(t);
        i += 1;
    }
    ts.push(1.0);
    ts
}
