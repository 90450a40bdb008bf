//! Interpolation helpers: lerp plus cubic-bezier timing.
//!
//! Motion progress is eased with a cubic-bezier timing function so travel
//! accelerates and decelerates rather than moving linearly. The eased value
//! is found by inverting the x-bezier via binary search.

/// Ease-in-out timing control points (x1, y1, x2, y2).
pub const EASE_IN_OUT: [f32; 4] = [0.42, 0.0, 0.58, 1.0];
/// Linear timing; the inversion has an exact fast path for it.
pub const EASE_LINEAR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and input t in [0,1], compute the
/// eased output by inverting the x bezier via binary search.
#[inline]
pub fn bezier_ease(t: f32, ctrl: [f32; 4]) -> f32 {
    let [x1, y1, x2, y2] = ctrl;
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b}");
    }

    #[test]
    fn linear_fast_path_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(bezier_ease(t, EASE_LINEAR), t);
        }
    }

    #[test]
    fn ease_in_out_endpoints_and_symmetry() {
        approx(bezier_ease(0.0, EASE_IN_OUT), 0.0, 1e-5);
        approx(bezier_ease(1.0, EASE_IN_OUT), 1.0, 1e-5);
        approx(bezier_ease(0.5, EASE_IN_OUT), 0.5, 1e-3);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=20 {
            let v = bezier_ease(i as f32 / 20.0, EASE_IN_OUT);
            assert!(v >= last);
            last = v;
        }
    }
}
