//! Path sampler: normalized progress to a point on a curve.
//!
//! Pure and stateless; safe to call once per frame for any number of
//! independent markers. Reverse traversal lets a single curve serve two
//! opposite-direction motions (a request out, its acknowledgement back)
//! without duplicating geometry.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Sample the point at normalized progress `t` in [0, 1] along `curve`.
///
/// Forward evaluates `point_at(t * length)`; reverse evaluates
/// `point_at((1 - t) * length)`. Non-finite `t` is treated as 0. A
/// zero-length curve yields its single endpoint for every `t`.
pub fn sample_curve(curve: &Curve, t: f32, dir: Direction) -> Point {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let frac = match dir {
        Direction::Forward => t,
        Direction::Reverse => 1.0 - t,
    };
    curve.point_at(f64::from(frac) * curve.length())
}
