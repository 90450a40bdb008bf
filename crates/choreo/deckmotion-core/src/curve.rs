//! Arc-length-parameterized curves.
//!
//! A `Curve` is immutable geometry with a total length and point-at-distance
//! evaluation. Curves are built fresh per slide context from a serializable
//! `CurveSpec` and are never shared between contexts.

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, PathSeg, Point};
use serde::{Deserialize, Serialize};

const ARCLEN_ACCURACY: f64 = 1e-4;

/// Declarative curve geometry as authored by slide layout code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSpec {
    Polyline {
        points: Vec<[f64; 2]>,
    },
    Cubic {
        p0: [f64; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
    },
}

/// Immutable path with cached per-segment arc lengths.
#[derive(Clone, Debug)]
pub struct Curve {
    segs: Vec<PathSeg>,
    /// Cumulative arc length up to and including each segment.
    cum: Vec<f64>,
    length: f64,
}

impl Curve {
    pub fn from_spec(spec: &CurveSpec) -> Self {
        match spec {
            CurveSpec::Polyline { points } => {
                let pts: Vec<Point> = points.iter().map(|p| Point::new(p[0], p[1])).collect();
                Self::polyline(&pts)
            }
            CurveSpec::Cubic { p0, p1, p2, p3 } => Self::cubic(CubicBez::new(
                Point::new(p0[0], p0[1]),
                Point::new(p1[0], p1[1]),
                Point::new(p2[0], p2[1]),
                Point::new(p3[0], p3[1]),
            )),
        }
    }

    pub fn polyline(points: &[Point]) -> Self {
        let segs: Vec<PathSeg> = match points.len() {
            0 => Vec::new(),
            // A single authored point degrades to a zero-length segment so
            // start/end evaluation still works.
            1 => vec![PathSeg::Line(Line::new(points[0], points[0]))],
            _ => points
                .windows(2)
                .map(|w| PathSeg::Line(Line::new(w[0], w[1])))
                .collect(),
        };
        Self::from_segments(segs)
    }

    pub fn cubic(c: CubicBez) -> Self {
        Self::from_segments(vec![PathSeg::Cubic(c)])
    }

    fn from_segments(segs: Vec<PathSeg>) -> Self {
        let mut cum = Vec::with_capacity(segs.len());
        let mut total = 0.0;
        for seg in &segs {
            total += seg.arclen(ARCLEN_ACCURACY);
            cum.push(total);
        }
        Self {
            segs,
            cum,
            length: total,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn start(&self) -> Point {
        self.segs
            .first()
            .map(|s| s.eval(0.0))
            .unwrap_or(Point::ZERO)
    }

    pub fn end(&self) -> Point {
        self.segs.last().map(|s| s.eval(1.0)).unwrap_or(Point::ZERO)
    }

    /// Evaluate the point at `dist` along the curve. The distance is clamped
    /// into [0, length]; a zero-length curve returns its single endpoint.
    pub fn point_at(&self, dist: f64) -> Point {
        if self.segs.is_empty() {
            return Point::ZERO;
        }
        if self.length <= 0.0 {
            return self.start();
        }
        let d = dist.clamp(0.0, self.length);
        let idx = self
            .cum
            .partition_point(|&c| c < d)
            .min(self.segs.len() - 1);
        let seg = self.segs[idx];
        let prev = if idx == 0 { 0.0 } else { self.cum[idx - 1] };
        let seg_len = self.cum[idx] - prev;
        if seg_len <= 0.0 {
            return seg.eval(1.0);
        }
        let t = seg.inv_arclen(d - prev, ARCLEN_ACCURACY);
        seg.eval(t)
    }
}
