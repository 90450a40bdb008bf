//! Time-indexed schedules of animation steps.
//!
//! A `Schedule` is an ordered collection of steps, each with a target, an
//! effect, a start offset, a duration, and an easing. Evaluation is pure:
//! `sample_into(time)` maps the playhead to per-target changes without
//! retaining any per-step state, so pausing is just not advancing the
//! playhead and a destroyed context simply stops sampling.

use crate::ids::{SlideId, StepId};
use crate::interp;
use crate::outputs::{Change, Outputs, Prop};
use crate::sampler::{sample_curve, Direction};
use crate::targets::{BoundFlow, TargetHandle};
use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum StepEffect {
    /// Opacity tween.
    FadeTo { from: f32, to: f32 },
    /// Marker travel along the flow at `flow` (index into the context's
    /// bound flows), sampling the path once per tick.
    Travel { flow: usize, reverse: bool },
    /// Path draw-on progress 0 -> 1.
    DrawOn,
    /// Scale up to `peak` and back to 1.
    Pulse { peak: f32 },
    /// Numeric counter tween.
    CounterTween { from: f32, to: f32 },
    /// Boolean toggle held on for the step's window.
    Highlight,
}

#[derive(Clone, Debug)]
pub struct Step {
    pub id: StepId,
    pub target: TargetHandle,
    pub effect: StepEffect,
    pub start: f32,
    pub duration: f32,
    /// Cubic-bezier timing control points (x1, y1, x2, y2).
    pub ease: [f32; 4],
}

impl Step {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Evaluate at schedule-local time. `None` before the step begins or
    /// when the referenced flow is absent; after the step's end the final
    /// value keeps being emitted so completed effects hold their state.
    fn eval(&self, t: f32, flows: &[BoundFlow]) -> Option<(Prop, Value)> {
        if t < self.start {
            return None;
        }
        let p = if self.duration <= 0.0 {
            1.0
        } else {
            ((t - self.start) / self.duration).clamp(0.0, 1.0)
        };
        let e = interp::bezier_ease(p, self.ease);
        let out = match &self.effect {
            StepEffect::FadeTo { from, to } => {
                (Prop::Opacity, Value::Float(interp::lerp_f32(*from, *to, e)))
            }
            StepEffect::Travel { flow, reverse } => {
                let f = flows.get(*flow)?;
                let dir = if *reverse {
                    Direction::Reverse
                } else {
                    Direction::Forward
                };
                let pt = sample_curve(&f.curve, e, dir);
                (Prop::Position, Value::Vec2([pt.x as f32, pt.y as f32]))
            }
            StepEffect::DrawOn => (Prop::Draw, Value::Float(e)),
            StepEffect::Pulse { peak } => {
                // Triangle on eased progress: up to peak, then back to rest.
                let s = if e < 0.5 {
                    interp::lerp_f32(1.0, *peak, e * 2.0)
                } else {
                    interp::lerp_f32(*peak, 1.0, (e - 0.5) * 2.0)
                };
                (Prop::Scale, Value::Float(s))
            }
            StepEffect::CounterTween { from, to } => (
                Prop::Counter,
                Value::Float(interp::lerp_f32(*from, *to, e)),
            ),
            StepEffect::Highlight => (Prop::Highlight, Value::Bool(t < self.end())),
        };
        Some(out)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Repeat {
    Once,
    Infinite { delay: f32 },
}

#[derive(Debug, Clone)]
pub struct Schedule {
    steps: Vec<Step>,
    total: f32,
    repeat: Repeat,
}

impl Schedule {
    pub fn new(repeat: Repeat) -> Self {
        Self {
            steps: Vec::new(),
            total: 0.0,
            repeat,
        }
    }

    /// Append a step; insertion order is preserved for evaluation, and the
    /// measured total grows to cover the step's span.
    pub fn push(&mut self, step: Step) {
        self.total = self.total.max(step.end());
        self.steps.push(step);
    }

    /// Extend the total without adding a step (trailing pad).
    pub fn pad_to(&mut self, total: f32) {
        self.total = self.total.max(total);
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Full cycle length: total plus the inter-cycle delay when repeating.
    pub fn cycle_len(&self) -> f32 {
        match self.repeat {
            Repeat::Once => self.total,
            Repeat::Infinite { delay } => self.total + delay,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Map a playhead time to (cycle-local time, completed cycle count).
    pub fn local_time(&self, t: f32) -> (f32, u32) {
        let t = t.max(0.0);
        match self.repeat {
            Repeat::Once => (t.min(self.total), u32::from(t >= self.total && self.total > 0.0)),
            Repeat::Infinite { .. } => {
                let cycle = self.cycle_len();
                if cycle <= 0.0 {
                    return (0.0, 0);
                }
                let n = (t / cycle).floor();
                (t - n * cycle, n as u32)
            }
        }
    }

    /// Evaluate every step at the playhead and append the resulting changes.
    /// Steps are visited in insertion order.
    pub fn sample_into(&self, t: f32, flows: &[BoundFlow], slide: SlideId, out: &mut Outputs) {
        let (local, _) = self.local_time(t);
        for step in &self.steps {
            if let Some((prop, value)) = step.eval(local, flows) {
                out.push_change(Change {
                    slide,
                    key: step.target.clone(),
                    prop,
                    value,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::StepId;
    use crate::interp::EASE_LINEAR;

    fn fade(start: f32, duration: f32) -> Step {
        Step {
            id: StepId(0),
            target: "t".into(),
            effect: StepEffect::FadeTo { from: 0.0, to: 1.0 },
            start,
            duration,
            ease: EASE_LINEAR,
        }
    }

    #[test]
    fn total_tracks_longest_step() {
        let mut s = Schedule::new(Repeat::Once);
        s.push(fade(0.0, 0.4));
        s.push(fade(0.2, 0.4));
        assert!((s.total() - 0.6).abs() < 1e-6);
        s.pad_to(1.0);
        assert!((s.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn step_holds_final_value_after_end() {
        let mut s = Schedule::new(Repeat::Once);
        s.push(fade(0.0, 0.5));
        let mut out = Outputs::default();
        s.sample_into(2.0, &[], SlideId(0), &mut out);
        assert_eq!(out.changes.len(), 1);
        assert_eq!(out.changes[0].value, Value::Float(1.0));
    }

    #[test]
    fn step_is_silent_before_start() {
        let mut s = Schedule::new(Repeat::Once);
        s.push(fade(1.0, 0.5));
        let mut out = Outputs::default();
        s.sample_into(0.5, &[], SlideId(0), &mut out);
        assert!(out.changes.is_empty());
    }

    #[test]
    fn infinite_repeat_wraps_with_delay() {
        let mut s = Schedule::new(Repeat::Infinite { delay: 0.5 });
        s.push(fade(0.0, 1.0));
        // cycle = 1.5; t=1.6 is 0.1 into cycle 1
        let (local, cycles) = s.local_time(1.6);
        assert!((local - 0.1).abs() < 1e-6);
        assert_eq!(cycles, 1);
    }

    #[test]
    fn highlight_is_on_inside_window_and_off_after() {
        let mut s = Schedule::new(Repeat::Once);
        s.push(Step {
            id: StepId(1),
            target: "h".into(),
            effect: StepEffect::Highlight,
            start: 0.0,
            duration: 1.0,
            ease: EASE_LINEAR,
        });
        let mut out = Outputs::default();
        s.sample_into(0.5, &[], SlideId(0), &mut out);
        assert_eq!(out.changes[0].value, Value::Bool(true));
        out.clear();
        s.sample_into(1.5, &[], SlideId(0), &mut out);
        assert_eq!(out.changes[0].value, Value::Bool(false));
    }

    #[test]
    fn travel_with_missing_flow_is_silent() {
        let mut s = Schedule::new(Repeat::Once);
        s.push(Step {
            id: StepId(2),
            target: "m".into(),
            effect: StepEffect::Travel {
                flow: 7,
                reverse: false,
            },
            start: 0.0,
            duration: 1.0,
            ease: EASE_LINEAR,
        });
        let mut out = Outputs::default();
        s.sample_into(0.5, &[], SlideId(0), &mut out);
        assert!(out.changes.is_empty());
    }
}
