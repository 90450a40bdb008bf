//! Per-slide animation context and its lifecycle state machine.
//!
//! States: Unmounted -> Idle -> Building -> Running -> Paused -> Destroyed.
//! Unmounted and Idle live at the deck level (no context exists yet);
//! Building happens inside `SlideContext::build`, which always leaves a
//! Running context. Pause freezes both playheads in place, resume continues
//! from them, destroy is idempotent and makes every later tick inert.

use crate::config::ChoreoConfig;
use crate::ids::{IdAllocator, SlideId};
use crate::outputs::{Change, DeckEvent, Outputs, Prop};
use crate::phase::{build_loop, build_reveal};
use crate::sampler::{sample_curve, Direction};
use crate::schedule::{Repeat, Schedule};
use crate::targets::BoundScene;
use crate::value::Value;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlideState {
    /// Not part of the deck.
    Unmounted,
    /// Mounted but never activated; no schedules exist yet.
    Idle,
    /// Schedules under construction.
    Building,
    Running,
    Paused,
    Destroyed,
}

#[derive(Debug)]
pub struct SlideContext {
    slide: SlideId,
    scene: BoundScene,
    reveal: Schedule,
    loop_: Schedule,
    reveal_time: f32,
    loop_time: f32,
    reveal_total: f32,
    reveal_complete: bool,
    loop_cycles_seen: u32,
    state: SlideState,
}

impl SlideContext {
    /// Build a fresh context: construct both schedules over the scene,
    /// reset every marker invisible and parked at its motion origin, and
    /// start running.
    pub fn build(
        slide: SlideId,
        scene: BoundScene,
        cfg: &ChoreoConfig,
        ids: &mut IdAllocator,
        out: &mut Outputs,
    ) -> Self {
        log::trace!("slide {slide:?}: building context");
        let reveal = build_reveal(&scene, cfg, ids);
        let loop_ = build_loop(&scene, cfg, ids, &reveal);
        let reveal_total = reveal.total();

        // Markers must be invisible before the reveal begins.
        for flow in &scene.flows {
            let dir = if flow.reverse {
                Direction::Reverse
            } else {
                Direction::Forward
            };
            let origin = sample_curve(&flow.curve, 0.0, dir);
            out.push_change(Change {
                slide,
                key: flow.marker.clone(),
                prop: Prop::Opacity,
                value: Value::Float(0.0),
            });
            out.push_change(Change {
                slide,
                key: flow.marker.clone(),
                prop: Prop::Position,
                value: Value::Vec2([origin.x as f32, origin.y as f32]),
            });
        }

        Self {
            slide,
            scene,
            reveal: reveal.into_schedule(),
            loop_,
            reveal_time: 0.0,
            loop_time: 0.0,
            reveal_total,
            reveal_complete: false,
            loop_cycles_seen: 0,
            state: SlideState::Running,
        }
    }

    #[inline]
    pub fn state(&self) -> SlideState {
        self.state
    }

    #[inline]
    pub fn slide(&self) -> SlideId {
        self.slide
    }

    /// Measured reveal duration (shrinks when targets were skipped).
    #[inline]
    pub fn reveal_total(&self) -> f32 {
        self.reveal_total
    }

    #[inline]
    pub fn loop_cycle_len(&self) -> f32 {
        self.loop_.cycle_len()
    }

    #[inline]
    pub fn reveal_complete(&self) -> bool {
        self.reveal_complete
    }

    /// Freeze both playheads where they are. Synchronous: once this
    /// returns, no further tick advances anything. Idempotent.
    pub fn pause(&mut self) {
        if self.state == SlideState::Running {
            log::trace!("slide {:?}: paused", self.slide);
            self.state = SlideState::Paused;
        }
    }

    /// Continue from the paused playheads. Idempotent; a destroyed context
    /// stays destroyed.
    pub fn resume(&mut self) {
        if self.state == SlideState::Paused {
            log::trace!("slide {:?}: resumed", self.slide);
            self.state = SlideState::Running;
        }
    }

    /// Kill both schedules irrecoverably. Any tick arriving afterwards is a
    /// safe no-op; destroying twice is a no-op.
    pub fn destroy(&mut self, out: &mut Outputs) {
        if self.state == SlideState::Destroyed {
            log::trace!("slide {:?}: destroy on destroyed context ignored", self.slide);
            return;
        }
        log::trace!("slide {:?}: destroyed", self.slide);
        self.reveal = Schedule::new(Repeat::Once);
        self.loop_ = Schedule::new(Repeat::Infinite { delay: 0.0 });
        self.scene = BoundScene::default();
        self.state = SlideState::Destroyed;
        out.push_event(DeckEvent::SlideDestroyed { slide: self.slide });
    }

    /// Advance by `dt` and emit this frame's changes. The loop playhead
    /// starts only when the reveal's measured total has actually elapsed,
    /// never on a declared constant, and the handoff fires exactly once.
    pub fn tick(&mut self, dt: f32, out: &mut Outputs) {
        if self.state != SlideState::Running {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.reveal_time += dt;
        self.reveal
            .sample_into(self.reveal_time, &self.scene.flows, self.slide, out);

        if !self.reveal_complete {
            if self.reveal_time >= self.reveal_total {
                self.reveal_complete = true;
                // Carry the overshoot so the loop stays phase-aligned with
                // the frame clock.
                self.loop_time = self.reveal_time - self.reveal_total;
                out.push_event(DeckEvent::RevealCompleted {
                    slide: self.slide,
                    at: self.reveal_total,
                });
            }
        } else {
            self.loop_time += dt;
        }

        if self.reveal_complete && !self.loop_.is_empty() {
            self.loop_
                .sample_into(self.loop_time, &self.scene.flows, self.slide, out);
            let (_, cycles) = self.loop_.local_time(self.loop_time);
            if cycles > self.loop_cycles_seen {
                self.loop_cycles_seen = cycles;
                out.push_event(DeckEvent::LoopCycled {
                    slide: self.slide,
                    cycle: cycles,
                });
            }
        }
    }
}
