//! Marker motion primitive: fade in, travel, fade out.
//!
//! Inserts three chained steps into a parent schedule at an arbitrary
//! offset. Completion is carried by the schedule's own timing; nothing is
//! returned for the caller to await.

use crate::config::ChoreoConfig;
use crate::ids::IdAllocator;
use crate::interp::EASE_IN_OUT;
use crate::schedule::{Schedule, Step, StepEffect};
use crate::targets::BoundFlow;

/// Attach a fade-in / travel / fade-out unit for `flow` to `schedule`,
/// starting at `start_offset`. The three steps run back to back, so the
/// unit spans `fade_lead_in + duration + fade_tail`.
///
/// `flow` may be `None` (marker not mounted or layout not ready); the call
/// is then a no-op so partially-ready scenes never throw.
pub fn attach_marker_motion(
    schedule: &mut Schedule,
    flow_index: usize,
    flow: Option<&BoundFlow>,
    cfg: &ChoreoConfig,
    ids: &mut IdAllocator,
    duration: f32,
    start_offset: f32,
    reverse: bool,
) {
    let Some(flow) = flow else {
        log::debug!("marker motion skipped: flow not bound");
        return;
    };
    let duration = duration.max(0.0);
    let start = start_offset.max(0.0);
    let travel_start = start + cfg.fade_lead_in;
    let travel_end = travel_start + duration;

    schedule.push(Step {
        id: ids.alloc_step(),
        target: flow.marker.clone(),
        effect: StepEffect::FadeTo {
            from: 0.0,
            to: cfg.marker_peak_opacity,
        },
        start,
        duration: cfg.fade_lead_in,
        ease: EASE_IN_OUT,
    });
    schedule.push(Step {
        id: ids.alloc_step(),
        target: flow.marker.clone(),
        effect: StepEffect::Travel {
            flow: flow_index,
            reverse,
        },
        start: travel_start,
        duration,
        ease: EASE_IN_OUT,
    });
    schedule.push(Step {
        id: ids.alloc_step(),
        target: flow.marker.clone(),
        effect: StepEffect::FadeTo {
            from: cfg.marker_peak_opacity,
            to: 0.0,
        },
        start: travel_end,
        duration: cfg.fade_tail,
        ease: EASE_IN_OUT,
    });
}
