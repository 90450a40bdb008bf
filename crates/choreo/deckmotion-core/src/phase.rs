//! Phase scheduler: builds the reveal and loop schedules for a slide.
//!
//! The reveal staggers appearance in a fixed group order: static shapes,
//! then connecting paths, then sub-items, then labels. A path drawing on
//! before its endpoints exist reads as broken, so the order is not
//! configurable. The loop composes marker motions and incidental effects at
//! their declared offsets and pads its tail so the cycle length is
//! deterministic.

use crate::config::ChoreoConfig;
use crate::ids::IdAllocator;
use crate::interp::EASE_IN_OUT;
use crate::motion::attach_marker_motion;
use crate::schedule::{Repeat, Schedule, Step, StepEffect};
use crate::targets::{BoundScene, TargetHandle};

/// First-class handle to a built reveal. Building the loop requires one, so
/// the reveal -> loop dependency is a value rather than a side-effecting
/// callback registration.
#[derive(Debug)]
pub struct RevealHandle {
    schedule: Schedule,
    total: f32,
}

impl RevealHandle {
    /// Measured total duration over the steps actually inserted. Skipped
    /// (missing) targets shrink this; it is never a declared constant.
    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }
}

fn stagger_group(
    schedule: &mut Schedule,
    ids: &mut IdAllocator,
    targets: &[TargetHandle],
    group_start: f32,
    stagger: f32,
    duration: f32,
    effect: impl Fn() -> StepEffect,
) -> f32 {
    if targets.is_empty() {
        return group_start;
    }
    for (i, target) in targets.iter().enumerate() {
        schedule.push(Step {
            id: ids.alloc_step(),
            target: target.clone(),
            effect: effect(),
            start: group_start + i as f32 * stagger,
            duration,
            ease: EASE_IN_OUT,
        });
    }
    // The next group begins when this group's longest step ends.
    group_start + (targets.len() - 1) as f32 * stagger + duration
}

/// Build the one-shot reveal schedule for a bound scene.
pub fn build_reveal(scene: &BoundScene, cfg: &ChoreoConfig, ids: &mut IdAllocator) -> RevealHandle {
    let mut schedule = Schedule::new(Repeat::Once);
    let mut at = 0.0;
    at = stagger_group(
        &mut schedule,
        ids,
        &scene.static_shapes,
        at,
        cfg.shape_stagger,
        cfg.shape_appear,
        || StepEffect::FadeTo { from: 0.0, to: 1.0 },
    );
    at = stagger_group(
        &mut schedule,
        ids,
        &scene.connecting_paths,
        at,
        cfg.path_stagger,
        cfg.path_draw,
        || StepEffect::DrawOn,
    );
    at = stagger_group(
        &mut schedule,
        ids,
        &scene.sub_items,
        at,
        cfg.sub_item_stagger,
        cfg.sub_item_appear,
        || StepEffect::FadeTo { from: 0.0, to: 1.0 },
    );
    stagger_group(
        &mut schedule,
        ids,
        &scene.labels,
        at,
        cfg.label_stagger,
        cfg.label_appear,
        || StepEffect::FadeTo { from: 0.0, to: 1.0 },
    );
    let total = schedule.total();
    RevealHandle { schedule, total }
}

/// Build the infinitely repeating loop schedule. The `after` handle is the
/// reveal this loop is chained to; playback starts only when that reveal's
/// measured total has actually elapsed (the lifecycle controller owns the
/// handoff, see `context`).
pub fn build_loop(
    scene: &BoundScene,
    cfg: &ChoreoConfig,
    ids: &mut IdAllocator,
    after: &RevealHandle,
) -> Schedule {
    let mut schedule = Schedule::new(Repeat::Infinite {
        delay: cfg.loop_repeat_delay,
    });

    for (i, flow) in scene.flows.iter().enumerate() {
        attach_marker_motion(
            &mut schedule,
            i,
            Some(flow),
            cfg,
            ids,
            flow.duration,
            flow.start_offset,
            flow.reverse,
        );
    }
    for p in &scene.pulses {
        schedule.push(Step {
            id: ids.alloc_step(),
            target: p.target.clone(),
            effect: StepEffect::Pulse { peak: p.scale },
            start: p.start_offset,
            duration: p.duration,
            ease: EASE_IN_OUT,
        });
    }
    for c in &scene.counters {
        schedule.push(Step {
            id: ids.alloc_step(),
            target: c.target.clone(),
            effect: StepEffect::CounterTween {
                from: c.from,
                to: c.to,
            },
            start: c.start_offset,
            duration: c.duration,
            ease: EASE_IN_OUT,
        });
    }
    for h in &scene.highlights {
        schedule.push(Step {
            id: ids.alloc_step(),
            target: h.target.clone(),
            effect: StepEffect::Highlight,
            start: h.start_offset,
            duration: h.duration,
            ease: EASE_IN_OUT,
        });
    }

    if !schedule.is_empty() {
        schedule.pad_to(schedule.total() + cfg.loop_trailing_pad);
    }
    log::trace!(
        "loop built: {} steps, cycle {:.3}s, chained after {:.3}s reveal",
        schedule.len(),
        schedule.cycle_len(),
        after.total()
    );
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(shapes: usize, paths: usize, labels: usize) -> BoundScene {
        BoundScene {
            root: Some("root".into()),
            static_shapes: (0..shapes).map(|i| format!("shape{i}")).collect(),
            connecting_paths: (0..paths).map(|i| format!("path{i}")).collect(),
            labels: (0..labels).map(|i| format!("label{i}")).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_run_in_fixed_order() {
        let cfg = ChoreoConfig::default();
        let mut ids = IdAllocator::new();
        let reveal = build_reveal(&scene(2, 2, 1), &cfg, &mut ids);
        let steps = reveal.schedule().steps();
        // shapes first, then paths, then labels
        let shapes_end = cfg.shape_stagger + cfg.shape_appear;
        assert!(steps[0].start < steps[2].start);
        assert!((steps[2].start - shapes_end).abs() < 1e-6);
        let paths_end = shapes_end + cfg.path_stagger + cfg.path_draw;
        assert!((steps[4].start - paths_end).abs() < 1e-6);
        assert!((reveal.total() - (paths_end + cfg.label_appear)).abs() < 1e-6);
    }

    #[test]
    fn empty_group_contributes_nothing() {
        let cfg = ChoreoConfig::default();
        let mut ids = IdAllocator::new();
        let with_paths = build_reveal(&scene(2, 2, 1), &cfg, &mut ids);
        let without_paths = build_reveal(&scene(2, 0, 1), &cfg, &mut ids);
        let paths_span = cfg.path_stagger + cfg.path_draw;
        assert!((with_paths.total() - without_paths.total() - paths_span).abs() < 1e-6);
    }

    #[test]
    fn empty_scene_builds_empty_loop_without_pad() {
        let cfg = ChoreoConfig::default();
        let mut ids = IdAllocator::new();
        let reveal = build_reveal(&BoundScene::default(), &cfg, &mut ids);
        assert_eq!(reveal.total(), 0.0);
        let lp = build_loop(&BoundScene::default(), &cfg, &mut ids, &reveal);
        assert!(lp.is_empty());
        assert_eq!(lp.total(), 0.0);
    }
}
