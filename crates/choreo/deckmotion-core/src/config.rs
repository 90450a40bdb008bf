//! Choreography tunables.
//!
//! Every pacing literal (fade lengths, staggers, repeat delay) is
//! configuration, not contract: nothing in the core branches on the exact
//! values, and negative inputs are clamped rather than rejected.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChoreoConfig {
    /// Fade-in lead before a marker starts traveling (seconds).
    pub fade_lead_in: f32,
    /// Fade-out tail after a marker finishes traveling (seconds).
    pub fade_tail: f32,
    /// Opacity a marker fades up to while traveling.
    pub marker_peak_opacity: f32,

    /// Per-item delay within the static-shape reveal group.
    pub shape_stagger: f32,
    /// Per-item delay within the connecting-path reveal group.
    pub path_stagger: f32,
    /// Per-item delay within the sub-item reveal group.
    pub sub_item_stagger: f32,
    /// Per-item delay within the label reveal group.
    pub label_stagger: f32,

    /// Appearance duration for one static shape.
    pub shape_appear: f32,
    /// Draw-on duration for one connecting path.
    pub path_draw: f32,
    /// Appearance duration for one sub-item.
    pub sub_item_appear: f32,
    /// Appearance duration for one label.
    pub label_appear: f32,

    /// Idle gap between loop cycles.
    pub loop_repeat_delay: f32,
    /// Trailing pad appended to the loop so its cycle length is deterministic
    /// and independent loops can repeat in phase.
    pub loop_trailing_pad: f32,
}

impl Default for ChoreoConfig {
    fn default() -> Self {
        Self {
            fade_lead_in: 0.15,
            fade_tail: 0.25,
            marker_peak_opacity: 0.9,
            shape_stagger: 0.1,
            path_stagger: 0.1,
            sub_item_stagger: 0.06,
            label_stagger: 0.08,
            shape_appear: 0.4,
            path_draw: 0.5,
            sub_item_appear: 0.3,
            label_appear: 0.3,
            loop_repeat_delay: 0.5,
            loop_trailing_pad: 0.4,
        }
    }
}

impl ChoreoConfig {
    /// Clamp every tunable into its valid range. Staggers and durations must
    /// be monotonically non-negative; peak opacity stays within [0, 1].
    pub fn sanitized(&self) -> Self {
        let nn = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            fade_lead_in: nn(self.fade_lead_in),
            fade_tail: nn(self.fade_tail),
            marker_peak_opacity: nn(self.marker_peak_opacity).min(1.0),
            shape_stagger: nn(self.shape_stagger),
            path_stagger: nn(self.path_stagger),
            sub_item_stagger: nn(self.sub_item_stagger),
            label_stagger: nn(self.label_stagger),
            shape_appear: nn(self.shape_appear),
            path_draw: nn(self.path_draw),
            sub_item_appear: nn(self.sub_item_appear),
            label_appear: nn(self.label_appear),
            loop_repeat_delay: nn(self.loop_repeat_delay),
            loop_trailing_pad: nn(self.loop_trailing_pad),
        }
    }
}
