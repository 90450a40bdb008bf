//! Output contracts from the core.
//!
//! Outputs carry the property changes for this tick, keyed by opaque target
//! handle plus a typed property, and a separate list of semantic events.
//! The host applies changes to its scene graph and routes events.

use serde::{Deserialize, Serialize};

use crate::ids::SlideId;
use crate::targets::TargetHandle;
use crate::value::Value;

/// Which visual property of the target a change addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    Opacity,
    Position,
    /// Path draw-on progress in [0, 1].
    Draw,
    Scale,
    /// Numeric counter value.
    Counter,
    Highlight,
}

/// One changed target property for a given slide this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub slide: SlideId,
    pub key: TargetHandle,
    pub prop: Prop,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum DeckEvent {
    SlideActivated {
        slide: SlideId,
        index: usize,
        direction: i8,
    },
    SlideDeactivated {
        slide: SlideId,
    },
    /// The reveal schedule crossed its measured total duration. Fires
    /// exactly once per built context; the loop starts on this event.
    RevealCompleted {
        slide: SlideId,
        at: f32,
    },
    /// The loop schedule wrapped into a new cycle.
    LoopCycled {
        slide: SlideId,
        cycle: u32,
    },
    SlideDestroyed {
        slide: SlideId,
    },
    /// Catch-all for forward-compatible payloads.
    Custom {
        kind: String,
        data: serde_json::Value,
    },
}

/// Outputs returned by `Deck::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<DeckEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: DeckEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
