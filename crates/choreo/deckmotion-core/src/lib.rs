//! Deckmotion core (renderer-agnostic).
//!
//! Choreography engine for slide-deck presentations: per slide, a one-shot
//! *reveal* schedule staggers static elements in, then an infinitely
//! repeating *loop* schedule drives markers along curves (with pulses,
//! counters, and highlights) until the slide is deactivated. The core owns
//! timing only; each tick it emits `(target, prop, value)` changes and
//! semantic events for the host renderer to apply.

pub mod config;
pub mod context;
pub mod curve;
pub mod engine;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod motion;
pub mod nav;
pub mod outputs;
pub mod phase;
pub mod sampler;
pub mod schedule;
pub mod targets;
pub mod value;

// Re-exports for consumers (host adapters)
pub use config::ChoreoConfig;
pub use context::{SlideContext, SlideState};
pub use curve::{Curve, CurveSpec};
pub use engine::Deck;
pub use error::{DeckError, DeckResult};
pub use ids::{FlowId, IdAllocator, SlideId, StepId};
pub use inputs::{Inputs, NavCommand};
pub use motion::attach_marker_motion;
pub use nav::NavState;
pub use outputs::{Change, DeckEvent, Outputs, Prop};
pub use phase::{build_loop, build_reveal, RevealHandle};
pub use sampler::{sample_curve, Direction};
pub use schedule::{Repeat, Schedule, Step, StepEffect};
pub use targets::{
    BoundFlow, BoundScene, CounterDecl, FlowDecl, HighlightDecl, PulseDecl, SlideScene,
    TargetHandle, TargetRegistry, TargetResolver,
};
pub use value::{Value, ValueKind};
