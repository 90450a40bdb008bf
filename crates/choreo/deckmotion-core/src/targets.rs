//! Scene declarations and the target registry.
//!
//! A slide declares its animation targets by symbolic name, grouped the way
//! the reveal wants them (shapes, connecting paths, sub-items, labels) plus
//! named flows (marker + curve + timing) and incidental loop effects. At
//! build time names are resolved through a `TargetResolver` into opaque
//! handles; unresolved names are skipped so a partially-laid-out slide
//! degrades instead of failing.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurveSpec};
use crate::error::{DeckError, DeckResult};
use crate::ids::{FlowId, IdAllocator};

/// Opaque target handle (small string key).
pub type TargetHandle = String;

/// Resolves symbolic target names to opaque handles. The host implements
/// this against its scene graph and passes it into `Deck::mount_slide`.
pub trait TargetResolver {
    fn resolve(&mut self, name: &str) -> Option<TargetHandle>;
}

/// Map-backed registry for hosts whose targets are known up front.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    map: HashMap<String, TargetHandle>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, handle: impl Into<TargetHandle>) {
        self.map.insert(name.into(), handle.into());
    }

    /// Registry where every name resolves to itself. Convenient for tests
    /// and hosts that address targets by name directly.
    pub fn identity<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reg = Self::new();
        for n in names {
            let n = n.into();
            reg.map.insert(n.clone(), n);
        }
        reg
    }
}

impl TargetResolver for TargetRegistry {
    fn resolve(&mut self, name: &str) -> Option<TargetHandle> {
        self.map.get(name).cloned()
    }
}

/// Declared animation targets for one slide.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SlideScene {
    pub name: String,
    pub root: String,
    #[serde(default)]
    pub static_shapes: Vec<String>,
    #[serde(default)]
    pub connecting_paths: Vec<String>,
    #[serde(default)]
    pub sub_items: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub flows: Vec<FlowDecl>,
    #[serde(default)]
    pub pulses: Vec<PulseDecl>,
    #[serde(default)]
    pub counters: Vec<CounterDecl>,
    #[serde(default)]
    pub highlights: Vec<HighlightDecl>,
}

/// One marker traveling one curve during the loop phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowDecl {
    pub name: String,
    pub marker: String,
    pub curve: CurveSpec,
    pub duration: f32,
    #[serde(default)]
    pub start_offset: f32,
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PulseDecl {
    pub target: String,
    pub start_offset: f32,
    pub duration: f32,
    pub scale: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterDecl {
    pub target: String,
    pub start_offset: f32,
    pub duration: f32,
    pub from: f32,
    pub to: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HighlightDecl {
    pub target: String,
    pub start_offset: f32,
    pub duration: f32,
}

/// A flow with its marker resolved and its curve built.
#[derive(Clone, Debug)]
pub struct BoundFlow {
    pub id: FlowId,
    pub name: String,
    pub marker: TargetHandle,
    pub curve: Curve,
    pub duration: f32,
    pub start_offset: f32,
    pub reverse: bool,
}

#[derive(Clone, Debug)]
pub struct BoundPulse {
    pub target: TargetHandle,
    pub start_offset: f32,
    pub duration: f32,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct BoundCounter {
    pub target: TargetHandle,
    pub start_offset: f32,
    pub duration: f32,
    pub from: f32,
    pub to: f32,
}

#[derive(Clone, Debug)]
pub struct BoundHighlight {
    pub target: TargetHandle,
    pub start_offset: f32,
    pub duration: f32,
}

/// Resolved form of a `SlideScene`: opaque handles plus owned curves.
/// Cloned into each fresh slide context so no geometry is ever shared
/// between two contexts.
#[derive(Clone, Debug, Default)]
pub struct BoundScene {
    pub root: Option<TargetHandle>,
    pub static_shapes: Vec<TargetHandle>,
    pub connecting_paths: Vec<TargetHandle>,
    pub sub_items: Vec<TargetHandle>,
    pub labels: Vec<TargetHandle>,
    pub flows: Vec<BoundFlow>,
    pub pulses: Vec<BoundPulse>,
    pub counters: Vec<BoundCounter>,
    pub highlights: Vec<BoundHighlight>,
}

fn resolve_group(
    scene: &str,
    group: &str,
    names: &[String],
    resolver: &mut dyn TargetResolver,
) -> Vec<TargetHandle> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        match resolver.resolve(name) {
            Some(handle) => out.push(handle),
            None => log::debug!("slide '{scene}': {group} target '{name}' missing, skipped"),
        }
    }
    out
}

impl BoundScene {
    /// Resolve a declaration against the host's registry. Missing targets
    /// are dropped; a duplicated flow marker is the one hard error.
    pub fn bind(
        scene: &SlideScene,
        resolver: &mut dyn TargetResolver,
        ids: &mut IdAllocator,
    ) -> DeckResult<Self> {
        let root = resolver.resolve(&scene.root);
        if root.is_none() {
            log::debug!("slide '{}': root '{}' missing", scene.name, scene.root);
        }

        let mut flows = Vec::with_capacity(scene.flows.len());
        let mut owned_markers: HashSet<TargetHandle> = HashSet::new();
        for decl in &scene.flows {
            let Some(marker) = resolver.resolve(&decl.marker) else {
                log::debug!(
                    "slide '{}': flow '{}' marker '{}' missing, skipped",
                    scene.name,
                    decl.name,
                    decl.marker
                );
                continue;
            };
            if !owned_markers.insert(marker.clone()) {
                return Err(DeckError::MarkerAlreadyOwned(marker));
            }
            let curve = Curve::from_spec(&decl.curve);
            if curve.length() <= 0.0 {
                log::warn!(
                    "slide '{}': flow '{}' has a zero-length curve; marker will not travel",
                    scene.name,
                    decl.name
                );
            }
            flows.push(BoundFlow {
                id: ids.alloc_flow(),
                name: decl.name.clone(),
                marker,
                curve,
                duration: decl.duration.max(0.0),
                start_offset: decl.start_offset.max(0.0),
                reverse: decl.reverse,
            });
        }

        let mut pulses = Vec::new();
        for p in &scene.pulses {
            if let Some(target) = resolver.resolve(&p.target) {
                pulses.push(BoundPulse {
                    target,
                    start_offset: p.start_offset.max(0.0),
                    duration: p.duration.max(0.0),
                    scale: p.scale,
                });
            } else {
                log::debug!(
                    "slide '{}': pulse target '{}' missing, skipped",
                    scene.name,
                    p.target
                );
            }
        }

        let mut counters = Vec::new();
        for c in &scene.counters {
            if let Some(target) = resolver.resolve(&c.target) {
                counters.push(BoundCounter {
                    target,
                    start_offset: c.start_offset.max(0.0),
                    duration: c.duration.max(0.0),
                    from: c.from,
                    to: c.to,
                });
            } else {
                log::debug!(
                    "slide '{}': counter target '{}' missing, skipped",
                    scene.name,
                    c.target
                );
            }
        }

        let mut highlights = Vec::new();
        for h in &scene.highlights {
            if let Some(target) = resolver.resolve(&h.target) {
                highlights.push(BoundHighlight {
                    target,
                    start_offset: h.start_offset.max(0.0),
                    duration: h.duration.max(0.0),
                });
            } else {
                log::debug!(
                    "slide '{}': highlight target '{}' missing, skipped",
                    scene.name,
                    h.target
                );
            }
        }

        Ok(Self {
            root,
            static_shapes: resolve_group(&scene.name, "shape", &scene.static_shapes, resolver),
            connecting_paths: resolve_group(&scene.name, "path", &scene.connecting_paths, resolver),
            sub_items: resolve_group(&scene.name, "sub-item", &scene.sub_items, resolver),
            labels: resolve_group(&scene.name, "label", &scene.labels, resolver),
            flows,
            pulses,
            counters,
            highlights,
        })
    }
}
