//! Deck: data ownership and public API.
//!
//! The deck owns the navigation state, the mounted slides, and their
//! contexts. Each `update(dt, inputs)` applies navigation commands, flips
//! the single active slide (pausing the outgoing context synchronously,
//! building or resuming the incoming one), ticks the running context, and
//! returns this frame's changes and events.

use crate::config::ChoreoConfig;
use crate::context::{SlideContext, SlideState};
use crate::error::{DeckError, DeckResult};
use crate::ids::{IdAllocator, SlideId};
use crate::inputs::{Inputs, NavCommand};
use crate::nav::NavState;
use crate::outputs::{DeckEvent, Outputs};
use crate::targets::{BoundScene, SlideScene, TargetResolver};

#[derive(Debug)]
struct SlideEntry {
    id: SlideId,
    name: String,
    /// Resolved template; cloned into each fresh context so no curve or
    /// marker handle is ever shared between two contexts.
    template: BoundScene,
    context: Option<SlideContext>,
}

#[derive(Debug)]
pub struct Deck {
    cfg: ChoreoConfig,
    ids: IdAllocator,
    nav: NavState,
    slides: Vec<SlideEntry>,
    active: Option<SlideId>,
    outputs: Outputs,
    /// Events raised between updates (unmount) surface on the next update.
    pending_events: Vec<DeckEvent>,
}

impl Deck {
    pub fn new(cfg: ChoreoConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
            ids: IdAllocator::new(),
            nav: NavState::new(0),
            slides: Vec::new(),
            active: None,
            outputs: Outputs::default(),
            pending_events: Vec::new(),
        }
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn config(&self) -> &ChoreoConfig {
        &self.cfg
    }

    /// Mount a slide: resolve its declared targets now, activate later.
    /// The only hard failure is a marker owned by two flows.
    pub fn mount_slide(
        &mut self,
        scene: &SlideScene,
        resolver: &mut dyn TargetResolver,
    ) -> DeckResult<SlideId> {
        let template = BoundScene::bind(scene, resolver, &mut self.ids)?;
        let id = self.ids.alloc_slide();
        self.slides.push(SlideEntry {
            id,
            name: scene.name.clone(),
            template,
            context: None,
        });
        self.nav.set_total(self.slides.len());
        log::trace!("mounted slide {:?} ('{}')", id, scene.name);
        Ok(id)
    }

    /// Remove a slide from the deck, destroying its context. The destroy
    /// event surfaces in the next `update`'s outputs.
    pub fn unmount_slide(&mut self, id: SlideId) -> DeckResult<()> {
        let idx = self
            .slides
            .iter()
            .position(|e| e.id == id)
            .ok_or(DeckError::UnknownSlide(id))?;
        let mut entry = self.slides.remove(idx);
        if let Some(ctx) = entry.context.as_mut() {
            let mut scratch = Outputs::default();
            ctx.destroy(&mut scratch);
            self.pending_events.append(&mut scratch.events);
        }
        if self.active == Some(id) {
            self.active = None;
        }
        if idx < self.nav.current() {
            self.nav.shift_down();
        }
        self.nav.set_total(self.slides.len());
        log::trace!("unmounted slide {:?} ('{}')", id, entry.name);
        Ok(())
    }

    /// Step the deck by `dt` with the given inputs, producing outputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending_events);

        for cmd in &inputs.nav_cmds {
            match cmd {
                NavCommand::Next => {
                    self.nav.next();
                }
                NavCommand::Prev => {
                    self.nav.prev();
                }
                NavCommand::GoTo { index } => {
                    self.nav.go_to(*index);
                }
            }
        }

        self.sync_active();

        if let Some(id) = self.active {
            if let Some(entry) = self.slides.iter_mut().find(|e| e.id == id) {
                if let Some(ctx) = entry.context.as_mut() {
                    ctx.tick(dt, &mut self.outputs);
                }
            }
        }

        &self.outputs
    }

    /// Lifecycle state of a slide as seen from the deck.
    pub fn slide_state(&self, id: SlideId) -> SlideState {
        match self.slides.iter().find(|e| e.id == id) {
            None => SlideState::Unmounted,
            Some(entry) => match &entry.context {
                None => SlideState::Idle,
                Some(ctx) => ctx.state(),
            },
        }
    }

    /// The slide whose context is currently running, if any. At most one
    /// exists, because navigation owns the active flag exclusively.
    pub fn running_slide(&self) -> Option<SlideId> {
        self.slides
            .iter()
            .filter_map(|e| e.context.as_ref())
            .find(|c| c.state() == SlideState::Running)
            .map(|c| c.slide())
    }

    /// Measured reveal duration for a built slide (None before building).
    pub fn reveal_total(&self, id: SlideId) -> Option<f32> {
        self.slides
            .iter()
            .find(|e| e.id == id)?
            .context
            .as_ref()
            .map(|c| c.reveal_total())
    }

    /// Deterministic loop cycle length for a built slide.
    pub fn loop_cycle_len(&self, id: SlideId) -> Option<f32> {
        self.slides
            .iter()
            .find(|e| e.id == id)?
            .context
            .as_ref()
            .map(|c| c.loop_cycle_len())
    }

    /// Make the navigation target the one running slide: pause the
    /// outgoing context in place, then build or resume the incoming one.
    fn sync_active(&mut self) {
        let target = if self.slides.is_empty() {
            None
        } else {
            Some(self.slides[self.nav.current()].id)
        };

        if self.active != target {
            if let Some(prev_id) = self.active.take() {
                if let Some(entry) = self.slides.iter_mut().find(|e| e.id == prev_id) {
                    if let Some(ctx) = entry.context.as_mut() {
                        ctx.pause();
                    }
                    self.outputs
                        .push_event(DeckEvent::SlideDeactivated { slide: prev_id });
                }
            }
            self.active = target;
            if let Some(id) = target {
                self.activate(id, true);
            }
        } else if let Some(id) = target {
            // First update after mount, or a rebuild after destroy.
            self.activate(id, false);
        }
    }

    fn activate(&mut self, id: SlideId, announce: bool) {
        let index = self.nav.current();
        let direction = self.nav.direction();
        let Self {
            cfg,
            ids,
            slides,
            outputs,
            ..
        } = self;
        let Some(entry) = slides.iter_mut().find(|e| e.id == id) else {
            return;
        };

        let mut announce = announce;
        match entry.context.as_ref().map(|c| c.state()) {
            Some(SlideState::Running) => {
                announce = false;
            }
            Some(SlideState::Paused) => {
                if let Some(ctx) = entry.context.as_mut() {
                    ctx.resume();
                }
            }
            _ => {
                // Never built, or destroyed: destroy any prior context
                // first, then build fresh. There is never more than one
                // live context per slide.
                if let Some(ctx) = entry.context.as_mut() {
                    ctx.destroy(outputs);
                }
                entry.context = Some(SlideContext::build(
                    id,
                    entry.template.clone(),
                    cfg,
                    ids,
                    outputs,
                ));
                announce = true;
            }
        }
        if announce {
            outputs.push_event(DeckEvent::SlideActivated {
                slide: id,
                index,
                direction,
            });
        }
    }
}
