//! Identifiers and a simple allocator for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FlowId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StepId(pub u32);

/// Monotonic allocator for SlideId, FlowId, and StepId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_slide: u32,
    next_flow: u32,
    next_step: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_slide(&mut self) -> SlideId {
        let id = SlideId(self.next_slide);
        self.next_slide = self.next_slide.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_flow(&mut self) -> FlowId {
        let id = FlowId(self.next_flow);
        self.next_flow = self.next_flow.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_step(&mut self) -> StepId {
        let id = StepId(self.next_step);
        self.next_step = self.next_step.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
