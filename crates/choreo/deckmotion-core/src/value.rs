//! Value kinds carried by per-tick changes.
//!
//! The core never mutates a scene graph directly; it emits `(target, prop,
//! Value)` records and the host applies them. Three kinds cover everything a
//! slide animates: scalar opacities/progress/counters, 2D marker positions,
//! and boolean highlight toggles.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Float(f32),
    Vec2([f32; 2]),
    Bool(bool),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Float,
    Vec2,
    Bool,
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match self {
            Value::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}
