//! Error type for construction-time validation.
//!
//! Runtime animation faults (missing targets, degenerate curves) are
//! fail-soft and never surface here; a live presentation degrades to static
//! slides rather than erroring.

use crate::ids::SlideId;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Two flows on the same slide declared the same marker; a marker is
    /// written by exactly one motion.
    #[error("marker '{0}' is already owned by another flow")]
    MarkerAlreadyOwned(String),

    #[error("unknown slide {0:?}")]
    UnknownSlide(SlideId),
}
