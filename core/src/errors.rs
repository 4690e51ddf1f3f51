// core/src/errors.rs
use thiserror::Error;

/// Serien kan ikke repareres: tom, eller en rad mangler påkrevd felt.
/// Gjenopprettbar per segment – kalleren hopper over segmentet og fortsetter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid series: {reason}")]
pub struct InvalidSeriesError {
    pub reason: String,
}

impl InvalidSeriesError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Ingen brukbare segmenter i sessionen. Gjenopprettbar per session –
/// batchen skal fortsette til neste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("session has no usable readings")]
pub struct EmptySessionError;
