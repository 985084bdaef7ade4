//! Error taxonomy for the resampling pipeline.
//!
//! Every public entry point returns a [`ResizeError`] rather than `anyhow::Error`:
//! callers need to match on *which* precondition failed (bad pixel format vs.
//! an unsupported target geometry vs. a degenerate filter), not just read a
//! message. A library at the bottom of a stack should let its caller decide
//! what to do next; the one `anyhow` user in this crate is the CLI demo's
//! `main`, which is allowed to collapse everything into one message.

use std::fmt;

/// Every way a [`crate::pipeline::resize`] call can fail.
///
/// No variant here is retryable by the pipeline itself: retry, if it makes
/// sense at all, is the caller's decision once it knows which variant it
/// got.
#[derive(Debug)]
pub enum ResizeError {
    /// Source is not BGRA/BGR, or destination is not BGRA/BGR.
    BadPixelFormat { reason: String },
    /// The requested target region isn't an axis-aligned box, or a crop
    /// rectangle falls outside the source bitmap.
    GeometryUnsupported { reason: String },
    /// A filter id, window, or blur value outside the valid range.
    InvalidOption { reason: String },
    /// The contribution builder produced a degenerate row: either the
    /// window was too narrow to cover any source pixel, or the summed
    /// weight for some output pixel was ~0.
    InvalidFilterSupport { reason: String },
    /// A buffer allocation failed. A handful of allocations in this crate
    /// are sized from caller-controlled dimensions and are checked
    /// explicitly so a huge resize request returns an error instead of
    /// aborting the process.
    OutOfMemory,
    /// An invariant the pipeline itself is supposed to guarantee was
    /// violated. Reaching this indicates a bug in this crate, not bad
    /// caller input.
    InternalInvariant { reason: String },
}

impl ResizeError {
    pub(crate) fn bad_pixel_format(reason: impl Into<String>) -> Self {
        Self::BadPixelFormat { reason: reason.into() }
    }

    pub(crate) fn geometry_unsupported(reason: impl Into<String>) -> Self {
        Self::GeometryUnsupported { reason: reason.into() }
    }

    pub(crate) fn invalid_option(reason: impl Into<String>) -> Self {
        Self::InvalidOption { reason: reason.into() }
    }

    pub(crate) fn invalid_filter_support(reason: impl Into<String>) -> Self {
        Self::InvalidFilterSupport { reason: reason.into() }
    }

    pub(crate) fn internal(reason: impl Into<String>) -> Self {
        Self::InternalInvariant { reason: reason.into() }
    }
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPixelFormat { reason } => write!(f, "bad pixel format: {reason}"),
            Self::GeometryUnsupported { reason } => write!(f, "unsupported geometry: {reason}"),
            Self::InvalidOption { reason } => write!(f, "invalid option: {reason}"),
            Self::InvalidFilterSupport { reason } => {
                write!(f, "invalid filter support: {reason}")
            }
            Self::OutOfMemory => write!(f, "allocation failed"),
            Self::InternalInvariant { reason } => {
                write!(f, "internal invariant violated: {reason}")
            }
        }
    }
}

impl std::error::Error for ResizeError {}
