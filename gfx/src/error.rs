//! Errors raised by the rendering core.
//!
//! Everything here is a caller-contract violation: the core never touches a
//! file or a device, so there is nothing to retry. Arguments are validated
//! before the first byte is written, which keeps the [`Surface`](crate::surface::Surface)
//! untouched whenever an error is returned.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GfxError {
    /// A coordinate, size, index or count outside its valid range.
    #[error("{what} out of bounds: {value} (limit {limit})")]
    OutOfBounds {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// Sized input whose length differs from what its format requires.
    #[error("{what} has length {len}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        len: usize,
        expected: usize,
    },

    /// An interleave geometry the 320x200 surface cannot be addressed through.
    #[error("invalid layout: {0}")]
    Layout(String),

    /// Atlas data that does not split into 256 tiles of 16 bytes.
    #[error("malformed tile data: {len} bytes")]
    MalformedTile { len: usize },

    /// The frame boundary did not arrive within the configured wait.
    #[error("vertical sync did not arrive within {waited:?}")]
    SyncTimeout { waited: Duration },

    /// The display-mode collaborator refused a request.
    #[error("display mode: {0}")]
    Mode(String),
}

impl GfxError {
    pub(crate) const fn out_of_bounds(what: &'static str, value: usize, limit: usize) -> Self {
        Self::OutOfBounds { what, value, limit }
    }
}

pub type Result<T> = std::result::Result<T, GfxError>;

/// Rejects `value` unless it is strictly below `limit`.
pub(crate) const fn check_below(what: &'static str, value: usize, limit: usize) -> Result<()> {
    if value < limit {
        Ok(())
    } else {
        Err(GfxError::out_of_bounds(what, value, limit))
    }
}

/// Rejects a run of `len` items from `start` unless it ends at or before
/// `limit`. The error reports the last index of the run.
pub(crate) const fn check_span(what: &'static str, start: usize, len: usize, limit: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= limit => Ok(()),
        _ => Err(GfxError::out_of_bounds(
            what,
            start.saturating_add(len.saturating_sub(1)),
            limit,
        )),
    }
}
