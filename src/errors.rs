//! The error taxonomy.  Every failure in this crate is either a
//! precondition violation or a bad source file; nothing is retried and
//! nothing is fatal to the process.  The caller decides whether a
//! failed carve aborts a batch.

use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// A coordinate access outside the grid.  Never silently clamped.
    #[fail(
        display = "coordinate ({}, {}) out of bounds for a {}x{} grid",
        row, col, height, width
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Seam discovery or removal along a dimension that is already 1.
    /// Removing the last row or column would leave a degenerate grid.
    #[fail(display = "cannot carve: {} is already 1", axis)]
    DegenerateDimension { axis: &'static str },

    /// The source was not a plain PPM we could read.  A grid is never
    /// partially constructed from a bad source.
    #[fail(display = "malformed plain PPM source: {}", reason)]
    MalformedSource { reason: String },

    /// Seam carving only shrinks.
    #[fail(
        display = "cannot upscale: target {}x{} exceeds current {}x{}",
        target_width, target_height, width, height
    )]
    Upscale {
        target_width: usize,
        target_height: usize,
        width: usize,
        height: usize,
    },

    #[fail(display = "i/o error: {}", _0)]
    Io(#[fail(cause)] io::Error),
}

impl From<io::Error> for CarveError {
    fn from(err: io::Error) -> Self {
        CarveError::Io(err)
    }
}
