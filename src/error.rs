//! Error types

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, XpixError>;

/// Errors raised by drawing and export operations
#[derive(Debug, Error)]
pub enum XpixError {
    /// A device-space point landed outside the grid
    #[error("point ({x},{y}) outside {width}x{height} pixmap")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// A color glyph disagreed with the width fixed by the first color
    #[error("glyph is {found} characters wide, pixmap uses {expected}")]
    ColorWidthMismatch { expected: usize, found: usize },
    /// A cell was never assigned a color
    #[error("cell ({x},{y}) has no color, cannot encode")]
    IncompleteImage { x: usize, y: usize },
    /// Clip window corners out of order
    #[error("clip window ({x1},{y1})-({x2},{y2}) has a min bound above a max bound")]
    InvalidClipWindow { x1: i64, y1: i64, x2: i64, y2: i64 },
    /// A clip edge and a polygon edge are parallel
    #[error("clip edge and polygon edge are parallel, no intersection")]
    DegenerateIntersection,
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
