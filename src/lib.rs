//! Rasterize 2D primitives onto a character pixmap and write the
//! result as an XPM document.
//!
//! A [`Pixmap`] holds a grid of character cells and an interning
//! color [`Palette`]. Lines, polygons, and Bezier curves pass through
//! the grid's accumulated affine [`Transform`], optional clipping
//! against a [`Window`], and integer Bresenham stepping, landing on
//! whole cells only.
//!
//!     use xpix::{Color, Pixmap};
//!
//!     let mut pix = Pixmap::new(10, 10);
//!     let red = Color::new("#FF0000", "R");
//!     pix.line(0, 0, 9, 9, &red).unwrap();
//!     pix.autofill(&Color::new("#FFFFFF", ".")).unwrap();
//!     let doc = pix.encode().unwrap();
//!     assert!(doc.starts_with("/* XPM */"));

pub mod clip;
pub mod color;
pub mod curve;
pub mod error;
pub mod fill;
pub mod pixmap;
pub mod raster;
pub mod transform;
pub mod xpm;

pub use crate::clip::*;
pub use crate::color::*;
pub use crate::curve::*;
pub use crate::error::*;
pub use crate::fill::*;
pub use crate::pixmap::*;
pub use crate::raster::*;
pub use crate::transform::*;
pub use crate::xpm::*;
