//! Character-cell pixmap

use std::io::Write;
use std::path::Path;

use crate::clip::{self, Window};
use crate::color::{Color, Palette};
use crate::curve;
use crate::error::{Result, XpixError};
use crate::fill;
use crate::raster::Bresenham;
use crate::transform::Transform;
use crate::xpm;

/// Grid of colored character cells with drawing operations
///
/// Cells start unset and take colors from an interning palette, one
/// glyph per cell. Drawing operations send their lattice coordinates
/// through the accumulated affine transform, validate every device
/// point against the grid, and only then touch cells, so a failed
/// call leaves the grid exactly as it was.
///
///     use xpix::{Color, Pixmap};
///
///     let mut pix = Pixmap::new(4, 4);
///     let red = Color::new("#FF0000", "R");
///     pix.line(0, 0, 3, 3, &red).unwrap();
///     assert_eq!(pix.get(1, 1), Some(&red));
///     assert_eq!(pix.get(1, 0), None);
///
#[derive(Debug)]
pub struct Pixmap {
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
    palette: Palette,
    transform: Transform,
    chars_per_pixel: Option<usize>,
}

impl Pixmap {
    /// Create a new pixmap with every cell unset
    ///
    /// The grid keeps `width * height` palette indices. Panics if
    /// either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixmap with 0 width or height");
        }
        Pixmap {
            width,
            height,
            cells: vec![None; width * height],
            palette: Palette::new(),
            transform: Transform::identity(),
            chars_per_pixel: None,
        }
    }
    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }
    /// Glyph width fixed by the first interned color
    pub fn chars_per_pixel(&self) -> Option<usize> {
        self.chars_per_pixel
    }
    /// Colors interned so far, in first-use order
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// The accumulated transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Set one cell directly, bypassing the transform
    ///
    ///     use xpix::{Color, Pixmap};
    ///
    ///     let mut pix = Pixmap::new(2, 2);
    ///     pix.set(0, 1, &Color::new("#000000", "*")).unwrap();
    ///     assert!(pix.set(5, 5, &Color::new("#000000", "*")).is_err());
    ///
    pub fn set(&mut self, x: i64, y: i64, color: &Color) -> Result<()> {
        self.check_device(x, y)?;
        let id = self.intern(color)?;
        let idx = y as usize * self.width + x as usize;
        self.cells[idx] = Some(id);
        Ok(())
    }
    /// Color of a cell; unset cells and points outside the grid read
    /// as `None`
    pub fn get(&self, x: i64, y: i64) -> Option<&Color> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells[y as usize * self.width + x as usize]
            .and_then(|id| self.palette.get(id))
    }
    /// Assign a color to every unset cell
    ///
    /// Cells that already hold a color keep it. When nothing is unset
    /// the fill color is not interned, so an export lists no colors
    /// the image never uses.
    pub fn autofill(&mut self, color: &Color) -> Result<()> {
        if self.cells.iter().all(|c| c.is_some()) {
            return Ok(());
        }
        let id = self.intern(color)?;
        for cell in self.cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(id);
            }
        }
        Ok(())
    }

    /// Append a translation to the transform
    ///
    /// Appended operations are innermost: the latest one applies to
    /// points first.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.compose(&Transform::new_translate(dx, dy));
    }
    /// Append a rotation around `(cx,cy)`, angle in degrees
    pub fn rotate(&mut self, cx: f64, cy: f64, degrees: f64) {
        self.transform = self.transform.compose(&Transform::new_rotate(cx, cy, degrees));
    }
    /// Append a scaling around `(cx,cy)`
    pub fn scale(&mut self, cx: f64, cy: f64, fx: f64, fy: f64) {
        self.transform = self.transform.compose(&Transform::new_scale(cx, cy, fx, fy));
    }
    /// Drop the accumulated transform
    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    /// Draw a straight segment between two lattice points
    ///
    /// Both endpoints go through the transform and must land inside
    /// the grid.
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: &Color) -> Result<()> {
        let (x1, y1) = self.transform.apply(x1, y1);
        let (x2, y2) = self.transform.apply(x2, y2);
        self.check_device(x1, y1)?;
        self.check_device(x2, y2)?;
        let id = self.intern(color)?;
        self.plot_segment(x1, y1, x2, y2, id);
        Ok(())
    }
    /// Draw a segment clipped to a window
    ///
    /// The window addresses device space, after the transform. A
    /// segment the window rejects sets no cells and is not an error.
    pub fn clipped_line(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        win: &Window,
        color: &Color,
    ) -> Result<()> {
        let (x1, y1) = self.transform.apply(x1, y1);
        let (x2, y2) = self.transform.apply(x2, y2);
        let ((x1, y1), (x2, y2)) = match clip::clip_line(win, x1, y1, x2, y2) {
            Some(seg) => seg,
            None => return Ok(()),
        };
        self.check_device(x1, y1)?;
        self.check_device(x2, y2)?;
        let id = self.intern(color)?;
        self.plot_segment(x1, y1, x2, y2, id);
        Ok(())
    }
    /// Draw a polygon boundary, optionally filling the interior
    ///
    /// Vertices wrap implicitly from the last back to the first. A
    /// fill color covers the interior with even-odd scanline spans.
    pub fn poly(
        &mut self,
        vertices: &[(i64, i64)],
        color: &Color,
        fill: Option<&Color>,
    ) -> Result<()> {
        if vertices.is_empty() {
            return Ok(());
        }
        let device: Vec<(i64, i64)> = vertices
            .iter()
            .map(|&(x, y)| self.transform.apply(x, y))
            .collect();
        self.draw_poly_device(&device, color, fill)
    }
    /// Clip a polygon to a window, then draw what survives
    ///
    /// The clipped vertex list truncates back to lattice coordinates
    /// before the outline and optional fill are drawn; an empty
    /// result sets no cells.
    pub fn clipped_poly(
        &mut self,
        vertices: &[(i64, i64)],
        win: &Window,
        color: &Color,
        fill: Option<&Color>,
    ) -> Result<()> {
        if vertices.is_empty() {
            return Ok(());
        }
        let device: Vec<(f64, f64)> = vertices
            .iter()
            .map(|&(x, y)| self.transform.apply_f64(x as f64, y as f64))
            .collect();
        let clipped = clip::clip_poly(win, &device)?;
        if clipped.is_empty() {
            log::trace!(
                "polygon fully outside window ({},{})-({},{})",
                win.x1, win.y1, win.x2, win.y2
            );
            return Ok(());
        }
        let verts: Vec<(i64, i64)> = clipped.iter().map(|&(x, y)| (x as i64, y as i64)).collect();
        self.draw_poly_device(&verts, color, fill)
    }
    /// Sample a Bezier curve over its control points and draw the
    /// sampled polyline
    ///
    /// `step` spaces the parameter sweep and a final `t = 1` sample is
    /// always included, so the curve reaches its endpoint. Panics if
    /// `step` is not positive.
    pub fn bezier(&mut self, control: &[(i64, i64)], step: f64, color: &Color) -> Result<()> {
        assert!(step > 0.0, "Cannot sample a curve with a non-positive step");
        if control.is_empty() {
            return Ok(());
        }
        let ts = if control.len() == 2 {
            // a straight segment needs no intermediate samples
            vec![0.0, 1.0]
        } else {
            curve::params(step)
        };
        let samples: Vec<(i64, i64)> = ts
            .iter()
            .map(|&t| {
                let (fx, fy) = curve::point_at(control, t);
                self.transform.apply(fx as i64, fy as i64)
            })
            .collect();
        for &(x, y) in &samples {
            self.check_device(x, y)?;
        }
        let id = self.intern(color)?;
        for pair in samples.windows(2) {
            self.plot_segment(pair[0].0, pair[0].1, pair[1].0, pair[1].1, id);
        }
        Ok(())
    }

    /// Encode the pixmap as an XPM document
    pub fn encode(&self) -> Result<String> {
        xpm::encode(self)
    }
    /// Write the XPM document to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        xpm::write_to(self, writer)
    }
    /// Write the XPM document to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        xpm::to_file(self, path)
    }

    /// Reject device points outside the grid
    fn check_device(&self, x: i64, y: i64) -> Result<()> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(XpixError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
    /// Register a color, fixing the glyph width on first use
    fn intern(&mut self, color: &Color) -> Result<usize> {
        let found = color.width();
        match self.chars_per_pixel {
            None => self.chars_per_pixel = Some(found),
            Some(expected) if expected != found => {
                return Err(XpixError::ColorWidthMismatch { expected, found });
            }
            Some(_) => {}
        }
        Ok(self.palette.intern(color))
    }
    /// Rasterize a segment whose endpoints are already validated
    fn plot_segment(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, id: usize) {
        for (x, y) in Bresenham::new(x1, y1, x2, y2) {
            debug_assert!(x >= 0 && (x as usize) < self.width);
            debug_assert!(y >= 0 && (y as usize) < self.height);
            self.cells[y as usize * self.width + x as usize] = Some(id);
        }
    }
    /// Outline and optional fill over validated device vertices
    fn draw_poly_device(
        &mut self,
        device: &[(i64, i64)],
        color: &Color,
        fill: Option<&Color>,
    ) -> Result<()> {
        for &(x, y) in device {
            self.check_device(x, y)?;
        }
        let id = self.intern(color)?;
        let fill_id = match fill {
            Some(f) => Some(self.intern(f)?),
            None => None,
        };
        for (i, &(x2, y2)) in device.iter().enumerate() {
            let (x1, y1) = device[(i + device.len() - 1) % device.len()];
            self.plot_segment(x1, y1, x2, y2, id);
        }
        if let Some(fid) = fill_id {
            let verts: Vec<(f64, f64)> =
                device.iter().map(|&(x, y)| (x as f64, y as f64)).collect();
            for (y, xa, xb) in fill::interior_spans(&verts) {
                self.plot_segment(xa, y, xb, y, fid);
            }
        }
        Ok(())
    }
}
