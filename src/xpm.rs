//! Writing of XPM (X PixMap) documents
//!
//! See <https://en.wikipedia.org/wiki/X_PixMap>

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, XpixError};
use crate::pixmap::Pixmap;

/// Encode a pixmap as an XPM document
///
/// The document is a C character-array literal: a header line with
/// width, height, color count, and chars per pixel, one line per
/// palette color in first-use order, then one quoted row of glyphs
/// per grid row. Every cell must hold a color; the first unset cell
/// in row-major order fails the encode.
pub fn encode(pix: &Pixmap) -> Result<String> {
    let cpp = pix.chars_per_pixel().unwrap_or(0);
    log::debug!(
        "encoding {}x{} pixmap, {} colors, {} chars per pixel",
        pix.width(),
        pix.height(),
        pix.palette().len(),
        cpp
    );
    let mut doc = String::new();
    doc.push_str("/* XPM */\n");
    doc.push_str("static char *egc[] = {\n\n");
    doc.push_str("/* width,height,nrcolors,charsperpixel */\n");
    doc.push_str(&format!(
        "\" {} {} {} {} \",\n\n",
        pix.width(),
        pix.height(),
        pix.palette().len(),
        cpp
    ));
    doc.push_str("/* colors #RRGGBB */\n");
    for color in pix.palette().iter() {
        doc.push_str(&format!("\"{} c {}\",\n", color.glyph, color.code));
    }
    doc.push('\n');
    doc.push_str("/* pixels */\n");
    for y in 0..pix.height() {
        doc.push('"');
        for x in 0..pix.width() {
            let color = pix
                .get(x as i64, y as i64)
                .ok_or(XpixError::IncompleteImage { x, y })?;
            doc.push_str(&color.glyph);
        }
        doc.push('"');
        doc.push_str(if y + 1 == pix.height() { "\n" } else { ",\n" });
    }
    doc.push_str("};");
    Ok(doc)
}

/// Write the XPM document to a writer
pub fn write_to<W: Write>(pix: &Pixmap, writer: &mut W) -> Result<()> {
    let doc = encode(pix)?;
    writer.write_all(doc.as_bytes())?;
    Ok(())
}

/// Write the XPM document to a file
pub fn to_file<P: AsRef<Path>>(pix: &Pixmap, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    write_to(pix, &mut file)
}
