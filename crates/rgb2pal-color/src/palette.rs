//! Indexed palettes and the palette text format.
//!
//! # Format
//!
//! ```text
//! # Comment line
//! # Each record is <color_index>=<RGB_hex>
//! 1=5566ab
//! 2=5577bc
//! ```
//!
//! A line starting with `#` is a comment. Every other line must be a
//! record; the first one that is not (an empty line included) rejects the
//! whole palette. Indices need not be unique or sequential and file order
//! is kept.
//!
//! # Example
//!
//! ```rust
//! use rgb2pal_color::load_palette;
//!
//! let text = "# grays\n0=000000\n7=c0c0c0\n15=ffffff\n";
//! let palette = load_palette(text.as_bytes()).unwrap();
//! assert_eq!(palette.len(), 3);
//! assert_eq!(palette.entries()[1].to_string(), "7 #c0c0c0");
//! ```

use crate::parse::parse_entry_line;
use crate::{ColorError, ColorResult};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Maximum number of entries a palette holds.
pub const MAX_PALETTE_SIZE: usize = 65536;

/// One indexed palette color.
///
/// `rgb` is packed as `0xRRGGBB`; bits above 24 are kept but do not take
/// part in color math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Palette index as written in the file.
    pub index: u32,
    /// Packed RGB value.
    pub rgb: u32,
}

impl PaletteEntry {
    /// Creates an entry.
    pub const fn new(index: u32, rgb: u32) -> Self {
        Self { index, rgb }
    }

    /// `[r, g, b]` channels of this entry.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        crate::yuv::rgb_channels(self.rgb)
    }
}

/// Formats as `<index> #<hex>`, lowercase without padding (`1 #0`).
impl fmt::Display for PaletteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{:x}", self.index, self.rgb)
    }
}

/// Ordered list of palette entries, at most [`MAX_PALETTE_SIZE`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Builds a palette from entries in the given order.
    ///
    /// Entries past [`MAX_PALETTE_SIZE`] are dropped.
    pub fn from_entries(mut entries: Vec<PaletteEntry>) -> Self {
        if entries.len() > MAX_PALETTE_SIZE {
            warn!(
                "palette truncated from {} to {} entries",
                entries.len(),
                MAX_PALETTE_SIZE
            );
            entries.truncate(MAX_PALETTE_SIZE);
        }
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterates entries in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reads a palette file.
///
/// # Example
///
/// ```rust,ignore
/// let palette = rgb2pal_color::read_palette("terminal256.palette")?;
/// ```
pub fn read_palette<P: AsRef<Path>>(path: P) -> ColorResult<Palette> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("reading palette {}", path.display());
    load_palette(BufReader::new(file))
}

/// Parses a palette from a reader.
///
/// The reader is consumed line by line and left open. Lines are raw bytes:
/// comments are skipped without decoding, and records are decoded lossily,
/// so bytes that are not UTF-8 only matter where a field is expected.
///
/// # Errors
///
/// - [`ColorError::Malformed`] on the first non-comment line that is not a record
/// - [`ColorError::EmptyPalette`] if no record was read
/// - [`ColorError::Io`] if reading fails
pub fn load_palette<R: BufRead>(mut reader: R) -> ColorResult<Palette> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if entries.len() >= MAX_PALETTE_SIZE {
            warn!("palette capacity of {MAX_PALETTE_SIZE} reached, ignoring remaining lines");
            break;
        }

        if buf.first() == Some(&b'#') {
            continue;
        }

        let line = String::from_utf8_lossy(strip_line_end(&buf));
        let Some((index, rgb)) = parse_entry_line(&line) else {
            warn!("malformed palette line {line_no}: {line:?}");
            return Err(ColorError::Malformed {
                line: line_no,
                content: line.into_owned(),
            });
        };

        trace!("entry {index}=#{rgb:06x}");
        entries.push(PaletteEntry::new(index, rgb));
    }

    if entries.is_empty() {
        return Err(ColorError::EmptyPalette);
    }

    debug!("loaded {} palette entries", entries.len());
    Ok(Palette { entries })
}

fn strip_line_end(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}
