//! CLI command implementations

pub mod nearest;

use anyhow::{Context, Result};
use rgb2pal_color::Palette;
use std::path::Path;

/// Load palette from path
pub fn load_palette(path: &Path) -> Result<Palette> {
    rgb2pal_color::read_palette(path)
        .with_context(|| format!("Failed to load palette: {}", path.display()))
}

/// Parse query color argument
pub fn parse_color(text: &str) -> Result<u32> {
    rgb2pal_color::parse_hex_rgb(text).with_context(|| format!("Invalid color: {text}"))
}
