//! # rgb2pal-color
//!
//! Finds the palette color perceptually closest to a 24-bit RGB value.
//!
//! - **Palettes** - `index=hex` text files, see [`palette`]
//! - **YUV** - RGB to YUV conversion through the matrix engine
//! - **Search** - exhaustive nearest-neighbor scan, serial or on rayon
//!
//! # Architecture
//!
//! ```text
//!   palette text ──> load_palette ──> Palette ──┐
//!                                               ├──> find_nearest ──> Match
//!   query RGB ──────────────────────────────────┘         |
//!                                                    rgb_to_yuv
//!                                                         |
//!                                                   rgb2pal-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use rgb2pal_color::{find_nearest, load_palette, parse_hex_rgb};
//!
//! let palette = load_palette("# ansi\n1=800000\n2=008000\n4=000080\n".as_bytes()).unwrap();
//! let query = parse_hex_rgb("1a7a20").unwrap();
//!
//! let found = find_nearest(query, &palette).unwrap();
//! assert_eq!(found.entry.to_string(), "2 #8000");
//! ```
//!
//! # Dependencies
//!
//! - [`rgb2pal-math`] - in-place bounded matrix multiply
//! - [`glam`] - YUV vectors and distance
//! - [`rayon`] - parallel search
//!
//! # Used By
//!
//! - `rgb2pal` - command-line front end

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod nearest;
mod parse;
pub mod palette;
pub mod yuv;

pub use error::{ColorError, ColorResult};
pub use nearest::{Match, find_nearest, find_nearest_par, find_nearest_with};
pub use palette::{MAX_PALETTE_SIZE, Palette, PaletteEntry, load_palette, read_palette};
pub use parse::parse_hex_rgb;
pub use yuv::{RGB_TO_YUV, rgb_to_yuv, yuv_distance};

// Re-export the matrix crate for convenience
pub use rgb2pal_math as math;
