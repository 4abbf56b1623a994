//! # netpbm
//!
//! Netpbm (PBM/PGM/PPM) image codec with a raster drawing and
//! generation engine.
//!
//! ## Formats
//!
//! All six canonical magic tokens are supported, in both directions:
//!
//! - **P1/P4** — bitmap, one bit per pixel
//! - **P2/P5** — graymap, one 8-bit sample per pixel
//! - **P3/P6** — pixmap, one RGB triplet per pixel
//!
//! Plain (ASCII) and raw (binary) encodings round-trip exactly; the
//! encoding is a property of the [`Image`] and can be switched before
//! saving. Only 8-bit sample depth is supported (`max value <= 255`).
//!
//! ## Drawing
//!
//! The decoded buffer doubles as a raster target: lines, rectangles,
//! circles, triangles and polygons (outline and filled), recursive Koch
//! and Sierpinski constructions, and seeded gradient-noise fills, all
//! generic over the three sample types.
//!
//! ## Usage
//!
//! ```
//! use netpbm::{Encoding, Image, Point};
//!
//! let mut image = Image::new_graymap(64, 64);
//! let buf = image.as_graymap_mut().unwrap();
//! buf.draw_filled_circle(Point::new(32, 32), 20, 200)?;
//! buf.draw_line(Point::new(0, 0), Point::new(63, 63), 255);
//!
//! image.set_encoding(Encoding::Plain);
//! let bytes = image.encode();
//! let back = Image::decode(&bytes)?;
//! assert_eq!(back.size(), (64, 64));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod buffer;
mod convert;
pub mod draw;
mod error;
mod image;
mod info;
mod limits;
pub mod pnm;

pub use buffer::{ImageBuffer, Pixel};
pub use convert::luma;
pub use draw::{DrawError, Perlin, Point};
pub use error::NetpbmError;
pub use image::{Image, Samples};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pnm::{decode, decode_with_limits, Encoding, Family};
pub use rgb::RGB8;
