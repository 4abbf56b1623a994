//! Netpbm family codec: P1-P6.
//!
//! One header grammar shared by six variants: three sample families
//! (bitmap, graymap, pixmap) times two payload encodings (plain ASCII
//! tokens, raw binary). Raw bitmaps pack each row into `ceil(width/8)`
//! bytes MSB-first; raw graymaps and pixmaps use one byte per sample.

mod decode;
mod encode;

pub use decode::{decode, decode_with_limits};

pub(crate) use decode::parse_header;
pub(crate) use encode::encode_image;

/// Sample family of an image, the first axis of the magic token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// One bit per pixel (PBM).
    Bitmap,
    /// One gray sample per pixel (PGM).
    Graymap,
    /// One RGB triplet per pixel (PPM).
    Pixmap,
}

impl Family {
    pub(crate) fn channels(self) -> usize {
        match self {
            Family::Bitmap | Family::Graymap => 1,
            Family::Pixmap => 3,
        }
    }
}

/// Payload encoding of an image, the second axis of the magic token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens (P1/P2/P3).
    Plain,
    /// Packed binary payload (P4/P5/P6).
    Raw,
}

/// Magic token for a family/encoding pair.
pub fn magic_token(family: Family, encoding: Encoding) -> &'static str {
    match (family, encoding) {
        (Family::Bitmap, Encoding::Plain) => "P1",
        (Family::Graymap, Encoding::Plain) => "P2",
        (Family::Pixmap, Encoding::Plain) => "P3",
        (Family::Bitmap, Encoding::Raw) => "P4",
        (Family::Graymap, Encoding::Raw) => "P5",
        (Family::Pixmap, Encoding::Raw) => "P6",
    }
}

pub(crate) fn parse_magic(token: &[u8]) -> Option<(Family, Encoding)> {
    match token {
        b"P1" => Some((Family::Bitmap, Encoding::Plain)),
        b"P2" => Some((Family::Graymap, Encoding::Plain)),
        b"P3" => Some((Family::Pixmap, Encoding::Plain)),
        b"P4" => Some((Family::Bitmap, Encoding::Raw)),
        b"P5" => Some((Family::Graymap, Encoding::Raw)),
        b"P6" => Some((Family::Pixmap, Encoding::Raw)),
        _ => None,
    }
}

/// Parsed header. `max_value` is 1 for bitmaps and may exceed the
/// supported 8-bit depth here; the decoder rejects that, the probe
/// reports it as-is.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Header {
    pub family: Family,
    pub encoding: Encoding,
    pub width: u32,
    pub height: u32,
    pub max_value: u16,
    pub data_offset: usize,
}
