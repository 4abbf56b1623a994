//! The decoded image: one sample buffer plus serialization properties.

use std::fs;
use std::path::Path;

use rgb::RGB8;

use crate::buffer::ImageBuffer;
use crate::error::NetpbmError;
use crate::limits::Limits;
use crate::pnm::{self, Encoding, Family};

/// The active sample variant of an [`Image`]. Exactly one variant is
/// active per image and never changes mid-buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Samples {
    Bitmap(ImageBuffer<bool>),
    Graymap(ImageBuffer<u8>),
    Pixmap(ImageBuffer<RGB8>),
}

/// A decoded Netpbm image.
///
/// The payload encoding and the max value are properties of the image
/// instance: they are taken from the decoded source but may be changed
/// before re-encoding (a plain-decoded image can be saved raw, and vice
/// versa).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    samples: Samples,
    encoding: Encoding,
    max_value: u8,
}

impl Image {
    /// Blank bitmap (all bits clear), raw encoding.
    pub fn new_bitmap(width: u32, height: u32) -> Self {
        Self {
            samples: Samples::Bitmap(ImageBuffer::new(width, height)),
            encoding: Encoding::Raw,
            max_value: 1,
        }
    }

    /// Blank graymap (all black), raw encoding, max value 255.
    pub fn new_graymap(width: u32, height: u32) -> Self {
        Self {
            samples: Samples::Graymap(ImageBuffer::new(width, height)),
            encoding: Encoding::Raw,
            max_value: 255,
        }
    }

    /// Blank pixmap (all black), raw encoding, max value 255.
    pub fn new_pixmap(width: u32, height: u32) -> Self {
        Self {
            samples: Samples::Pixmap(ImageBuffer::new(width, height)),
            encoding: Encoding::Raw,
            max_value: 255,
        }
    }

    pub(crate) fn from_parts(samples: Samples, encoding: Encoding, max_value: u8) -> Self {
        Self {
            samples,
            encoding,
            max_value: max_value.max(1),
        }
    }

    /// Decode a Netpbm byte stream.
    pub fn decode(data: &[u8]) -> Result<Self, NetpbmError> {
        pnm::decode(data)
    }

    /// Decode with resource limits checked before allocation.
    pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Self, NetpbmError> {
        pnm::decode_with_limits(data, limits)
    }

    /// Serialize using the image's current encoding and max value.
    pub fn encode(&self) -> Vec<u8> {
        pnm::encode_image(self)
    }

    /// Read and decode a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NetpbmError> {
        let data = fs::read(path)?;
        Self::decode(&data)
    }

    /// Encode and write to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        fs::write(path, self.encode())?;
        Ok(())
    }

    pub fn family(&self) -> Family {
        match &self.samples {
            Samples::Bitmap(_) => Family::Bitmap,
            Samples::Graymap(_) => Family::Graymap,
            Samples::Pixmap(_) => Family::Pixmap,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between plain and raw serialization for the next encode.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Magic token the image would be encoded with.
    pub fn magic(&self) -> &'static str {
        pnm::magic_token(self.family(), self.encoding)
    }

    pub fn max_value(&self) -> u8 {
        match self.family() {
            Family::Bitmap => 1,
            _ => self.max_value,
        }
    }

    /// Set the max sample value written on encode (clamped to at least 1;
    /// ignored for bitmaps). Samples above the new max are clamped when
    /// serialized, not rewritten in the buffer.
    pub fn set_max_value(&mut self, max_value: u8) {
        self.max_value = max_value.max(1);
    }

    pub fn width(&self) -> u32 {
        match &self.samples {
            Samples::Bitmap(b) => b.width(),
            Samples::Graymap(b) => b.width(),
            Samples::Pixmap(b) => b.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.samples {
            Samples::Bitmap(b) => b.height(),
            Samples::Graymap(b) => b.height(),
            Samples::Pixmap(b) => b.height(),
        }
    }

    /// `(width, height)` pair.
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    pub fn as_bitmap(&self) -> Option<&ImageBuffer<bool>> {
        match &self.samples {
            Samples::Bitmap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bitmap_mut(&mut self) -> Option<&mut ImageBuffer<bool>> {
        match &mut self.samples {
            Samples::Bitmap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&ImageBuffer<u8>> {
        match &self.samples {
            Samples::Graymap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_graymap_mut(&mut self) -> Option<&mut ImageBuffer<u8>> {
        match &mut self.samples {
            Samples::Graymap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&ImageBuffer<RGB8>> {
        match &self.samples {
            Samples::Pixmap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_pixmap_mut(&mut self) -> Option<&mut ImageBuffer<RGB8>> {
        match &mut self.samples {
            Samples::Pixmap(b) => Some(b),
            _ => None,
        }
    }

    /// Complement every sample: bits flip, gray and color channels map
    /// `v` to `max - v`.
    pub fn invert(&mut self) {
        let max = self.max_value();
        match &mut self.samples {
            Samples::Bitmap(b) => b.invert(1),
            Samples::Graymap(b) => b.invert(max),
            Samples::Pixmap(b) => b.invert(max),
        }
    }

    /// Reverse each row in place.
    pub fn flip_horizontal(&mut self) {
        match &mut self.samples {
            Samples::Bitmap(b) => b.flip_horizontal(),
            Samples::Graymap(b) => b.flip_horizontal(),
            Samples::Pixmap(b) => b.flip_horizontal(),
        }
    }

    /// Reverse the row order in place.
    pub fn flip_vertical(&mut self) {
        match &mut self.samples {
            Samples::Bitmap(b) => b.flip_vertical(),
            Samples::Graymap(b) => b.flip_vertical(),
            Samples::Pixmap(b) => b.flip_vertical(),
        }
    }

    /// Rotate 90 degrees clockwise; dimensions swap.
    pub fn rotate90_cw(&mut self) {
        match &mut self.samples {
            Samples::Bitmap(b) => b.rotate90_cw(),
            Samples::Graymap(b) => b.rotate90_cw(),
            Samples::Pixmap(b) => b.rotate90_cw(),
        }
    }

    /// Nearest-neighbor resample to the given dimensions.
    pub fn resample_nearest(&mut self, new_width: u32, new_height: u32) {
        match &mut self.samples {
            Samples::Bitmap(b) => b.resample_nearest(new_width, new_height),
            Samples::Graymap(b) => b.resample_nearest(new_width, new_height),
            Samples::Pixmap(b) => b.resample_nearest(new_width, new_height),
        }
    }

    /// Derive a graymap image.
    ///
    /// Pixmaps convert through the fixed luma weights with max value 255;
    /// graymaps copy through; bitmap set bits (black ink) become 0 and
    /// clear bits become 255.
    pub fn to_graymap(&self) -> Image {
        let samples = match &self.samples {
            Samples::Pixmap(b) => Samples::Graymap(b.to_graymap()),
            Samples::Graymap(b) => Samples::Graymap(b.clone()),
            Samples::Bitmap(b) => {
                let gray = b
                    .pixels()
                    .iter()
                    .map(|&bit| if bit { 0 } else { 255 })
                    .collect();
                Samples::Graymap(ImageBuffer::from_vec(b.width(), b.height(), gray))
            }
        };
        Image {
            samples,
            encoding: self.encoding,
            max_value: 255,
        }
    }

    /// Derive a bitmap image: a pixel is set iff its gray value (luma for
    /// pixmaps) is at least `threshold`. Bitmaps copy through.
    pub fn to_bitmap(&self, threshold: u8) -> Image {
        let samples = match &self.samples {
            Samples::Pixmap(b) => Samples::Bitmap(b.to_bitmap(threshold)),
            Samples::Graymap(b) => Samples::Bitmap(b.to_bitmap(threshold)),
            Samples::Bitmap(b) => Samples::Bitmap(b.clone()),
        };
        Image {
            samples,
            encoding: self.encoding,
            max_value: 1,
        }
    }
}
