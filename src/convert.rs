//! Family conversions: color to gray via fixed luma weights, gray or
//! color to bilevel via a threshold.

use rgb::RGB8;

use crate::buffer::ImageBuffer;

/// Integer luma: `(299*R + 587*G + 114*B + 500) / 1000`, the rounded
/// Rec. 601 weighting on a 0-255 scale.
pub fn luma(p: RGB8) -> u8 {
    ((u32::from(p.r) * 299 + u32::from(p.g) * 587 + u32::from(p.b) * 114 + 500) / 1000) as u8
}

impl ImageBuffer<RGB8> {
    /// Grayscale buffer derived through [`luma`]; output scale is 0-255.
    pub fn to_graymap(&self) -> ImageBuffer<u8> {
        let gray = self.pixels().iter().map(|&p| luma(p)).collect();
        ImageBuffer::from_vec(self.width(), self.height(), gray)
    }

    /// Bilevel buffer: a pixel is set iff its luma is at least `threshold`.
    pub fn to_bitmap(&self, threshold: u8) -> ImageBuffer<bool> {
        let bits = self.pixels().iter().map(|&p| luma(p) >= threshold).collect();
        ImageBuffer::from_vec(self.width(), self.height(), bits)
    }
}

impl ImageBuffer<u8> {
    /// Bilevel buffer: a pixel is set iff its value is at least `threshold`.
    pub fn to_bitmap(&self, threshold: u8) -> ImageBuffer<bool> {
        let bits = self.pixels().iter().map(|&v| v >= threshold).collect();
        ImageBuffer::from_vec(self.width(), self.height(), bits)
    }
}
