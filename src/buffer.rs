//! Row-major pixel buffer shared by all three image families.
//!
//! The buffer is generic over a closed set of sample types: `bool` for
//! bitmaps, `u8` for graymaps, [`rgb::RGB8`] for pixmaps. Reads and writes
//! through [`ImageBuffer::at`] / [`ImageBuffer::set`] are permissive:
//! out-of-range coordinates read the sample default and write nothing.
//! Callers that need strict bounds check [`ImageBuffer::size`] first.

use std::fmt::Debug;

use rgb::RGB8;

/// A sample type an [`ImageBuffer`] can hold.
///
/// Implemented for `bool` (bitmap), `u8` (graymap) and [`RGB8`] (pixmap);
/// the set is closed by design — each variant fixes its default value,
/// inversion rule and interpolation rule.
pub trait Pixel: Copy + PartialEq + Debug + 'static {
    /// Value used for blank buffers and out-of-range reads.
    const DEFAULT: Self;

    /// Complement against the image max value (`max` is ignored for bits).
    fn invert(self, max: u8) -> Self;

    /// Linear interpolation between `a` and `b` at parameter `t` in `[0, 1]`.
    fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Pixel for bool {
    const DEFAULT: Self = false;

    fn invert(self, _max: u8) -> Self {
        !self
    }

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        if t < 0.5 {
            a
        } else {
            b
        }
    }
}

impl Pixel for u8 {
    const DEFAULT: Self = 0;

    fn invert(self, max: u8) -> Self {
        max.saturating_sub(self)
    }

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8
    }
}

impl Pixel for RGB8 {
    const DEFAULT: Self = RGB8 { r: 0, g: 0, b: 0 };

    fn invert(self, max: u8) -> Self {
        RGB8 {
            r: max.saturating_sub(self.r),
            g: max.saturating_sub(self.g),
            b: max.saturating_sub(self.b),
        }
    }

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        RGB8 {
            r: u8::lerp(a.r, b.r, t),
            g: u8::lerp(a.g, b.g, t),
            b: u8::lerp(a.b, b.b, t),
        }
    }
}

/// Owned row-major grid of `width * height` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Pixel> ImageBuffer<T> {
    /// Blank buffer filled with the sample default.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![T::DEFAULT; len],
        }
    }

    /// Wrap an existing row-major sample vector.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "sample vector length must equal width * height"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major sample slice.
    pub fn pixels(&self) -> &[T] {
        &self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Sample at `(x, y)`, or the default value when out of range.
    pub fn at(&self, x: i32, y: i32) -> T {
        match self.index(x, y) {
            Some(i) => self.data[i],
            None => T::DEFAULT,
        }
    }

    /// Write `value` at `(x, y)`. Out-of-range writes are silent no-ops.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Complement every sample against `max`.
    pub fn invert(&mut self, max: u8) {
        for p in &mut self.data {
            *p = p.invert(max);
        }
    }

    /// Reverse each row in place.
    pub fn flip_horizontal(&mut self) {
        let w = self.width as usize;
        if w < 2 {
            return;
        }
        for row in self.data.chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Reverse the row order in place.
    pub fn flip_vertical(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        for y in 0..h / 2 {
            for x in 0..w {
                self.data.swap(y * w + x, (h - 1 - y) * w + x);
            }
        }
    }

    /// Rotate 90 degrees clockwise. Dimensions swap; the replacement
    /// buffer is built in full before committing.
    pub fn rotate90_cw(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut rotated = vec![T::DEFAULT; w * h];
        // dest is h wide, w tall: dest(h-1-y, x) = src(x, y)
        for y in 0..h {
            for x in 0..w {
                rotated[x * h + (h - 1 - y)] = self.data[y * w + x];
            }
        }
        self.data = rotated;
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Nearest-neighbor resample to `new_width` x `new_height`.
    ///
    /// Each destination pixel samples the source at
    /// `(floor(x * width / new_width), floor(y * height / new_height))`,
    /// clamped to the source bounds. Dimensions and buffer are replaced
    /// atomically.
    pub fn resample_nearest(&mut self, new_width: u32, new_height: u32) {
        let nw = new_width as usize;
        let nh = new_height as usize;
        if self.width == 0 || self.height == 0 {
            self.data = vec![T::DEFAULT; nw * nh];
            self.width = new_width;
            self.height = new_height;
            return;
        }
        let w = self.width as usize;
        let h = self.height as usize;
        let x_ratio = w as f64 / nw.max(1) as f64;
        let y_ratio = h as f64 / nh.max(1) as f64;
        let mut resized = Vec::with_capacity(nw * nh);
        for y in 0..nh {
            let sy = ((y as f64 * y_ratio) as usize).min(h - 1);
            for x in 0..nw {
                let sx = ((x as f64 * x_ratio) as usize).min(w - 1);
                resized.push(self.data[sy * w + sx]);
            }
        }
        self.data = resized;
        self.width = new_width;
        self.height = new_height;
    }

    /// Zero-copy [`imgref::ImgRef`] view of the samples.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, T> {
        imgref::ImgRef::new(&self.data, self.width as usize, self.height as usize)
    }

    /// Copy the samples into an [`imgref::ImgVec`].
    pub fn to_imgvec(&self) -> imgref::ImgVec<T> {
        imgref::ImgVec::new(
            self.data.clone(),
            self.width as usize,
            self.height as usize,
        )
    }
}
