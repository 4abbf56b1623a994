//! Raster drawing engine over [`ImageBuffer`](crate::ImageBuffer).
//!
//! Primitives mutate the buffer through its permissive `set`, so shapes
//! that overhang the edges are clipped pixel by pixel. Precondition
//! failures (non-positive radius, empty rectangle, too few polygon
//! vertices) return a [`DrawError`] and leave the buffer untouched.

mod fractal;
mod line;
mod noise;
mod shapes;

pub use noise::Perlin;

pub(crate) use line::walk_line;

/// Integer drawing coordinate. Points themselves are never
/// bounds-checked; individual pixel writes are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A drawing precondition was violated; the operation was skipped and
/// the buffer left unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DrawError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(i32),

    #[error("rectangle dimensions must be positive, got {width}x{height}")]
    EmptyRectangle { width: i32, height: i32 },

    #[error("far corner ({x}, {y}) lies outside the image")]
    CornerOutOfBounds { x: i64, y: i64 },

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}
