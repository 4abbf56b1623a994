//! Digital line stepping.
//!
//! Bresenham's algorithm over all octants. Both endpoints are plotted;
//! for the shallow octants the stepper emits exactly one pixel per
//! column (one per row in the steep octants). Polygon filling reuses
//! the same stepper so stroked and filled edges always agree.

use super::Point;
use crate::buffer::{ImageBuffer, Pixel};

/// Visit every pixel of the segment `from..=to`.
pub(crate) fn walk_line(from: Point, to: Point, mut plot: impl FnMut(i32, i32)) {
    let x1 = i64::from(to.x);
    let y1 = i64::from(to.y);
    let mut x = i64::from(from.x);
    let mut y = i64::from(from.y);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx: i64 = if x < x1 { 1 } else { -1 };
    let sy: i64 = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x as i32, y as i32);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

impl<T: Pixel> ImageBuffer<T> {
    /// Draw a straight segment between two points, endpoints included.
    pub fn draw_line(&mut self, from: Point, to: Point, value: T) {
        walk_line(from, to, |x, y| self.set(x, y, value));
    }
}
