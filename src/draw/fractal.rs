//! Recursive fractal generators.
//!
//! Plain recursion bounded by the caller-supplied depth; side effects
//! go only through pixel writes, so partially off-screen constructions
//! clip cleanly.

use super::Point;
use crate::buffer::{ImageBuffer, Pixel};

impl<T: Pixel> ImageBuffer<T> {
    /// Koch snowflake edge: at depth 0 a horizontal segment of `length`
    /// pixels starting at `start`; otherwise six child edges of a third
    /// the length, two of them lifted to the apex row at
    /// `start.y + third * sqrt(3)`.
    pub fn draw_koch_snowflake(&mut self, depth: u32, start: Point, length: i32, value: T) {
        if depth == 0 {
            let end = Point::new(start.x.saturating_add(length), start.y);
            self.draw_line(start, end, value);
            return;
        }
        let third = length / 3;
        let rise = (f64::from(third) * 3.0_f64.sqrt()) as i32;
        let children = [
            start,
            Point::new(start.x + third, start.y),
            Point::new(start.x + third, start.y + rise),
            Point::new(start.x + 2 * third, start.y + rise),
            Point::new(start.x + 2 * third, start.y),
            Point::new(start.x + 3 * third, start.y),
        ];
        for child in children {
            self.draw_koch_snowflake(depth - 1, child, third, value);
        }
    }

    /// Sierpinski triangle: at depth 0 a stroked upward equilateral
    /// triangle with base `width` starting at the bottom-left vertex
    /// `start`; otherwise three half-size children at the bottom-left,
    /// bottom-middle, and apex-midpoint positions.
    pub fn draw_sierpinski_triangle(&mut self, depth: u32, start: Point, width: i32, value: T) {
        if depth == 0 {
            let p1 = start;
            let p2 = Point::new(start.x + width, start.y);
            let p3 = Point::new(start.x + width / 2, start.y - apex_rise(width));
            self.draw_triangle(p1, p2, p3, value);
            return;
        }
        let half = width / 2;
        let top = Point::new(start.x + half / 2, start.y - apex_rise(half));
        self.draw_sierpinski_triangle(depth - 1, start, half, value);
        self.draw_sierpinski_triangle(depth - 1, top, half, value);
        self.draw_sierpinski_triangle(depth - 1, Point::new(start.x + half, start.y), half, value);
    }
}

/// Height of an upward equilateral triangle over a base of `width`.
fn apex_rise(width: i32) -> i32 {
    (f64::from(width) * 3.0_f64.sqrt() / 2.0) as i32
}
