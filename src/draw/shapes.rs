//! Outline and filled primitives: rectangles, circles, triangles,
//! polygons.
//!
//! Outline variants stroke borders only. The circle pair shares one
//! integer midpoint state machine; the filled polygon builds a
//! per-scanline bound table from the same line stepper the outline
//! variants use.

use super::{walk_line, DrawError, Point};
use crate::buffer::{ImageBuffer, Pixel};

impl<T: Pixel> ImageBuffer<T> {
    fn validate_rect(
        &self,
        corner: Point,
        width: i32,
        height: i32,
    ) -> Result<(i32, i32, i32, i32), DrawError> {
        if width <= 0 || height <= 0 {
            return Err(DrawError::EmptyRectangle { width, height });
        }
        let x2 = i64::from(corner.x) + i64::from(width) - 1;
        let y2 = i64::from(corner.y) + i64::from(height) - 1;
        if x2 >= i64::from(self.width()) || y2 >= i64::from(self.height()) {
            return Err(DrawError::CornerOutOfBounds { x: x2, y: y2 });
        }
        Ok((corner.x, corner.y, x2 as i32, y2 as i32))
    }

    /// Stroke the border of an axis-aligned rectangle with top-left
    /// `corner` and the given dimensions.
    pub fn draw_rectangle(
        &mut self,
        corner: Point,
        width: i32,
        height: i32,
        value: T,
    ) -> Result<(), DrawError> {
        let (x1, y1, x2, y2) = self.validate_rect(corner, width, height)?;
        for x in x1..=x2 {
            self.set(x, y1, value);
            self.set(x, y2, value);
        }
        for y in y1..=y2 {
            self.set(x1, y, value);
            self.set(x2, y, value);
        }
        Ok(())
    }

    /// Paint every pixel of an axis-aligned rectangle.
    pub fn draw_filled_rectangle(
        &mut self,
        corner: Point,
        width: i32,
        height: i32,
        value: T,
    ) -> Result<(), DrawError> {
        let (x1, y1, x2, y2) = self.validate_rect(corner, width, height)?;
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set(x, y, value);
            }
        }
        Ok(())
    }

    /// Stroke a circle with the integer midpoint algorithm, plotting
    /// eight symmetric octant points per step.
    pub fn draw_circle(&mut self, center: Point, radius: i32, value: T) -> Result<(), DrawError> {
        if radius <= 0 {
            return Err(DrawError::NonPositiveRadius(radius));
        }
        let (x0, y0) = (center.x, center.y);
        let mut x = radius;
        let mut y = 0;
        let mut err = 0i32;
        while x >= y {
            self.set(x0 + x, y0 - y, value);
            self.set(x0 + y, y0 - x, value);
            self.set(x0 - y, y0 - x, value);
            self.set(x0 - x, y0 - y, value);
            self.set(x0 - x, y0 + y, value);
            self.set(x0 - y, y0 + x, value);
            self.set(x0 + y, y0 + x, value);
            self.set(x0 + x, y0 + y, value);

            if err <= 0 {
                y += 1;
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
        Ok(())
    }

    /// Fill a disc: the same midpoint state machine, painting the
    /// horizontal span between each pair of symmetric octant points.
    pub fn draw_filled_circle(
        &mut self,
        center: Point,
        radius: i32,
        value: T,
    ) -> Result<(), DrawError> {
        if radius <= 0 {
            return Err(DrawError::NonPositiveRadius(radius));
        }
        let (x0, y0) = (center.x, center.y);
        let mut x = radius;
        let mut y = 0;
        let mut err = 0i32;
        while x >= y {
            for i in x0.saturating_sub(x)..=x0.saturating_add(x) {
                self.set(i, y0 + y, value);
                self.set(i, y0 - y, value);
            }
            for i in x0.saturating_sub(y)..=x0.saturating_add(y) {
                self.set(i, y0 + x, value);
                self.set(i, y0 - x, value);
            }

            if err <= 0 {
                y += 1;
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
        Ok(())
    }

    /// Stroke the three edges of a triangle.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, value: T) {
        self.draw_line(p1, p2, value);
        self.draw_line(p2, p3, value);
        self.draw_line(p3, p1, value);
    }

    /// Fill a triangle by sweeping scanlines from the top vertex to the
    /// bottom one, interpolating the left and right bounds along the
    /// governing edge pair and switching pairs at the middle vertex.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, value: T) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [top, mid, bot] = v;

        if top.y == bot.y {
            // degenerate: all three vertices on one scanline
            let lo = top.x.min(mid.x).min(bot.x);
            let hi = top.x.max(mid.x).max(bot.x);
            for x in lo..=hi {
                self.set(x, top.y, value);
            }
            return;
        }

        for y in top.y..=bot.y {
            let xa = edge_x(top, bot, y);
            let xb = if y < mid.y {
                edge_x(top, mid, y)
            } else {
                edge_x(mid, bot, y)
            };
            for x in xa.min(xb)..=xa.max(xb) {
                self.set(x, y, value);
            }
        }
    }

    /// Stroke every polygon edge, including the closing edge from the
    /// last vertex back to the first.
    pub fn draw_polygon(&mut self, points: &[Point], value: T) -> Result<(), DrawError> {
        if points.len() < 3 {
            return Err(DrawError::TooFewVertices(points.len()));
        }
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            self.draw_line(points[i], next, value);
        }
        Ok(())
    }

    /// Fill a polygon with a per-scanline bound table: every edge is
    /// rasterized with the line stepper, tightening each touched row's
    /// left and right bound, then each row is painted between its
    /// bounds. The table covers only the rows that intersect the buffer.
    pub fn draw_filled_polygon(&mut self, points: &[Point], value: T) -> Result<(), DrawError> {
        if points.len() < 3 {
            return Err(DrawError::TooFewVertices(points.len()));
        }

        let mut min_y = points[0].y;
        let mut max_y = points[0].y;
        for p in &points[1..] {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let y_lo = min_y.max(0);
        let y_hi = i64::from(max_y).min(i64::from(self.height()) - 1) as i32;
        if y_lo > y_hi {
            return Ok(());
        }

        let rows = (y_hi - y_lo) as usize + 1;
        let mut left = vec![i32::MAX; rows];
        let mut right = vec![i32::MIN; rows];

        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            walk_line(points[i], next, |x, y| {
                if y >= y_lo && y <= y_hi {
                    let r = (y - y_lo) as usize;
                    left[r] = left[r].min(x);
                    right[r] = right[r].max(x);
                }
            });
        }

        let last_col = i64::from(self.width()) - 1;
        for (r, y) in (y_lo..=y_hi).enumerate() {
            // untouched rows keep left > right and paint nothing
            let lo = left[r].max(0);
            let hi = i64::from(right[r]).min(last_col) as i32;
            for x in lo..=hi {
                self.set(x, y, value);
            }
        }
        Ok(())
    }
}

/// X coordinate of the edge `p..q` at scanline `y`, by linear
/// interpolation; horizontal edges answer with their start endpoint.
fn edge_x(p: Point, q: Point, y: i32) -> i32 {
    if p.y == q.y {
        return p.x;
    }
    let t = f64::from(y - p.y) / f64::from(q.y - p.y);
    (f64::from(p.x) + t * f64::from(q.x - p.x)).round() as i32
}
