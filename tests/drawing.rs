use netpbm::*;

fn canvas(w: u32, h: u32) -> ImageBuffer<bool> {
    ImageBuffer::new(w, h)
}

fn painted(buf: &ImageBuffer<bool>) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..buf.height() as i32 {
        for x in 0..buf.width() as i32 {
            if buf.at(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn rectangle_outline_strokes_border_only() {
    let mut buf = canvas(8, 6);
    buf.draw_rectangle(Point::new(1, 1), 5, 4, true).unwrap();

    // corners and edges
    assert!(buf.at(1, 1));
    assert!(buf.at(5, 1));
    assert!(buf.at(1, 4));
    assert!(buf.at(5, 4));
    assert!(buf.at(3, 1));
    assert!(buf.at(1, 3));
    // interior stays clear
    assert!(!buf.at(2, 2));
    assert!(!buf.at(3, 3));
    assert!(!buf.at(4, 2));
}

#[test]
fn filled_rectangle_paints_interior() {
    let mut buf = canvas(8, 6);
    buf.draw_filled_rectangle(Point::new(1, 1), 5, 4, true).unwrap();
    for y in 1..=4 {
        for x in 1..=5 {
            assert!(buf.at(x, y), "({x}, {y}) should be painted");
        }
    }
    assert_eq!(painted(&buf).len(), 20);
}

#[test]
fn rectangle_preconditions_skip_the_operation() {
    let mut buf = canvas(8, 6);
    let before = buf.clone();

    assert_eq!(
        buf.draw_rectangle(Point::new(1, 1), 0, 4, true),
        Err(DrawError::EmptyRectangle { width: 0, height: 4 })
    );
    assert_eq!(
        buf.draw_filled_rectangle(Point::new(1, 1), 3, -2, true),
        Err(DrawError::EmptyRectangle { width: 3, height: -2 })
    );
    // far corner at x = 4 + 5 - 1 = 8, outside an 8-wide buffer
    assert_eq!(
        buf.draw_rectangle(Point::new(4, 1), 5, 2, true),
        Err(DrawError::CornerOutOfBounds { x: 8, y: 2 })
    );
    assert_eq!(buf, before);
}

#[test]
fn circle_has_full_octant_symmetry() {
    let mut buf = canvas(21, 21);
    buf.draw_circle(Point::new(10, 10), 5, true).unwrap();

    let points = painted(&buf);
    assert!(!points.is_empty());
    for &(x, y) in &points {
        let dx = x - 10;
        let dy = y - 10;
        for (mx, my) in [
            (dx, dy),
            (-dx, dy),
            (dx, -dy),
            (-dx, -dy),
            (dy, dx),
            (-dy, dx),
            (dy, -dx),
            (-dy, -dx),
        ] {
            assert!(
                buf.at(10 + mx, 10 + my),
                "missing mirror of ({x}, {y}) at ({}, {})",
                10 + mx,
                10 + my
            );
        }
    }
    // the four axis extremes sit exactly radius away
    for (x, y) in [(15, 10), (5, 10), (10, 15), (10, 5)] {
        assert!(buf.at(x, y));
    }
}

#[test]
fn filled_circle_covers_the_disc() {
    let mut buf = canvas(21, 21);
    buf.draw_filled_circle(Point::new(10, 10), 5, true).unwrap();

    // the midpoint walk stays slightly inside the Euclidean circle at
    // the octant corners, so check a safe interior and the true exterior
    for y in 0..21 {
        for x in 0..21 {
            let dx = x - 10;
            let dy = y - 10;
            let r2 = dx * dx + dy * dy;
            if r2 <= 16 {
                assert!(buf.at(x, y), "interior ({x}, {y}) unpainted");
            }
            if r2 > 25 {
                assert!(!buf.at(x, y), "({x}, {y}) outside the disc painted");
            }
        }
    }
}

#[test]
fn circle_rejects_non_positive_radius() {
    let mut buf = canvas(10, 10);
    let before = buf.clone();
    assert_eq!(
        buf.draw_circle(Point::new(5, 5), 0, true),
        Err(DrawError::NonPositiveRadius(0))
    );
    assert_eq!(
        buf.draw_filled_circle(Point::new(5, 5), -3, true),
        Err(DrawError::NonPositiveRadius(-3))
    );
    assert_eq!(buf, before);
}

#[test]
fn circle_overhanging_the_edge_is_clipped() {
    let mut buf = canvas(8, 8);
    buf.draw_circle(Point::new(0, 0), 5, true).unwrap();
    assert!(buf.at(5, 0));
    assert!(buf.at(0, 5));
}

#[test]
fn triangle_outline_strokes_edges() {
    let mut buf = canvas(10, 10);
    buf.draw_triangle(Point::new(0, 0), Point::new(8, 0), Point::new(0, 8), true);
    assert!(buf.at(0, 0));
    assert!(buf.at(8, 0));
    assert!(buf.at(0, 8));
    assert!(buf.at(4, 0)); // top edge
    assert!(buf.at(0, 4)); // left edge
    assert!(!buf.at(2, 2)); // interior clear
}

#[test]
fn filled_triangle_sweeps_scanlines() {
    let mut buf = canvas(10, 10);
    buf.draw_filled_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), true);

    assert!(buf.at(0, 0));
    assert!(buf.at(4, 0));
    assert!(buf.at(0, 4));
    assert!(buf.at(1, 1));
    assert!(buf.at(3, 1));
    assert!(buf.at(1, 3));
    assert!(!buf.at(4, 4));
    assert!(!buf.at(3, 3));
}

#[test]
fn degenerate_triangle_collapses_to_a_span() {
    let mut buf = canvas(10, 3);
    buf.draw_filled_triangle(Point::new(2, 1), Point::new(7, 1), Point::new(4, 1), true);
    for x in 2..=7 {
        assert!(buf.at(x, 1));
    }
    assert_eq!(painted(&buf).len(), 6);
}

#[test]
fn polygon_outline_closes_the_ring() {
    let mut buf = canvas(12, 12);
    let square = [
        Point::new(2, 2),
        Point::new(9, 2),
        Point::new(9, 9),
        Point::new(2, 9),
    ];
    buf.draw_polygon(&square, true).unwrap();
    assert!(buf.at(5, 2));
    assert!(buf.at(9, 5));
    assert!(buf.at(5, 9));
    assert!(buf.at(2, 5)); // closing edge back to the first vertex
    assert!(!buf.at(5, 5));
}

#[test]
fn filled_polygon_fills_between_scanline_bounds() {
    let mut buf = canvas(12, 12);
    let square = [
        Point::new(2, 2),
        Point::new(9, 2),
        Point::new(9, 9),
        Point::new(2, 9),
    ];
    buf.draw_filled_polygon(&square, true).unwrap();
    for y in 2..=9 {
        for x in 2..=9 {
            assert!(buf.at(x, y), "({x}, {y}) inside the square unpainted");
        }
    }
    assert_eq!(painted(&buf).len(), 64);
}

#[test]
fn filled_polygon_handles_convex_non_rectangles() {
    let mut buf = canvas(16, 16);
    let diamond = [
        Point::new(8, 2),
        Point::new(14, 8),
        Point::new(8, 14),
        Point::new(2, 8),
    ];
    buf.draw_filled_polygon(&diamond, true).unwrap();
    assert!(buf.at(8, 8)); // center
    assert!(buf.at(8, 2)); // apex
    assert!(!buf.at(2, 2)); // outside the diamond
    assert!(!buf.at(14, 14));
}

#[test]
fn polygon_requires_three_vertices() {
    let mut buf = canvas(8, 8);
    let before = buf.clone();
    let two = [Point::new(1, 1), Point::new(5, 5)];
    assert_eq!(buf.draw_polygon(&two, true), Err(DrawError::TooFewVertices(2)));
    assert_eq!(
        buf.draw_filled_polygon(&[], true),
        Err(DrawError::TooFewVertices(0))
    );
    assert_eq!(buf, before);
}

#[test]
fn polygon_overhanging_the_buffer_is_clipped() {
    let mut buf = canvas(8, 8);
    let big = [
        Point::new(-4, -4),
        Point::new(12, -4),
        Point::new(12, 12),
        Point::new(-4, 12),
    ];
    buf.draw_filled_polygon(&big, true).unwrap();
    // every visible pixel is inside the polygon
    assert_eq!(painted(&buf).len(), 64);
}

#[test]
fn koch_depth_zero_is_a_straight_segment() {
    let mut buf = canvas(12, 3);
    buf.draw_koch_snowflake(0, Point::new(1, 1), 9, true);
    for x in 1..=10 {
        assert!(buf.at(x, 1));
    }
    assert_eq!(painted(&buf).len(), 10);
}

#[test]
fn koch_recursion_adds_the_apex_row() {
    let mut buf = canvas(20, 20);
    buf.draw_koch_snowflake(1, Point::new(0, 10), 9, true);
    // children of a length-9 edge sit a third (3 pixels) apart, with the
    // apex pair lifted by floor(3 * sqrt(3)) = 5 rows
    assert!(buf.at(0, 10));
    assert!(buf.at(4, 15));
    assert!(painted(&buf).len() > 10);
}

#[test]
fn sierpinski_depth_zero_strokes_a_triangle() {
    let mut buf = canvas(24, 24);
    buf.draw_sierpinski_triangle(0, Point::new(2, 20), 16, true);
    assert!(buf.at(2, 20)); // bottom-left vertex
    assert!(buf.at(18, 20)); // bottom-right vertex
    assert!(buf.at(10, 7)); // apex: 20 - floor(16 * sqrt(3) / 2) = 7
}

#[test]
fn sierpinski_recursion_terminates_and_draws() {
    let mut buf = canvas(64, 64);
    buf.draw_sierpinski_triangle(3, Point::new(2, 60), 48, true);
    assert!(!painted(&buf).is_empty());
}

#[test]
fn noise_fill_is_deterministic_per_seed() {
    let mut a = ImageBuffer::<u8>::new(16, 16);
    let mut b = ImageBuffer::<u8>::new(16, 16);
    a.fill_noise(&Perlin::new(42), 0, 255);
    b.fill_noise(&Perlin::new(42), 0, 255);
    assert_eq!(a, b);

    let mut c = ImageBuffer::<u8>::new(16, 16);
    c.fill_noise(&Perlin::new(43), 0, 255);
    assert_ne!(a, c);
}

#[test]
fn noise_fill_interpolates_between_the_two_colors() {
    let from = RGB8 { r: 10, g: 20, b: 30 };
    let to = RGB8 { r: 200, g: 180, b: 160 };
    let mut buf = ImageBuffer::<RGB8>::new(24, 24);
    buf.fill_noise(&Perlin::default(), from, to);
    for &p in buf.pixels() {
        assert!(p.r >= 10 && p.r <= 200);
        assert!(p.g >= 20 && p.g <= 180);
        assert!(p.b >= 30 && p.b <= 160);
    }
}

#[test]
fn drawing_works_on_every_sample_family() {
    let mut image = Image::new_pixmap(16, 16);
    let red = RGB8 { r: 255, g: 0, b: 0 };
    image
        .as_pixmap_mut()
        .unwrap()
        .draw_filled_circle(Point::new(8, 8), 4, red)
        .unwrap();
    assert_eq!(image.as_pixmap().unwrap().at(8, 8), red);

    let mut image = Image::new_graymap(16, 16);
    image
        .as_graymap_mut()
        .unwrap()
        .draw_rectangle(Point::new(2, 2), 10, 10, 128)
        .unwrap();
    assert_eq!(image.as_graymap().unwrap().at(2, 2), 128);
}
