use netpbm::*;

fn gray(w: u32, h: u32) -> ImageBuffer<u8> {
    let mut buf = ImageBuffer::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            buf.set(x, y, (x * 13 + y * 41 + 7) as u8);
        }
    }
    buf
}

#[test]
fn invert_is_an_involution() {
    let original = gray(7, 5);
    let mut buf = original.clone();
    buf.invert(255);
    assert_ne!(buf, original);
    buf.invert(255);
    assert_eq!(buf, original);

    let mut image = Image::decode(b"P1\n2 2\n1 0\n0 1\n").unwrap();
    let original = image.clone();
    image.invert();
    image.invert();
    assert_eq!(image, original);
}

#[test]
fn invert_uses_the_image_max_value() {
    let mut image = Image::new_graymap(2, 1);
    image.set_max_value(100);
    let buf = image.as_graymap_mut().unwrap();
    buf.set(0, 0, 30);
    buf.set(1, 0, 100);
    image.invert();
    let buf = image.as_graymap().unwrap();
    assert_eq!(buf.at(0, 0), 70);
    assert_eq!(buf.at(1, 0), 0);
}

#[test]
fn flips_are_involutions() {
    for (w, h) in [(6, 4), (5, 3), (1, 1), (0, 0)] {
        let original = gray(w, h);

        let mut buf = original.clone();
        buf.flip_horizontal();
        buf.flip_horizontal();
        assert_eq!(buf, original, "flip_horizontal twice on {w}x{h}");

        let mut buf = original.clone();
        buf.flip_vertical();
        buf.flip_vertical();
        assert_eq!(buf, original, "flip_vertical twice on {w}x{h}");
    }
}

#[test]
fn flip_horizontal_reverses_rows() {
    let buf = ImageBuffer::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]);
    let mut flipped = buf.clone();
    flipped.flip_horizontal();
    assert_eq!(flipped.pixels(), &[3, 2, 1, 6, 5, 4]);
}

#[test]
fn flip_vertical_reverses_row_order() {
    let buf = ImageBuffer::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]);
    let mut flipped = buf.clone();
    flipped.flip_vertical();
    assert_eq!(flipped.pixels(), &[4, 5, 6, 1, 2, 3]);
}

#[test]
fn four_quarter_turns_restore_the_image() {
    let original = gray(6, 3);
    let mut buf = original.clone();
    for turn in 1..=4 {
        buf.rotate90_cw();
        let expected = if turn % 2 == 1 { (3, 6) } else { (6, 3) };
        assert_eq!(buf.size(), expected);
    }
    assert_eq!(buf, original);
}

#[test]
fn rotate_moves_top_row_to_right_column() {
    let buf = ImageBuffer::from_vec(2, 2, vec![1u8, 2, 3, 4]);
    let mut rotated = buf.clone();
    rotated.rotate90_cw();
    // [1 2]      [3 1]
    // [3 4]  ->  [4 2]
    assert_eq!(rotated.pixels(), &[3, 1, 4, 2]);
}

#[test]
fn resample_shrinks_all_black_to_all_black() {
    let mut image = Image::new_pixmap(4, 4);
    image.resample_nearest(2, 2);
    assert_eq!(image.size(), (2, 2));
    let black = RGB8 { r: 0, g: 0, b: 0 };
    assert!(image.as_pixmap().unwrap().pixels().iter().all(|&p| p == black));
}

#[test]
fn resample_upscale_replicates_neighbors() {
    let buf = ImageBuffer::from_vec(2, 1, vec![10u8, 200]);
    let mut scaled = buf.clone();
    scaled.resample_nearest(4, 2);
    assert_eq!(scaled.size(), (4, 2));
    assert_eq!(scaled.pixels(), &[10, 10, 200, 200, 10, 10, 200, 200]);
}

#[test]
fn resample_identity_preserves_pixels() {
    let original = gray(5, 4);
    let mut buf = original.clone();
    buf.resample_nearest(5, 4);
    assert_eq!(buf, original);
}

#[test]
fn out_of_range_reads_yield_defaults() {
    let gray = gray(3, 3);
    assert_eq!(gray.at(-1, 1), 0);
    assert_eq!(gray.at(3, 1), 0);

    let bits = ImageBuffer::<bool>::new(2, 2);
    assert!(!bits.at(5, 5));

    let rgbs = ImageBuffer::<RGB8>::new(2, 2);
    assert_eq!(rgbs.at(-3, 0), RGB8 { r: 0, g: 0, b: 0 });
}

#[test]
fn out_of_range_writes_change_nothing() {
    let mut buf = gray(3, 3);
    let before = buf.clone();
    buf.set(-1, 0, 99);
    buf.set(0, -1, 99);
    buf.set(3, 0, 99);
    buf.set(0, 3, 99);
    assert_eq!(buf, before);
}

#[test]
fn pixmap_to_graymap_uses_luma_weights() {
    let mut image = Image::new_pixmap(3, 1);
    let buf = image.as_pixmap_mut().unwrap();
    buf.set(0, 0, RGB8 { r: 255, g: 0, b: 0 });
    buf.set(1, 0, RGB8 { r: 0, g: 255, b: 0 });
    buf.set(2, 0, RGB8 { r: 0, g: 0, b: 255 });

    let gray = image.to_graymap();
    assert_eq!(gray.family(), Family::Graymap);
    assert_eq!(gray.max_value(), 255);
    assert_eq!(gray.as_graymap().unwrap().pixels(), &[76, 150, 29]);
}

#[test]
fn threshold_conversion_is_inclusive() {
    let mut image = Image::new_graymap(3, 1);
    let buf = image.as_graymap_mut().unwrap();
    buf.set(0, 0, 127);
    buf.set(1, 0, 128);
    buf.set(2, 0, 129);

    let bits = image.to_bitmap(128);
    assert_eq!(bits.family(), Family::Bitmap);
    assert_eq!(bits.as_bitmap().unwrap().pixels(), &[false, true, true]);
}

#[test]
fn pixmap_to_bitmap_thresholds_luma() {
    let mut image = Image::new_pixmap(2, 1);
    let buf = image.as_pixmap_mut().unwrap();
    buf.set(0, 0, RGB8 { r: 255, g: 0, b: 0 }); // luma 76
    buf.set(1, 0, RGB8 { r: 0, g: 255, b: 0 }); // luma 150

    let bits = image.to_bitmap(100);
    assert_eq!(bits.as_bitmap().unwrap().pixels(), &[false, true]);
}
