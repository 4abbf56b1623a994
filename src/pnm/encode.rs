//! Serialization back to Netpbm bytes.
//!
//! The inverse of decoding: header lines (`magic`, `width height`,
//! `max value` for non-bitmaps) followed by the payload in the image's
//! current encoding. Plain payloads are written one image row per text
//! line with space-separated samples.

use rgb::RGB8;

use super::{magic_token, Encoding, Family};
use crate::buffer::ImageBuffer;
use crate::image::{Image, Samples};

pub(crate) fn encode_image(image: &Image) -> Vec<u8> {
    let (width, height) = image.size();
    let family = image.family();
    let encoding = image.encoding();
    let max = image.max_value();

    let mut out = Vec::with_capacity(payload_estimate(width, height, family, encoding) + 32);
    out.extend_from_slice(magic_token(family, encoding).as_bytes());
    out.push(b'\n');
    out.extend_from_slice(format!("{width} {height}\n").as_bytes());
    if family != Family::Bitmap {
        out.extend_from_slice(format!("{max}\n").as_bytes());
    }

    match (image.samples(), encoding) {
        (Samples::Bitmap(buf), Encoding::Plain) => plain_bits(buf, &mut out),
        (Samples::Bitmap(buf), Encoding::Raw) => raw_bits(buf, &mut out),
        (Samples::Graymap(buf), Encoding::Plain) => plain_gray(buf, max, &mut out),
        (Samples::Graymap(buf), Encoding::Raw) => raw_gray(buf, max, &mut out),
        (Samples::Pixmap(buf), Encoding::Plain) => plain_rgb(buf, max, &mut out),
        (Samples::Pixmap(buf), Encoding::Raw) => raw_rgb(buf, max, &mut out),
    }

    out
}

fn payload_estimate(width: u32, height: u32, family: Family, encoding: Encoding) -> usize {
    let pixels = width as usize * height as usize;
    match encoding {
        // up to four bytes per sample token ("255 ")
        Encoding::Plain => pixels * 4 * family.channels() + height as usize,
        Encoding::Raw => match family {
            Family::Bitmap => (width as usize).div_ceil(8) * height as usize,
            Family::Graymap => pixels,
            Family::Pixmap => pixels * 3,
        },
    }
}

fn rows<T: crate::buffer::Pixel>(buf: &ImageBuffer<T>) -> impl Iterator<Item = &[T]> {
    let w = buf.width() as usize;
    buf.pixels().chunks(w.max(1))
}

fn plain_bits(buf: &ImageBuffer<bool>, out: &mut Vec<u8>) {
    for row in rows(buf) {
        for (x, &bit) in row.iter().enumerate() {
            if x > 0 {
                out.push(b' ');
            }
            out.push(if bit { b'1' } else { b'0' });
        }
        out.push(b'\n');
    }
}

fn raw_bits(buf: &ImageBuffer<bool>, out: &mut Vec<u8>) {
    let row_bytes = (buf.width() as usize).div_ceil(8);
    for row in rows(buf) {
        let mut packed = vec![0u8; row_bytes];
        for (x, &bit) in row.iter().enumerate() {
            if bit {
                packed[x >> 3] |= 1 << (7 - (x & 7));
            }
        }
        out.extend_from_slice(&packed);
    }
}

fn plain_gray(buf: &ImageBuffer<u8>, max: u8, out: &mut Vec<u8>) {
    for row in rows(buf) {
        let mut line = String::with_capacity(row.len() * 4);
        for (x, &v) in row.iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            line.push_str(&v.min(max).to_string());
        }
        line.push('\n');
        out.extend_from_slice(line.as_bytes());
    }
}

fn raw_gray(buf: &ImageBuffer<u8>, max: u8, out: &mut Vec<u8>) {
    for &v in buf.pixels() {
        out.push(v.min(max));
    }
}

fn plain_rgb(buf: &ImageBuffer<RGB8>, max: u8, out: &mut Vec<u8>) {
    for row in rows(buf) {
        let mut line = String::with_capacity(row.len() * 12);
        for (x, &p) in row.iter().enumerate() {
            if x > 0 {
                line.push(' ');
            }
            line.push_str(&p.r.min(max).to_string());
            line.push(' ');
            line.push_str(&p.g.min(max).to_string());
            line.push(' ');
            line.push_str(&p.b.min(max).to_string());
        }
        line.push('\n');
        out.extend_from_slice(line.as_bytes());
    }
}

fn raw_rgb(buf: &ImageBuffer<RGB8>, max: u8, out: &mut Vec<u8>) {
    for &p in buf.pixels() {
        out.push(p.r.min(max));
        out.push(p.g.min(max));
        out.push(p.b.min(max));
    }
}
