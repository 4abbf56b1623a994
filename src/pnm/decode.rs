//! Header parsing and payload decoding.

use log::debug;
use rgb::RGB8;

use super::{magic_token, parse_magic, Encoding, Family, Header};
use crate::buffer::ImageBuffer;
use crate::error::NetpbmError;
use crate::image::{Image, Samples};
use crate::limits::Limits;

/// Byte cursor over the input. Header parsing must leave `pos` exactly at
/// the first payload byte; raw variants depend on it.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skip whitespace and `#`-to-end-of-line comments.
    fn skip_filler(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.bump();
            } else if b == b'#' {
                while let Some(b) = self.peek() {
                    self.bump();
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next whitespace-delimited token, skipping filler first.
    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_filler();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
        let data = self.data;
        if self.pos == start {
            None
        } else {
            Some(&data[start..self.pos])
        }
    }

    /// Header integer: missing or malformed tokens are header errors.
    fn header_uint(&mut self, what: &str) -> Result<u64, NetpbmError> {
        let token = self
            .token()
            .ok_or_else(|| NetpbmError::InvalidHeader(format!("missing {what}")))?;
        parse_decimal(token)
            .ok_or_else(|| NetpbmError::InvalidHeader(format!("malformed {what} token")))
    }
}

fn parse_decimal(token: &[u8]) -> Option<u64> {
    if token.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for &b in token {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(b - b'0'))?;
    }
    Some(value)
}

/// Parse magic, comments, dimensions and (for non-bitmaps) the max value.
///
/// On success the returned `data_offset` points at the first payload
/// byte: exactly one whitespace byte after the final header token has
/// been consumed.
pub(crate) fn parse_header(data: &[u8]) -> Result<Header, NetpbmError> {
    let mut cur = Cursor::new(data);

    let magic = cur.token().ok_or(NetpbmError::UnrecognizedFormat)?;
    let (family, encoding) = parse_magic(magic).ok_or(NetpbmError::UnrecognizedFormat)?;

    let width = dimension(cur.header_uint("width")?, "width")?;
    let height = dimension(cur.header_uint("height")?, "height")?;

    let max_value = match family {
        Family::Bitmap => 1,
        Family::Graymap | Family::Pixmap => {
            let raw = cur.header_uint("max value")?;
            if raw == 0 {
                return Err(NetpbmError::InvalidHeader(
                    "max value must be positive".into(),
                ));
            }
            if raw > 65535 {
                return Err(NetpbmError::InvalidHeader(format!(
                    "max value {raw} exceeds 65535"
                )));
            }
            raw as u16
        }
    };

    // Single whitespace separator before the payload.
    if let Some(b) = cur.peek() {
        if b.is_ascii_whitespace() {
            cur.bump();
        }
    }

    Ok(Header {
        family,
        encoding,
        width,
        height,
        max_value,
        data_offset: cur.pos,
    })
}

fn dimension(value: u64, what: &str) -> Result<u32, NetpbmError> {
    u32::try_from(value)
        .map_err(|_| NetpbmError::InvalidHeader(format!("{what} {value} out of range")))
}

/// Decode a Netpbm byte stream into an owned [`Image`].
pub fn decode(data: &[u8]) -> Result<Image, NetpbmError> {
    decode_inner(data, None)
}

/// Decode with [`Limits`] checked after the header parse, before any
/// payload allocation.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, NetpbmError> {
    decode_inner(data, Some(limits))
}

fn decode_inner(data: &[u8], limits: Option<&Limits>) -> Result<Image, NetpbmError> {
    let header = parse_header(data)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    if header.max_value > 255 {
        return Err(NetpbmError::UnsupportedVariant(format!(
            "max value {} requires 16-bit samples",
            header.max_value
        )));
    }

    let w = header.width as usize;
    let h = header.height as usize;
    w.checked_mul(h)
        .and_then(|wh| wh.checked_mul(header.family.channels()))
        .ok_or(NetpbmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;

    debug!(
        "decoding {} {}x{} max {}",
        magic_token(header.family, header.encoding),
        header.width,
        header.height,
        header.max_value
    );

    let payload = &data[header.data_offset..];
    let max = header.max_value as u8;

    let samples = match (header.family, header.encoding) {
        (Family::Bitmap, Encoding::Plain) => {
            Samples::Bitmap(decode_plain_bits(payload, header.width, header.height)?)
        }
        (Family::Bitmap, Encoding::Raw) => {
            Samples::Bitmap(decode_raw_bits(payload, header.width, header.height)?)
        }
        (Family::Graymap, Encoding::Plain) => {
            Samples::Graymap(decode_plain_gray(payload, header.width, header.height, max)?)
        }
        (Family::Graymap, Encoding::Raw) => {
            Samples::Graymap(decode_raw_gray(payload, header.width, header.height, max)?)
        }
        (Family::Pixmap, Encoding::Plain) => {
            Samples::Pixmap(decode_plain_rgb(payload, header.width, header.height, max)?)
        }
        (Family::Pixmap, Encoding::Raw) => {
            Samples::Pixmap(decode_raw_rgb(payload, header.width, header.height, max)?)
        }
    };

    Ok(Image::from_parts(samples, header.encoding, max))
}

fn decode_plain_bits(
    payload: &[u8],
    width: u32,
    height: u32,
) -> Result<ImageBuffer<bool>, NetpbmError> {
    let count = width as usize * height as usize;
    let mut cur = Cursor::new(payload);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let token = cur.token().ok_or(NetpbmError::UnexpectedEof)?;
        match token {
            b"0" => out.push(false),
            b"1" => out.push(true),
            other => {
                return Err(NetpbmError::InvalidData(format!(
                    "expected bit token 0 or 1, got {:?}",
                    String::from_utf8_lossy(other)
                )));
            }
        }
    }
    Ok(ImageBuffer::from_vec(width, height, out))
}

/// One decimal sample token in `[0, max]`.
fn plain_sample(cur: &mut Cursor<'_>, max: u8) -> Result<u8, NetpbmError> {
    let token = cur.token().ok_or(NetpbmError::UnexpectedEof)?;
    let value = parse_decimal(token).ok_or_else(|| {
        NetpbmError::InvalidData(format!(
            "malformed sample token {:?}",
            String::from_utf8_lossy(token)
        ))
    })?;
    if value > u64::from(max) {
        return Err(NetpbmError::InvalidData(format!(
            "sample {value} exceeds max value {max}"
        )));
    }
    Ok(value as u8)
}

fn decode_plain_gray(
    payload: &[u8],
    width: u32,
    height: u32,
    max: u8,
) -> Result<ImageBuffer<u8>, NetpbmError> {
    let count = width as usize * height as usize;
    let mut cur = Cursor::new(payload);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(plain_sample(&mut cur, max)?);
    }
    Ok(ImageBuffer::from_vec(width, height, out))
}

fn decode_plain_rgb(
    payload: &[u8],
    width: u32,
    height: u32,
    max: u8,
) -> Result<ImageBuffer<RGB8>, NetpbmError> {
    let count = width as usize * height as usize;
    let mut cur = Cursor::new(payload);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let r = plain_sample(&mut cur, max)?;
        let g = plain_sample(&mut cur, max)?;
        let b = plain_sample(&mut cur, max)?;
        out.push(RGB8 { r, g, b });
    }
    Ok(ImageBuffer::from_vec(width, height, out))
}

fn decode_raw_bits(
    payload: &[u8],
    width: u32,
    height: u32,
) -> Result<ImageBuffer<bool>, NetpbmError> {
    let w = width as usize;
    let h = height as usize;
    let row_bytes = w.div_ceil(8);
    let needed = row_bytes
        .checked_mul(h)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })?;
    if payload.len() < needed {
        return Err(NetpbmError::UnexpectedEof);
    }
    let mut out = Vec::with_capacity(w * h);
    // chunk size of max(1) keeps chunks_exact happy for zero-width images,
    // where needed == 0 and the loop body never runs
    for row in payload[..needed].chunks_exact(row_bytes.max(1)) {
        for x in 0..w {
            let bit = (row[x >> 3] >> (7 - (x & 7))) & 1;
            out.push(bit != 0);
        }
    }
    Ok(ImageBuffer::from_vec(width, height, out))
}

fn decode_raw_gray(
    payload: &[u8],
    width: u32,
    height: u32,
    max: u8,
) -> Result<ImageBuffer<u8>, NetpbmError> {
    let needed = width as usize * height as usize;
    if payload.len() < needed {
        return Err(NetpbmError::UnexpectedEof);
    }
    // samples above the declared max are clamped so every decoded image
    // re-encodes to itself
    let mut samples = payload[..needed].to_vec();
    if max < 255 {
        for v in &mut samples {
            *v = (*v).min(max);
        }
    }
    Ok(ImageBuffer::from_vec(width, height, samples))
}

fn decode_raw_rgb(
    payload: &[u8],
    width: u32,
    height: u32,
    max: u8,
) -> Result<ImageBuffer<RGB8>, NetpbmError> {
    let count = width as usize * height as usize;
    let needed = count * 3;
    if payload.len() < needed {
        return Err(NetpbmError::UnexpectedEof);
    }
    let out = payload[..needed]
        .chunks_exact(3)
        .map(|c| RGB8 {
            r: c[0].min(max),
            g: c[1].min(max),
            b: c[2].min(max),
        })
        .collect();
    Ok(ImageBuffer::from_vec(width, height, out))
}
