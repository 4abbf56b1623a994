use crate::error::NetpbmError;
use crate::pnm::{self, Encoding, Family};

/// Header-level information, probed without decoding the payload.
///
/// `max_value` is reported as parsed (up to 65535) even though full
/// decoding only supports 8-bit depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub family: Family,
    pub encoding: Encoding,
    pub max_value: u16,
}

impl ImageInfo {
    pub fn from_bytes(data: &[u8]) -> Result<Self, NetpbmError> {
        let header = pnm::parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            family: header.family,
            encoding: header.encoding,
            max_value: header.max_value,
        })
    }
}
