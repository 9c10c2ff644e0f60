use bytes::{Bytes, BytesMut};

use crate::{
    frame::{frame_with, Width},
    verify::verify,
    Error, CRC_SIZE,
};

pub struct Encoder {
    width: Width,
}

impl Encoder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_width(Width::Fixed)
    }

    pub fn with_width(width: Width) -> Self {
        Self { width }
    }
}

impl<T> tokio_util::codec::Encoder<T> for Encoder
where
    T: AsRef<[u8]>,
{
    type Error = Error;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let bytes = item.as_ref();
        let trailer = frame_with(bytes, self.width);
        dst.reserve(bytes.len() + trailer.len());
        dst.extend_from_slice(bytes);
        dst.extend_from_slice(&trailer);
        Ok(())
    }
}

/// Largest Modbus RTU frame: address, PDU and checksum.
pub const MAX_FRAME_LEN: usize = 256;

/// Cuts the input into frames of a known length, each ending in a two-byte checksum.
pub struct Decoder {
    frame_len: usize,
}

impl Decoder {
    pub fn new(frame_len: usize) -> Result<Self, Error> {
        if !(CRC_SIZE..=MAX_FRAME_LEN).contains(&frame_len) {
            return Err(Error::InvalidFrameLength { len: frame_len });
        }
        Ok(Self { frame_len })
    }
}

impl tokio_util::codec::Decoder for Decoder {
    type Item = Decoded;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < self.frame_len {
            src.reserve(self.frame_len - src.len());
            return Ok(None);
        }
        let mut frame = src.split_to(self.frame_len);
        if verify(&frame) {
            frame.truncate(self.frame_len - CRC_SIZE);
            Ok(Some(Decoded::Frame(frame.freeze())))
        } else {
            Ok(Some(Decoded::Corrupt(frame.freeze())))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Frame(Bytes),
    Corrupt(Bytes),
}
