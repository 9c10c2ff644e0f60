use crate::{crc::checksum, trace::Trace, CRC_SIZE};

/// Checksum bytes to append to a payload, low byte first.
pub type Appended = heapless::Vec<u8, CRC_SIZE>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// One byte when the checksum is `<= 0xFF`, otherwise two.
    #[default]
    Compact,
    /// Always two bytes, the high byte zero-padded.
    Fixed,
}

impl Width {
    pub fn trailer_len(self, crc: u16) -> usize {
        match self {
            Width::Compact if crc <= 0xff => 1,
            _ => CRC_SIZE,
        }
    }
}

pub fn appended(crc: u16, width: Width) -> Appended {
    let bytes = crc.to_le_bytes();
    Appended::from_slice(&bytes[..width.trailer_len(crc)]).expect("never panic")
}

/// Trailer for `payload`: `[lsb, msb]`, or `[crc]` when the checksum fits one byte.
pub fn frame(payload: &[u8]) -> Appended {
    frame_with(payload, Width::Compact)
}

pub fn frame_with(payload: &[u8], width: Width) -> Appended {
    appended(checksum(payload), width)
}

pub fn frame_traced<T: Trace + ?Sized>(
    payload: &[u8],
    width: Width,
    tracer: &mut T,
) -> Appended {
    let crc = checksum(payload);
    tracer.checksum(crc);
    let trailer = appended(crc, width);
    tracer.framed(&trailer);
    trailer
}

#[cfg(feature = "alloc")]
pub fn frame_complete(payload: &[u8]) -> Vec<u8> {
    frame_complete_with(payload, Width::Compact)
}

#[cfg(feature = "alloc")]
pub fn frame_complete_with(payload: &[u8], width: Width) -> Vec<u8> {
    let mut packet = Vec::with_capacity(payload.len() + CRC_SIZE);
    frame_into(payload, width, &mut packet);
    packet
}

#[cfg(feature = "alloc")]
pub fn frame_into(payload: &[u8], width: Width, dst: &mut Vec<u8>) {
    dst.extend_from_slice(payload);
    dst.extend_from_slice(&frame_with(payload, width));
}
