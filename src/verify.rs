use crate::{
    crc::{self, checksum},
    frame::{appended, frame, Appended, Width},
    trace::Trace,
    CRC_SIZE,
};

/// Trailer recomputed over a whole packet, checksum bytes included.
pub fn residue(packet: &[u8]) -> Appended {
    frame(packet)
}

fn is_clear(residue: &[u8]) -> bool {
    residue.iter().all(|&b| b == 0)
}

/// `true` iff `packet` (payload followed by its trailer) is intact.
pub fn verify(packet: &[u8]) -> bool {
    is_clear(&residue(packet))
}

pub fn verify_traced<T: Trace + ?Sized>(packet: &[u8], tracer: &mut T) -> bool {
    let rem = residue(packet);
    let ok = is_clear(&rem);
    tracer.verified(packet, &rem, ok);
    ok
}

pub fn verify_parts(payload: &[u8], trailer: &[u8]) -> bool {
    let crc = crc::update(checksum(payload), trailer);
    is_clear(&appended(crc, Width::Compact))
}

/// Splits a packet framed with [`Width::Fixed`] into payload and checksum.
///
/// Compact packets cannot be split: their trailer length is not on the wire.
pub fn split(packet: &[u8]) -> Option<(&[u8], u16)> {
    let at = packet.len().checked_sub(CRC_SIZE)?;
    let (payload, tail) = packet.split_at(at);
    let crc = u16::from_le_bytes([tail[0], tail[1]]);
    (checksum(payload) == crc).then_some((payload, crc))
}
