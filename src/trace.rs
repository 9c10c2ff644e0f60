//! Diagnostic hooks for checksum computation.
//!
//! Nothing here is global: a tracer is handed to the `*_traced` functions by
//! the caller, and `()` is the silent one.

use log::debug;

use crate::crc::to_hex;

pub trait Trace {
    /// Called with the register value after the last input byte.
    fn checksum(&mut self, _crc: u16) {}

    /// Called with the trailer produced for a payload.
    fn framed(&mut self, _trailer: &[u8]) {}

    /// Called after a packet has been checked.
    fn verified(&mut self, _packet: &[u8], _residue: &[u8], _ok: bool) {}
}

impl Trace for () {}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn checksum(&mut self, crc: u16) {
        (**self).checksum(crc)
    }

    fn framed(&mut self, trailer: &[u8]) {
        (**self).framed(trailer)
    }

    fn verified(&mut self, packet: &[u8], residue: &[u8], ok: bool) {
        (**self).verified(packet, residue, ok)
    }
}

/// Forwards every event to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn checksum(&mut self, crc: u16) {
        debug!("generated crc {} ({})", crc, to_hex(crc));
    }

    fn framed(&mut self, trailer: &[u8]) {
        debug!("crc to send to receiver: {:02x?}", trailer);
    }

    fn verified(&mut self, packet: &[u8], residue: &[u8], ok: bool) {
        if ok {
            debug!("packet {:02x?} -> remainder {:02x?}", packet, residue);
        } else {
            debug!(
                "invalid crc: packet {:02x?} -> remainder {:02x?}",
                packet, residue
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record {
        crcs: Vec<u16>,
        trailers: Vec<Vec<u8>>,
    }

    impl Trace for Record {
        fn checksum(&mut self, crc: u16) {
            self.crcs.push(crc);
        }

        fn framed(&mut self, trailer: &[u8]) {
            self.trailers.push(trailer.to_vec());
        }
    }

    fn feed<T: Trace>(mut tracer: T) {
        tracer.checksum(0xc0c1);
        tracer.framed(&[0xc1, 0xc0]);
    }

    #[test]
    fn test_forward_through_reference() {
        let mut rec = Record::default();
        feed(&mut rec);
        assert_eq!(rec.crcs, vec![0xc0c1]);
        assert_eq!(rec.trailers, vec![vec![0xc1, 0xc0]]);
    }
}
