//! CRC-16/MODBUS checksum with the packet framing used on Modbus serial lines.
//!
//! The checksum is appended low byte first, so running [`checksum`] over a
//! framed packet yields zero. [`verify`] relies on that.
//!
//! ```
//! let packet = crc16_modbus::frame_complete(&[0xff, 0xfe]);
//! assert_eq!(packet, [0xff, 0xfe, 0xc1, 0xc0]);
//! assert!(crc16_modbus::verify(&packet));
//! ```
pub mod crc;
pub mod error;
pub mod frame;
pub mod trace;
pub mod value;
pub mod verify;
#[cfg(feature = "codec")]
pub mod codec;

pub use crate::crc::{checksum, checksum_traced, checksum_values, to_hex};
pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use frame::{frame_complete, frame_complete_with, frame_into};
pub use frame::{appended, frame, frame_traced, frame_with, Appended, Width};
pub use trace::{LogTrace, Trace};
pub use verify::{residue, split, verify, verify_parts, verify_traced};
#[cfg(feature = "codec")]
pub use codec::{Decoded, Decoder, Encoder, MAX_FRAME_LEN};

/// Number of checksum bytes in a fixed-width trailer.
pub const CRC_SIZE: usize = 2;
