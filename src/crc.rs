use crate::{trace::Trace, value, Result};

/// Reflected form of the CRC-16/MODBUS polynomial (0x8005).
pub const POLY: u16 = crc::CRC_16_MODBUS.poly.reverse_bits();
pub const INIT: u16 = crc::CRC_16_MODBUS.init;

#[inline]
pub(crate) fn update(mut crc: u16, data: &[u8]) -> u16 {
    for &b in data {
        crc ^= b as u16;
        for _ in 0..u8::BITS {
            let carry = crc & 0x0001;
            crc >>= 1;
            if carry != 0 {
                crc ^= POLY;
            }
        }
    }
    crc
}

/// Bit-serial CRC-16/MODBUS: init `0xFFFF`, LSB first, no final XOR.
pub fn checksum(data: &[u8]) -> u16 {
    update(INIT, data)
}

pub fn checksum_traced<T: Trace + ?Sized>(data: &[u8], tracer: &mut T) -> u16 {
    let crc = checksum(data);
    tracer.checksum(crc);
    crc
}

/// Checksum over integers that are supposed to be bytes.
///
/// Fails with [`Error::InvalidByteValue`](crate::Error::InvalidByteValue) on
/// the first element outside `0..=255`; no partial result is returned.
pub fn checksum_values<T>(values: &[T]) -> Result<u16>
where
    T: Copy + Into<i128>,
{
    let mut crc = INIT;
    for (index, &v) in values.iter().enumerate() {
        crc = update(crc, &[value::byte(index, v)?]);
    }
    Ok(crc)
}

/// Lower-case hex with a `0x` prefix and no zero padding, e.g. `0xc0c1`.
pub fn to_hex(crc: u16) -> String {
    format!("{crc:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::collection::vec;
    use proptest::prelude::*;

    const ALGO: ::crc::Crc<u16> = ::crc::Crc::<u16>::new(&::crc::CRC_16_MODBUS);

    #[test]
    fn test_parameters() {
        assert_eq!(POLY, 0xa001);
        assert_eq!(INIT, 0xffff);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(checksum(&[0xff, 0xfe]), 49345);
        assert_eq!(to_hex(checksum(&[0xff, 0xfe])), "0xc0c1");
    }

    #[test]
    fn test_check_string() {
        assert_eq!(checksum(b"123456789"), ::crc::CRC_16_MODBUS.check);
    }

    #[test]
    fn test_modbus_request() {
        // read holding registers, slave 1, start 0, count 10
        let crc = checksum(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0a]);
        assert_eq!(crc.to_le_bytes(), [0xc5, 0xcd]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(checksum(&[]), 0xffff);
        assert_eq!(checksum_values::<i32>(&[]).unwrap(), 0xffff);
    }

    #[test]
    fn test_hex_without_padding() {
        assert_eq!(to_hex(0x00ff), "0xff");
        assert_eq!(to_hex(0), "0x0");
    }

    #[test]
    fn test_values_in_range() {
        assert_eq!(checksum_values(&[255i32, 254]).unwrap(), 0xc0c1);
        assert_eq!(checksum_values(&[0xffu64, 0xfe]).unwrap(), 0xc0c1);
    }

    #[test]
    fn test_values_out_of_range() {
        assert!(matches!(
            checksum_values(&[256i32]),
            Err(Error::InvalidByteValue { index: 0, value: 256 })
        ));
        assert!(matches!(
            checksum_values(&[0i32, -1]),
            Err(Error::InvalidByteValue { index: 1, value: -1 })
        ));
    }

    #[test]
    fn test_traced_reports_value() {
        struct Last(Option<u16>);
        impl Trace for Last {
            fn checksum(&mut self, crc: u16) {
                self.0 = Some(crc);
            }
        }
        let mut last = Last(None);
        assert_eq!(checksum_traced(&[0xff, 0xfe], &mut last), 0xc0c1);
        assert_eq!(last.0, Some(0xc0c1));
    }

    proptest! {
        #[test]
        fn test_matches_table_driven(data in vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(checksum(&data), ALGO.checksum(&data));
        }

        #[test]
        fn test_values_match_bytes(data in vec(any::<u8>(), 0..256)) {
            let wide: Vec<i64> = data.iter().map(|&b| b as i64).collect();
            prop_assert_eq!(checksum_values(&wide).unwrap(), checksum(&data));
        }
    }
}
