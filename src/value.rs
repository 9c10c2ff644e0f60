//! Boundary between arbitrary integers and bytes.
//!
//! Inside the crate every payload is `&[u8]`. Callers holding wider integers
//! go through here and get [`Error::InvalidByteValue`] instead of a silent
//! truncation.

use crate::{Error, Result};

pub fn byte<T>(index: usize, value: T) -> Result<u8>
where
    T: Into<i128>,
{
    let value = value.into();
    u8::try_from(value).map_err(|_| Error::InvalidByteValue { index, value })
}

#[cfg(feature = "alloc")]
pub fn to_bytes<T>(values: &[T]) -> Result<Vec<u8>>
where
    T: Copy + Into<i128>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| byte(index, v))
        .collect()
}
