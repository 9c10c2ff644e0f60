use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("value {value} at index {index} is not a byte (expected 0..=255)")]
    InvalidByteValue { index: usize, value: i128 },

    #[cfg(feature = "codec")]
    #[error("frame length {len} is outside 2..=256")]
    InvalidFrameLength { len: usize },

    #[cfg(feature = "codec")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
