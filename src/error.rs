use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    /// The bit cursor did not land exactly on the end of the input when the
    /// end-of-stream sentinel was read.
    #[error("LZSS data is invalid or the LZSS parameters are wrong")]
    InvalidStream,
}
