use thiserror::Error;

/// Error types for `LpBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LpBufError {
    /// Requested payload length cannot be represented in the 4-byte header
    #[error("Length too large: {requested} exceeds header maximum of {max}")]
    LengthTooLarge {
        /// Length that was requested
        requested: usize,
        /// Maximum length the header can store
        max: usize,
    },
    /// Source slice holds fewer bytes than the requested payload length
    #[error("Source too short: requested {requested} bytes, but only {available} bytes available")]
    SourceTooShort {
        /// Number of bytes requested from the source
        requested: usize,
        /// Number of bytes the source actually holds
        available: usize,
    },
    /// Raw image ends before the 4-byte length header is complete
    #[error("Truncated header: need 4 bytes, but only {available} bytes available")]
    TruncatedHeader {
        /// Number of bytes the image actually holds
        available: usize,
    },
    /// Raw image size disagrees with the payload length its header declares
    #[error("Image size mismatch: header implies {expected} total bytes, but image has {actual}")]
    ImageSizeMismatch {
        /// Image size implied by the header (header + payload + terminator)
        expected: usize,
        /// Size of the image that was supplied
        actual: usize,
    },
}
