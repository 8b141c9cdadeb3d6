use alloc::boxed::Box;
use alloc::vec;

use embedded_io::Write;

use crate::error::LpBufError;
use crate::header::{self, HEADER_SIZE};

/// A binary-safe byte string with an embedded length header.
///
/// The whole buffer is one allocation: a 4-byte little-endian length
/// field, the payload, and one trailing zero byte kept only so that
/// text-oriented tooling reading past the payload stops. The payload may
/// contain any byte value, zero included, and the length is an O(1)
/// header read rather than a terminator scan.
///
/// A buffer is immutable after construction and exclusively owned.
/// Dropping it, or calling [`LpBuf::release`], reclaims header, payload
/// and terminator as a single unit.
pub struct LpBuf {
    raw: Box<[u8]>,
}

impl LpBuf {
    /// Creates a buffer holding the first `len` bytes of `source`.
    ///
    /// The bytes are copied into a fresh allocation; `source` is not
    /// mutated. The embedded header is set to `len` and the terminator
    /// byte to zero.
    ///
    /// # Errors
    ///
    /// Returns `LpBufError::LengthTooLarge` if `len` exceeds
    /// [`MAX_PAYLOAD_LEN`](crate::MAX_PAYLOAD_LEN), or
    /// `LpBufError::SourceTooShort` if `source` holds fewer than `len`
    /// bytes.
    #[allow(clippy::indexing_slicing)] // Allocation sized above the writes
    pub fn new(source: &[u8], len: usize) -> Result<Self, LpBufError> {
        let field = header::encode_len(len)?;
        let payload = source.get(..len).ok_or(LpBufError::SourceTooShort {
            requested: len,
            available: source.len(),
        })?;

        let mut raw = vec![0u8; header::image_size(len)];
        raw[..HEADER_SIZE].copy_from_slice(&field);
        raw[HEADER_SIZE..HEADER_SIZE + len].copy_from_slice(payload);
        // raw[HEADER_SIZE + len] stays zero: the display terminator

        Ok(Self {
            raw: raw.into_boxed_slice(),
        })
    }

    /// Creates a buffer from the whole of `data`.
    ///
    /// # Errors
    ///
    /// Returns `LpBufError::LengthTooLarge` if `data` is longer than
    /// [`MAX_PAYLOAD_LEN`](crate::MAX_PAYLOAD_LEN).
    pub fn from_slice(data: &[u8]) -> Result<Self, LpBufError> {
        Self::new(data, data.len())
    }

    /// Decodes a stored image previously produced by [`LpBuf::as_raw`].
    ///
    /// The image must be exactly header + payload + terminator long. The
    /// payload is copied into a fresh canonical allocation, so the
    /// terminator byte of the incoming image is not trusted.
    ///
    /// # Errors
    ///
    /// Returns `LpBufError::TruncatedHeader` if the image is shorter than
    /// the 4-byte header, or `LpBufError::ImageSizeMismatch` if the image
    /// size disagrees with the length its header declares.
    ///
    /// # Panics
    ///
    /// May panic if the size validation is compromised (internal
    /// validation failure).
    #[allow(clippy::expect_used)]
    pub fn from_raw(image: &[u8]) -> Result<Self, LpBufError> {
        if image.len() < HEADER_SIZE {
            return Err(LpBufError::TruncatedHeader {
                available: image.len(),
            });
        }

        let len = header::read_len(image);
        let expected = header::image_size(len);
        if image.len() != expected {
            return Err(LpBufError::ImageSizeMismatch {
                expected,
                actual: image.len(),
            });
        }

        let payload = image
            .get(HEADER_SIZE..HEADER_SIZE + len)
            .expect("Image size validated above");
        Self::new(payload, len)
    }

    /// Number of payload bytes, read from the embedded header.
    ///
    /// O(1): a fixed-offset header lookup, never a payload scan.
    #[must_use]
    pub fn len(&self) -> usize {
        header::read_len(&self.raw)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload: exactly [`len`](LpBuf::len) bytes, terminator
    /// excluded.
    ///
    /// # Panics
    ///
    /// May panic if the embedded header disagrees with the allocation
    /// (internal invariant failure).
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn as_bytes(&self) -> &[u8] {
        self.raw
            .get(HEADER_SIZE..HEADER_SIZE + self.len())
            .expect("Payload extent fixed at construction")
    }

    /// The full stored image: header, payload and terminator, bit-exact.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.raw
    }

    /// Writes the payload verbatim followed by one newline.
    ///
    /// Exactly `len() + 1` bytes reach the sink; embedded zero bytes are
    /// written like any other byte, so the output is never truncated at a
    /// zero.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn write_line<W: Write>(&self, out: &mut W) -> Result<(), W::Error> {
        out.write_all(self.as_bytes())?;
        out.write_all(b"\n")
    }

    /// Releases the buffer, reclaiming header, payload and terminator as
    /// the single allocation they are.
    ///
    /// Consuming `self` makes a second release, or any access after
    /// release, a compile error. Dropping the buffer has the same effect;
    /// `release` exists for call sites that want the reclamation point
    /// explicit.
    pub fn release(self) {
        drop(self);
    }
}

impl core::ops::Deref for LpBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for LpBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for LpBuf {
    type Error = LpBufError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

impl PartialEq for LpBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for LpBuf {}

impl PartialEq<[u8]> for LpBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<LpBuf> for [u8] {
    fn eq(&self, other: &LpBuf) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for LpBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<LpBuf> for &[u8] {
    fn eq(&self, other: &LpBuf) -> bool {
        *self == other.as_bytes()
    }
}

impl core::fmt::Debug for LpBuf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LpBuf")
            .field("len", &self.len())
            .field("payload", &self.as_bytes())
            .finish()
    }
}
