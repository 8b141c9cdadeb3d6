use crate::error::LpBufError;

/// Size in bytes of the length header that precedes the payload
pub const HEADER_SIZE: usize = 4;

/// Largest payload length the 4-byte header can represent
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// One zero byte kept after the payload so that text-oriented tooling
/// reading past the payload stops at a terminator. Never counted in the
/// length and never part of the payload.
pub(crate) const TERMINATOR_SIZE: usize = 1;

/// Total allocation size for a payload of `len` bytes:
/// header, payload, terminator.
///
/// Saturates at `usize::MAX` instead of wrapping. A saturated size can
/// never equal the length of a real slice, so a header value near the
/// `usize` range compares as a mismatch rather than wrapping into a
/// passing check.
pub(crate) fn image_size(len: usize) -> usize {
    HEADER_SIZE
        .saturating_add(len)
        .saturating_add(TERMINATOR_SIZE)
}

/// Encodes a payload length as the 4-byte little-endian header field.
///
/// # Errors
///
/// Returns `LpBufError::LengthTooLarge` if `len` does not fit in 32 bits.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_len(len: usize) -> Result<[u8; HEADER_SIZE], LpBufError> {
    if len > MAX_PAYLOAD_LEN {
        return Err(LpBufError::LengthTooLarge {
            requested: len,
            max: MAX_PAYLOAD_LEN,
        });
    }
    Ok((len as u32).to_le_bytes())
}

/// Reads the payload length from the header at the start of `raw`.
///
/// Fixed-offset lookup, never a payload scan. `raw` must hold at least
/// `HEADER_SIZE` bytes; every live buffer does.
#[allow(clippy::expect_used)]
pub(crate) fn read_len(raw: &[u8]) -> usize {
    let field = raw
        .get(..HEADER_SIZE)
        .expect("Header bytes present in every live buffer");
    u32::from_le_bytes(field.try_into().expect("Exactly 4 header bytes")) as usize
}
