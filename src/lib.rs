#![no_std]

//! `LpBuf`: a length-prefixed, binary-safe byte buffer.
//!
//! A `LpBuf` stores a byte payload behind an explicit length header, in
//! one combined allocation:
//!
//! ```text
//! +----+--------------\\\+---+
//! |LLLL| payload bytes   | 0 |
//! +----+--------------\\\+---+
//! ```
//!
//! `L` is the payload length as four little-endian bytes. Because the
//! length is stored rather than inferred from a sentinel, the payload may
//! contain any byte value, zero included, and the length lookup is an
//! O(1) fixed-offset header read instead of a scan. The single zero byte
//! after the payload exists so that text-oriented tooling reading past
//! the payload stops at a terminator; it is never counted in the length
//! and never delimits the payload.
//!
//! # Performance Characteristics
//!
//! - `new()`, `from_slice()`: O(n) - one allocation, one payload copy
//! - `len()`: O(1) - fixed-offset header read, independent of payload size
//! - `as_bytes()`, `as_raw()`: O(1) - borrowed views, no copy
//! - `release()` / drop: O(1) - frees the single combined allocation
//!
//! Memory overhead per buffer: 5 bytes (the 4-byte header plus the
//! trailing terminator byte).
//!
//! # Ownership
//!
//! A buffer owns its storage exclusively and is immutable for its whole
//! life. Header, payload and terminator are allocated together and
//! reclaimed together, either when the buffer is dropped or through the
//! explicit [`LpBuf::release`]. Releasing consumes the buffer, so a
//! second release, or any access after release, is rejected at compile
//! time rather than checked at run time.
//!
//! ```
//! # use lpbuf::LpBuf;
//! let buf = LpBuf::from_slice(b"123456").unwrap();
//! assert_eq!(buf.len(), 6);
//!
//! // Subslicing the payload view needs no terminator anywhere.
//! let (first, second) = buf.as_bytes().split_at(3);
//! assert_eq!(first, b"123");
//! assert_eq!(second, b"456");
//! assert_ne!(first, second);
//!
//! buf.release();
//! ```
//!
//! # Binary Safety
//!
//! Zero bytes in the middle of the payload are ordinary data:
//!
//! ```
//! # use lpbuf::LpBuf;
//! let buf = LpBuf::new(&[0x41, 0x00, 0x42], 3).unwrap();
//! assert_eq!(buf.len(), 3);
//! assert_eq!(buf.as_bytes(), &[0x41, 0x00, 0x42]);
//! ```
//!
//! The display operation, [`LpBuf::write_line`], writes exactly `len()`
//! payload bytes plus one newline into any [`embedded_io::Write`] sink.
//! It never goes through a terminator-based primitive, so an embedded
//! zero cannot truncate the output.
//!
//! # Stored Image
//!
//! [`LpBuf::as_raw`] exposes the combined allocation bit-exactly and
//! [`LpBuf::from_raw`] decodes one, for callers that persist or exchange
//! buffers in this layout:
//!
//! ```
//! # use lpbuf::LpBuf;
//! let buf = LpBuf::from_slice(b"hi").unwrap();
//! assert_eq!(buf.as_raw(), &[2, 0, 0, 0, b'h', b'i', 0]);
//!
//! let copy = LpBuf::from_raw(buf.as_raw()).unwrap();
//! assert_eq!(copy, buf);
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` with `alloc`; the payload storage is the only
//! allocation it performs. Enable the optional `std` feature for
//! `std::error::Error` on [`LpBufError`] and the std conveniences of
//! `embedded-io`:
//!
//! ```toml
//! [dependencies]
//! lpbuf = { version = "0.1", features = ["std"] }
//! ```

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod header;
mod lpbuf;

// Re-export public types and constants
pub use error::LpBufError;
pub use header::{HEADER_SIZE, MAX_PAYLOAD_LEN};
pub use lpbuf::LpBuf;
