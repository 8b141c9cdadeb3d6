use lpbuf::LpBuf;

#[test]
fn test_buffer_creation() {
    let buf = LpBuf::new(b"hello", 5).unwrap();

    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn test_single_byte_buffer() {
    let buf = LpBuf::new(b"x", 1).unwrap();

    assert_eq!(buf.len(), 1);
    assert_eq!(buf.as_bytes(), b"x");
}

#[test]
fn test_zero_length_buffer() {
    let buf = LpBuf::new(b"", 0).unwrap();

    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes(), b"");
}

#[test]
fn test_prefix_of_source() {
    // Only the first len bytes of the source are copied
    let buf = LpBuf::new(b"hello world", 5).unwrap();

    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn test_from_slice_whole_source() {
    let buf = LpBuf::from_slice(b"123456").unwrap();

    assert_eq!(buf.len(), 6);
    assert_eq!(buf.as_bytes(), b"123456");
}

#[test]
fn test_try_from_slice() {
    let buf = LpBuf::try_from(&b"abc"[..]).unwrap();

    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"abc");
}

#[test]
fn test_owned_copy_independent_of_source() {
    let mut source = *b"hello";
    let buf = LpBuf::from_slice(&source).unwrap();

    source[0] = b'X';

    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn test_separate_buffers_separate_allocations() {
    let a = LpBuf::from_slice(b"same").unwrap();
    let b = LpBuf::from_slice(b"same").unwrap();

    assert_eq!(a, b);
    assert_ne!(a.as_raw().as_ptr(), b.as_raw().as_ptr());
}

#[test]
fn test_split_payload_in_halves() {
    let buf = LpBuf::from_slice(b"123456").unwrap();

    let (first, second) = buf.as_bytes().split_at(buf.len() / 2);
    assert_eq!(first, b"123");
    assert_eq!(second, b"456");
    assert_ne!(first, second);
}

#[test]
fn test_deref_to_slice() {
    let buf = LpBuf::from_slice(b"abcdef").unwrap();

    assert!(buf.starts_with(b"abc"));
    assert_eq!(&buf[2..4], b"cd");
    assert_eq!(buf.iter().copied().max(), Some(b'f'));
}

#[test]
fn test_as_ref_bytes() {
    fn payload_len(bytes: impl AsRef<[u8]>) -> usize {
        bytes.as_ref().len()
    }

    let buf = LpBuf::from_slice(b"abc").unwrap();
    assert_eq!(payload_len(&buf), 3);
}

#[test]
fn test_equality_with_slices() {
    let buf = LpBuf::from_slice(b"same").unwrap();

    assert_eq!(buf, b"same"[..]);
    assert_eq!(b"same"[..], buf);
    assert_eq!(buf, &b"same"[..]);
    assert_eq!(&b"same"[..], buf);
    assert_ne!(buf, b"other"[..]);
}

#[test]
fn test_equality_between_buffers() {
    let a = LpBuf::from_slice(b"same").unwrap();
    let b = LpBuf::new(b"same bytes", 4).unwrap();
    let c = LpBuf::from_slice(b"other").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_debug_format() {
    let buf = LpBuf::from_slice(b"hi").unwrap();

    assert_eq!(format!("{:?}", buf), "LpBuf { len: 2, payload: [104, 105] }");
}

#[test]
fn test_release_consumes_buffer() {
    let buf = LpBuf::from_slice(b"transient").unwrap();
    buf.release();
    // buf is moved here; any later use is a compile error
}

#[test]
fn test_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LpBuf>();
}
