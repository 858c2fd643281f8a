//! Stream format compatibility tests
//!
//! Known LZO1X-1 streams, written out byte by byte, checked against both the
//! encoder and the decoder.

use lzo::{compress, decompress, Lzo, LzoError};

/// Literal run of `count` bytes in the general form (`0`, continuation)
fn long_literal_run(literals: &[u8]) -> Vec<u8> {
    let mut remainder = literals.len() - 18;
    let mut stream = vec![0];
    while remainder > 255 {
        stream.push(0);
        remainder -= 255;
    }
    stream.push(remainder as u8);
    stream.extend_from_slice(literals);
    stream
}

fn literal_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Test the stream for empty input
#[test]
fn test_empty_stream() -> Result<(), Box<dyn std::error::Error>> {
    let expected = hex::decode("110000")?;
    assert_eq!(compress(b""), expected);
    assert!(decompress(&expected)?.is_empty());
    Ok(())
}

/// Test the stream for short text without matches
#[test]
fn test_hello_world_stream() -> Result<(), Box<dyn std::error::Error>> {
    let expected = hex::decode("1e48656c6c6f2c20576f726c6421110000")?;
    assert_eq!(compress("Hello, World!"), expected);
    assert_eq!(decompress(&expected)?, b"Hello, World!");
    Ok(())
}

/// Test the exact stream for a run of 1000 zero bytes
#[test]
fn test_zero_run_stream() -> Result<(), Box<dyn std::error::Error>> {
    let expected = hex::decode(format!(
        "{}{}{}{}{}",
        "020000000000",   // five literals
        "20000000b11000", // M3 match: length 975, distance 5
        "0002",           // twenty literals
        "00".repeat(20),
        "110000"
    ))?;

    let compressed = compress(vec![0u8; 1000]);
    println!("Zero run stream: {}", hex::encode(&compressed));
    assert_eq!(compressed, expected);
    assert_eq!(decompress(&expected)?, vec![0u8; 1000]);
    Ok(())
}

/// Test decoding a 3-byte match directly after a literal run
#[test]
fn test_decode_three_byte_match() -> Result<(), Box<dyn std::error::Error>> {
    let literals = literal_bytes(2049);
    let mut stream = long_literal_run(&literals);
    stream.extend_from_slice(&[0x00, 0x00]);
    stream.extend_from_slice(&lzo::END_MARKER);

    let mut expected = literals.clone();
    expected.extend_from_slice(&literals[..3]);
    assert_eq!(decompress(&stream)?, expected);
    Ok(())
}

/// Test decoding a far match beyond 16384 bytes
#[test]
fn test_decode_far_match() -> Result<(), Box<dyn std::error::Error>> {
    let literals = literal_bytes(16_385);
    let mut stream = long_literal_run(&literals);
    // M4, length 3, distance 16385
    stream.extend_from_slice(&[0x11, 0x04, 0x00]);
    stream.extend_from_slice(&lzo::END_MARKER);

    let mut expected = literals.clone();
    expected.extend_from_slice(&literals[..3]);
    assert_eq!(decompress(&stream)?, expected);
    Ok(())
}

/// Test decoding chained literals after short matches
#[test]
fn test_decode_chained_literals() -> Result<(), Box<dyn std::error::Error>> {
    // "abcd", M2 length 3 distance 4 with two trailing literals "xy",
    // then a 2-byte M1 match at distance 2.
    let stream = hex::decode(format!("{}{}{}{}{}", "1561626364", "4e00", "7879", "0400", "110000"))?;
    assert_eq!(decompress(&stream)?, b"abcdabcxyxy");
    Ok(())
}

/// Test that data after the end marker is ignored
#[test]
fn test_trailing_data() -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = compress(b"payload payload payload");
    stream.extend_from_slice(b"garbage");
    assert_eq!(decompress(&stream)?, b"payload payload payload");
    Ok(())
}

/// Test corrupt streams are rejected without panicking
#[test]
fn test_corrupt_streams() {
    let cases: [&[u8]; 5] = [
        b"",
        &[0x15, b'a', b'b'],
        &[0x12, b'a', 0xE0, 0x05, 0x11, 0x00, 0x00],
        &[0x11, 0x00],
        &[0x20, 0x00, 0x00],
    ];

    for stream in cases {
        let err = Lzo::new().decompress(stream).unwrap_err();
        assert!(err.is_corrupt_stream(), "{stream:02x?}: {err}");
    }

    assert!(matches!(
        decompress([0x12, b'a', 0xE0, 0x05, 0x11, 0x00, 0x00]),
        Err(LzoError::InvalidDistance {
            distance: 41,
            available: 1
        })
    ));
}
