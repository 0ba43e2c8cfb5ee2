use imgpeek::{ImageFormat, ProbeError, Signature, probe};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(data: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(data).unwrap();
    temp.flush().unwrap();
    temp
}

fn gif87a(width: u16, height: u16) -> Vec<u8> {
    let mut gif = b"GIF87a".to_vec();
    gif.extend_from_slice(&width.to_le_bytes());
    gif.extend_from_slice(&height.to_le_bytes());
    gif.extend_from_slice(&[0xF0, 0x00, 0x00]);
    gif.extend_from_slice(&[0x00; 6]);
    gif.extend_from_slice(&[0xFF; 6]);
    gif.push(0x3B);
    gif
}

#[test]
fn test_probe_gif87a() {
    let gif = gif87a(16, 10);
    assert_eq!(&gif[6..10], &[0x10, 0x00, 0x0A, 0x00]);

    let temp = write_temp(&gif);
    let info = probe(temp.path()).unwrap();
    assert_eq!(info.format, ImageFormat::Gif);
    assert_eq!(info.width, 16);
    assert_eq!(info.height, 10);
}

#[test]
fn test_probe_gif89a_little_endian() {
    let mut gif = gif87a(0x0201, 0x0403);
    gif[4] = b'9';
    let temp = write_temp(&gif);
    let info = probe(temp.path()).unwrap();
    assert_eq!((info.width, info.height), (513, 1027));
}

#[test]
fn test_probe_unknown_format() {
    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&[0x00; 60]);
    let temp = write_temp(&bmp);
    assert!(matches!(
        probe(temp.path()),
        Err(ProbeError::UnsupportedFormat)
    ));
}

#[test]
fn test_probe_empty_file() {
    let temp = write_temp(&[]);
    assert!(matches!(
        probe(temp.path()),
        Err(ProbeError::TruncatedHeader { expected: 24 })
    ));
}

#[test]
fn test_probe_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = probe(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ProbeError::Io(_)));
    assert!(!err.is_undeterminable());
}

#[test]
fn test_probe_is_idempotent() {
    let temp = write_temp(&gif87a(300, 200));
    let first = probe(temp.path()).unwrap();
    let second = probe(temp.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_signature_classification() {
    assert_eq!(Signature::classify(b"\x89PNG\r\n\x1a\n"), Signature::Png);
    assert_eq!(Signature::classify(b"GIF89a"), Signature::Gif);
    assert_eq!(Signature::classify(&[0xFF, 0xD8, 0xFF, 0xE0]), Signature::Jpeg);
    assert_eq!(Signature::classify(b"RIFF....WEBP"), Signature::Unknown);
    assert_eq!(Signature::Unknown.format(), None);
    assert_eq!(Signature::Jpeg.format(), Some(ImageFormat::Jpeg));
}

#[test]
fn test_probe_unknown_gif_version() {
    let mut gif = gif87a(16, 10);
    gif[4] = b'8';
    let temp = write_temp(&gif);
    assert!(matches!(
        probe(temp.path()),
        Err(ProbeError::UnsupportedFormat)
    ));
}
