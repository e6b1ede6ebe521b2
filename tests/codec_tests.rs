use lsb_veil::{
    ErrorKind, PixelBuffer, StegoError, decode, decode_bytes, encode, encode_bytes, inspect,
};
use rand::{Rng, RngCore};

/// 生成包含 `pixels` 个随机像素的缓冲区
fn random_pixels(pixels: usize) -> PixelBuffer {
    let mut raw = vec![0u8; pixels * 4];
    rand::rng().fill_bytes(&mut raw);
    PixelBuffer::new(raw).expect("length is a multiple of 4")
}

fn random_ascii(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(0x20u8..0x7f) as char)
        .collect()
}

fn carrier_bits(pixels: &PixelBuffer, range: std::ops::Range<usize>) -> String {
    range
        .map(|i| if pixels.as_bytes()[i * 4] & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// 10x10 图像中隐藏 "hi" 的具体布局
#[test]
fn test_hi_in_ten_by_ten_image() -> Result<(), StegoError> {
    let cover = random_pixels(10 * 10);
    assert_eq!(cover.capacity(), 100);

    let hidden = encode(&cover, "hi", None)?;

    assert_eq!(
        carrier_bits(&hidden, 0..32),
        "00000000000000000000000000010000"
    );
    assert_eq!(carrier_bits(&hidden, 32..48), "0110100001101001");
    assert_eq!(decode(&hidden, None)?, "hi");

    Ok(())
}

#[test]
fn test_round_trip_random_messages() -> Result<(), StegoError> {
    for len in [1, 7, 64, 255] {
        let message = random_ascii(len);
        let cover = random_pixels(32 + len * 8 + 13);
        let hidden = encode(&cover, &message, None)?;
        assert_eq!(decode(&hidden, None)?, message);
    }
    Ok(())
}

#[test]
fn test_round_trip_with_password() -> Result<(), StegoError> {
    let cover = random_pixels(2048);
    let message = random_ascii(80);

    let hidden = encode(&cover, &message, Some("p@ss"))?;
    assert_eq!(decode(&hidden, Some("p@ss"))?, message);

    Ok(())
}

#[test]
fn test_password_enforcement() -> Result<(), StegoError> {
    let cover = random_pixels(2048);
    let hidden = encode(&cover, "top secret", Some("Password"))?;

    let missing = decode(&hidden, None).unwrap_err();
    assert_eq!(missing, StegoError::PasswordRequired);
    assert_eq!(missing.kind(), ErrorKind::Auth);

    for wrong in ["password", "Password ", "Passwor", "x"] {
        assert_eq!(decode(&hidden, Some(wrong)), Err(StegoError::IncorrectPassword));
    }
    assert_eq!(decode(&hidden, Some("")), Err(StegoError::PasswordRequired));

    Ok(())
}

#[test]
fn test_empty_password_embeds_plain_message() -> Result<(), StegoError> {
    let cover = random_pixels(512);
    let hidden = encode(&cover, "open", Some(""))?;

    assert_eq!(decode(&hidden, None)?, "open");
    assert!(!inspect(&hidden)?.protected);

    Ok(())
}

#[test]
fn test_capacity_boundary() -> Result<(), StegoError> {
    let message = random_ascii(12);
    let exact = random_pixels(32 + 12 * 8);

    let hidden = encode(&exact, &message, None)?;
    assert_eq!(decode(&hidden, None)?, message);

    let short = random_pixels(32 + 12 * 8 - 1);
    let err = encode(&short, &message, None).unwrap_err();
    assert_eq!(
        err,
        StegoError::Capacity {
            required: 32 + 96,
            available: 32 + 95
        }
    );
    assert_eq!(err.kind(), ErrorKind::Capacity);

    Ok(())
}

#[test]
fn test_capacity_counts_password_wrapper() {
    // "[PROTECTED]" + "pw" + "[DATA]" + "hi" = 21 字节
    let cover = random_pixels(32 + 21 * 8 - 1);
    assert_eq!(
        encode(&cover, "hi", Some("pw")).map(|_| ()),
        Err(StegoError::Capacity {
            required: 32 + 168,
            available: 32 + 167
        })
    );
    assert!(encode(&cover, "hi", None).is_ok());
}

#[test]
fn test_only_carrier_bytes_change() -> Result<(), StegoError> {
    let cover = random_pixels(1000);
    let snapshot = cover.clone();
    let message = random_ascii(40);
    let used_pixels = 32 + message.len() * 8;

    let hidden = encode(&cover, &message, None)?;

    assert_eq!(cover, snapshot, "The input buffer must not be mutated.");
    assert_eq!(hidden.as_bytes().len(), cover.as_bytes().len());

    for (i, (before, after)) in cover.as_bytes().iter().zip(hidden.as_bytes()).enumerate() {
        let pixel = i / 4;
        if i % 4 == 0 && pixel < used_pixels {
            assert_eq!(before & !1, after & !1, "upper bits changed at byte {i}");
        } else {
            assert_eq!(before, after, "byte {i} outside the frame changed");
        }
    }

    Ok(())
}

#[test]
fn test_garbage_header_is_rejected() {
    // 全 0xFF 的缓冲区头部解析为 u32::MAX，远超容量
    let saturated = PixelBuffer::new(vec![0xFF; 400]).unwrap();
    let err = decode(&saturated, None).unwrap_err();
    assert!(matches!(err, StegoError::InvalidHeader { .. }));
    assert_eq!(err.kind(), ErrorKind::Format);

    // 全零头部表示没有消息
    let empty = PixelBuffer::new(vec![0u8; 400]).unwrap();
    assert_eq!(
        decode(&empty, None),
        Err(StegoError::InvalidHeader {
            length: 0,
            capacity: 100
        })
    );
}

#[test]
fn test_header_must_fit_in_capacity() -> Result<(), StegoError> {
    let cover = random_pixels(32 + 16);
    let hidden = encode(&cover, "ok", None)?;

    // 截去最后一个像素后，头部声明的长度超出容量
    let mut raw = hidden.into_inner();
    raw.truncate(raw.len() - 4);
    let truncated = PixelBuffer::new(raw)?;

    assert_eq!(decode(&truncated, None).unwrap_err().kind(), ErrorKind::Format);
    Ok(())
}

#[test]
fn test_too_small_for_header() {
    let tiny = random_pixels(16);
    assert_eq!(decode(&tiny, None).unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(encode(&tiny, "a", None).unwrap_err().kind(), ErrorKind::Capacity);
}

#[test]
fn test_marker_collision_in_protected_message() -> Result<(), StegoError> {
    let cover = random_pixels(1024);
    let hidden = encode(&cover, "a[DATA]b", Some("pw"))?;

    assert_eq!(
        decode(&hidden, Some("pw")),
        Err(StegoError::InvalidProtectedFormat)
    );
    Ok(())
}

#[test]
fn test_plain_message_that_looks_protected() -> Result<(), StegoError> {
    let cover = random_pixels(1024);
    let hidden = encode(&cover, "[PROTECTED]pw[DATA]hello", None)?;

    // 普通消息与受保护消息的线格式相同，解码时按受保护消息处理
    assert_eq!(decode(&hidden, None), Err(StegoError::PasswordRequired));
    assert_eq!(decode(&hidden, Some("pw"))?, "hello");
    Ok(())
}

#[test]
fn test_utf8_and_raw_bytes() -> Result<(), StegoError> {
    let cover = random_pixels(1024);

    let hidden = encode(&cover, "héllo 世界", None)?;
    assert_eq!(decode(&hidden, None)?, "héllo 世界");

    // 单字节 Latin-1 数据不是合法的 UTF-8，只能按字节恢复
    let latin1 = [b'c', b'a', b'f', 0xE9];
    let hidden = encode_bytes(&cover, &latin1, None)?;
    assert_eq!(decode(&hidden, None), Err(StegoError::InvalidText));
    assert_eq!(decode_bytes(&hidden, None)?, latin1);

    Ok(())
}

#[test]
fn test_inspect_reports_frame() -> Result<(), StegoError> {
    let cover = random_pixels(512);

    let plain = inspect(&encode(&cover, "abc", None)?)?;
    assert_eq!(plain.payload_bits, 24);
    assert!(!plain.protected);
    assert_eq!(plain.capacity, 512);

    let protected = inspect(&encode(&cover, "abc", Some("k"))?)?;
    assert!(protected.protected);
    assert_eq!(protected.payload_bits, (11 + 1 + 6 + 3) * 8);

    Ok(())
}

#[test]
fn test_pixel_buffer_rejects_partial_pixels() {
    let err = PixelBuffer::new(vec![0u8; 10]).unwrap_err();
    assert_eq!(err, StegoError::InvalidPixelBuffer(10));
    assert_eq!(err.kind(), ErrorKind::Input);
}
