//! # 编码器
//!
//! 构造负载，写入 32 位长度头部与负载位，返回修改后的副本。

use crate::bitstream::{bytes_to_bits, uint_to_bits};
use crate::constants::{BITS_PER_BYTE, HEADER_BITS};
use crate::error::StegoError;
use crate::payload::Payload;
use crate::pixels::PixelBuffer;
use crate::steganography::embed_bits;
use log::debug;

/// 嵌入 `payload` 所需的总位数 (含头部)。
pub fn required_bits(payload: &Payload) -> usize {
    HEADER_BITS + payload.len() * BITS_PER_BYTE
}

/// 将文本消息隐藏到像素缓冲区中，`password` 为空或缺省时不加保护。
///
/// 输入缓冲区不会被修改，返回值是写入了隐写数据的新缓冲区。
///
/// # Errors
///
/// 头部与负载总位数超过图像容量时返回 `StegoError::Capacity`。
pub fn encode(
    pixels: &PixelBuffer,
    message: &str,
    password: Option<&str>,
) -> Result<PixelBuffer, StegoError> {
    encode_bytes(pixels, message.as_bytes(), password.map(str::as_bytes))
}

/// `encode` 的字节版本。
pub fn encode_bytes(
    pixels: &PixelBuffer,
    message: &[u8],
    password: Option<&[u8]>,
) -> Result<PixelBuffer, StegoError> {
    let payload = Payload::new(message, password);
    let required = required_bits(&payload);
    let available = pixels.capacity();

    debug!(
        "encoding {} payload bits (protected: {}) into {} available bits",
        required - HEADER_BITS,
        payload.is_protected(),
        available
    );

    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let payload_bits = bytes_to_bits(&payload.to_bytes());
    let header = u32::try_from(payload_bits.len()).map_err(|_| StegoError::Capacity {
        required,
        available,
    })?;

    let mut output = pixels.clone();
    embed_bits(output.as_bytes_mut(), 0, &uint_to_bits(header, HEADER_BITS))?;
    embed_bits(output.as_bytes_mut(), HEADER_BITS, &payload_bits)?;

    Ok(output)
}
