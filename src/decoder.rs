//! # 解码器
//!
//! 读取长度头部，校验其范围，取回负载并在需要时验证密码。
//!
//! 状态流转：读取头部 → 校验头部 → 读取负载 → 识别保护标记 → 直接返回 / 校验密码后返回。
//! 任何一步失败都会终止本次调用。

use crate::bitstream::{bits_to_bytes, bits_to_uint};
use crate::constants::{BITS_PER_BYTE, HEADER_BITS};
use crate::error::StegoError;
use crate::payload::Payload;
use crate::pixels::PixelBuffer;
use crate::steganography::extract_bits;
use log::debug;

/// 不需要密码即可获得的帧信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// 头部记录的负载位数。
    pub payload_bits: usize,
    /// 负载是否带有密码标记。
    pub protected: bool,
    /// 图像的总容量 (位)。
    pub capacity: usize,
}

fn read_header(pixels: &PixelBuffer) -> Result<usize, StegoError> {
    let capacity = pixels.capacity();
    let header = extract_bits(pixels.as_bytes(), 0, HEADER_BITS)?;
    let length = bits_to_uint(&header)?;

    debug!("header declares {length} payload bits, capacity is {capacity} bits");

    let end = (length as usize).checked_add(HEADER_BITS);
    if length == 0 || end.is_none_or(|end| end > capacity) {
        return Err(StegoError::InvalidHeader {
            length: length.into(),
            capacity,
        });
    }
    Ok(length as usize)
}

fn read_payload(pixels: &PixelBuffer) -> Result<Payload, StegoError> {
    let length = read_header(pixels)?;
    let bits = extract_bits(pixels.as_bytes(), HEADER_BITS, length)?;
    Payload::parse(bits_to_bytes(&bits)?)
}

/// 从像素缓冲区中恢复原始字节形式的消息。
///
/// # Errors
///
/// * 头部为零或超出容量，或负载格式无效时返回格式类错误。
/// * 受保护的消息缺少密码或密码不匹配时返回 `StegoError::PasswordRequired` / `StegoError::IncorrectPassword`。
pub fn decode_bytes(pixels: &PixelBuffer, password: Option<&[u8]>) -> Result<Vec<u8>, StegoError> {
    read_payload(pixels)?.unlock(password)
}

/// 从像素缓冲区中恢复文本消息。
///
/// # Errors
///
/// 除 `decode_bytes` 的错误外，恢复的字节不是合法 UTF-8 时返回 `StegoError::InvalidText`。
pub fn decode(pixels: &PixelBuffer, password: Option<&str>) -> Result<String, StegoError> {
    let bytes = decode_bytes(pixels, password.map(str::as_bytes))?;
    String::from_utf8(bytes).map_err(|_| StegoError::InvalidText)
}

/// 在不提供密码的情况下检查图像中是否存在消息，以及该消息是否受保护。
pub fn inspect(pixels: &PixelBuffer) -> Result<FrameInfo, StegoError> {
    let payload = read_payload(pixels)?;
    Ok(FrameInfo {
        payload_bits: payload.len() * BITS_PER_BYTE,
        protected: payload.is_protected(),
        capacity: pixels.capacity(),
    })
}
