//! # 位流转换模块
//!
//! 在字节序列、无符号整数与定长位序列之间相互转换。
//! 所有转换均为大端序：最高有效位在前。

use crate::constants::BITS_PER_BYTE;
use crate::error::StegoError;

/// 将字节序列展开为位序列，每个字节按最高位在前的顺序追加 8 位。
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect()
}

/// `bytes_to_bits` 的逆运算。
///
/// # Errors
///
/// 位数不是 8 的整数倍时返回 `StegoError::MalformedBits`。
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>, StegoError> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(StegoError::MalformedBits(
            "bit count is not a multiple of 8",
        ));
    }

    Ok(bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .collect())
}

/// 将 `value` 表示为恰好 `width` 位的大端序位序列，不足时高位补零。
///
/// `width` 小于 `value` 的有效位数时只保留低 `width` 位。
pub fn uint_to_bits(value: u32, width: usize) -> Vec<bool> {
    (0..width)
        .rev()
        .map(|shift| shift < u32::BITS as usize && (value >> shift) & 1 == 1)
        .collect()
}

/// `uint_to_bits` 的逆运算。
///
/// # Errors
///
/// 位序列为空或超过 32 位时返回 `StegoError::MalformedBits`。
pub fn bits_to_uint(bits: &[bool]) -> Result<u32, StegoError> {
    if bits.is_empty() {
        return Err(StegoError::MalformedBits("empty bit sequence"));
    }
    if bits.len() > u32::BITS as usize {
        return Err(StegoError::MalformedBits(
            "bit sequence is wider than 32 bits",
        ));
    }

    Ok(bits
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | bit as u32))
}
