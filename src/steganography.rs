//! # LSB 读写原语
//!
//! 每个像素只使用第 0 个通道字节的最低有效位，其余 7 位及其他通道保持不变。

use crate::constants::{CARRIER_CHANNEL, CHANNELS_PER_PIXEL};
use crate::error::StegoError;

fn check_region(pix: &[u8], start_pixel: usize, count: usize) -> Result<(), StegoError> {
    let pixels = pix.len() / CHANNELS_PER_PIXEL;
    if start_pixel.checked_add(count).is_none_or(|end| end > pixels) {
        return Err(StegoError::OutOfBounds);
    }
    Ok(())
}

/// 从第 `start_pixel` 个像素开始，把 `bits` 依次写入每个像素载体字节的最低位。
///
/// 越界时不修改任何字节。
pub fn embed_bits(pix: &mut [u8], start_pixel: usize, bits: &[bool]) -> Result<(), StegoError> {
    check_region(pix, start_pixel, bits.len())?;

    pix.chunks_exact_mut(CHANNELS_PER_PIXEL)
        .skip(start_pixel)
        .zip(bits)
        .for_each(|(pixel, &bit)| {
            let byte = &mut pixel[CARRIER_CHANNEL];
            *byte = if bit { *byte | 1 } else { *byte & !1 };
        });

    Ok(())
}

/// 从第 `start_pixel` 个像素开始读取 `count` 个载体字节的最低位。
pub fn extract_bits(pix: &[u8], start_pixel: usize, count: usize) -> Result<Vec<bool>, StegoError> {
    check_region(pix, start_pixel, count)?;

    Ok(pix
        .chunks_exact(CHANNELS_PER_PIXEL)
        .skip(start_pixel)
        .take(count)
        .map(|pixel| pixel[CARRIER_CHANNEL] & 1 == 1)
        .collect())
}
