//! # 像素缓冲区模块
//!
//! `PixelBuffer` 是编解码核心的唯一输入输出：按 `[R, G, B, A]` 交错排列的扁平字节序列。

use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegoError;
use image::RgbaImage;

/// RGBA 像素缓冲区，长度恒为 4 的整数倍。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    /// 由原始 RGBA 字节构造缓冲区。
    ///
    /// # Errors
    ///
    /// 长度不是 4 的整数倍时返回 `StegoError::InvalidPixelBuffer`。
    pub fn new(data: Vec<u8>) -> Result<Self, StegoError> {
        if data.len() % CHANNELS_PER_PIXEL != 0 {
            return Err(StegoError::InvalidPixelBuffer(data.len()));
        }
        Ok(Self { data })
    }

    /// 取出 `RgbaImage` 的底层像素数据。
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            data: image.into_raw(),
        }
    }

    /// 以给定的宽高重新组装为 `RgbaImage`。
    /// 尺寸与缓冲区长度不匹配时返回 `None`。
    pub fn into_rgba(self, width: u32, height: u32) -> Option<RgbaImage> {
        RgbaImage::from_raw(width, height, self.data)
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS_PER_PIXEL
    }

    /// 可用的隐写位数 (头部 + 负载)，每个像素 1 bit。
    pub fn capacity(&self) -> usize {
        self.pixel_count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
