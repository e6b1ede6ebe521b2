//! # lsb_veil 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位流转换、负载封装、编码与解码。
//! 编解码核心只处理内存中的 RGBA 像素缓冲区，图像文件的读写由 `handler` 负责。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod handler;
pub mod payload;
pub mod pixels;
pub mod steganography;

pub use decoder::{FrameInfo, decode, decode_bytes, inspect};
pub use encoder::{encode, encode_bytes};
pub use error::{ErrorKind, StegoError};
pub use pixels::PixelBuffer;
