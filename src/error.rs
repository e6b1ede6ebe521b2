//! # 错误类型模块
//!
//! 编解码核心返回的强类型错误。命令行层再用 `anyhow` 为其附加上下文。

use thiserror::Error;

/// 错误的粗粒度分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 图像容量不足以容纳头部与负载。
    Capacity,
    /// 头部或负载格式无效。
    Format,
    /// 受保护的消息缺少密码或密码错误。
    Auth,
    /// 调用方提供了无效输入。
    Input,
}

/// 隐写编解码过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    #[error("Message is too large for this image: required {required} bits, available {available} bits")]
    Capacity { required: usize, available: usize },

    #[error("Invalid data or no message found (header length {length}, capacity {capacity} bits)")]
    InvalidHeader { length: u64, capacity: usize },

    #[error("Malformed bit sequence: {0}")]
    MalformedBits(&'static str),

    #[error("Invalid protected message format")]
    InvalidProtectedFormat,

    #[error("Recovered message is not valid UTF-8")]
    InvalidText,

    #[error("This message is password protected")]
    PasswordRequired,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Please enter a message to hide")]
    EmptyMessage,

    #[error("Pixel buffer length {0} is not a multiple of 4 (RGBA)")]
    InvalidPixelBuffer(usize),

    #[error("The steganographic region extends beyond the image data boundary")]
    OutOfBounds,
}

impl StegoError {
    /// 返回错误所属的分类。
    pub fn kind(&self) -> ErrorKind {
        match self {
            StegoError::Capacity { .. } => ErrorKind::Capacity,
            StegoError::InvalidHeader { .. }
            | StegoError::MalformedBits(_)
            | StegoError::InvalidProtectedFormat
            | StegoError::InvalidText
            | StegoError::OutOfBounds => ErrorKind::Format,
            StegoError::PasswordRequired | StegoError::IncorrectPassword => ErrorKind::Auth,
            StegoError::EmptyMessage | StegoError::InvalidPixelBuffer(_) => ErrorKind::Input,
        }
    }
}
