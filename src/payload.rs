//! # 负载模块
//!
//! 负载有两种形态：普通消息，或以明文标记包裹的受保护消息
//! `[PROTECTED]<password>[DATA]<message>`。
//!
//! 注意：这里的"密码"以明文与消息一同嵌入，仅做字节相等比较，
//! 不提供任何机密性或完整性保证。

use crate::constants::{DATA_SEPARATOR, PROTECTED_MARKER};
use crate::error::StegoError;
use log::trace;

/// 嵌入图像的逻辑字节序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Plain(Vec<u8>),
    Protected { password: Vec<u8>, message: Vec<u8> },
}

impl Payload {
    /// 根据是否提供了非空密码选择负载形态。
    pub fn new(message: &[u8], password: Option<&[u8]>) -> Self {
        match password.filter(|p| !p.is_empty()) {
            Some(password) => Payload::Protected {
                password: password.to_vec(),
                message: message.to_vec(),
            },
            None => Payload::Plain(message.to_vec()),
        }
    }

    /// 序列化后的字节长度。
    pub fn len(&self) -> usize {
        match self {
            Payload::Plain(message) => message.len(),
            Payload::Protected { password, message } => {
                PROTECTED_MARKER.len() + password.len() + DATA_SEPARATOR.len() + message.len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Payload::Protected { .. })
    }

    /// 生成实际写入图像的字节序列。
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Plain(message) => message.clone(),
            Payload::Protected { password, message } => {
                let mut bytes = Vec::with_capacity(self.len());
                bytes.extend_from_slice(PROTECTED_MARKER);
                bytes.extend_from_slice(password);
                bytes.extend_from_slice(DATA_SEPARATOR);
                bytes.extend_from_slice(message);
                bytes
            }
        }
    }

    /// 从解码出的字节序列识别负载形态。
    ///
    /// 以 `[PROTECTED]` 开头的序列必须恰好包含一个 `[DATA]` 分隔符。
    ///
    /// # Errors
    ///
    /// 受保护负载缺少分隔符或包含多个分隔符时返回 `StegoError::InvalidProtectedFormat`。
    pub fn parse(bytes: Vec<u8>) -> Result<Self, StegoError> {
        if !bytes.starts_with(PROTECTED_MARKER) {
            trace!("payload carries no protection marker");
            return Ok(Payload::Plain(bytes));
        }

        let separator = find(&bytes, DATA_SEPARATOR).ok_or(StegoError::InvalidProtectedFormat)?;
        let rest = &bytes[separator + DATA_SEPARATOR.len()..];
        if find(rest, DATA_SEPARATOR).is_some() {
            return Err(StegoError::InvalidProtectedFormat);
        }

        trace!("payload carries protection marker");
        Ok(Payload::Protected {
            password: bytes[PROTECTED_MARKER.len()..separator].to_vec(),
            message: rest.to_vec(),
        })
    }

    /// 校验密码并取出消息正文。空密码视为未提供。
    ///
    /// # Errors
    ///
    /// * 受保护负载未提供密码时返回 `StegoError::PasswordRequired`。
    /// * 密码不匹配时返回 `StegoError::IncorrectPassword`。
    pub fn unlock(self, password: Option<&[u8]>) -> Result<Vec<u8>, StegoError> {
        match self {
            Payload::Plain(message) => Ok(message),
            Payload::Protected {
                password: stored,
                message,
            } => {
                let supplied = password
                    .filter(|p| !p.is_empty())
                    .ok_or(StegoError::PasswordRequired)?;
                if supplied != stored.as_slice() {
                    return Err(StegoError::IncorrectPassword);
                }
                Ok(message)
            }
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
