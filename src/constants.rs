/// 每个像素占用的字节数 (R, G, B, A)。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 承载隐写位的通道索引。
/// 只有每个像素的第 0 个字节 (红色通道) 会被读写。
pub const CARRIER_CHANNEL: usize = 0;

/// 长度头部占用的位数。
/// 头部是一个大端序 `u32`，记录负载的位数 (不是字节数)，每个像素存储 1 bit，
/// 因此前 32 个像素用于隐藏长度。
pub const HEADER_BITS: usize = 32;

/// 每个字节展开后的位数。
pub const BITS_PER_BYTE: usize = 8;

/// 受密码保护的负载的起始标记。
pub const PROTECTED_MARKER: &[u8] = b"[PROTECTED]";

/// 密码与正文之间的分隔符。
pub const DATA_SEPARATOR: &[u8] = b"[DATA]";

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本的文件名前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";
