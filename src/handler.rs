//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `inspect` 子命令的高级业务逻辑。
//! 本模块负责图像文件的解码与保存、调用隐写编解码核心以及向用户报告结果。

use crate::cli::{HideArgs, InspectArgs, RecoverArgs};
use crate::constants::{BITS_PER_BYTE, HEADER_BITS, HIDDEN_IMAGE_PREFIX, RECOVERED_TEXT_PREFIX};
use crate::decoder::{decode_bytes, inspect};
use crate::encoder::{encode_bytes, required_bits};
use crate::error::{ErrorKind, StegoError};
use crate::payload::Payload;
use crate::pixels::PixelBuffer;
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 解码后的图像：像素数据与其尺寸。
struct LoadedImage {
    pixels: PixelBuffer,
    width: u32,
    height: u32,
}

fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    info!("loaded {}x{} image from {}", width, height, path.display());

    Ok(LoadedImage {
        pixels: PixelBuffer::from_rgba(rgba),
        width,
        height,
    })
}

/// 在输入文件旁生成 `<prefix><stem>.<extension>` 形式的默认输出路径。
fn default_output(input: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{stem}.{extension}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}\nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 有损格式会破坏最低有效位，因此只允许保存为无损格式。
fn ensure_lossless(path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the output image format: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        matches!(
            format,
            ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Tiff | ImageFormat::WebP | ImageFormat::Qoi
        ),
        "Output format {:?} is lossy and would destroy the hidden data: {}",
        format,
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和待隐藏的文本、检查隐写空间是否足够、调用编码器写入长度头部与负载，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息来源与可选密码的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像，或无法读取文本文件。
/// * 要隐藏的消息为空。
/// * 图像没有足够的空间来隐藏消息。
/// * 目标文件已存在且未指定 `--force`，或目标格式为有损格式。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = match (&args.text, &args.message) {
        (Some(path), _) => fs::read(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, Some(message)) => message.clone().into_bytes(),
        (None, None) => Vec::new(),
    };

    anyhow::ensure!(!message.is_empty(), StegoError::EmptyMessage);

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_output(&args.image, HIDDEN_IMAGE_PREFIX, "png"));
    ensure_writable(&dest, args.force)?;
    ensure_lossless(&dest)?;

    let image = load_image(&args.image)?;
    let password = args.password.as_deref().map(str::as_bytes);

    let required_space = required_bits(&Payload::new(&message, password));
    let available_space = image.pixels.capacity();

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let hidden = encode_bytes(&image.pixels, &message, password)
        .with_context(|| "Failed to hide the message in the image.")?;

    let picture = hidden
        .into_rgba(image.width, image.height)
        .context("The encoded pixel data no longer matches the image dimensions.")?;

    picture.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;
    info!("wrote {} bytes of message into {}", message.len(), dest.display());

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码器取回消息 (必要时校验密码)，
/// 最后将恢复的文本内容原样写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与可选密码的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像中没有消息或数据已损坏。
/// * 消息受密码保护而密码缺失或错误。
/// * 目标文件已存在且未指定 `--force`，或无法写入目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let target = args
        .text
        .clone()
        .unwrap_or_else(|| default_output(&args.image, RECOVERED_TEXT_PREFIX, "txt"));
    ensure_writable(&target, args.force)?;

    let image = load_image(&args.image)?;

    let text = decode_bytes(&image.pixels, args.password.as_deref().map(str::as_bytes))
        .with_context(|| {
            format!(
                "Failed to recover the hidden message from '{}'.",
                args.image.to_string_lossy().red().bold()
            )
        })?;

    fs::write(&target, &text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            target.to_string_lossy().red().bold()
        )
    })?;
    info!("recovered {} bytes into {}", text.len(), target.display());

    println!(
        "The text has been successfully recovered and saved: {}",
        target.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Inspect' 命令的执行逻辑。
///
/// 报告图像可容纳的最大消息字节数，并在不需要密码的情况下判断其中是否存在消息、是否受保护。
pub fn handle_inspect(args: InspectArgs) -> Result<()> {
    let image = load_image(&args.image)?;
    let capacity = image.pixels.capacity();
    let max_bytes = capacity.saturating_sub(HEADER_BITS) / BITS_PER_BYTE;

    println!(
        "Image: {} ({}x{}), capacity: {} bytes of payload",
        args.image.to_string_lossy().bold(),
        image.width,
        image.height,
        max_bytes.to_string().green().bold()
    );

    match inspect(&image.pixels) {
        Ok(frame) if frame.protected => println!(
            "Hidden message found: {} bytes, {}",
            (frame.payload_bits / BITS_PER_BYTE).to_string().green().bold(),
            "password protected".yellow().bold()
        ),
        Ok(frame) => println!(
            "Hidden message found: {} bytes, not protected",
            (frame.payload_bits / BITS_PER_BYTE).to_string().green().bold()
        ),
        Err(err) if err.kind() == ErrorKind::Format => {
            println!("{}", "No hidden message found.".red().bold())
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
