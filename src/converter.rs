use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::header::write_header;
use crate::preview::{color_difference, log_color_difference, save_preview, ColorDiff};
use crate::resize::{load_image, normalize};
use crate::rgb565::rgb888_to_rgb565;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    pub output_path: PathBuf,
    pub color_diff: Option<ColorDiff>,
}

/// 图片 -> RGB565 PROGMEM 头文件
/// 所有像素都量化完成后才创建输出文件，任何一步失败都不会留下半个文件
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport> {
    if !config.input_path.exists() {
        return Err(ConvertError::InputNotFound(config.input_path.clone()));
    }

    let img = load_image(&config.input_path)?;
    let frame = normalize(&img, config.width, config.height, config.filter)?;
    let rgb565 = rgb888_to_rgb565(&frame);
    debug!("量化完成: {} 个像素", rgb565.len());

    {
        let mut out = BufWriter::new(File::create(&config.output_path)?);
        write_header(&mut out, &rgb565, &config.header_options())?;
        out.flush()?;
    }
    info!("已写入 {} ({}x{})", config.output_path.display(), config.width, config.height);

    let color_diff = match config.preview_path.as_ref() {
        Some(path) => {
            let preview = save_preview(&rgb565, config.width, config.height, path)?;
            let diff = color_difference(&frame, &preview);
            log_color_difference(&diff);
            Some(diff)
        }
        None => None,
    };

    Ok(ConversionReport {
        source_width: img.width(),
        source_height: img.height(),
        width: config.width,
        height: config.height,
        pixel_count: rgb565.len(),
        output_path: config.output_path.clone(),
        color_diff,
    })
}
