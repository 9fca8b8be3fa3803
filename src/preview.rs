//! RGB565预览图与量化误差统计
//! 把量化后的数据还原成RGB888，方便在电脑上确认烧录到屏幕上的效果是否偏色

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::error::{ConvertError, Result};
use crate::rgb565::rgb565_to_rgb888;

/// 各通道误差 (量化后 - 原始，正值表示量化后更亮)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorDiff {
    pub pixel_count: usize,
    pub avg_r: f64,
    pub avg_g: f64,
    pub avg_b: f64,
    pub max_r: u8,
    pub max_g: u8,
    pub max_b: u8,
}

impl ColorDiff {
    /// 截断量化的理论最大误差: R/B 7(3位), G 3(2位)
    pub fn within_truncation_bounds(&self) -> bool {
        self.max_r <= 7 && self.max_g <= 3 && self.max_b <= 7
    }
}

/// RGB565序列还原为RGB888图像
pub fn render_preview(rgb565: &[u16], width: u32, height: u32) -> Result<RgbImage> {
    let mut rgb888 = Vec::with_capacity(rgb565.len() * 3);
    for pixel in rgb565 {
        rgb888.extend_from_slice(&rgb565_to_rgb888(*pixel));
    }
    RgbImage::from_raw(width, height, rgb888).ok_or(ConvertError::InvalidSize { width, height })
}

pub fn save_preview(rgb565: &[u16], width: u32, height: u32, path: &Path) -> Result<RgbImage> {
    let img = render_preview(rgb565, width, height)?;
    img.save(path)?;
    info!("预览图已保存: {}", path.display());
    Ok(img)
}

/// 统计原图与还原图的颜色差异
pub fn color_difference(original: &RgbImage, converted: &RgbImage) -> ColorDiff {
    let mut diff = ColorDiff::default();
    let mut sum = [0i64; 3];
    let mut max = [0u8; 3];

    for (orig, conv) in original.pixels().zip(converted.pixels()) {
        for c in 0..3 {
            let d = conv[c] as i64 - orig[c] as i64;
            sum[c] += d;
            max[c] = max[c].max(d.unsigned_abs() as u8);
        }
        diff.pixel_count += 1;
    }

    if diff.pixel_count > 0 {
        let n = diff.pixel_count as f64;
        diff.avg_r = sum[0] as f64 / n;
        diff.avg_g = sum[1] as f64 / n;
        diff.avg_b = sum[2] as f64 / n;
    }
    [diff.max_r, diff.max_g, diff.max_b] = max;
    diff
}

pub fn log_color_difference(diff: &ColorDiff) {
    info!("像素总数: {}", diff.pixel_count);
    info!("R通道: 平均差异={:+.2}, 最大差异={}", diff.avg_r, diff.max_r);
    info!("G通道: 平均差异={:+.2}, 最大差异={}", diff.avg_g, diff.max_g);
    info!("B通道: 平均差异={:+.2}, 最大差异={}", diff.avg_b, diff.max_b);
    if !diff.within_truncation_bounds() {
        log::warn!("误差超出RGB565截断的理论范围，可能存在编码问题");
    }
}
