use std::path::Path;

use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{buffer::ConvertBuffer, DynamicImage, ImageReader, RgbImage, RgbaImage};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// 缩放算法
/// 每次转换固定使用同一种算法，保证同一输入得到完全相同的输出
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    /// 双三次卷积(a = -0.5)
    #[default]
    CatmullRom,
    Lanczos3,
}

impl ResampleFilter {
    fn resize_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

/// 读取并解码图片，优先按文件内容识别格式
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    info!("原始图片: {}x{} {:?}", img.width(), img.height(), img.color());
    Ok(img)
}

/// 缩放到目标尺寸并去掉透明通道
/// 缩放在RGBA上进行(预乘alpha)，避免透明像素的颜色渗到相邻像素，缩放完成后直接丢弃alpha
pub fn normalize(img: &DynamicImage, dst_width: u32, dst_height: u32, filter: ResampleFilter) -> Result<RgbImage> {
    if dst_width == 0 || dst_height == 0 {
        return Err(ConvertError::InvalidSize { width: dst_width, height: dst_height });
    }
    let src = img.to_rgba8();
    if src.width() == dst_width && src.height() == dst_height {
        debug!("尺寸一致，跳过缩放");
        return Ok(src.convert());
    }
    let resized = fast_resize(src, dst_width, dst_height, filter)?;
    Ok(resized.convert())
}

fn fast_resize(src: RgbaImage, dst_width: u32, dst_height: u32, filter: ResampleFilter) -> Result<RgbaImage> {
    let (src_width, src_height) = src.dimensions();
    let src_image = Image::from_vec_u8(src_width, src_height, src.into_raw(), PixelType::U8x4)?;
    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &options)?;
    debug!("缩放 {src_width}x{src_height} -> {dst_width}x{dst_height} ({filter:?})");

    RgbaImage::from_raw(dst_width, dst_height, dst_image.buffer().to_vec())
        .ok_or_else(|| ConvertError::Resize("缩放结果长度不匹配".to_string()))
}
