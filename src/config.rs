use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::header::HeaderOptions;
use crate::resize::ResampleFilter;

pub const DEFAULT_INPUT: &str = "esp32_c3_super_mini.png";
pub const DEFAULT_OUTPUT: &str = "image_data.h";

/// 转换参数
/// 默认值: esp32_c3_super_mini.png -> image_data.h, 320x240
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub filter: ResampleFilter,
    pub array_name: String,
    pub guard: String,
    /// 可选: 同时输出RGB565还原后的PNG预览图
    pub preview_path: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let header = HeaderOptions::default();
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            width: header.width,
            height: header.height,
            filter: ResampleFilter::default(),
            array_name: header.array_name,
            guard: header.guard,
            preview_path: None,
        }
    }
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// 从json文件读取配置，缺少的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|err| ConvertError::Config(format!("{}: {err}", path.display())))?;
        let config = Self::from_json(&data)?;
        info!("已加载配置文件: {}", path.display());
        Ok(config)
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|err| ConvertError::Config(err.to_string()))
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            guard: self.guard.clone(),
            array_name: self.array_name.clone(),
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_reference_invocation() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_path, PathBuf::from("esp32_c3_super_mini.png"));
        assert_eq!(config.output_path, PathBuf::from("image_data.h"));
        assert_eq!(config.pixel_count(), 76_800);
        assert_eq!(config.header_options(), HeaderOptions::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = br#"{"input_path":"logo.png","width":240,"filter":"bilinear"}"#;
        let config = ConvertConfig::from_json(json).unwrap();
        assert_eq!(config.input_path, PathBuf::from("logo.png"));
        assert_eq!(config.output_path, PathBuf::from("image_data.h"));
        assert_eq!(config.width, 240);
        assert_eq!(config.height, 240);
        assert_eq!(config.filter, ResampleFilter::Bilinear);
        assert_eq!(config.preview_path, None);
    }

    #[test]
    fn test_bad_json() {
        let err = ConvertConfig::from_json(b"{width: }").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ConvertConfig::from_file(Path::new("no/such/config.json")).unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }
}
