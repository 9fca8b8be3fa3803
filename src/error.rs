use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("图片编解码失败: {0}")]
    Decode(#[from] image::ImageError),

    #[error("图片缩放失败: {0}")]
    Resize(String),

    #[error("目标尺寸无效: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("配置文件错误: {0}")]
    Config(String),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl From<fast_image_resize::ResizeError> for ConvertError {
    fn from(error: fast_image_resize::ResizeError) -> Self {
        ConvertError::Resize(error.to_string())
    }
}

impl From<fast_image_resize::ImageBufferError> for ConvertError {
    fn from(error: fast_image_resize::ImageBufferError) -> Self {
        ConvertError::Resize(error.to_string())
    }
}
