//! PNG转RGB565 C头文件
//!
//! 读取图片 -> 缩放到固定分辨率 -> 转RGB888 -> 截断量化为RGB565 -> 输出 PROGMEM 数组，
//! 生成的 image_data.h 直接 include 到单片机固件里作为开机画面。

pub mod config;
pub mod converter;
pub mod error;
pub mod header;
pub mod preview;
pub mod resize;
pub mod rgb565;

pub use config::ConvertConfig;
pub use converter::{convert, ConversionReport};
pub use error::ConvertError;
