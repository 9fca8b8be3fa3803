use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use png2rgb565::resize::ResampleFilter;
use png2rgb565::{convert, ConvertConfig, ConvertError};

/// 把图片转换为 RGB565 PROGMEM 数组头文件，用作单片机屏幕的开机画面
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 输入图片 (默认 esp32_c3_super_mini.png)
    input: Option<PathBuf>,

    /// 输出头文件 (默认 image_data.h)
    output: Option<PathBuf>,

    /// json配置文件，命令行参数优先
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// 缩放算法
    #[arg(short, long, value_enum)]
    filter: Option<ResampleFilter>,

    /// 数组变量名
    #[arg(long)]
    array_name: Option<String>,

    /// include guard 宏名
    #[arg(long)]
    guard: Option<String>,

    /// 同时输出RGB565还原后的PNG预览图
    #[arg(short, long)]
    preview: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<ConvertConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => ConvertConfig::from_file(path)?,
            None => ConvertConfig::default(),
        };
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if let Some(array_name) = self.array_name {
            config.array_name = array_name;
        }
        if let Some(guard) = self.guard {
            config.guard = guard;
        }
        if let Some(preview) = self.preview {
            config.preview_path = Some(preview);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let config = Args::parse().into_config()?;
    info!("转换参数: {config:?}");

    match convert(&config) {
        Ok(report) => {
            info!(
                "{}x{} -> {}x{}, 共 {} 个像素",
                report.source_width, report.source_height, report.width, report.height, report.pixel_count
            );
            println!(
                "Converted {} to {}",
                config.input_path.display(),
                config.output_path.display()
            );
            Ok(())
        }
        Err(ConvertError::InputNotFound(path)) => {
            eprintln!("Error: {} not found", path.display());
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
