// 命令行退出码与输出测试
use std::path::PathBuf;
use std::process::Command;

use image::{Rgb, RgbImage};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("png2rgb565_cli_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_png2rgb565"))
}

#[test]
fn test_missing_input_exits_non_zero() {
    let dir = temp_dir("missing");
    let output = dir.join("image_data.h");

    let result = bin().arg(dir.join("nope.png")).arg(&output).output().unwrap();
    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error:") && stderr.contains("not found"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_default_paths_in_working_dir() {
    let dir = temp_dir("defaults");
    RgbImage::from_pixel(4, 3, Rgb([0, 255, 0]))
        .save(dir.join("esp32_c3_super_mini.png"))
        .unwrap();

    let result = bin().current_dir(&dir).output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Converted esp32_c3_super_mini.png to image_data.h"), "{stdout}");

    let header = std::fs::read_to_string(dir.join("image_data.h")).unwrap();
    assert!(header.contains("[320*240] PROGMEM"));
    assert_eq!(header.matches("0x07E0").count(), 76_800);
}

#[test]
fn test_config_file_and_flag_override() {
    let dir = temp_dir("config");
    let input = dir.join("in.png");
    RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])).save(&input).unwrap();
    let output = dir.join("out.h");
    let config = dir.join("convert.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"input_path":{:?},"output_path":{:?},"width":16,"height":8,"array_name":"from_json"}}"#,
            input.to_string_lossy(),
            output.to_string_lossy()
        ),
    )
    .unwrap();

    let result = bin()
        .arg("--config")
        .arg(&config)
        .args(["--height", "4", "--filter", "nearest"])
        .output()
        .unwrap();
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let header = std::fs::read_to_string(&output).unwrap();
    assert!(header.contains("const uint16_t from_json[16*4] PROGMEM = {\n"));
    assert_eq!(header.matches("0xFFFF").count(), 64);
}

#[test]
fn test_corrupt_input_fails() {
    let dir = temp_dir("corrupt");
    let input = dir.join("bad.png");
    std::fs::write(&input, b"not an image at all").unwrap();
    let output = dir.join("image_data.h");

    let result = bin().arg(&input).arg(&output).output().unwrap();
    assert!(!result.status.success());
    assert!(!output.exists());
}
