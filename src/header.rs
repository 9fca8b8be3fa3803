use std::io::{self, Write};

/// C头文件格式参数
/// 默认值生成的文件和固件里现有的 image_data.h 逐字节一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// include guard 宏名
    pub guard: String,
    /// PROGMEM 所在的头文件
    pub include: String,
    pub array_name: String,
    pub width: u32,
    pub height: u32,
    /// 每行输出多少个数值
    pub values_per_line: usize,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            guard: "IMAGE_DATA_H".to_string(),
            include: "pgmspace.h".to_string(),
            array_name: "splash_image_rgb565".to_string(),
            width: 320,
            height: 240,
            values_per_line: 16,
        }
    }
}

/// 输出头文件: include guard + PROGMEM 常量数组
/// 每个值固定为 `0xXXXX, `，每 values_per_line 个值换一行
pub fn write_header<W: Write>(out: &mut W, pixels: &[u16], opts: &HeaderOptions) -> io::Result<()> {
    let per_line = opts.values_per_line.max(1);

    writeln!(out, "#ifndef {}", opts.guard)?;
    writeln!(out, "#define {}\n", opts.guard)?;
    writeln!(out, "#include <{}>\n", opts.include)?;
    writeln!(
        out,
        "const uint16_t {}[{}*{}] PROGMEM = {{",
        opts.array_name, opts.width, opts.height
    )?;

    for (i, p) in pixels.iter().enumerate() {
        write!(out, "0x{p:04X}, ")?;
        if (i + 1) % per_line == 0 {
            out.write_all(b"\n")?;
        }
    }

    out.write_all(b"};\n\n#endif\n")?;
    Ok(())
}

pub fn render_header(pixels: &[u16], opts: &HeaderOptions) -> String {
    let mut buf = Vec::with_capacity(pixels.len() * 6 + 256);
    write_header(&mut buf, pixels, opts).expect("写入Vec不会失败");
    String::from_utf8(buf).expect("头文件内容都是UTF-8")
}
