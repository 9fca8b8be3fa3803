use image::RgbImage;

/// RGB888转RGB565 (直接截断低位)
/// 固件端按截断方式还原，这里不能改成四舍五入，否则会和已有的头文件对不上
#[inline]
pub fn rgb_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    // R: 保留高5位, G: 保留高6位, B: 保留高5位
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// 按行优先顺序(从左到右，从上到下)把整幅图像量化为RGB565序列
pub fn rgb888_to_rgb565(img: &RgbImage) -> Vec<u16> {
    let mut rgb565 = Vec::with_capacity(img.width() as usize * img.height() as usize);
    for p in img.pixels() {
        rgb565.push(rgb_to_rgb565(p[0], p[1], p[2]));
    }
    rgb565
}

/// RGB565还原为RGB888
/// 低位用高位填充，这样0x0000还原为纯黑，0xFFFF还原为纯白
#[inline]
pub fn rgb565_to_rgb888(pixel: u16) -> [u8; 3] {
    // R: bits 15-11, G: bits 10-5, B: bits 4-0
    let r5 = ((pixel >> 11) & 0x1F) as u8;
    let g6 = ((pixel >> 5) & 0x3F) as u8;
    let b5 = (pixel & 0x1F) as u8;

    [(r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2)]
}
