//! 纹理资源
//!
//! 纹理在导入时确定采样标志，之后作为只读资源共享（`Arc<Texture>`）。

use image::{GrayImage, Luma};

use super::ResourcePath;

/// 纹理采样标志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureFlags {
    /// 线性过滤
    pub filter: bool,
    /// 平铺重复
    pub repeat: bool,
}

impl TextureFlags {
    /// 仅开启过滤
    pub const FILTERED: TextureFlags = TextureFlags { filter: true, repeat: false };
}

/// 纹理资源（单通道亮度图）
#[derive(Debug, Clone)]
pub struct Texture {
    path: ResourcePath,
    image: GrayImage,
    flags: TextureFlags,
}

impl Texture {
    pub fn new(path: ResourcePath, image: GrayImage, flags: TextureFlags) -> Self {
        Self { path, image, flags }
    }

    /// 生成径向衰减贴图
    ///
    /// 中心亮度为 255，到内切圆边缘按二次曲线衰减到 0。
    pub fn falloff(path: ResourcePath, size: u32, flags: TextureFlags) -> Self {
        let size = size.max(2);
        let center = (size as f32 - 1.0) / 2.0;
        let image = GrayImage::from_fn(size, size, |x, y| {
            let dx = (x as f32 - center) / center;
            let dy = (y as f32 - center) / center;
            let d = (dx * dx + dy * dy).sqrt().min(1.0);
            let falloff = (1.0 - d) * (1.0 - d);
            Luma([(falloff * 255.0).round() as u8])
        });
        Self::new(path, image, flags)
    }

    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn flags(&self) -> TextureFlags {
        self.flags
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// 读取像素亮度，越界返回 `None`
    pub fn luminance(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0[0])
        } else {
            None
        }
    }
}
