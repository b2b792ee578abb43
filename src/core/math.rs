//! 数学库模块
//!
//! 基于 `nalgebra` 提供二维光照所需的类型：向量、齐次矩阵、角度和颜色。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector2, Matrix3, Angle, Color
//! - **工具函数**：clamp, approx_eq

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix3 as Mat3, Point2, Vector2 as Vec2};

// 类型别名，使用更简洁的名称
pub type Vector2 = Vec2<f32>;
pub type Matrix3 = Mat3<f32>;

/// 角度（内部以弧度存储）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// 零角度
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// 从弧度创建
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// 从度数创建
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// 弧度值
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// 度数值
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }
}

/// 颜色类型（RGBA，范围 0.0-1.0）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// 创建新的颜色，各通道限制在 0.0-1.0
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: utils::saturate(r),
            g: utils::saturate(g),
            b: utils::saturate(b),
            a: utils::saturate(a),
        }
    }

    /// 创建 RGB 颜色（alpha = 1.0）
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// 各通道限制在 0.0-1.0 后的颜色（用于反序列化得到的颜色）
    pub fn saturated(&self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// 转换为数组
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // 预定义颜色
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// 数学工具函数
pub mod utils {
    /// 限制值在范围内
    pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// 饱和函数（限制在 0.0-1.0）
    pub fn saturate(value: f32) -> f32 {
        clamp(value, 0.0, 1.0)
    }

    /// 检查两个浮点数是否近似相等
    pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }
}
