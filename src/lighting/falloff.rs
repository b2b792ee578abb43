//! 半径与衰减贴图的映射
//!
//! 半径（米）始终限制在 [MIN_RADIUS, MAX_RADIUS]，
//! 向下取整得到的桶号决定使用哪张衰减贴图。

use std::ops::RangeInclusive;

use crate::core::math::utils;
use crate::resource::ResourcePath;

/// 最小半径（米）
pub const MIN_RADIUS: f32 = 2.0;

/// 最大半径（米）
pub const MAX_RADIUS: f32 = 10.0;

/// 默认半径（米）
pub const DEFAULT_RADIUS: f32 = 5.0;

/// 所有需要预置贴图的桶
pub const FALLOFF_BUCKETS: RangeInclusive<u32> = 2..=10;

/// 限制半径；NaN 视为默认半径
pub fn clamp_radius(radius: f32) -> f32 {
    if radius.is_nan() {
        return DEFAULT_RADIUS;
    }
    utils::clamp(radius, MIN_RADIUS, MAX_RADIUS)
}

/// 已限制半径所在的桶
pub fn radius_bucket(clamped_radius: f32) -> u32 {
    clamped_radius.floor() as u32
}

/// 桶对应的贴图文件名
pub fn falloff_texture_name(bucket: u32) -> String {
    format!("lighting_falloff_{}.png", bucket)
}

/// 桶对应的资源路径
pub fn falloff_texture_path(dir: &ResourcePath, bucket: u32) -> ResourcePath {
    dir / falloff_texture_name(bucket)
}
