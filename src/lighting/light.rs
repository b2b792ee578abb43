//! 光源句柄接口
//!
//! 渲染后端通过 [`LightManager`] 创建光源，返回的 [`LightHandle`]
//! 由唯一的组件独占持有，释放时调用 [`LightHandle::dispose`]。

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::component::{Transform, TransformId};
use crate::core::math::{Angle, Color, Vector2};
use crate::resource::Texture;

/// 光源开关状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    #[default]
    On,
    Off,
}

impl LightState {
    /// 该状态下光源是否可见
    pub fn is_enabled(&self) -> bool {
        matches!(self, LightState::On)
    }
}

/// 光源渲染模式（由服务器权威下发，本地不做缓存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightMode {
    /// 恒定亮度
    #[default]
    Constant,
    /// 闪烁
    Flicker,
    /// 呼吸式脉冲
    Pulse,
}

/// 光源 ID（由后端分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub u32);

/// 可渲染的点光源句柄
pub trait LightHandle {
    fn id(&self) -> LightId;

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn offset(&self) -> Vector2;
    fn set_offset(&mut self, offset: Vector2);

    fn rotation(&self) -> Angle;
    fn set_rotation(&mut self, rotation: Angle);

    fn energy(&self) -> f32;
    fn set_energy(&mut self, energy: f32);

    fn enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn texture(&self) -> Option<&Arc<Texture>>;
    fn set_texture(&mut self, texture: Arc<Texture>);

    fn mode(&self) -> LightMode;
    fn set_mode(&mut self, mode: LightMode);

    /// 当前父节点
    fn parent(&self) -> Option<TransformId>;

    /// 挂到变换节点下，世界位置随后由后端跟随
    fn parent_to(&mut self, transform: &Transform);

    /// 释放后端资源
    fn dispose(self: Box<Self>);
}

/// 光源工厂
pub trait LightManager {
    fn make_light(&mut self) -> Box<dyn LightHandle>;
}
