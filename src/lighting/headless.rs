//! 无窗口光照后端
//!
//! 只记录属性，不做任何绘制。用于服务器端、工具和测试。
//! 管理器统计创建与释放次数，便于检查句柄是否泄漏。

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::light::{LightHandle, LightId, LightManager, LightMode};
use crate::component::{Transform, TransformId};
use crate::core::math::{Angle, Color, Vector2};
use crate::resource::Texture;

/// 句柄计数
#[derive(Debug, Default)]
struct LightStats {
    created: Cell<usize>,
    disposed: Cell<usize>,
}

/// 无窗口光源管理器
#[derive(Debug, Default)]
pub struct HeadlessLightManager {
    stats: Rc<LightStats>,
    next_id: u32,
}

impl HeadlessLightManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已创建的光源数量
    pub fn created(&self) -> usize {
        self.stats.created.get()
    }

    /// 已释放的光源数量
    pub fn disposed(&self) -> usize {
        self.stats.disposed.get()
    }

    /// 尚未释放的光源数量
    pub fn live(&self) -> usize {
        self.created() - self.disposed()
    }
}

impl LightManager for HeadlessLightManager {
    fn make_light(&mut self) -> Box<dyn LightHandle> {
        let id = LightId(self.next_id);
        self.next_id += 1;
        self.stats.created.set(self.stats.created.get() + 1);
        tracing::trace!(light = id.0, "Headless light created");

        Box::new(HeadlessLight {
            id,
            color: Color::WHITE,
            offset: Vector2::zeros(),
            rotation: Angle::ZERO,
            energy: 1.0,
            enabled: true,
            texture: None,
            mode: LightMode::default(),
            parent: None,
            stats: Rc::clone(&self.stats),
        })
    }
}

/// 无窗口光源
#[derive(Debug)]
pub struct HeadlessLight {
    id: LightId,
    color: Color,
    offset: Vector2,
    rotation: Angle,
    energy: f32,
    enabled: bool,
    texture: Option<Arc<Texture>>,
    mode: LightMode,
    parent: Option<TransformId>,
    stats: Rc<LightStats>,
}

impl LightHandle for HeadlessLight {
    fn id(&self) -> LightId {
        self.id
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn offset(&self) -> Vector2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vector2) {
        self.offset = offset;
    }

    fn rotation(&self) -> Angle {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
    }

    fn energy(&self) -> f32 {
        self.energy
    }

    fn set_energy(&mut self, energy: f32) {
        self.energy = energy;
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    fn set_texture(&mut self, texture: Arc<Texture>) {
        self.texture = Some(texture);
    }

    fn mode(&self) -> LightMode {
        self.mode
    }

    fn set_mode(&mut self, mode: LightMode) {
        self.mode = mode;
    }

    fn parent(&self) -> Option<TransformId> {
        self.parent
    }

    fn parent_to(&mut self, transform: &Transform) {
        self.parent = Some(transform.id());
    }

    fn dispose(self: Box<Self>) {
        self.stats.disposed.set(self.stats.disposed.get() + 1);
        tracing::trace!(light = self.id.0, "Headless light disposed");
    }
}
