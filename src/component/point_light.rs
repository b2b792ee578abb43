//! 点光源组件
//!
//! 独占一个渲染后端的光源句柄，并保证组件属性与句柄属性始终一致：
//! 每个 setter 都同步写穿到句柄，没有延迟或批量同步。
//!
//! # 生命周期
//!
//! 1. [`PointLightComponent::new`]：`Created`，没有句柄，getter 返回默认值
//! 2. [`PointLightComponent::bind`]：从显式传入的 [`LightManager`] 获取句柄，
//!    执行首次数据绑定，进入 `Bound`
//! 3. [`PointLightComponent::initialize`]：挂到实体的变换节点，进入 `Active`
//! 4. [`PointLightComponent::detach`]：释放句柄，进入 `Detached`
//!
//! 乱序调用返回 [`LifecycleError`]。
//!
//! # 持久化字段
//!
//! | key | 字段 | 默认值 |
//! |-----|------|--------|
//! | `offset` | 偏移 | (0, 0) |
//! | `radius` | 半径 | 5 |
//! | `color` | 颜色 | 白色 |
//! | `state` | 开关 | on |
//! | `energy` | 强度 | 1 |
//! | `autoRot` | 遮罩自动旋转 | false |
//!
//! 网络快照只覆盖 `state`、`color` 和句柄的 `mode`。

use std::any::Any;
use std::sync::Arc;

use super::{Component, LifecycleStage, Transform};
use crate::core::error::{LifecycleError, Result};
use crate::core::math::{Angle, Color, Vector2};
use crate::lighting::falloff::{self, DEFAULT_RADIUS};
use crate::lighting::{LightHandle, LightManager, LightState};
use crate::network::{NetId, PointLightState};
use crate::resource::{ResourcePath, ResourceProvider};
use crate::serialization::ObjectSerializer;
use crate::{lighting_debug, lighting_error, lighting_warn};

/// 点光源组件
pub struct PointLightComponent {
    stage: LifecycleStage,
    light: Option<Box<dyn LightHandle>>,
    resources: Arc<dyn ResourceProvider>,
    falloff_dir: ResourcePath,

    color: Color,
    offset: Vector2,
    rotation: Angle,
    energy: f32,
    /// 米，始终位于 [2, 10]
    radius: f32,
    /// 遮罩是否随实体朝向旋转（如手电筒），仅存储，由渲染器读取
    mask_auto_rotate: bool,
    state: LightState,
}

impl PointLightComponent {
    /// 组件名称
    pub const NAME: &'static str = "PointLight";

    /// 创建组件
    ///
    /// `falloff_dir` 是衰减贴图所在的资源目录。
    pub fn new(resources: Arc<dyn ResourceProvider>, falloff_dir: ResourcePath) -> Self {
        Self {
            stage: LifecycleStage::Created,
            light: None,
            resources,
            falloff_dir,
            color: Color::WHITE,
            offset: Vector2::zeros(),
            rotation: Angle::ZERO,
            energy: 1.0,
            radius: DEFAULT_RADIUS,
            mask_auto_rotate: false,
            state: LightState::On,
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    /// 当前持有的光源句柄
    pub fn light(&self) -> Option<&(dyn LightHandle + 'static)> {
        self.light.as_deref()
    }

    // ========== 生命周期 ==========

    /// 获取光源句柄并执行首次数据绑定
    pub fn bind(
        &mut self,
        lights: &mut dyn LightManager,
        serializer: &mut ObjectSerializer,
    ) -> Result<()> {
        self.stage.transition(LifecycleStage::Bound)?;

        let mut light = lights.make_light();
        light.set_color(self.color);
        light.set_offset(self.offset);
        light.set_rotation(self.rotation);
        light.set_energy(self.energy);
        light.set_enabled(self.state.is_enabled());
        lighting_debug!(light = light.id().0, "Light handle acquired");
        self.light = Some(light);

        let fields = self.fields();
        if let Err(e) = self.load(serializer) {
            // 绑定失败：释放句柄并回到 Created，字段恢复为绑定前的值
            self.restore(fields);
            self.stage = LifecycleStage::Created;
            if let Some(light) = self.light.take() {
                lighting_warn!(light = light.id().0, error = %e, "Binding failed, light handle released");
                light.dispose();
            }
            return Err(e);
        }
        Ok(())
    }

    // 先为当前半径解析贴图，写出模式下句柄也是完整的
    fn load(&mut self, serializer: &mut ObjectSerializer) -> Result<()> {
        self.set_radius(self.radius)?;
        self.expose_data(serializer)
    }

    /// 把光源挂到实体的变换节点
    pub fn initialize(&mut self, transform: &Transform) -> Result<()> {
        if !self.stage.can_transition_to(LifecycleStage::Active) {
            return Err(LifecycleError::InvalidTransition {
                from: self.stage,
                to: LifecycleStage::Active,
            }
            .into());
        }
        self.light_mut("initialize")?.parent_to(transform);
        self.stage = LifecycleStage::Active;
        lighting_debug!(transform = transform.id().0, "Point light parented");
        Ok(())
    }

    /// 释放光源句柄
    ///
    /// 未绑定过的组件也可以分离（没有需要释放的句柄）。
    pub fn detach(&mut self) -> Result<()> {
        if self.stage == LifecycleStage::Detached {
            return Err(LifecycleError::Detached { operation: "detach" }.into());
        }
        self.stage.transition(LifecycleStage::Detached)?;

        if let Some(light) = self.light.take() {
            lighting_debug!(light = light.id().0, "Light handle disposed");
            light.dispose();
        }
        Ok(())
    }

    // ========== 数据绑定 ==========

    /// 对六个持久化字段做读或写
    pub fn expose_data(&mut self, serializer: &mut ObjectSerializer) -> Result<()> {
        self.ensure_bound("expose data")?;

        if let Some(offset) = serializer.read_write("offset", Vector2::zeros(), || self.offset)? {
            self.set_offset(offset)?;
        }
        if let Some(radius) = serializer.read_write("radius", DEFAULT_RADIUS, || self.radius)? {
            self.set_radius(radius)?;
        }
        if let Some(color) = serializer.read_write("color", Color::WHITE, || self.color)? {
            self.set_color(color)?;
        }
        if let Some(state) = serializer.read_write("state", LightState::On, || self.state)? {
            self.set_state(state)?;
        }
        if let Some(energy) = serializer.read_write("energy", 1.0, || self.energy)? {
            self.set_energy(energy)?;
        }
        if let Some(rot) = serializer.read_write("autoRot", false, || self.mask_auto_rotate)? {
            self.set_mask_auto_rotate(rot);
        }
        Ok(())
    }

    // ========== 网络状态 ==========

    /// 应用服务器下发的权威快照
    ///
    /// 只覆盖开关、颜色和渲染模式；偏移、半径、强度和遮罩自动旋转保持本地值。
    pub fn apply_remote_state(&mut self, snapshot: PointLightState) -> Result<()> {
        self.ensure_bound("apply remote state")?;
        self.set_state(snapshot.state)?;
        self.set_color(snapshot.color)?;
        self.light_mut("apply remote state")?.set_mode(snapshot.mode);
        Ok(())
    }

    /// 当前的网络快照
    pub fn component_state(&self) -> Result<PointLightState> {
        self.ensure_bound("read component state")?;
        let mode = match self.light.as_ref() {
            Some(light) => light.mode(),
            None => return Err(LifecycleError::NotBound { operation: "read mode" }.into()),
        };
        Ok(PointLightState {
            state: self.state,
            color: self.color,
            mode,
        })
    }

    // ========== 属性 ==========

    pub fn color(&self) -> Color {
        self.color
    }

    /// 设置颜色，各通道限制在 0.0-1.0（原型和快照中的颜色同样经过这里）
    pub fn set_color(&mut self, color: Color) -> Result<()> {
        let color = color.saturated();
        self.light_mut("set color")?.set_color(color);
        self.color = color;
        Ok(())
    }

    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vector2) -> Result<()> {
        self.light_mut("set offset")?.set_offset(offset);
        self.offset = offset;
        Ok(())
    }

    /// 遮罩绕中心的局部旋转
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Angle) -> Result<()> {
        self.light_mut("set rotation")?.set_rotation(rotation);
        self.rotation = rotation;
        Ok(())
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn set_energy(&mut self, energy: f32) -> Result<()> {
        self.light_mut("set energy")?.set_energy(energy);
        self.energy = energy;
        Ok(())
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    /// 设置开关状态，只影响句柄的可见性
    pub fn set_state(&mut self, state: LightState) -> Result<()> {
        self.light_mut("set state")?.set_enabled(state.is_enabled());
        self.state = state;
        Ok(())
    }

    pub fn mask_auto_rotate(&self) -> bool {
        self.mask_auto_rotate
    }

    pub fn set_mask_auto_rotate(&mut self, auto_rotate: bool) {
        self.mask_auto_rotate = auto_rotate;
    }

    /// 半径（米）
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// 设置半径
    ///
    /// 输入被限制在 [2, 10]，按向下取整的桶解析衰减贴图。
    /// 贴图缺失是致命的资源配置错误，此时组件状态不变。
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        self.ensure_bound("set radius")?;

        let clamped = falloff::clamp_radius(radius);
        let bucket = falloff::radius_bucket(clamped);
        let path = falloff::falloff_texture_path(&self.falloff_dir, bucket);
        let texture = self.resources.resolve_texture(&path).map_err(|e| {
            lighting_error!(path = %path, radius = clamped, "Falloff texture not provisioned");
            e
        })?;

        self.light_mut("set radius")?.set_texture(texture);
        self.radius = clamped;
        Ok(())
    }

    // ========== 内部 ==========

    fn fields(&self) -> MirroredFields {
        MirroredFields {
            color: self.color,
            offset: self.offset,
            rotation: self.rotation,
            energy: self.energy,
            radius: self.radius,
            mask_auto_rotate: self.mask_auto_rotate,
            state: self.state,
        }
    }

    fn restore(&mut self, fields: MirroredFields) {
        self.color = fields.color;
        self.offset = fields.offset;
        self.rotation = fields.rotation;
        self.energy = fields.energy;
        self.radius = fields.radius;
        self.mask_auto_rotate = fields.mask_auto_rotate;
        self.state = fields.state;
    }

    fn ensure_bound(&self, operation: &'static str) -> Result<()> {
        match self.stage {
            LifecycleStage::Detached => Err(LifecycleError::Detached { operation }.into()),
            stage if stage.holds_handle() && self.light.is_some() => Ok(()),
            _ => Err(LifecycleError::NotBound { operation }.into()),
        }
    }

    fn light_mut(&mut self, operation: &'static str) -> Result<&mut Box<dyn LightHandle>> {
        self.ensure_bound(operation)?;
        self.light
            .as_mut()
            .ok_or_else(|| LifecycleError::NotBound { operation }.into())
    }
}

/// 绑定前的字段值，绑定失败时用于回滚
#[derive(Clone, Copy)]
struct MirroredFields {
    color: Color,
    offset: Vector2,
    rotation: Angle,
    energy: f32,
    radius: f32,
    mask_auto_rotate: bool,
    state: LightState,
}

impl Drop for PointLightComponent {
    fn drop(&mut self) {
        // 未经 detach 直接丢弃时仍要归还句柄
        if let Some(light) = self.light.take() {
            lighting_warn!(light = light.id().0, "Point light dropped while holding a handle");
            light.dispose();
        }
    }
}

impl Component for PointLightComponent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn net_id(&self) -> Option<NetId> {
        Some(NetId::POINT_LIGHT)
    }

    fn initialize(&mut self, transform: &Transform) -> Result<()> {
        PointLightComponent::initialize(self, transform)
    }

    fn expose_data(&mut self, serializer: &mut ObjectSerializer) -> Result<()> {
        PointLightComponent::expose_data(self, serializer)
    }

    fn on_remove(&mut self) -> Result<()> {
        self.detach()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TransformId;
    use crate::core::error::LightSyncError;
    use crate::lighting::falloff::{falloff_texture_path, FALLOFF_BUCKETS, MAX_RADIUS, MIN_RADIUS};
    use crate::lighting::{HeadlessLightManager, LightMode};
    use crate::resource::{ResourceCache, TextureFlags};

    fn falloff_dir() -> ResourcePath {
        ResourcePath::new("/Textures/Effects/Light")
    }

    fn provisioned_cache() -> Arc<ResourceCache> {
        let mut cache = ResourceCache::new("unused_root", TextureFlags::FILTERED);
        cache.provision_falloff_textures(&falloff_dir(), true, 8).unwrap();
        Arc::new(cache)
    }

    fn bound_light(lights: &mut HeadlessLightManager) -> PointLightComponent {
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        component.bind(lights, &mut ObjectSerializer::empty_reader()).unwrap();
        component
    }

    fn texture_path(component: &PointLightComponent) -> ResourcePath {
        component.light().unwrap().texture().unwrap().path().clone()
    }

    #[test]
    fn test_defaults_before_binding() {
        let component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        assert_eq!(component.stage(), LifecycleStage::Created);
        assert!(component.light().is_none());
        assert_eq!(component.radius(), 5.0);
        assert_eq!(component.color(), Color::WHITE);
        assert_eq!(component.state(), LightState::On);
        assert_eq!(component.energy(), 1.0);
        assert!(!component.mask_auto_rotate());
        assert_eq!(component.offset(), Vector2::zeros());
    }

    #[test]
    fn test_binding_without_data_yields_defaults() {
        let mut lights = HeadlessLightManager::new();
        let component = bound_light(&mut lights);

        assert_eq!(component.stage(), LifecycleStage::Bound);
        assert_eq!(component.radius(), 5.0);
        assert_eq!(component.color(), Color::WHITE);
        assert_eq!(component.state(), LightState::On);
        assert_eq!(component.energy(), 1.0);
        assert!(!component.mask_auto_rotate());
        assert_eq!(component.offset(), Vector2::zeros());

        let light = component.light().unwrap();
        assert!(light.enabled());
        assert_eq!(light.color(), Color::WHITE);
        assert_eq!(texture_path(&component), falloff_texture_path(&falloff_dir(), 5));
        assert_eq!(lights.created(), 1);
    }

    #[test]
    fn test_radius_is_clamped() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);

        for input in [-3.0, 0.0, 1.99, 2.0, 4.5, 9.99, 10.0, 10.01, 250.0] {
            component.set_radius(input).unwrap();
            assert_eq!(component.radius(), input.clamp(MIN_RADIUS, MAX_RADIUS));
        }

        component.set_radius(f32::NAN).unwrap();
        assert_eq!(component.radius(), DEFAULT_RADIUS);
    }

    #[test]
    fn test_every_bucket_resolves_its_texture() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);

        for bucket in FALLOFF_BUCKETS {
            component.set_radius(bucket as f32 + 0.5).unwrap();
            let expected = falloff_texture_path(&falloff_dir(), bucket);
            assert_eq!(texture_path(&component), expected);
        }

        component.set_radius(0.5).unwrap();
        assert_eq!(texture_path(&component), falloff_texture_path(&falloff_dir(), 2));
        component.set_radius(99.0).unwrap();
        assert_eq!(texture_path(&component), falloff_texture_path(&falloff_dir(), 10));
    }

    #[test]
    fn test_missing_texture_is_fatal_and_leaves_state() {
        let mut cache = ResourceCache::new("unused_root", TextureFlags::default());
        let dir = falloff_dir();
        cache.insert_image(falloff_texture_path(&dir, 5), image::GrayImage::new(2, 2));
        let mut component = PointLightComponent::new(Arc::new(cache), dir);
        let mut lights = HeadlessLightManager::new();
        component.bind(&mut lights, &mut ObjectSerializer::empty_reader()).unwrap();

        let err = component.set_radius(8.0).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(component.radius(), 5.0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut lights = HeadlessLightManager::new();
        let mut original = bound_light(&mut lights);
        original.set_offset(Vector2::new(0.25, -1.5)).unwrap();
        original.set_radius(7.75).unwrap();
        original.set_color(Color::new(0.2, 0.4, 0.6, 0.8)).unwrap();
        original.set_state(LightState::Off).unwrap();
        original.set_energy(2.5).unwrap();
        original.set_mask_auto_rotate(true);

        let mut writer = ObjectSerializer::writer();
        original.expose_data(&mut writer).unwrap();
        let saved = toml::to_string(writer.table()).unwrap();

        let mut restored = PointLightComponent::new(provisioned_cache(), falloff_dir());
        let mut reader = ObjectSerializer::reader_from_str(&saved).unwrap();
        restored.bind(&mut lights, &mut reader).unwrap();

        assert_eq!(restored.offset(), original.offset());
        assert_eq!(restored.radius(), original.radius());
        assert_eq!(restored.color(), original.color());
        assert_eq!(restored.state(), original.state());
        assert_eq!(restored.energy(), original.energy());
        assert_eq!(restored.mask_auto_rotate(), original.mask_auto_rotate());
        assert!(!restored.light().unwrap().enabled());
        assert_eq!(texture_path(&restored), falloff_texture_path(&falloff_dir(), 7));
    }

    #[test]
    fn test_load_from_prototype_keys() {
        let mut lights = HeadlessLightManager::new();
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        let mut reader = ObjectSerializer::reader_from_str(
            "radius = 12.0\nstate = \"off\"\nautoRot = true\noffset = [1.0, 2.0]\n",
        )
        .unwrap();
        component.bind(&mut lights, &mut reader).unwrap();

        assert_eq!(component.radius(), 10.0);
        assert_eq!(component.state(), LightState::Off);
        assert!(component.mask_auto_rotate());
        assert_eq!(component.offset(), Vector2::new(1.0, 2.0));
        assert_eq!(component.light().unwrap().offset(), Vector2::new(1.0, 2.0));
        assert_eq!(component.energy(), 1.0);
    }

    #[test]
    fn test_state_toggles_visibility_only() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);
        component.set_energy(3.0).unwrap();
        component.set_color(Color::RED).unwrap();

        component.set_state(LightState::Off).unwrap();
        assert!(!component.light().unwrap().enabled());
        component.set_state(LightState::Off).unwrap();
        assert!(!component.light().unwrap().enabled());

        component.set_state(LightState::On).unwrap();
        component.set_state(LightState::On).unwrap();
        let light = component.light().unwrap();
        assert!(light.enabled());
        assert_eq!(light.energy(), 3.0);
        assert_eq!(light.color(), Color::RED);
    }

    #[test]
    fn test_apply_remote_state_overrides_subset() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);
        component.set_offset(Vector2::new(1.0, 1.0)).unwrap();
        component.set_radius(3.5).unwrap();
        component.set_energy(0.5).unwrap();
        component.set_mask_auto_rotate(true);

        let color = Color::rgb(0.9, 0.1, 0.1);
        component
            .apply_remote_state(PointLightState {
                state: LightState::Off,
                color,
                mode: LightMode::Flicker,
            })
            .unwrap();

        assert_eq!(component.state(), LightState::Off);
        assert_eq!(component.color(), color);
        let light = component.light().unwrap();
        assert_eq!(light.mode(), LightMode::Flicker);
        assert!(!light.enabled());
        assert_eq!(light.color(), color);

        assert_eq!(component.offset(), Vector2::new(1.0, 1.0));
        assert_eq!(component.radius(), 3.5);
        assert_eq!(component.energy(), 0.5);
        assert!(component.mask_auto_rotate());

        let snapshot = component.component_state().unwrap();
        assert_eq!(snapshot.mode, LightMode::Flicker);
        assert_eq!(snapshot.state, LightState::Off);
    }

    #[test]
    fn test_mode_is_not_persisted() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);
        component
            .apply_remote_state(PointLightState {
                state: LightState::On,
                color: Color::BLUE,
                mode: LightMode::Pulse,
            })
            .unwrap();

        let mut writer = ObjectSerializer::writer();
        component.expose_data(&mut writer).unwrap();
        let keys: Vec<&str> = writer.table().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        assert!(!keys.contains(&"mode"));
    }

    #[test]
    fn test_lifecycle_ordering() {
        let mut lights = HeadlessLightManager::new();
        let transform = Transform::new(TransformId(3));
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());

        assert!(matches!(
            component.set_color(Color::RED),
            Err(LightSyncError::Lifecycle(LifecycleError::NotBound { .. }))
        ));
        assert!(component.initialize(&transform).is_err());
        assert!(component
            .apply_remote_state(PointLightState {
                state: LightState::Off,
                color: Color::RED,
                mode: LightMode::Constant,
            })
            .is_err());

        component.bind(&mut lights, &mut ObjectSerializer::empty_reader()).unwrap();
        assert!(component.bind(&mut lights, &mut ObjectSerializer::empty_reader()).is_err());
        assert_eq!(lights.created(), 1);

        component.initialize(&transform).unwrap();
        assert_eq!(component.stage(), LifecycleStage::Active);
        assert_eq!(component.light().unwrap().parent(), Some(TransformId(3)));
        assert!(component.initialize(&transform).is_err());
    }

    #[test]
    fn test_detach_releases_exactly_once() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);
        component.initialize(&Transform::new(TransformId(1))).unwrap();

        component.detach().unwrap();
        assert_eq!(lights.disposed(), 1);
        assert!(component.light().is_none());
        assert_eq!(component.stage(), LifecycleStage::Detached);

        assert!(matches!(
            component.detach(),
            Err(LightSyncError::Lifecycle(LifecycleError::Detached { .. }))
        ));
        assert!(component.set_energy(2.0).is_err());
        assert_eq!(lights.disposed(), 1);
        assert_eq!(lights.live(), 0);
    }

    #[test]
    fn test_detach_without_binding_is_noop() {
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        assert!(component.light().is_none());
        assert!(component.detach().is_ok());
        assert!(component.light().is_none());
        assert_eq!(component.stage(), LifecycleStage::Detached);
    }

    #[test]
    fn test_setters_write_through_to_handle() {
        let mut lights = HeadlessLightManager::new();
        let mut component = bound_light(&mut lights);

        let rotation = Angle::from_degrees(45.0);
        component.set_rotation(rotation).unwrap();
        component.set_offset(Vector2::new(-0.5, 3.0)).unwrap();
        component.set_energy(4.25).unwrap();
        component.set_color(Color::BLUE).unwrap();

        let light = component.light().unwrap();
        assert_eq!(light.rotation(), rotation);
        assert_eq!(light.offset(), Vector2::new(-0.5, 3.0));
        assert_eq!(light.energy(), 4.25);
        assert_eq!(light.color(), Color::BLUE);
        assert_eq!(component.rotation(), rotation);
        assert_eq!(component.offset(), Vector2::new(-0.5, 3.0));
    }

    #[test]
    fn test_failed_bind_releases_handle() {
        let mut lights = HeadlessLightManager::new();
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        let mut reader =
            ObjectSerializer::reader_from_str("radius = 7.0\ncolor = \"red\"\n").unwrap();

        assert!(component.bind(&mut lights, &mut reader).is_err());
        assert_eq!(component.stage(), LifecycleStage::Created);
        assert!(component.light().is_none());
        assert_eq!(component.radius(), DEFAULT_RADIUS);
        assert_eq!(lights.live(), 0);

        component.bind(&mut lights, &mut ObjectSerializer::empty_reader()).unwrap();
        assert_eq!(component.stage(), LifecycleStage::Bound);
        assert_eq!(lights.created(), 2);
        assert_eq!(lights.live(), 1);
    }

    #[test]
    fn test_drop_releases_handle() {
        let mut lights = HeadlessLightManager::new();
        {
            let _component = bound_light(&mut lights);
        }
        assert_eq!(lights.created(), 1);
        assert_eq!(lights.live(), 0);
    }

    #[test]
    fn test_received_colors_are_saturated() {
        let mut lights = HeadlessLightManager::new();
        let mut component = PointLightComponent::new(provisioned_cache(), falloff_dir());
        let mut reader = ObjectSerializer::reader_from_str(
            "color = { r = 2.0, g = -1.0, b = 0.5, a = 1.5 }\n",
        )
        .unwrap();
        component.bind(&mut lights, &mut reader).unwrap();
        assert_eq!(component.color().to_array(), [1.0, 0.0, 0.5, 1.0]);

        component
            .apply_remote_state(PointLightState {
                state: LightState::On,
                color: Color { r: 0.25, g: 3.0, b: -0.5, a: 1.0 },
                mode: LightMode::Constant,
            })
            .unwrap();
        assert_eq!(component.color().to_array(), [0.25, 1.0, 0.0, 1.0]);
        assert_eq!(component.light().unwrap().color(), component.color());
    }
}
