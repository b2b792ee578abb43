//! Entity 组件容器
//!
//! 管理实体的变换节点和附加的组件，负责按顺序调用组件生命周期钩子。

use serde::{Deserialize, Serialize};

use super::{Component, PointLightComponent, Transform, TransformId};
use crate::core::error::{LightSyncError, Result};
use crate::network::ComponentState;
use crate::serialization::ObjectSerializer;

/// 实体 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityUid(pub u32);

/// 实体
pub struct Entity {
    uid: EntityUid,

    /// 实体名称
    name: String,

    /// 变换节点（每个实体都有）
    transform: Transform,

    /// 附加的组件列表
    components: Vec<Box<dyn Component>>,
}

impl Entity {
    /// 创建新的实体，变换节点与实体共用编号
    pub fn new(uid: EntityUid, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
            transform: Transform::new(TransformId(uid.0)),
            components: Vec::new(),
        }
    }

    pub fn uid(&self) -> EntityUid {
        self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    // ========== 组件管理 ==========

    /// 附加组件
    ///
    /// 先调用组件的 `initialize`，成功后才放入实体。
    /// 需要数据绑定的组件（如点光源）必须在此之前完成绑定。
    pub fn attach<T: Component>(&mut self, mut component: T) -> Result<()> {
        component.initialize(&self.transform)?;
        tracing::debug!(
            entity = self.uid.0,
            component = component.name(),
            "Component attached"
        );
        self.components.push(Box::new(component));
        Ok(())
    }

    /// 移除组件（按类型），会调用组件的 `on_remove`
    ///
    /// # 返回
    /// 如果找到并移除了组件，返回 `true`；否则返回 `false`
    pub fn remove_component<T: Component>(&mut self) -> Result<bool> {
        let Some(index) = self.components.iter().position(|c| c.as_any().is::<T>()) else {
            return Ok(false);
        };

        let mut component = self.components.remove(index);
        component.on_remove()?;
        tracing::debug!(
            entity = self.uid.0,
            component = component.name(),
            "Component removed"
        );
        Ok(true)
    }

    /// 获取组件的不可变引用
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|c| c.as_any().downcast_ref::<T>())
    }

    /// 获取组件的可变引用
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| c.as_any_mut().downcast_mut::<T>())
    }

    /// 检查是否有指定类型的组件
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.iter().any(|c| c.as_any().is::<T>())
    }

    /// 获取组件数量
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    // ========== 持久化与同步 ==========

    /// 把所有组件的持久化字段写出为原型表（每个组件一个子表）
    pub fn save_components(&mut self) -> Result<toml::Table> {
        let mut prototype = toml::Table::new();
        for component in &mut self.components {
            let mut serializer = ObjectSerializer::writer();
            component.expose_data(&mut serializer)?;
            prototype.insert(
                component.name().to_string(),
                toml::Value::Table(serializer.into_table()),
            );
        }
        Ok(prototype)
    }

    /// 应用权威快照，按快照种类路由到目标组件
    pub fn handle_component_state(&mut self, state: ComponentState) -> Result<()> {
        match state {
            ComponentState::Transform(transform) => {
                self.transform.apply_state(&transform);
                Ok(())
            }
            ComponentState::PointLight(light) => {
                let uid = self.uid;
                self.get_component_mut::<PointLightComponent>()
                    .ok_or_else(|| {
                        LightSyncError::State(format!(
                            "entity {} has no {} component",
                            uid.0,
                            PointLightComponent::NAME
                        ))
                    })?
                    .apply_remote_state(light)
            }
        }
    }

    /// 销毁实体，按附加的逆序移除所有组件
    ///
    /// 所有组件都会被移除；返回遇到的第一个错误。
    pub fn despawn(mut self) -> Result<()> {
        let mut first_error = None;
        while let Some(mut component) = self.components.pop() {
            if let Err(e) = component.on_remove() {
                first_error.get_or_insert(e);
            }
        }
        tracing::debug!(entity = self.uid.0, name = %self.name, "Entity despawned");
        first_error.map_or(Ok(()), Err)
    }
}

impl Drop for Entity {
    fn drop(&mut self) {
        // 未经 despawn 直接丢弃时，仍要释放组件持有的后端资源
        while let Some(mut component) = self.components.pop() {
            if let Err(e) = component.on_remove() {
                tracing::warn!(
                    entity = self.uid.0,
                    component = component.name(),
                    error = %e,
                    "Component cleanup failed on drop"
                );
            }
        }
    }
}
