//! 网络状态同步
//!
//! 服务器下发的权威快照是一个带标签的枚举 [`ComponentState`]，
//! 在分发前按变体确定目标组件，不做运行时类型判断。
//! [`StateChannel`] 按到达顺序缓存快照，并在帧内统一应用到实体。

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::component::{Entity, EntityUid};
use crate::core::error::{Result, SerializationError};
use crate::core::math::{Angle, Color, Vector2};
use crate::lighting::{LightMode, LightState};
use crate::{net_debug, net_warn};

/// 组件网络 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetId(pub u32);

impl NetId {
    pub const TRANSFORM: NetId = NetId(1);
    pub const POINT_LIGHT: NetId = NetId(17);
}

/// 点光源快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLightState {
    pub state: LightState,
    pub color: Color,
    pub mode: LightMode,
}

/// 变换快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub position: Vector2,
    pub rotation: Angle,
}

/// 组件快照，按组件种类打标签
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ComponentState {
    PointLight(PointLightState),
    Transform(TransformState),
}

impl ComponentState {
    pub fn net_id(&self) -> NetId {
        match self {
            ComponentState::PointLight(_) => NetId::POINT_LIGHT,
            ComponentState::Transform(_) => NetId::TRANSFORM,
        }
    }
}

/// 发往某个实体的快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity: EntityUid,
    pub state: ComponentState,
}

/// 快照脚本文件格式
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotScript {
    #[serde(default)]
    snapshot: Vec<EntityState>,
}

/// 快照队列
#[derive(Debug, Default)]
pub struct StateChannel {
    pending: VecDeque<EntityState>,
}

impl StateChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 TOML 快照脚本加载（`[[snapshot]]` 数组）
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let script: SnapshotScript = toml::from_str(contents)
            .map_err(|e| SerializationError::ParseError(e.to_string()))?;
        Ok(Self {
            pending: script.snapshot.into(),
        })
    }

    /// 收到一个快照
    pub fn push(&mut self, entity: EntityUid, state: ComponentState) {
        self.pending.push_back(EntityState { entity, state });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// 按到达顺序应用所有缓存的快照，返回已应用的数量
    ///
    /// 找不到目标实体的快照会被丢弃。应用失败时立即返回错误，
    /// 失败的快照被丢弃，其后的快照保留在队列中。
    pub fn apply_pending(&mut self, entities: &mut [Entity]) -> Result<usize> {
        let mut applied = 0;

        while let Some(EntityState { entity, state }) = self.pending.pop_front() {
            let Some(target) = entities.iter_mut().find(|e| e.uid() == entity) else {
                net_warn!(entity = entity.0, net_id = state.net_id().0, "Snapshot for unknown entity dropped");
                continue;
            };

            net_debug!(entity = entity.0, net_id = state.net_id().0, "Applying component state");
            target.handle_component_state(state)?;
            applied += 1;
        }

        Ok(applied)
    }
}
