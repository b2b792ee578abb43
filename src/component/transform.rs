//! Transform 组件
//!
//! 管理实体在二维世界中的位置和旋转。光源通过 `parent_to` 挂在它下面。

use crate::core::math::{Angle, Matrix3, Point2, Vector2};
use crate::network::TransformState;

/// 变换节点 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformId(pub u32);

/// 二维变换
#[derive(Debug, Clone)]
pub struct Transform {
    id: TransformId,

    /// 位置
    position: Vector2,

    /// 朝向
    rotation: Angle,

    /// 世界矩阵缓存（齐次 3x3）
    world_matrix: Matrix3,

    /// 世界矩阵是否需要更新
    world_dirty: bool,
}

impl Transform {
    /// 创建位于原点的变换
    pub fn new(id: TransformId) -> Self {
        Self {
            id,
            position: Vector2::zeros(),
            rotation: Angle::ZERO,
            world_matrix: Matrix3::identity(),
            world_dirty: true,
        }
    }

    /// 创建带位置的变换
    pub fn with_position(id: TransformId, position: Vector2) -> Self {
        let mut transform = Self::new(id);
        transform.position = position;
        transform
    }

    pub fn id(&self) -> TransformId {
        self.id
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// 设置位置
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.world_dirty = true;
    }

    /// 设置朝向
    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
        self.world_dirty = true;
    }

    /// 获取世界矩阵
    pub fn world_matrix(&mut self) -> Matrix3 {
        if self.world_dirty {
            self.update_world_matrix();
        }
        self.world_matrix
    }

    /// 把局部坐标变换到世界坐标
    pub fn transform_point(&mut self, local: Vector2) -> Vector2 {
        self.world_matrix().transform_point(&Point2::from(local)).coords
    }

    /// 应用服务器下发的权威状态
    pub fn apply_state(&mut self, state: &TransformState) {
        self.set_position(state.position);
        self.set_rotation(state.rotation);
    }

    /// 当前状态快照
    pub fn state(&self) -> TransformState {
        TransformState {
            position: self.position,
            rotation: self.rotation,
        }
    }

    // 组合：T * R
    fn update_world_matrix(&mut self) {
        let translation = Matrix3::new_translation(&self.position);
        let rotation = Matrix3::new_rotation(self.rotation.radians() as f32);
        self.world_matrix = translation * rotation;
        self.world_dirty = false;
    }
}
