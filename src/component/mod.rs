//! 组件系统模块
//!
//! 提供 Entity、Transform 以及点光源组件。

mod component;
mod transform;
mod lifecycle;
mod entity;
mod point_light;

pub use component::Component;
pub use transform::{Transform, TransformId};
pub use lifecycle::LifecycleStage;
pub use entity::{Entity, EntityUid};
pub use point_light::PointLightComponent;
