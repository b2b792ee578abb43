//! 组件基类

use std::any::Any;

use super::Transform;
use crate::core::error::Result;
use crate::network::NetId;
use crate::serialization::ObjectSerializer;

/// 组件 trait
///
/// 所有挂在实体上的组件的基础接口。生命周期钩子默认什么都不做。
pub trait Component: Any {
    /// 获取组件名称（同时是原型文件中的表名）
    fn name(&self) -> &'static str;

    /// 网络同步 ID，不参与同步的组件返回 `None`
    fn net_id(&self) -> Option<NetId> {
        None
    }

    /// 挂到实体上时调用一次
    fn initialize(&mut self, _transform: &Transform) -> Result<()> {
        Ok(())
    }

    /// 数据绑定（读取或写出持久化字段）
    fn expose_data(&mut self, _serializer: &mut ObjectSerializer) -> Result<()> {
        Ok(())
    }

    /// 从实体上移除时调用
    fn on_remove(&mut self) -> Result<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
