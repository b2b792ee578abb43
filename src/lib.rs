//! light_sync - 可网络同步的点光源组件
//!
//! 一个挂在实体上的点光源组件：独占渲染后端的光源句柄、
//! 提供带范围校验的可变属性、通过统一的数据绑定接口持久化，
//! 并接受服务器下发的权威快照。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（数学、日志、配置、错误处理）
//! - `component`: 实体、变换节点、点光源组件
//! - `lighting`: 光源句柄接口、衰减半径映射、无窗口后端
//! - `resource`: 资源路径、纹理、资源缓存
//! - `serialization`: 组件数据绑定
//! - `network`: 权威快照与快照队列
//!
//! # 使用示例
//!
//! ```no_run
//! use std::sync::Arc;
//! use light_sync::component::{Entity, EntityUid, PointLightComponent};
//! use light_sync::lighting::HeadlessLightManager;
//! use light_sync::resource::{ResourceCache, ResourcePath, TextureFlags};
//! use light_sync::serialization::ObjectSerializer;
//!
//! let dir = ResourcePath::new("/Textures/Effects/Light");
//! let mut cache = ResourceCache::new("resources", TextureFlags::FILTERED);
//! cache.provision_falloff_textures(&dir, true, 64)?;
//!
//! let mut lights = HeadlessLightManager::new();
//! let mut light = PointLightComponent::new(Arc::new(cache), dir);
//! light.bind(&mut lights, &mut ObjectSerializer::empty_reader())?;
//!
//! let mut entity = Entity::new(EntityUid(1), "lamp");
//! entity.attach(light)?;
//! # Ok::<(), light_sync::core::LightSyncError>(())
//! ```

pub mod core;
pub mod component;
pub mod lighting;
pub mod resource;
pub mod serialization;
pub mod network;
