//! 光照模块
//!
//! - `light`：光源句柄与管理器接口、开关状态、渲染模式
//! - `falloff`：半径限制与衰减贴图映射
//! - `headless`：无窗口后端

mod light;
mod headless;
pub mod falloff;

pub use light::{LightHandle, LightId, LightManager, LightMode, LightState};
pub use headless::{HeadlessLight, HeadlessLightManager};
