//! 资源模块
//!
//! - `path`：资源路径
//! - `texture`：纹理资源与导入标志
//! - `cache`：资源提供者接口与内存缓存实现

mod path;
mod texture;
mod cache;

pub use path::ResourcePath;
pub use texture::{Texture, TextureFlags};
pub use cache::{ResourceCache, ResourceProvider};
