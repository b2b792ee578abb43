//! 资源缓存
//!
//! 纹理在加载时一次性应用导入标志，之后只读共享。
//! 组件只通过 [`ResourceProvider`] 读取，不会修改缓存内容。

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use super::{ResourcePath, Texture, TextureFlags};
use crate::core::config::ResourceConfig;
use crate::core::error::{ResourceError, Result};
use crate::lighting::falloff::{falloff_texture_path, FALLOFF_BUCKETS};

/// 资源提供者
///
/// 解析是同步的，资源被假定已经加载完毕。
pub trait ResourceProvider {
    /// 按路径解析纹理，缺失时返回 [`ResourceError::MissingAsset`]
    fn resolve_texture(&self, path: &ResourcePath) -> Result<Arc<Texture>>;
}

/// 内存中的纹理缓存
#[derive(Debug)]
pub struct ResourceCache {
    /// 磁盘上的资源根目录
    root: PathBuf,
    /// 导入标志
    import_flags: TextureFlags,
    textures: HashMap<ResourcePath, Arc<Texture>>,
}

impl ResourceCache {
    pub fn new(root: impl Into<PathBuf>, import_flags: TextureFlags) -> Self {
        Self {
            root: root.into(),
            import_flags,
            textures: HashMap::new(),
        }
    }

    /// 根据资源配置创建空缓存
    pub fn from_config(config: &ResourceConfig) -> Self {
        let flags = TextureFlags {
            filter: config.filter,
            ..TextureFlags::default()
        };
        Self::new(&config.root, flags)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn import_flags(&self) -> TextureFlags {
        self.import_flags
    }

    /// 从磁盘加载纹理（已缓存则直接返回）
    pub fn load_texture(&mut self, path: &ResourcePath) -> Result<Arc<Texture>> {
        if let Some(texture) = self.textures.get(path) {
            return Ok(Arc::clone(texture));
        }

        let fs_path = path.to_fs_path(&self.root);
        let image = image::open(&fs_path)
            .map_err(|e| ResourceError::LoadFailed {
                path: fs_path.clone(),
                reason: e.to_string(),
            })?
            .to_luma8();

        debug!(
            path = %path,
            width = image.width(),
            height = image.height(),
            "Texture loaded from disk"
        );

        Ok(self.insert_image(path.clone(), image))
    }

    /// 将已解码的图像作为纹理放入缓存
    pub fn insert_image(&mut self, path: ResourcePath, image: image::GrayImage) -> Arc<Texture> {
        let texture = Arc::new(Texture::new(path.clone(), image, self.import_flags));
        self.textures.insert(path, Arc::clone(&texture));
        texture
    }

    /// 预置所有桶的衰减贴图
    ///
    /// 磁盘上存在的贴图直接加载；缺失时如果允许则生成程序化贴图，
    /// 否则返回 [`ResourceError::MissingAsset`]。返回预置的贴图数量。
    pub fn provision_falloff_textures(
        &mut self,
        dir: &ResourcePath,
        procedural_fallback: bool,
        procedural_size: u32,
    ) -> Result<usize> {
        let mut procedural = 0;

        for bucket in FALLOFF_BUCKETS {
            let path = falloff_texture_path(dir, bucket);
            if self.textures.contains_key(&path) {
                continue;
            }

            if path.to_fs_path(&self.root).is_file() {
                self.load_texture(&path)?;
            } else if procedural_fallback {
                let texture = Texture::falloff(path.clone(), procedural_size, self.import_flags);
                self.textures.insert(path, Arc::new(texture));
                procedural += 1;
            } else {
                return Err(ResourceError::MissingAsset(path.to_string()).into());
            }
        }

        let count = FALLOFF_BUCKETS.count();
        info!(dir = %dir, count, procedural, "Falloff textures provisioned");
        Ok(count)
    }

    pub fn contains(&self, path: &ResourcePath) -> bool {
        self.textures.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl ResourceProvider for ResourceCache {
    fn resolve_texture(&self, path: &ResourcePath) -> Result<Arc<Texture>> {
        self.textures
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::MissingAsset(path.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LightSyncError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("light_sync_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_procedural_provisioning() {
        let mut cache = ResourceCache::new(scratch_dir("procedural"), TextureFlags::FILTERED);
        let dir = ResourcePath::new("/Textures/Effects/Light");

        let count = cache.provision_falloff_textures(&dir, true, 16).unwrap();
        assert_eq!(count, 9);
        assert_eq!(cache.len(), 9);

        for bucket in FALLOFF_BUCKETS {
            let texture = cache.resolve_texture(&falloff_texture_path(&dir, bucket)).unwrap();
            assert!(texture.flags().filter);
            assert_eq!(texture.width(), 16);
        }
    }

    #[test]
    fn test_missing_asset_without_fallback() {
        let mut cache = ResourceCache::new(scratch_dir("strict"), TextureFlags::default());
        let dir = ResourcePath::new("/Textures/Effects/Light");

        let err = cache.provision_falloff_textures(&dir, false, 16).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_unknown_path() {
        let cache = ResourceCache::new("unused", TextureFlags::default());
        match cache.resolve_texture(&ResourcePath::new("/nope.png")) {
            Err(LightSyncError::Resource(ResourceError::MissingAsset(path))) => {
                assert_eq!(path, "/nope.png");
            }
            other => panic!("unexpected result: {:?}", other.map(|t| t.path().clone())),
        }
    }

    #[test]
    fn test_load_from_disk_applies_import_flags() {
        let root = scratch_dir("disk");
        let path = ResourcePath::new("/Textures/Effects/Light/lighting_falloff_3.png");
        let fs_path = path.to_fs_path(&root);
        std::fs::create_dir_all(fs_path.parent().unwrap()).unwrap();
        image::GrayImage::from_pixel(4, 4, image::Luma([200])).save(&fs_path).unwrap();

        let mut cache = ResourceCache::new(&root, TextureFlags::FILTERED);
        let texture = cache.load_texture(&path).unwrap();
        assert_eq!(texture.width(), 4);
        assert_eq!(texture.luminance(1, 1), Some(200));
        assert!(texture.flags().filter);

        // 其余桶走程序化贴图，已从磁盘加载的保持不变
        let dir = ResourcePath::new("/Textures/Effects/Light");
        cache.provision_falloff_textures(&dir, true, 8).unwrap();
        assert_eq!(cache.resolve_texture(&path).unwrap().width(), 4);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_load_failure_reports_path() {
        let mut cache = ResourceCache::new(scratch_dir("absent"), TextureFlags::default());
        let err = cache.load_texture(&ResourcePath::new("/absent.png")).unwrap_err();
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("absent.png"));
    }
}
