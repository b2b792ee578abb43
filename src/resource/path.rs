//! 资源路径
//!
//! 资源路径总是以 `/` 开头，使用 `/` 分隔，与磁盘路径解耦。

use std::fmt;
use std::ops::Div;
use std::path::{Path, PathBuf};

/// 资源路径（已规范化）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// 创建资源路径
    ///
    /// 会去掉空段和重复的分隔符，并补上前导 `/`。
    pub fn new(path: impl AsRef<str>) -> Self {
        let segments: Vec<&str> = path
            .as_ref()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        Self(format!("/{}", segments.join("/")))
    }

    /// 根路径
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 追加一段路径
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        Self::new(format!("{}/{}", self.0, segment.as_ref()))
    }

    /// 最后一段（文件名）
    pub fn file_name(&self) -> Option<&str> {
        self.0.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// 映射到资源根目录下的磁盘路径
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        let mut out = root.to_path_buf();
        for segment in self.0.split('/').filter(|s| !s.is_empty()) {
            out.push(segment);
        }
        out
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S: AsRef<str>> Div<S> for &ResourcePath {
    type Output = ResourcePath;

    fn div(self, rhs: S) -> ResourcePath {
        self.join(rhs)
    }
}

impl<S: AsRef<str>> Div<S> for ResourcePath {
    type Output = ResourcePath;

    fn div(self, rhs: S) -> ResourcePath {
        self.join(rhs)
    }
}
