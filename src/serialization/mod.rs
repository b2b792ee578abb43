//! 组件数据序列化
//!
//! 组件通过 [`ObjectSerializer::read_write`] 对每个持久化字段做对称的读或写：
//! 读取模式下返回存储值（缺失时为默认值）交给组件的 setter；
//! 写出模式下调用 getter 并把结果写入表中。
//!
//! 底层格式为 TOML 表。

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{Result, SerializationError};

/// 读写方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializerMode {
    Reading,
    Writing,
}

/// 单个组件的数据序列化器
#[derive(Debug, Clone)]
pub struct ObjectSerializer {
    mode: SerializerMode,
    table: toml::Table,
}

impl ObjectSerializer {
    /// 读取模式，从已有的表加载
    pub fn reader(table: toml::Table) -> Self {
        Self {
            mode: SerializerMode::Reading,
            table,
        }
    }

    /// 读取模式，没有任何存储数据（所有字段取默认值）
    pub fn empty_reader() -> Self {
        Self::reader(toml::Table::new())
    }

    /// 读取模式，从 TOML 文本解析
    pub fn reader_from_str(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| SerializationError::ParseError(e.to_string()))?;
        Ok(Self::reader(table))
    }

    /// 读取模式，取原型中名为 `component` 的子表
    pub fn for_component(prototype: &toml::Table, component: &str) -> Result<Self> {
        match prototype.get(component) {
            None => Ok(Self::empty_reader()),
            Some(toml::Value::Table(table)) => Ok(Self::reader(table.clone())),
            Some(other) => Err(SerializationError::InvalidField {
                key: component.to_string(),
                reason: format!("expected a table, found {}", other.type_str()),
            }
            .into()),
        }
    }

    /// 写出模式
    pub fn writer() -> Self {
        Self {
            mode: SerializerMode::Writing,
            table: toml::Table::new(),
        }
    }

    pub fn mode(&self) -> SerializerMode {
        self.mode
    }

    pub fn is_reading(&self) -> bool {
        self.mode == SerializerMode::Reading
    }

    /// 对一个字段做读或写
    ///
    /// - 读取：返回 `Some(存储值或 default)`，`get` 不会被调用
    /// - 写出：调用 `get` 写入表中，返回 `None`
    pub fn read_write<T, G>(&mut self, key: &str, default: T, get: G) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        G: FnOnce() -> T,
    {
        match self.mode {
            SerializerMode::Reading => match self.table.get(key) {
                None => Ok(Some(default)),
                Some(value) => value
                    .clone()
                    .try_into()
                    .map(Some)
                    .map_err(|e: toml::de::Error| {
                        SerializationError::InvalidField {
                            key: key.to_string(),
                            reason: e.to_string(),
                        }
                        .into()
                    }),
            },
            SerializerMode::Writing => {
                let value = toml::Value::try_from(get()).map_err(|e| {
                    SerializationError::Unrepresentable {
                        key: key.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                self.table.insert(key.to_string(), value);
                Ok(None)
            }
        }
    }

    pub fn table(&self) -> &toml::Table {
        &self.table
    }

    pub fn into_table(self) -> toml::Table {
        self.table
    }
}
