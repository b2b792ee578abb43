//! light_sync 演示程序
//!
//! 按完整的生命周期驱动一个点光源：
//!
//! 1. 加载配置文件（config.toml）并应用命令行覆盖
//! 2. 初始化日志系统
//! 3. 预置衰减贴图
//! 4. 从原型文件生成带点光源的实体
//! 5. 应用快照脚本中的权威状态
//! 6. 写出组件数据，销毁实体
//!
//! # 命令行参数
//!
//! - `--resources <dir>`: 资源根目录
//! - `--log-level <level>`: 日志级别
//! - `--prototype <file>`: 实体原型文件（TOML）
//! - `--snapshots <file>`: 快照脚本文件（TOML）

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use light_sync::component::{Entity, EntityUid, PointLightComponent};
use light_sync::core::{log, Config};
use light_sync::lighting::HeadlessLightManager;
use light_sync::network::StateChannel;
use light_sync::resource::{ResourceCache, ResourcePath};
use light_sync::serialization::ObjectSerializer;

const DEFAULT_PROTOTYPE: &str = r#"
[PointLight]
radius = 6.0
color = { r = 1.0, g = 0.85, b = 0.6, a = 1.0 }
energy = 1.5
offset = [0.0, 0.5]
autoRot = true
"#;

const DEFAULT_SNAPSHOTS: &str = r#"
[[snapshot]]
entity = 1
[snapshot.state]
kind = "PointLight"
state = "off"
color = { r = 1.0, g = 0.2, b = 0.2, a = 1.0 }
mode = "flicker"

[[snapshot]]
entity = 1
[snapshot.state]
kind = "Transform"
position = [4.0, -2.0]
rotation = 1.5707963
"#;

fn main() -> Result<()> {
    let mut config = Config::from_file_or_default("config.toml");
    config.apply_args(std::env::args());
    config.validate().context("invalid configuration")?;

    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!(version = env!("CARGO_PKG_VERSION"), "light_sync starting");

    let falloff_dir = ResourcePath::new(&config.resources.falloff_dir);
    let mut cache = ResourceCache::from_config(&config.resources);
    cache
        .provision_falloff_textures(
            &falloff_dir,
            config.resources.procedural_fallback,
            config.resources.procedural_size,
        )
        .context("falloff textures are not provisioned")?;
    let resources = Arc::new(cache);

    let prototype_src = read_or_default(config.demo.prototype.as_deref(), DEFAULT_PROTOTYPE)?;
    let prototype: toml::Table = prototype_src.parse().context("invalid prototype")?;

    let mut lights = HeadlessLightManager::new();
    let mut entity = Entity::new(EntityUid(1), "lamp");

    let mut light = PointLightComponent::new(resources, falloff_dir);
    let mut data = ObjectSerializer::for_component(&prototype, PointLightComponent::NAME)?;
    light.bind(&mut lights, &mut data)?;
    entity.attach(light)?;
    report(&mut entity, "spawned");

    let snapshots_src = read_or_default(config.demo.snapshots.as_deref(), DEFAULT_SNAPSHOTS)?;
    let mut channel = StateChannel::from_toml_str(&snapshots_src)?;
    let mut entities = vec![entity];
    let applied = channel.apply_pending(&mut entities)?;
    info!(applied, "Snapshots applied");

    let mut entity = entities.remove(0);
    report(&mut entity, "reconciled");

    let saved = entity.save_components()?;
    println!("{}", toml::to_string_pretty(&saved).context("failed to render saved data")?);

    entity.despawn()?;
    info!(created = lights.created(), live = lights.live(), "Shutting down");
    Ok(())
}

/// 读取文件内容，未指定路径时使用内置内容
fn read_or_default(path: Option<&str>, default: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path)),
        None => Ok(default.to_string()),
    }
}

fn report(entity: &mut Entity, phase: &str) {
    let Some(light) = entity.get_component::<PointLightComponent>() else {
        return;
    };
    let offset = light.offset();
    let mode = light.light().map(|handle| handle.mode());
    let texture = light
        .light()
        .and_then(|handle| handle.texture())
        .map(|t| t.path().to_string());
    let (radius, energy, state, color) = (light.radius(), light.energy(), light.state(), light.color());

    // 光源中心在世界空间中的位置
    let world = entity.transform_mut().transform_point(offset);
    info!(
        phase,
        radius,
        energy,
        state = ?state,
        color = ?color.to_array(),
        mode = ?mode,
        texture = ?texture,
        world = ?(world.x, world.y),
        "Point light"
    );
}
