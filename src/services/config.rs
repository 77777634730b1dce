//! # 编辑器配置服务
//!
//! 配置文件固定位于 `~/.webforge/editor-config.json`（不受 `dataDir` 覆盖影响）。
//! 读取失败时静默回退为默认配置，保证编辑器总能启动。

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::settings::EditorConfig;
use crate::services::file_guard;
use crate::utils::path;

const CONFIG_FILE: &str = "editor-config.json";

/// 配置文件的绝对路径
pub fn config_path() -> Result<PathBuf> {
    Ok(path::get_default_data_path()?.join(CONFIG_FILE))
}

/// 读取编辑器配置
///
/// 文件不存在、无法读取或 JSON 解析失败时返回默认配置。
pub async fn load_config() -> EditorConfig {
    match config_path() {
        Ok(p) => load_config_from(&p).await,
        Err(_) => EditorConfig::default(),
    }
}

/// 从指定路径读取编辑器配置（失败时回退默认值）
pub async fn load_config_from(config_path: &Path) -> EditorConfig {
    match file_guard::read_json::<EditorConfig>(config_path).await {
        Ok(Some(config)) => config,
        Ok(None) => EditorConfig::default(),
        Err(e) => {
            log::warn!("编辑器配置无效，使用默认值: {}", e);
            EditorConfig::default()
        }
    }
}

/// 保存编辑器配置
pub async fn save_config(config: &EditorConfig) -> Result<()> {
    let root = path::get_default_data_path()?;
    file_guard::write_json(&root, &root.join(CONFIG_FILE), config).await
}
