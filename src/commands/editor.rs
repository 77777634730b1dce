//! # 编辑器 Tauri Commands
//!
//! - `workbench_event` - 前端全部交互事件的唯一入口
//! - `get_save_status` - 查询当前保存状态（前端重新挂载时同步指示器）
//! - `get_editor_config` / `save_editor_config` - 编辑器配置读写

use tauri::State;

use crate::error::EditorError;
use crate::models::display::SaveStatus;
use crate::models::settings::EditorConfig;
use crate::services::config;
use crate::services::workbench::WorkbenchEvent;
use crate::state::AppState;

/// 分派一个工作台事件到当前会话
///
/// 必须是异步 command：内容变更会在 tokio 运行时上布防自动保存定时器。
#[tauri::command]
pub async fn workbench_event(
    event: WorkbenchEvent,
    state: State<'_, AppState>,
) -> Result<(), EditorError> {
    state.require_current()?.dispatch(event)
}

#[tauri::command]
pub async fn get_save_status(state: State<'_, AppState>) -> Result<SaveStatus, EditorError> {
    Ok(state.require_current()?.save_status())
}

#[tauri::command]
pub async fn get_editor_config(state: State<'_, AppState>) -> Result<EditorConfig, EditorError> {
    Ok(state.config())
}

/// 保存编辑器配置
///
/// 写入 `~/.webforge/editor-config.json`，对之后打开的项目生效；`dataDir` 需重启生效。
#[tauri::command]
pub async fn save_editor_config(
    config: EditorConfig,
    state: State<'_, AppState>,
) -> Result<(), EditorError> {
    config::save_config(&config).await?;
    state.set_config(config);
    Ok(())
}
