//! # 项目 Tauri Commands
//!
//! 提供项目列表页与编辑器入口相关的 command：
//! - `list_projects` / `create_project` - 当前用户的项目列表
//! - `open_project` - 加载项目并启动编辑会话
//! - `close_project` - 写入等待中的编辑并关闭会话

use std::sync::Arc;

use tauri::{AppHandle, State};

use crate::bridge::TauriBridge;
use crate::error::EditorError;
use crate::models::project::Project;
use crate::services::identity;
use crate::services::store::ProjectStore;
use crate::state::AppState;

/// 列出当前用户的全部项目（按名称排序）
#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<Project>, EditorError> {
    let identity = identity::require_identity(state.identity()).await?;
    state.store().list_projects(&identity.user_id).await
}

/// 创建空项目
///
/// 不创建任何文件，首次打开时由会话初始化补齐默认文件。
#[tauri::command]
pub async fn create_project(name: String, state: State<'_, AppState>) -> Result<Project, EditorError> {
    let identity = identity::require_identity(state.identity()).await?;
    let name = name.trim();
    if name.is_empty() {
        return Err(EditorError::Config("项目名称不能为空".to_string()));
    }
    state.store().create_project(&identity.user_id, name).await
}

/// 打开项目
///
/// 控制器启动后通过事件把初始文件、文件列表与预览推送到前端。
///
/// # 错误
/// - `authRequired`：未登录，前端跳转登录界面
/// - `notFound`：项目不存在或不属于当前用户，前端回到项目列表
/// - `bootstrap`：加载或默认文件创建失败
#[tauri::command]
pub async fn open_project(
    project_id: String,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<Project, EditorError> {
    let bridge = Arc::new(TauriBridge::new(app));
    state.open_project(&project_id, bridge.clone(), bridge).await
}

/// 关闭当前项目
#[tauri::command]
pub async fn close_project(state: State<'_, AppState>) -> Result<(), EditorError> {
    state.close_project().await
}
