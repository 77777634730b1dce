//! # 身份 Tauri Commands
//!
//! - `sign_in` / `sign_out` - 以邮箱登录、退出登录
//! - `current_identity` - 启动时判断是否需要跳转登录界面

use tauri::State;

use crate::error::EditorError;
use crate::models::settings::Identity;
use crate::services::identity::IdentityProvider;
use crate::state::AppState;

/// 以邮箱登录
#[tauri::command]
pub async fn sign_in(email: String, state: State<'_, AppState>) -> Result<Identity, EditorError> {
    state.identity().sign_in(&email).await
}

/// 退出登录
///
/// 先关闭当前项目（写入等待中的编辑），再删除本地身份。
#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<(), EditorError> {
    if let Err(e) = state.close_project().await {
        log::warn!("退出登录前保存失败: {}", e);
    }
    state.identity().sign_out().await
}

/// 当前登录身份，未登录时为 `null`
#[tauri::command]
pub async fn current_identity(state: State<'_, AppState>) -> Result<Option<Identity>, EditorError> {
    state.identity().current_identity().await
}
