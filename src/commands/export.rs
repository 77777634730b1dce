//! # 导出 Tauri Commands
//!
//! - `suggest_export_name` - 保存对话框的默认文件名
//! - `export_project` - 把当前会话的内存快照写到用户选择的路径
//! - `open_preview_external` - 把当前预览文档写入临时文件并用系统浏览器打开
//!
//! 目标路径由前端通过 `tauri-plugin-dialog` 的保存对话框选择，
//! 因此不受数据目录限制。

use std::path::PathBuf;

use tauri::State;

use crate::error::EditorError;
use crate::services::export::ExportFormat;
use crate::state::AppState;

/// 当前项目的建议导出文件名
#[tauri::command]
pub async fn suggest_export_name(
    format: ExportFormat,
    state: State<'_, AppState>,
) -> Result<String, EditorError> {
    let project = state.require_current()?.project();
    Ok(format.file_name(&project.name))
}

/// 导出当前项目
///
/// 导出内容取自会话内存，包含尚未落盘的编辑。
#[tauri::command]
pub async fn export_project(
    format: ExportFormat,
    dest: String,
    state: State<'_, AppState>,
) -> Result<(), EditorError> {
    let snapshot = state.require_current()?.snapshot();
    let bytes = format.render(&snapshot)?;
    tokio::fs::write(&dest, &bytes).await?;
    log::info!("已导出项目 {} 到 {}（{} 字节）", snapshot.name, dest, bytes.len());
    Ok(())
}

/// 在系统浏览器中打开当前预览
///
/// 临时文件按项目 ID 命名，重复打开会覆盖上一次的文件。
#[tauri::command]
pub async fn open_preview_external(state: State<'_, AppState>) -> Result<(), EditorError> {
    let controller = state.require_current()?;
    let project = controller.project();
    let html = match controller.previews().latest() {
        Some((_, html)) => html,
        None => controller
            .refresh_preview()
            .and_then(|_| controller.previews().latest())
            .map(|(_, html)| html)
            .ok_or_else(|| EditorError::not_found("preview", &project.id))?,
    };

    let path: PathBuf = std::env::temp_dir().join(format!("webforge-preview-{}.html", project.id));
    tokio::fs::write(&path, html.as_bytes()).await?;
    tauri_plugin_opener::open_path(&path, None::<&str>)
        .map_err(|e| EditorError::Io(format!("打开预览失败: {}", e)))?;
    Ok(())
}
