//! # 会话初始化
//!
//! 打开项目时的完整加载流程：
//! 1. 按 (项目 ID, 当前用户) 读取项目元数据，不匹配即 `NotFound`
//! 2. 读取项目的全部文件（按文件名排序）
//! 3. 文件为空时批量插入三个默认文件，并以存储返回的插入结果作为权威文件列表
//! 4. 选定初始激活文件
//!
//! 任何一步失败都会中止初始化，不会向编辑器暴露不完整的会话。

use crate::error::{EditorError, Result};
use crate::models::settings::Identity;
use crate::services::defaults;
use crate::services::session::EditorSession;
use crate::services::store::ProjectStore;

/// 加载项目并构造编辑会话
///
/// # 错误
/// - 项目 ID 为空、项目不存在或不属于当前用户：`NotFound`
/// - 其他加载或默认文件创建失败：`Bootstrap`
pub async fn bootstrap(
    store: &dyn ProjectStore,
    identity: &Identity,
    project_id: &str,
) -> Result<EditorSession> {
    let project_id = project_id.trim();
    if project_id.is_empty() {
        return Err(EditorError::not_found("project", project_id));
    }

    let project = store
        .find_project(project_id, &identity.user_id)
        .await
        .map_err(into_bootstrap_error)?;

    let mut files = store
        .list_files(&project.id)
        .await
        .map_err(into_bootstrap_error)?;

    if files.is_empty() {
        log::info!("项目 {} 没有文件，创建默认文件", project.id);
        files = store
            .insert_files(defaults::default_files(&project.id))
            .await
            .map_err(into_bootstrap_error)?;
    }

    log::info!(
        "已加载项目 {} ({})，共 {} 个文件",
        project.name,
        project.id,
        files.len()
    );
    Ok(EditorSession::new(project, files))
}

/// 保留 "不存在 / 无权限" 的区分，其余错误统一归为初始化失败
fn into_bootstrap_error(err: EditorError) -> EditorError {
    match err {
        EditorError::NotFound { .. } | EditorError::Forbidden(_) | EditorError::AuthRequired => err,
        other => EditorError::Bootstrap(other.to_string()),
    }
}
