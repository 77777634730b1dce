//! # 文件写入守卫服务
//!
//! 统一所有对数据目录下文件的修改操作：
//!
//! ## 路径安全验证
//! 所有写入/删除操作前验证目标路径是否在数据目录下，
//! 防止意外修改数据目录之外的文件。
//!
//! ## 原子写入
//! 先写入同目录下的临时文件 `<name>.tmp`，再 `rename` 覆盖目标文件。
//! 写入中途失败不会留下半截的表文件。
//!
//! ## 使用方式
//! 项目中所有对数据文件的修改必须通过以下入口函数：
//! - `safe_write_file()` - 安全写入文件
//! - `safe_delete_file()` - 安全删除文件
//! - `write_json()` - 序列化后安全写入

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{EditorError, Result};
use crate::utils::path;

// ============ 公开入口函数 ============

/// 安全写入文件（统一入口）
///
/// 执行流程：
/// 1. 验证路径在数据目录下
/// 2. 确保父目录存在
/// 3. 写入临时文件后重命名为目标文件
///
/// # 参数
/// - `root` - 数据目录
/// - `file_path` - 目标文件的绝对路径
/// - `content` - 要写入的字节内容
///
/// # 错误
/// 路径验证失败或写入失败时返回错误
pub async fn safe_write_file(root: &Path, file_path: &Path, content: &[u8]) -> Result<()> {
    validate_data_path(root, file_path)?;

    if let Some(parent) = file_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = file_path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    tokio::fs::write(&tmp_path, content).await?;
    tokio::fs::rename(&tmp_path, file_path).await?;
    Ok(())
}

/// 安全删除文件（统一入口）
///
/// 文件不存在时视为成功。
pub async fn safe_delete_file(root: &Path, file_path: &Path) -> Result<()> {
    validate_data_path(root, file_path)?;

    match tokio::fs::remove_file(file_path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// 将值序列化为 2 空格缩进的 JSON 后安全写入
pub async fn write_json<T: Serialize + ?Sized>(
    root: &Path,
    file_path: &Path,
    value: &T,
) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    safe_write_file(root, file_path, content.as_bytes()).await
}

/// 读取 JSON 文件；文件不存在时返回 `None`
pub async fn read_json<T: DeserializeOwned>(file_path: &Path) -> Result<Option<T>> {
    match tokio::fs::read_to_string(file_path).await {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ============ 内部辅助函数 ============

/// 验证路径是否在数据目录下
///
/// # 错误
/// 路径不在数据目录下时返回安全检查失败错误
fn validate_data_path(root: &Path, file_path: &Path) -> Result<()> {
    if !path::is_within(root, file_path) {
        return Err(EditorError::Forbidden(format!(
            "安全检查失败：路径 {} 不在数据目录 {} 下",
            file_path.display(),
            root.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_safe_write_creates_parent_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("table.json");

        safe_write_file(dir.path(), &target, b"[]").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "[]");
        assert!(!dir.path().join("nested").join("table.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_safe_write_rejects_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("..").join("escape.json");

        let err = safe_write_file(dir.path(), &outside, b"x").await.unwrap_err();
        assert!(matches!(err, EditorError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_read_json_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let value: Option<Vec<String>> = read_json(&dir.path().join("absent.json")).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_safe_delete_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        safe_delete_file(dir.path(), &dir.path().join("absent.json"))
            .await
            .unwrap();
    }
}
