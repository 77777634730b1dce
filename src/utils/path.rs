//! # 路径工具函数
//!
//! 提供与数据目录相关的工具函数：
//! - 获取 WebForge 默认数据目录路径（`~/.webforge/`）
//! - 根据配置解析实际数据目录
//! - 判断路径是否位于某个根目录之内

use std::path::{Component, Path, PathBuf};

use crate::error::{EditorError, Result};

/// 获取 WebForge 默认数据目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的主目录路径。
///
/// # 错误
/// 如果无法确定用户主目录（如无 HOME 环境变量），返回配置错误。
///
/// # 示例
/// - Windows: `C:\Users\username\.webforge`
/// - Linux/macOS: `/home/username/.webforge`
pub fn get_default_data_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| EditorError::Config("无法获取用户主目录".to_string()))?;
    Ok(home.join(".webforge"))
}

/// 解析实际使用的数据目录
///
/// 配置中的 `dataDir` 优先，否则回退到 `~/.webforge/`。
pub fn resolve_data_path(data_dir: Option<&str>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
        _ => get_default_data_path(),
    }
}

/// 词法判断 `path` 是否位于 `root` 之内
///
/// 不访问文件系统（目标文件可能尚不存在），拒绝任何 `..` 组件，
/// 再比较前缀。
pub fn is_within(root: &Path, path: &Path) -> bool {
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return false;
    }
    path.starts_with(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_path_prefers_override() {
        let resolved = resolve_data_path(Some("/tmp/wf-data")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/wf-data"));
    }

    #[test]
    fn test_resolve_data_path_blank_override_falls_back() {
        let resolved = resolve_data_path(Some("  ")).unwrap();
        assert!(resolved.ends_with(".webforge"));
    }

    #[test]
    fn test_is_within() {
        let root = Path::new("/data/wf");
        assert!(is_within(root, Path::new("/data/wf/projects.json")));
        assert!(!is_within(root, Path::new("/data/wf/../etc/passwd")));
        assert!(!is_within(root, Path::new("/data/other/projects.json")));
    }
}
