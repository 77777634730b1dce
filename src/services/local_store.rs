//! # 本地 JSON 项目存储
//!
//! `ProjectStore` 的生产实现，在数据目录下维护两张 JSON 表：
//! - `projects.json` - `Vec<Project>`
//! - `project_files.json` - `Vec<ProjectFile>`
//!
//! ## 并发
//! 所有 "读取 → 修改 → 写回" 操作由同一把 `tokio::sync::Mutex` 串行化，
//! 同一进程内不会出现交错写入；写回通过 `file_guard` 原子替换表文件。

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{EditorError, Result};
use crate::models::project::{NewProjectFile, Project, ProjectFile};
use crate::services::file_guard;
use crate::services::store::{ProjectStore, new_id, unix_timestamp};

const PROJECTS_TABLE: &str = "projects.json";
const FILES_TABLE: &str = "project_files.json";

/// 本地 JSON 项目存储
pub struct LocalProjectStore {
    /// 数据目录
    root: PathBuf,
    /// 表级写锁
    write_lock: Mutex<()>,
}

impl LocalProjectStore {
    /// 以指定数据目录创建存储（目录在首次写入时创建）
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn projects_path(&self) -> PathBuf {
        self.root.join(PROJECTS_TABLE)
    }

    fn files_path(&self) -> PathBuf {
        self.root.join(FILES_TABLE)
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(file_guard::read_json(&self.projects_path())
            .await?
            .unwrap_or_default())
    }

    async fn load_files(&self) -> Result<Vec<ProjectFile>> {
        Ok(file_guard::read_json(&self.files_path())
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProjectStore for LocalProjectStore {
    async fn find_project(&self, project_id: &str, owner_id: &str) -> Result<Project> {
        self.load_projects()
            .await?
            .into_iter()
            .find(|p| p.id == project_id && p.user_id == owner_id)
            .ok_or_else(|| EditorError::not_found("project", project_id))
    }

    async fn list_files(&self, project_id: &str) -> Result<Vec<ProjectFile>> {
        let mut files: Vec<ProjectFile> = self
            .load_files()
            .await?
            .into_iter()
            .filter(|f| f.project_id == project_id)
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    async fn insert_files(&self, files: Vec<NewProjectFile>) -> Result<Vec<ProjectFile>> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.load_files().await?;

        // 同一项目内文件名唯一
        for new_file in &files {
            if table
                .iter()
                .any(|f| f.project_id == new_file.project_id && f.name == new_file.name)
            {
                return Err(EditorError::Persistence(format!(
                    "文件名已存在: {}",
                    new_file.name
                )));
            }
        }

        let now = unix_timestamp();
        let inserted: Vec<ProjectFile> = files
            .into_iter()
            .map(|f| ProjectFile {
                id: new_id(),
                project_id: f.project_id,
                name: f.name,
                language: f.language,
                content: f.content,
                updated_at: Some(now),
            })
            .collect();
        table.extend(inserted.iter().cloned());

        file_guard::write_json(&self.root, &self.files_path(), &table)
            .await
            .map_err(|e| EditorError::Persistence(e.to_string()))?;
        Ok(inserted)
    }

    async fn update_file_content(&self, file_id: &str, content: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.load_files().await?;

        let file = table
            .iter_mut()
            .find(|f| f.id == file_id)
            .ok_or_else(|| EditorError::not_found("file", file_id))?;
        file.content = content.to_string();
        file.updated_at = Some(unix_timestamp());

        file_guard::write_json(&self.root, &self.files_path(), &table)
            .await
            .map_err(|e| EditorError::Persistence(e.to_string()))
    }

    async fn list_projects(&self, owner_id: &str) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .load_projects()
            .await?
            .into_iter()
            .filter(|p| p.user_id == owner_id)
            .collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    async fn create_project(&self, owner_id: &str, name: &str) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::Persistence("项目名称不能为空".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut table = self.load_projects().await?;
        let project = Project {
            id: new_id(),
            name: name.to_string(),
            user_id: owner_id.to_string(),
        };
        table.push(project.clone());

        file_guard::write_json(&self.root, &self.projects_path(), &table)
            .await
            .map_err(|e| EditorError::Persistence(e.to_string()))?;
        log::info!("已创建项目 {} ({})", project.name, project.id);
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::defaults;

    #[tokio::test]
    async fn test_find_project_scoped_to_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        let project = store.create_project("alice", "Site").await.unwrap();

        let found = store.find_project(&project.id, "alice").await.unwrap();
        assert_eq!(found, project);

        let err = store.find_project(&project.id, "mallory").await.unwrap_err();
        assert!(matches!(err, EditorError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_insert_then_list_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        let project = store.create_project("alice", "Site").await.unwrap();

        let inserted = store
            .insert_files(defaults::default_files(&project.id))
            .await
            .unwrap();
        assert_eq!(inserted.len(), 3);
        assert!(inserted.iter().all(|f| !f.id.is_empty()));

        let names: Vec<String> = store
            .list_files(&project.id)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["index.html", "script.js", "style.css"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        store
            .insert_files(defaults::default_files("p-1"))
            .await
            .unwrap();

        let err = store
            .insert_files(defaults::default_files("p-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_update_file_content_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        let inserted = store
            .insert_files(defaults::default_files("p-1"))
            .await
            .unwrap();

        store
            .update_file_content(&inserted[0].id, "<p>hi</p>")
            .await
            .unwrap();

        // 新实例重新读取磁盘数据
        let reopened = LocalProjectStore::new(dir.path());
        let files = reopened.list_files("p-1").await.unwrap();
        let index = files.iter().find(|f| f.name == "index.html").unwrap();
        assert_eq!(index.content, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_update_unknown_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        let err = store.update_file_content("missing", "x").await.unwrap_err();
        assert!(err.is_not_found_or_forbidden());
    }

    #[tokio::test]
    async fn test_list_projects_filters_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalProjectStore::new(dir.path());
        store.create_project("alice", "Zeta").await.unwrap();
        store.create_project("alice", "Alpha").await.unwrap();
        store.create_project("bob", "Other").await.unwrap();

        let names: Vec<String> = store
            .list_projects("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
