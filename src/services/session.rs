//! # 编辑会话状态
//!
//! `EditorSession` 是当前打开项目的内存聚合：项目元数据、文件列表、唯一的激活文件指针，
//! 以及保存状态。每次打开项目都从存储重新加载，关闭项目即销毁。
//!
//! ## 不变量
//! - 激活文件（若存在）一定是文件列表中的成员
//! - 内存中的文件内容是显示与预览的唯一依据；写入失败时，
//!   最后一次成功持久化的内容仍可通过 `persisted_content` 查看

use std::collections::HashMap;

use crate::error::{EditorError, Result};
use crate::models::display::{FileListItem, SaveStatus, TabIndicator};
use crate::models::project::{Project, ProjectFile, ProjectSnapshot};
use crate::services::defaults::INDEX_HTML;
use crate::services::language;

/// 切换激活文件的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// 请求的文件已是激活文件，未做任何改动
    AlreadyActive,
    /// 已切换，需要把内容按语言模式装入编辑器
    Opened {
        content: String,
        language: &'static str,
        is_html: bool,
    },
}

/// 编辑会话
#[derive(Debug, Clone)]
pub struct EditorSession {
    project: Project,
    files: Vec<ProjectFile>,
    active_id: Option<String>,
    save_status: SaveStatus,
    /// 文件 ID → 最后一次确认持久化的内容
    persisted: HashMap<String, String>,
}

impl EditorSession {
    /// 用加载结果创建会话，并选定初始激活文件：
    /// 优先名为 `index.html` 的文件，否则为列表中的第一个文件。
    pub fn new(project: Project, files: Vec<ProjectFile>) -> Self {
        let active_id = files
            .iter()
            .find(|f| f.name == INDEX_HTML)
            .or_else(|| files.first())
            .map(|f| f.id.clone());
        let persisted = files
            .iter()
            .map(|f| (f.id.clone(), f.content.clone()))
            .collect();

        Self {
            project,
            files,
            active_id,
            save_status: SaveStatus::Idle,
            persisted,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    pub fn file(&self, file_id: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.id == file_id)
    }

    /// 当前激活文件
    pub fn active_file(&self) -> Option<&ProjectFile> {
        self.active_id.as_deref().and_then(|id| self.file(id))
    }

    pub fn active_file_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// 切换激活文件
    ///
    /// # 错误
    /// 文件不属于本会话时返回 `NotFound`，激活指针保持不变。
    pub fn open_file(&mut self, file_id: &str) -> Result<OpenOutcome> {
        if self.active_id.as_deref() == Some(file_id) {
            return Ok(OpenOutcome::AlreadyActive);
        }

        let file = self
            .file(file_id)
            .ok_or_else(|| EditorError::not_found("file", file_id))?;
        let outcome = OpenOutcome::Opened {
            content: file.content.clone(),
            language: language::language_for(&file.name),
            is_html: language::is_html(&file.name),
        };
        self.active_id = Some(file_id.to_string());
        Ok(outcome)
    }

    /// 把编辑器缓冲区文本写入激活文件的内存内容
    ///
    /// # 返回值
    /// 被修改的文件 ID；没有激活文件时返回 `None`
    pub fn mirror_active_content(&mut self, text: String) -> Option<String> {
        let id = self.active_id.clone()?;
        let file = self.files.iter_mut().find(|f| f.id == id)?;
        file.content = text;
        Some(id)
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn set_save_status(&mut self, status: SaveStatus) {
        self.save_status = status;
    }

    /// 记录某文件内容已成功持久化
    pub fn mark_persisted(&mut self, file_id: &str, content: String) {
        self.persisted.insert(file_id.to_string(), content);
    }

    /// 最后一次成功持久化的内容
    pub fn persisted_content(&self, file_id: &str) -> Option<&str> {
        self.persisted.get(file_id).map(String::as_str)
    }

    /// 内存内容是否与最后持久化的内容不同
    pub fn is_dirty(&self, file_id: &str) -> bool {
        match (self.file(file_id), self.persisted_content(file_id)) {
            (Some(file), Some(persisted)) => file.content != persisted,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// 内存内容尚未持久化的文件 ID
    pub fn dirty_files(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| self.is_dirty(&f.id))
            .map(|f| f.id.clone())
            .collect()
    }

    /// 文件列表渲染数据
    pub fn file_list(&self) -> Vec<FileListItem> {
        self.files
            .iter()
            .map(|f| {
                let (icon_class, color_class) = language::icon_for(&f.name);
                FileListItem {
                    id: f.id.clone(),
                    name: f.name.clone(),
                    active: self.active_id.as_deref() == Some(f.id.as_str()),
                    icon_class,
                    color_class,
                }
            })
            .collect()
    }

    /// 标签页指示器
    pub fn tab(&self) -> Option<TabIndicator> {
        self.active_file().map(|f| TabIndicator {
            name: f.name.clone(),
            icon_class: language::icon_for(&f.name).0,
        })
    }

    /// 导出快照（内存中的最新内容）
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            name: self.project.name.clone(),
            files: self.files.clone(),
        }
    }
}
