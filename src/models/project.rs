//! # 项目和文件数据模型
//!
//! 定义了项目（Project）和项目文件（ProjectFile）的 Rust 结构体，
//! 对应存储中的 `projects` 与 `project_files` 两张表，也对应前端 TypeScript 中的
//! `Project` 和 `ProjectFile` 接口。
//!
//! 这些结构体通过 `serde` 的 Serialize/Deserialize 特征实现：
//! - Tauri IPC 序列化（Rust → JS）
//! - 本地存储表的 JSON 读写
//! - 项目导出

use serde::{Deserialize, Serialize};

/// 项目数据结构
///
/// 表示用户的一个工作区。项目只能由其所有者加载。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Project {
///   id: string;
///   name: string;
///   userId: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 项目 ID：由存储分配的不透明字符串
    pub id: String,

    /// 项目显示名称
    pub name: String,

    /// 所有者用户 ID
    pub user_id: String,
}

/// 项目文件数据结构
///
/// 项目中的一个具名源文件。同一项目内文件名唯一，
/// 文件扩展名决定编辑器的语言模式。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ProjectFile {
///   id: string;
///   projectId: string;
///   name: string;
///   language: string;
///   content: string;
///   updatedAt?: number;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// 文件 ID：由存储在插入时分配
    pub id: String,

    /// 所属项目 ID
    pub project_id: String,

    /// 文件名（含扩展名），如 `index.html`
    pub name: String,

    /// 语言标签：`html` / `css` / `javascript` / `json` / `plaintext`
    pub language: String,

    /// 文件文本内容
    pub content: String,

    /// 最后写入时间（Unix 秒），由存储维护
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

/// 待插入的新文件
///
/// 由客户端构造，不含 ID 与时间戳；存储插入后返回完整的 `ProjectFile`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectFile {
    /// 所属项目 ID
    pub project_id: String,
    /// 文件名
    pub name: String,
    /// 语言标签
    pub language: String,
    /// 初始内容
    pub content: String,
}

/// 项目导出快照
///
/// 内存中完整的 `{name, files[]}` 快照，序列化为可下载的 JSON 文档。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    /// 项目名称
    pub name: String,
    /// 项目的全部文件（内存中的最新内容）
    pub files: Vec<ProjectFile>,
}
