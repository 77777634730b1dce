//! # 项目存储接口
//!
//! `ProjectStore` 是会话核心消费的外部持久化协作者，对应两张表：
//! - `projects`：项目元数据，按 (id, 所有者) 读取
//! - `project_files`：项目文件，按项目读取并按文件名排序
//!
//! 写入只有两种：首次打开时批量插入默认文件、自动保存时按文件 ID 更新内容。
//! 项目列表相关的 `list_projects` / `create_project` 供项目列表页使用。
//!
//! 生产实现见 `local_store::LocalProjectStore`；测试用的内存实现见 `memory` 子模块。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::project::{NewProjectFile, Project, ProjectFile};

/// 项目存储
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// 按 (项目 ID, 所有者 ID) 读取单个项目
    ///
    /// # 错误
    /// 项目不存在或所有者不匹配时统一返回 `NotFound`，不向非所有者泄露项目是否存在。
    async fn find_project(&self, project_id: &str, owner_id: &str) -> Result<Project>;

    /// 读取项目的全部文件，按文件名升序
    async fn list_files(&self, project_id: &str) -> Result<Vec<ProjectFile>>;

    /// 批量插入文件，返回存储实际持久化的记录（含分配的 ID 与时间戳）
    async fn insert_files(&self, files: Vec<NewProjectFile>) -> Result<Vec<ProjectFile>>;

    /// 按文件 ID 更新内容
    async fn update_file_content(&self, file_id: &str, content: &str) -> Result<()>;

    /// 列出某用户的全部项目，按名称升序
    async fn list_projects(&self, owner_id: &str) -> Result<Vec<Project>>;

    /// 为某用户创建空项目（不含文件，首次打开时由会话初始化补齐默认文件）
    async fn create_project(&self, owner_id: &str, name: &str) -> Result<Project>;
}

/// 生成新的存储 ID
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 当前 Unix 时间戳（秒）
pub(crate) fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
