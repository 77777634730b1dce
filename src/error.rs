//! # 编辑器错误类型
//!
//! 按传播策略划分的错误分类：
//! - **启动期致命错误**：`AuthRequired`、`NotFound`、`Forbidden`、`Bootstrap`，
//!   会话永远不会进入可交互状态
//! - **稳态局部错误**：`Persistence`，仅体现为保存状态指示器上的 "error"，
//!   不阻塞继续编辑，由下一次编辑重新触发保存
//!
//! 通过 `Serialize` 派生，可直接作为 Tauri command 的错误类型返回前端。

use serde::Serialize;
use thiserror::Error;

/// 编辑器统一错误类型
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum EditorError {
    /// 没有已登录的身份，前端应跳转登录界面
    #[error("需要登录")]
    AuthRequired,

    /// 实体不存在（或不属于当前用户，二者对外不可区分）
    #[error("未找到 {entity}: {id}")]
    NotFound { entity: &'static str, id: String },

    /// 已确认存在但无权访问
    #[error("无权访问: {0}")]
    Forbidden(String),

    /// 存储写入失败
    #[error("保存失败: {0}")]
    Persistence(String),

    /// 会话初始化失败（加载元数据、文件或创建默认文件时）
    #[error("项目加载失败: {0}")]
    Bootstrap(String),

    /// 文件系统错误
    #[error("IO 错误: {0}")]
    Io(String),

    /// JSON 序列化 / 反序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 配置错误（如无法定位主目录）
    #[error("配置错误: {0}")]
    Config(String),

    /// 当前没有打开的项目
    #[error("没有打开的项目")]
    NoActiveSession,
}

impl EditorError {
    /// 构造 NotFound 错误
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// 是否为 "项目不存在 / 不属于当前用户" 类错误（前端据此跳回项目列表）
    pub fn is_not_found_or_forbidden(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Forbidden(_))
    }

    /// 启动期错误是否对会话致命
    ///
    /// `AuthRequired` 只触发跳转登录，不算应用级致命错误。
    pub fn is_fatal_to_bootstrap(&self) -> bool {
        !matches!(self, Self::AuthRequired)
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<zip::result::ZipError> for EditorError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Io(format!("ZIP 写入失败: {}", err))
    }
}

/// `Result<T, EditorError>` 简写
pub type Result<T> = std::result::Result<T, EditorError>;
