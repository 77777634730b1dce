//! # 界面渲染数据模型
//!
//! Rust 端推送给前端渲染的结构：文件列表条目、标签页指示器、保存状态。
//! 前端只负责把这些结构映射为 DOM，不再自行推导激活状态或图标。

use serde::Serialize;

/// 文件列表中的一项
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface FileListItem {
///   id: string;
///   name: string;
///   active: boolean;
///   iconClass: string;
///   colorClass: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListItem {
    /// 文件 ID，前端点击时回传用于切换激活文件
    pub id: String,
    /// 文件名
    pub name: String,
    /// 是否为当前激活文件
    pub active: bool,
    /// 图标 CSS 类（如 `fa-brands fa-html5`）
    pub icon_class: &'static str,
    /// 颜色 CSS 类（如 `html`），无匹配时为空字符串
    pub color_class: &'static str,
}

/// 标签页指示器
///
/// 单文档编辑器，最多只有一个激活标签。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabIndicator {
    /// 文件名
    pub name: String,
    /// 图标 CSS 类
    pub icon_class: &'static str,
}

/// 保存状态
///
/// 自动保存流水线的显式状态机：
/// - `Idle`：会话刚打开，尚无编辑
/// - `Pending`：已有编辑，防抖定时器等待中
/// - `Saving`：定时器已触发，写入进行中
/// - `Saved`：最近一次写入成功
/// - `Error`：最近一次写入失败，等待下一次编辑重试
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    Idle,
    Pending,
    Saving,
    Saved,
    Error,
}

impl Default for SaveStatus {
    fn default() -> Self {
        Self::Idle
    }
}
