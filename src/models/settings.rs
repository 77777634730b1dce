//! # 编辑器配置与身份数据模型
//!
//! - `EditorConfig`：对应 `~/.webforge/editor-config.json`，控制防抖时长与布局约束
//! - `Identity`：对应 `~/.webforge/identity.json`，当前登录用户

use serde::{Deserialize, Serialize};

/// 编辑器配置
///
/// 所有字段均有默认值，配置文件缺失或字段缺失时使用默认值。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface EditorConfig {
///   autosaveDelayMs: number;
///   sidebarWidth: number;
///   minPreviewWidth: number;
///   editorReserve: number;
///   dataDir?: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// 自动保存防抖静默期（毫秒）
    pub autosave_delay_ms: u64,

    /// 左侧文件栏的固定宽度（像素），与前端 CSS 保持一致
    pub sidebar_width: f64,

    /// 预览面板最小宽度（像素）
    pub min_preview_width: f64,

    /// 为文件栏和编辑器保留的最小宽度（像素）：预览最大宽度 = 容器宽度 - 该值
    pub editor_reserve: f64,

    /// 数据目录覆盖；为 `None` 时使用 `~/.webforge/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: 1000,
            sidebar_width: 220.0,
            min_preview_width: 200.0,
            editor_reserve: 300.0,
            data_dir: None,
        }
    }
}

/// 当前登录身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// 用户 ID，与 `Project::user_id` 对应
    pub user_id: String,

    /// 登录邮箱（仅用于显示）
    #[serde(default)]
    pub email: String,
}
