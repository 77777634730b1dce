//! # 界面协作者接口
//!
//! 会话核心不直接接触 DOM，而是通过两个 trait 驱动界面：
//! - `EditorWidget`：嵌入式代码编辑器（装载内容与语言模式、重新布局）
//! - `WorkbenchView`：文件列表、标签页、保存状态、预览 iframe 与分栏宽度
//!
//! 桌面端由 `bridge` 模块通过 Tauri 事件实现；测试中使用记录型实现。
//! 所有方法都是同步的、即发即忘的通知，实现方不得回调控制器。

use crate::models::display::{FileListItem, SaveStatus, TabIndicator};
use crate::services::preview::PreviewHandle;

/// 嵌入式代码编辑器
pub trait EditorWidget: Send + Sync {
    /// 替换编辑器模型：装载文本并切换语言模式
    fn set_model(&self, text: &str, language: &str);

    /// 容器尺寸变化后重新计算内部布局
    fn relayout(&self);
}

/// 工作台界面
pub trait WorkbenchView: Send + Sync {
    /// 重新渲染文件列表
    fn render_file_list(&self, items: &[FileListItem]);

    /// 重新渲染标签页指示器
    fn render_tab(&self, tab: Option<&TabIndicator>);

    /// 更新保存状态指示器
    fn set_save_status(&self, status: SaveStatus);

    /// 让预览 iframe 导航到新的预览句柄
    fn show_preview(&self, handle: &PreviewHandle);

    /// 预览 iframe 是否拦截指针事件（拖拽分栏期间关闭）
    fn set_preview_pointer_events(&self, enabled: bool);

    /// 设置预览面板宽度（像素）
    fn set_preview_width(&self, width: f64);
}
