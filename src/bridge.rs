//! # Tauri 事件桥
//!
//! 以 Tauri 事件实现 `EditorWidget` / `WorkbenchView`，前端监听以下事件名：
//!
//! | 事件 | 载荷 |
//! |------|------|
//! | `editor:set-model` | `{ text, language }` |
//! | `editor:relayout` | `null` |
//! | `workbench:file-list` | `FileListItem[]` |
//! | `workbench:tab` | `TabIndicator \| null` |
//! | `workbench:save-status` | `"idle" \| "pending" \| "saving" \| "saved" \| "error"` |
//! | `workbench:preview` | `{ generation, url }` |
//! | `workbench:preview-pointer-events` | `boolean` |
//! | `workbench:preview-width` | `number` |
//!
//! 发送失败（窗口已关闭等）只记录警告，不影响会话状态。

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::models::display::{FileListItem, SaveStatus, TabIndicator};
use crate::services::preview::PreviewHandle;
use crate::services::view::{EditorWidget, WorkbenchView};

#[derive(Clone, Serialize)]
struct SetModelPayload<'a> {
    text: &'a str,
    language: &'a str,
}

/// 基于 `AppHandle` 的界面桥
pub struct TauriBridge {
    app: AppHandle,
}

impl TauriBridge {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn send<S: Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.app.emit(event, payload) {
            log::warn!("发送事件 {} 失败: {}", event, e);
        }
    }
}

impl EditorWidget for TauriBridge {
    fn set_model(&self, text: &str, language: &str) {
        self.send("editor:set-model", SetModelPayload { text, language });
    }

    fn relayout(&self) {
        self.send("editor:relayout", ());
    }
}

impl WorkbenchView for TauriBridge {
    fn render_file_list(&self, items: &[FileListItem]) {
        self.send("workbench:file-list", items);
    }

    fn render_tab(&self, tab: Option<&TabIndicator>) {
        self.send("workbench:tab", tab);
    }

    fn set_save_status(&self, status: SaveStatus) {
        self.send("workbench:save-status", status);
    }

    fn show_preview(&self, handle: &PreviewHandle) {
        self.send("workbench:preview", handle);
    }

    fn set_preview_pointer_events(&self, enabled: bool) {
        self.send("workbench:preview-pointer-events", enabled);
    }

    fn set_preview_width(&self, width: f64) {
        self.send("workbench:preview-width", width);
    }
}
