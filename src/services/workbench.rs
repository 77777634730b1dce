//! # 编辑器控制器
//!
//! `EditorController` 持有一个打开的编辑会话，并把来自前端的单一入站事件流
//! （`WorkbenchEvent`）交给显式状态机处理：
//! - 文件切换：`EditorSession::open_file`
//! - 自动保存：`Debouncer` + 保存状态（idle / pending / saving / saved / error）
//! - 分栏拖拽：`Resizer`（idle / dragging）
//! - 预览：`preview::synthesize` + `PreviewRegistry`
//!
//! ## 自动保存流程
//! 每次内容变更同步完成三件事：把缓冲区文本写入激活文件的内存内容、
//! 状态置为 pending、替换防抖定时器。定时器在静默期结束后认领槽位，
//! 按文件 ID 写入一次；成功则状态置为 saved 并刷新预览，失败则置为 error，
//! 不自动重试，下一次编辑会重新布防。
//!
//! ## 并发
//! 会话状态由 `std::sync::Mutex` 保护，锁从不跨越 `.await`；
//! 所有写入经过 `save_gate` 串行化，同一时刻至多一个写入在进行中。
//! 定时器任务只持有控制器的弱引用，控制器销毁后残留的定时器不会写入。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{EditorError, Result};
use crate::models::display::SaveStatus;
use crate::models::project::{Project, ProjectSnapshot};
use crate::models::settings::EditorConfig;
use crate::services::autosave::Debouncer;
use crate::services::language;
use crate::services::preview::{self, PreviewHandle, PreviewRegistry};
use crate::services::resizer::{LayoutConstraints, ResizeEffect, Resizer};
use crate::services::session::{EditorSession, OpenOutcome};
use crate::services::store::ProjectStore;
use crate::services::view::{EditorWidget, WorkbenchView};

/// 前端入站事件
///
/// 对应前端 TypeScript 类型：
/// ```typescript
/// type WorkbenchEvent =
///   | { type: "openFile"; fileId: string }
///   | { type: "contentChanged"; seq: number; text: string }
///   | { type: "pointerDown" }
///   | { type: "pointerMove"; pointerX: number; containerWidth: number }
///   | { type: "pointerUp" }
///   | { type: "refreshPreview" };
/// ```
///
/// `contentChanged` 的 `seq` 由前端按击键单调递增。每次 invoke 都是独立的异步任务，
/// 到达顺序不保证与发送顺序一致，旧于已接受序号的快照会被丢弃。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WorkbenchEvent {
    OpenFile { file_id: String },
    ContentChanged { seq: u64, text: String },
    PointerDown,
    PointerMove { pointer_x: f64, container_width: f64 },
    PointerUp,
    RefreshPreview,
}

/// 受会话锁保护的可变状态
struct WorkbenchState {
    session: EditorSession,
    debouncer: Debouncer,
    resizer: Resizer,
    /// 最后接受的内容变更序号
    last_content_seq: u64,
}

/// 编辑器控制器
pub struct EditorController {
    state: Mutex<WorkbenchState>,
    store: Arc<dyn ProjectStore>,
    widget: Arc<dyn EditorWidget>,
    view: Arc<dyn WorkbenchView>,
    previews: PreviewRegistry,
    /// 写入串行化
    save_gate: tokio::sync::Mutex<()>,
}

impl EditorController {
    /// 以初始化完成的会话创建控制器
    pub fn new(
        session: EditorSession,
        config: &EditorConfig,
        store: Arc<dyn ProjectStore>,
        widget: Arc<dyn EditorWidget>,
        view: Arc<dyn WorkbenchView>,
    ) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(WorkbenchState {
                session,
                debouncer: Debouncer::new(Duration::from_millis(config.autosave_delay_ms)),
                resizer: Resizer::new(LayoutConstraints::from(config)),
                last_content_seq: 0,
            }),
            store,
            widget,
            view,
            previews: PreviewRegistry::new(),
            save_gate: tokio::sync::Mutex::new(()),
        })
    }

    fn state(&self) -> MutexGuard<'_, WorkbenchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 把初始激活文件装入编辑器并渲染文件列表、标签页；入口文件为 HTML 时生成预览
    pub fn start(&self) {
        let (model, items, tab) = {
            let st = self.state();
            let model = st.session.active_file().map(|f| {
                (
                    f.content.clone(),
                    language::language_for(&f.name),
                    language::is_html(&f.name),
                )
            });
            (model, st.session.file_list(), st.session.tab())
        };

        let mut show_preview = false;
        if let Some((text, lang, is_html)) = model {
            self.widget.set_model(&text, lang);
            show_preview = is_html;
        }
        self.view.render_file_list(&items);
        self.view.render_tab(tab.as_ref());
        if show_preview {
            self.refresh_preview();
        }
    }

    /// 处理一个入站事件
    pub fn dispatch(self: &Arc<Self>, event: WorkbenchEvent) -> Result<()> {
        match event {
            WorkbenchEvent::OpenFile { file_id } => self.open_file(&file_id)?,
            WorkbenchEvent::ContentChanged { seq, text } => self.content_changed(seq, text),
            WorkbenchEvent::PointerDown => self.pointer_down(),
            WorkbenchEvent::PointerMove {
                pointer_x,
                container_width,
            } => self.pointer_move(pointer_x, container_width),
            WorkbenchEvent::PointerUp => self.pointer_up(),
            WorkbenchEvent::RefreshPreview => {
                self.refresh_preview();
            }
        }
        Ok(())
    }

    // ======== 文件切换 ========

    /// 切换激活文件
    ///
    /// 已是激活文件时不做任何事，避免无谓的模型替换丢失编辑器内部状态。
    /// 切换到 HTML 文件时立即刷新预览；切换到其他文件不刷新。
    pub fn open_file(&self, file_id: &str) -> Result<()> {
        let (outcome, items, tab) = {
            let mut st = self.state();
            let outcome = st.session.open_file(file_id)?;
            (outcome, st.session.file_list(), st.session.tab())
        };

        let OpenOutcome::Opened {
            content,
            language,
            is_html,
        } = outcome
        else {
            return Ok(());
        };

        self.widget.set_model(&content, language);
        self.view.render_file_list(&items);
        self.view.render_tab(tab.as_ref());
        if is_html {
            self.refresh_preview();
        }
        Ok(())
    }

    // ======== 自动保存 ========

    /// 编辑器内容变更
    ///
    /// `seq` 不大于已接受序号的过期快照、以及没有激活文件时忽略。
    /// 定时器绑定的是布防时的激活文件。
    /// 若被替换的定时器属于另一个文件，该文件的编辑立即写入，不会被丢弃。
    pub fn content_changed(self: &Arc<Self>, seq: u64, text: String) {
        let (file_id, superseded) = {
            let mut st = self.state();
            if seq <= st.last_content_seq {
                log::debug!("丢弃过期的内容变更 seq={} (已接受 {})", seq, st.last_content_seq);
                return;
            }
            st.last_content_seq = seq;
            let Some(file_id) = st.session.mirror_active_content(text) else {
                return;
            };
            st.session.set_save_status(SaveStatus::Pending);

            let generation = st.debouncer.next_generation();
            let delay = st.debouncer.delay();
            let weak = Arc::downgrade(self);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(controller) = weak.upgrade() {
                    controller.fire(generation).await;
                }
            });
            let superseded = st.debouncer.arm(generation, file_id.clone(), handle);
            (file_id, superseded)
        };

        self.view.set_save_status(SaveStatus::Pending);

        if let Some(other) = superseded.filter(|prev| *prev != file_id) {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                let _ = controller.save_file(&other).await;
            });
        }
    }

    /// 定时器到期
    async fn fire(&self, generation: u64) {
        let target = self.state().debouncer.take_if_current(generation);
        if let Some(file_id) = target {
            let _ = self.save_file(&file_id).await;
        }
    }

    /// 立即写入等待中的编辑（若有）
    ///
    /// 关闭项目前调用，避免丢失静默期内的最后一次编辑。
    pub async fn flush(&self) -> Result<()> {
        let target = self.state().debouncer.cancel();
        match target {
            Some(file_id) => self.save_file(&file_id).await,
            None => Ok(()),
        }
    }

    /// 把某文件当前的内存内容写入存储
    ///
    /// 写入开始时读取内容，因此总是写入最新的内存文本。
    /// 写入完成时若已有新的编辑在等待，状态保持 pending。
    async fn save_file(&self, file_id: &str) -> Result<()> {
        let _gate = self.save_gate.lock().await;

        let content = {
            let mut st = self.state();
            let content = st
                .session
                .file(file_id)
                .map(|f| f.content.clone())
                .ok_or_else(|| EditorError::not_found("file", file_id))?;
            st.session.set_save_status(SaveStatus::Saving);
            content
        };
        self.view.set_save_status(SaveStatus::Saving);

        let result = self.store.update_file_content(file_id, &content).await;

        let status = {
            let mut st = self.state();
            let status = if result.is_ok() {
                st.session.mark_persisted(file_id, content);
                SaveStatus::Saved
            } else {
                SaveStatus::Error
            };
            let shown = if st.debouncer.is_pending() {
                SaveStatus::Pending
            } else {
                status
            };
            st.session.set_save_status(shown);
            shown
        };
        self.view.set_save_status(status);

        match result {
            Ok(()) => {
                log::info!("已保存文件 {}", file_id);
                self.refresh_preview();
                Ok(())
            }
            Err(e) => {
                log::error!("保存文件 {} 失败: {}", file_id, e);
                Err(match e {
                    EditorError::Persistence(_) => e,
                    other => EditorError::Persistence(other.to_string()),
                })
            }
        }
    }

    // ======== 预览 ========

    /// 重新合成预览并发布新句柄（作废旧句柄）
    ///
    /// 项目没有任何文件时不生成预览。
    pub fn refresh_preview(&self) -> Option<PreviewHandle> {
        let html = {
            let st = self.state();
            if st.session.files().is_empty() {
                return None;
            }
            preview::synthesize(st.session.files())
        };
        let handle = self.previews.publish(html);
        self.view.show_preview(&handle);
        Some(handle)
    }

    /// 预览文档注册表（供 `preview://` 协议读取）
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    // ======== 分栏拖拽 ========

    pub fn pointer_down(&self) {
        let effect = self.state().resizer.pointer_down();
        self.apply_resize(effect);
    }

    pub fn pointer_move(&self, pointer_x: f64, container_width: f64) {
        let effect = self.state().resizer.pointer_move(pointer_x, container_width);
        self.apply_resize(effect);
    }

    pub fn pointer_up(&self) {
        let effect = self.state().resizer.pointer_up();
        self.apply_resize(effect);
    }

    fn apply_resize(&self, effect: Option<ResizeEffect>) {
        match effect {
            Some(ResizeEffect::BeginDrag) => self.view.set_preview_pointer_events(false),
            Some(ResizeEffect::SetWidth(width)) => self.view.set_preview_width(width),
            Some(ResizeEffect::EndDrag) => {
                self.view.set_preview_pointer_events(true);
                self.widget.relayout();
            }
            None => {}
        }
    }

    // ======== 查询 ========

    pub fn project(&self) -> Project {
        self.state().session.project().clone()
    }

    pub fn snapshot(&self) -> ProjectSnapshot {
        self.state().session.snapshot()
    }

    pub fn save_status(&self) -> SaveStatus {
        self.state().session.save_status()
    }

    pub fn active_file_id(&self) -> Option<String> {
        self.state().session.active_file_id().map(str::to_string)
    }

    /// 某文件的内存内容与最后一次成功持久化的内容
    pub fn file_contents(&self, file_id: &str) -> Option<(String, Option<String>)> {
        let st = self.state();
        let file = st.session.file(file_id)?;
        Some((
            file.content.clone(),
            st.session.persisted_content(file_id).map(str::to_string),
        ))
    }

    pub fn preview_width(&self) -> Option<f64> {
        self.state().resizer.preview_width()
    }

    /// 关闭会话：写入等待中的编辑并释放预览文档
    ///
    /// 写入失败时仍会释放预览，并把错误返回给调用方。
    pub async fn shutdown(&self) -> Result<()> {
        let result = self.flush().await;
        let dirty = self.state().session.dirty_files();
        if !dirty.is_empty() {
            log::warn!("关闭项目时仍有 {} 个文件未保存: {:?}", dirty.len(), dirty);
        }
        self.previews.clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::models::settings::Identity;
    use crate::services::bootstrap;
    use crate::services::store::memory::MemoryProjectStore;
    use crate::services::view::recording::{RecordingUi, UiCall};

    struct Fixture {
        controller: Arc<EditorController>,
        store: Arc<MemoryProjectStore>,
        ui: Arc<RecordingUi>,
    }

    impl Fixture {
        fn file_id(&self, name: &str) -> String {
            self.controller
                .snapshot()
                .files
                .into_iter()
                .find(|f| f.name == name)
                .map(|f| f.id)
                .unwrap()
        }
    }

    async fn fixture_with(store: MemoryProjectStore) -> Fixture {
        store.add_project("p-1", "Demo Site", "alice");
        let store = Arc::new(store);
        let identity = Identity {
            user_id: "alice".into(),
            email: String::new(),
        };
        let session = bootstrap::bootstrap(store.as_ref(), &identity, "p-1")
            .await
            .unwrap();

        let ui = Arc::new(RecordingUi::new());
        let controller = EditorController::new(
            session,
            &EditorConfig::default(),
            store.clone(),
            ui.clone(),
            ui.clone(),
        );
        controller.start();
        Fixture {
            controller,
            store,
            ui,
        }
    }

    async fn fixture() -> Fixture {
        fixture_with(MemoryProjectStore::new()).await
    }

    /// 前端的击键序号：全局单调递增
    fn next_seq() -> u64 {
        static SEQ: AtomicU64 = AtomicU64::new(1);
        SEQ.fetch_add(1, Ordering::Relaxed)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_loads_index_and_shows_preview() {
        let fx = fixture().await;
        let calls = fx.ui.calls();

        assert!(matches!(
            &calls[0],
            UiCall::SetModel { language, .. } if language == "html"
        ));
        assert_eq!(fx.ui.previews_shown(), 1);
        assert_eq!(
            fx.controller.active_file_id(),
            Some(fx.file_id("index.html"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_coalesce_into_one_write() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");

        for i in 0..5 {
            fx.controller.content_changed(next_seq(), format!("<p>v{}</p>", i));
            tokio::time::sleep(ms(200)).await;
        }
        assert!(fx.store.updates().is_empty());

        tokio::time::sleep(ms(1500)).await;
        assert_eq!(fx.store.updates(), vec![(index, "<p>v4</p>".to_string())]);
        assert_eq!(fx.controller.save_status(), SaveStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_sequence_for_one_save() {
        let fx = fixture().await;
        fx.ui.clear();

        fx.controller.content_changed(next_seq(), "x".into());
        tokio::time::sleep(ms(1100)).await;

        assert_eq!(
            fx.ui.statuses(),
            vec![SaveStatus::Pending, SaveStatus::Saving, SaveStatus::Saved]
        );
        // 保存成功后刷新预览
        assert_eq!(fx.ui.previews_shown(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_file_mid_timer_saves_original_file() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");
        let style = fx.file_id("style.css");

        fx.controller.content_changed(next_seq(), "<h1>edited</h1>".into());
        tokio::time::sleep(ms(300)).await;
        fx.controller.open_file(&style).unwrap();

        tokio::time::sleep(ms(1000)).await;
        assert_eq!(fx.store.updates(), vec![(index, "<h1>edited</h1>".to_string())]);

        let (style_content, _) = fx.controller.file_contents(&style).unwrap();
        assert!(style_content.contains("font-family"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_another_file_flushes_superseded_edit() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");
        let style = fx.file_id("style.css");

        fx.controller.content_changed(next_seq(), "<p>a</p>".into());
        fx.controller.open_file(&style).unwrap();
        fx.controller.content_changed(next_seq(), "p{}".into());

        tokio::time::sleep(ms(1500)).await;
        let updates = fx.store.updates();
        assert_eq!(updates.len(), 2);
        assert!(updates.contains(&(index, "<p>a</p>".to_string())));
        assert!(updates.contains(&(style, "p{}".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_write_keeps_memory_and_next_edit_retries() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");
        let original = fx.controller.file_contents(&index).unwrap().0;
        fx.store.set_fail_updates(true);

        fx.controller.content_changed(next_seq(), "<p>unsynced</p>".into());
        tokio::time::sleep(ms(1100)).await;

        assert_eq!(fx.controller.save_status(), SaveStatus::Error);
        let (memory, persisted) = fx.controller.file_contents(&index).unwrap();
        assert_eq!(memory, "<p>unsynced</p>");
        assert_eq!(persisted, Some(original));

        // 不自动重试
        tokio::time::sleep(ms(5000)).await;
        assert!(fx.store.updates().is_empty());

        fx.store.set_fail_updates(false);
        fx.controller.content_changed(next_seq(), "<p>synced</p>".into());
        tokio::time::sleep(ms(1100)).await;
        assert_eq!(fx.store.updates(), vec![(index, "<p>synced</p>".to_string())]);
        assert_eq!(fx.controller.save_status(), SaveStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_during_write_never_overlaps() {
        let fx = fixture_with(MemoryProjectStore::new().with_update_delay(ms(800))).await;
        let index = fx.file_id("index.html");

        fx.controller.content_changed(next_seq(), "first".into());
        // 定时器 t=1000 触发，写入持续到 t=1800
        tokio::time::sleep(ms(1200)).await;
        fx.controller.content_changed(next_seq(), "second".into());
        assert_eq!(fx.controller.save_status(), SaveStatus::Pending);

        tokio::time::sleep(ms(700)).await;
        // 第一次写入完成时已有新的编辑在等待
        assert_eq!(fx.controller.save_status(), SaveStatus::Pending);

        tokio::time::sleep(ms(3000)).await;
        assert_eq!(
            fx.store.updates(),
            vec![(index.clone(), "first".into()), (index, "second".into())]
        );
        assert_eq!(fx.store.max_in_flight(), 1);
        assert_eq!(fx.controller.save_status(), SaveStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_writes_pending_edit_once() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");

        fx.controller.content_changed(next_seq(), "<p>last</p>".into());
        fx.controller.shutdown().await.unwrap();
        assert_eq!(fx.store.updates(), vec![(index, "<p>last</p>".to_string())]);
        assert!(fx.controller.previews().latest().is_none());

        tokio::time::sleep(ms(2000)).await;
        assert_eq!(fx.store.updates().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_without_pending_is_noop() {
        let fx = fixture().await;
        fx.controller.flush().await.unwrap();
        assert!(fx.store.updates().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_controller_timer_does_not_write() {
        let fx = fixture().await;
        fx.controller.content_changed(next_seq(), "<p>lost</p>".into());
        let store = fx.store.clone();
        drop(fx);

        tokio::time::sleep(ms(2000)).await;
        assert!(store.updates().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_file_preview_only_for_html() {
        let fx = fixture().await;
        let style = fx.file_id("style.css");
        let index = fx.file_id("index.html");
        fx.ui.clear();

        fx.controller.open_file(&style).unwrap();
        assert_eq!(fx.ui.previews_shown(), 0);
        assert!(fx.ui.calls().contains(&UiCall::SetModel {
            text: fx.controller.file_contents(&style).unwrap().0,
            language: "css".into(),
        }));
        assert!(fx.ui.calls().contains(&UiCall::Tab(Some("style.css".into()))));

        fx.controller.open_file(&index).unwrap();
        assert_eq!(fx.ui.previews_shown(), 1);

        // 再次打开同一文件不做任何事
        fx.ui.clear();
        fx.controller.open_file(&index).unwrap();
        assert!(fx.ui.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_preview_supersedes_previous_handle() {
        let fx = fixture().await;
        let first = fx.controller.refresh_preview().unwrap();
        let second = fx.controller.refresh_preview().unwrap();

        let registry = fx.controller.previews();
        assert!(registry.resolve(first.generation).is_none());
        assert!(registry.resolve(second.generation).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_events_through_dispatch() {
        let fx = fixture().await;
        fx.ui.clear();

        let events: Vec<WorkbenchEvent> = serde_json::from_str(
            r#"[
                {"type": "pointerMove", "pointerX": 820, "containerWidth": 1200},
                {"type": "pointerDown"},
                {"type": "pointerMove", "pointerX": 820, "containerWidth": 1200},
                {"type": "pointerMove", "pointerX": 1300, "containerWidth": 1200},
                {"type": "pointerUp"}
            ]"#,
        )
        .unwrap();
        for event in events {
            fx.controller.dispatch(event).unwrap();
        }

        assert_eq!(
            fx.ui.calls(),
            vec![
                UiCall::PointerEvents(false),
                UiCall::PreviewWidth(600.0),
                UiCall::PointerEvents(true),
                UiCall::Relayout,
            ]
        );
        assert_eq!(fx.controller.preview_width(), Some(600.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_content_and_open_events() {
        let fx = fixture().await;
        let style = fx.file_id("style.css");

        let open: WorkbenchEvent =
            serde_json::from_value(serde_json::json!({"type": "openFile", "fileId": style}))
                .unwrap();
        fx.controller.dispatch(open).unwrap();
        fx.controller
            .dispatch(WorkbenchEvent::ContentChanged {
                seq: next_seq(),
                text: "b{}".into(),
            })
            .unwrap();

        tokio::time::sleep(ms(1100)).await;
        assert_eq!(fx.store.updates(), vec![(style, "b{}".to_string())]);

        let missing = WorkbenchEvent::OpenFile {
            file_id: "nope".into(),
        };
        assert!(fx.controller.dispatch(missing).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_content_keeps_newest_snapshot() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");

        let newer: WorkbenchEvent = serde_json::from_str(
            r#"{"type": "contentChanged", "seq": 2, "text": "abc"}"#,
        )
        .unwrap();
        let older: WorkbenchEvent = serde_json::from_str(
            r#"{"type": "contentChanged", "seq": 1, "text": "ab"}"#,
        )
        .unwrap();
        fx.controller.dispatch(newer).unwrap();
        fx.controller.dispatch(older).unwrap();
        assert_eq!(fx.controller.file_contents(&index).unwrap().0, "abc");

        tokio::time::sleep(ms(1100)).await;
        assert_eq!(fx.store.updates(), vec![(index, "abc".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_seq_is_ignored() {
        let fx = fixture().await;
        let index = fx.file_id("index.html");

        fx.controller.content_changed(5, "first".into());
        fx.controller.content_changed(5, "replayed".into());

        tokio::time::sleep(ms(1100)).await;
        assert_eq!(fx.store.updates(), vec![(index, "first".to_string())]);
    }
}
