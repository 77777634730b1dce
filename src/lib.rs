//! # WebForge 编辑器 - 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（对话框、Opener、日志）
//! - 读取编辑器配置并初始化应用全局状态（`AppState`）
//! - 注册 `preview://` 自定义协议，向预览 iframe 提供当前预览文档
//! - 注册自定义 Tauri commands（身份、项目、工作台事件、导出）
//!
//! ## 架构说明
//! 编辑器核心（会话、自动保存、预览、分栏拖拽）位于 `services/`，
//! 通过 `view` 模块的 trait 驱动界面，不依赖 Tauri。
//! Tauri 外壳位于默认开启的 `desktop` feature 之后，
//! 关闭该 feature 即可无界面地构建与测试核心逻辑。
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `bridge` - 以 Tauri 事件实现界面 trait
//! - `state` - 应用全局状态与当前会话
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 编辑器核心逻辑
//! - `utils/` - 通用工具函数

#[cfg(feature = "desktop")]
mod bridge;
#[cfg(feature = "desktop")]
mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
mod utils;

#[cfg(feature = "desktop")]
use state::AppState;

#[cfg(feature = "desktop")]
use tauri::Manager;
#[cfg(feature = "desktop")]
use tauri::http::{Response, StatusCode, header};

/// 预览协议响应
///
/// 请求的代号仍是当前预览时返回文档，否则 404（旧句柄已被作废）。
#[cfg(feature = "desktop")]
fn preview_response(state: Option<&AppState>, request_path: &str) -> Response<Vec<u8>> {
    let document = state.and_then(|s| s.resolve_preview(request_path));
    let (status, body) = match document {
        Some(html) => (StatusCode::OK, html.as_bytes().to_vec()),
        None => (StatusCode::NOT_FOUND, Vec::new()),
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

// `#[cfg_attr(mobile, tauri::mobile_entry_point)]`：移动端时将 `run()` 标记为入口点，
// 桌面端由 `main.rs` 直接调用。
#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 注册插件（对话框用于导出路径选择，Opener 用于在系统浏览器打开预览）
/// 2. 注册 `preview://` 协议
/// 3. 在 `setup` 钩子中读取配置、注册 `AppState`，调试构建下启用日志插件
/// 4. 注册所有 commands 并启动事件循环
///
/// # Panics
/// Tauri 应用启动失败（如配置文件缺失或窗口创建失败）时 panic。
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .register_uri_scheme_protocol("preview", |ctx, request| {
            let state = ctx.app_handle().try_state::<AppState>();
            preview_response(state.as_deref(), request.uri().path())
        })
        .invoke_handler(tauri::generate_handler![
            // 身份
            commands::auth::sign_in,
            commands::auth::sign_out,
            commands::auth::current_identity,
            // 项目
            commands::projects::list_projects,
            commands::projects::create_project,
            commands::projects::open_project,
            commands::projects::close_project,
            // 编辑器
            commands::editor::workbench_event,
            commands::editor::get_save_status,
            commands::editor::get_editor_config,
            commands::editor::save_editor_config,
            // 导出
            commands::export::suggest_export_name,
            commands::export::export_project,
            commands::export::open_preview_external,
        ])
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let config = tauri::async_runtime::block_on(services::config::load_config());
            app.manage(AppState::new(config)?);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            // 退出前写入等待中的编辑
            if let tauri::RunEvent::ExitRequested { .. } = event {
                if let Some(state) = app.try_state::<AppState>() {
                    if let Err(e) = tauri::async_runtime::block_on(state.close_project()) {
                        log::error!("退出时保存失败: {}", e);
                    }
                }
            }
        });
}
