//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `auth` - 登录、退出与当前身份
//! - `projects` - 项目列表、创建、打开与关闭
//! - `editor` - 工作台事件入口、保存状态与编辑器配置
//! - `export` - JSON / ZIP 导出与在系统浏览器中打开预览
//!
//! 所有 command 以 `EditorError` 作为错误类型，前端按 `kind` 字段分派处理
//! （如 `authRequired` 跳转登录、`notFound` 回到项目列表）。

pub mod auth;
pub mod editor;
pub mod export;
pub mod projects;
