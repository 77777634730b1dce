//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! - `project` - 项目、文件与导出快照
//! - `display` - 推送给前端渲染的文件列表、标签页与保存状态
//! - `settings` - 编辑器配置与登录身份

pub mod display;
pub mod project;
pub mod settings;
