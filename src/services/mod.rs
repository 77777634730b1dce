//! # 业务逻辑服务模块
//!
//! 包含编辑器核心逻辑的实现，与 Tauri command 层解耦：
//! - `store` / `local_store` - 项目存储接口及其本地 JSON 文件实现
//! - `identity` - 当前登录身份
//! - `bootstrap` - 打开项目时的加载与默认文件初始化
//! - `session` - 内存中的编辑会话（文件集合、激活文件、保存状态）
//! - `autosave` - 自动保存防抖槽
//! - `preview` - 预览文档合成与 `preview://` 文档注册表
//! - `resizer` - 编辑器 / 预览分栏拖拽状态机
//! - `view` - 界面协作者接口（编辑器控件、工作台视图）
//! - `workbench` - 把入站事件分派到以上各部分的控制器
//! - `language` / `defaults` - 文件类型映射与新项目的默认文件
//! - `export` - JSON / ZIP 导出
//! - `config` - 编辑器配置读写
//! - `file_guard` - 数据目录内的安全文件写入

pub mod autosave;
pub mod bootstrap;
pub mod config;
pub mod defaults;
pub mod export;
pub mod file_guard;
pub mod identity;
pub mod language;
pub mod local_store;
pub mod preview;
pub mod resizer;
pub mod session;
pub mod store;
pub mod view;
pub mod workbench;
