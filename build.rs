//! # WebForge Editor - Cargo 构建脚本
//!
//! 启用 `desktop` feature 时调用 `tauri_build::build()`，
//! 根据 `tauri.conf.json` 生成运行时所需的资源绑定、权限清单等编译产物。
//! 无头构建（`--no-default-features`）时不做任何处理。

/// 构建脚本入口函数
fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build()
}
