//! # 预览合成服务
//!
//! 把内存中的项目文件拼装成一个可直接渲染的 HTML 文档：
//! 1. 以 `index.html` 的内容为基础
//! 2. 在第一个 `</head>` 之前插入 `<style>{style.css}</style>`，找不到则追加到末尾
//! 3. 在第一个 `</body>` 之前插入 `<script>{script.js}</script>`，找不到则追加到末尾
//!
//! 纯文本拼接而非 HTML 解析：标签缺失或格式错误时退化为追加，从不失败。
//! 缺少的文件按空字符串处理。
//!
//! ## 预览句柄
//! 合成结果通过 `PreviewRegistry` 发布为带代号的句柄，由 `preview://` 协议提供给
//! 预览 iframe。每次发布都会替换并作废上一个句柄，长时间编辑不会累积旧文档。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::models::project::ProjectFile;
use crate::services::defaults::{INDEX_HTML, SCRIPT_JS, STYLE_CSS};

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

/// 合成预览文档（纯函数，无 I/O）
///
/// 插入位置均以原始 `index.html` 中的标签为准，
/// 注入的 CSS 内容不会影响 `</body>` 的定位。
pub fn synthesize(files: &[ProjectFile]) -> String {
    let content_of = |name: &str| {
        files
            .iter()
            .find(|f| f.name == name)
            .map_or("", |f| f.content.as_str())
    };

    let html = content_of(INDEX_HTML);
    let style = format!("<style>{}</style>", content_of(STYLE_CSS));
    let script = format!("<script>{}</script>", content_of(SCRIPT_JS));

    // (插入位置, 内容)；未找到标签时位置为文档末尾。先样式后脚本，稳定排序保持该顺序
    let mut insertions = [
        (find_marker(html, HEAD_CLOSE), style),
        (find_marker(html, BODY_CLOSE), script),
    ];
    insertions.sort_by_key(|(pos, _)| *pos);

    let extra: usize = insertions.iter().map(|(_, s)| s.len()).sum();
    let mut out = String::with_capacity(html.len() + extra);
    let mut cursor = 0;
    for (pos, snippet) in &insertions {
        out.push_str(&html[cursor..*pos]);
        out.push_str(snippet);
        cursor = *pos;
    }
    out.push_str(&html[cursor..]);
    out
}

/// 标签首次出现的字节位置；不存在时返回文档长度
///
/// 标签以 ASCII `<` 开头，返回值总是字符边界。
fn find_marker(html: &str, marker: &str) -> usize {
    memchr::memmem::find(html.as_bytes(), marker.as_bytes()).unwrap_or(html.len())
}

// ============ 预览句柄 ============

/// 已发布的预览句柄
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface PreviewHandle {
///   generation: number;
///   url: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewHandle {
    /// 发布代号，单调递增
    pub generation: u64,
    /// 预览 iframe 的 `src`
    pub url: String,
}

/// 当前预览文档
struct PreviewDocument {
    generation: u64,
    html: Arc<str>,
}

/// 预览文档注册表
///
/// 只保留最新一份文档；旧代号在新文档发布后立即失效。
pub struct PreviewRegistry {
    current: RwLock<Option<PreviewDocument>>,
    next_generation: AtomicU64,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            next_generation: AtomicU64::new(1),
        }
    }

    /// 发布新文档，替换并作废上一个句柄
    pub fn publish(&self, html: String) -> PreviewHandle {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(PreviewDocument {
            generation,
            html: Arc::from(html),
        });
        PreviewHandle {
            generation,
            url: preview_url(generation),
        }
    }

    /// 按代号取文档；代号已被替换或注册表已清空时返回 `None`
    pub fn resolve(&self, generation: u64) -> Option<Arc<str>> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current
            .as_ref()
            .filter(|doc| doc.generation == generation)
            .map(|doc| Arc::clone(&doc.html))
    }

    /// 最新文档
    pub fn latest(&self) -> Option<(PreviewHandle, Arc<str>)> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(|doc| {
            (
                PreviewHandle {
                    generation: doc.generation,
                    url: preview_url(doc.generation),
                },
                Arc::clone(&doc.html),
            )
        })
    }

    /// 释放当前文档（会话关闭时）
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 预览协议的 URL
///
/// Windows / Android 上 WebView 通过 `http://<scheme>.localhost/` 访问自定义协议，
/// 其他平台为 `<scheme>://localhost/`。
pub fn preview_url(generation: u64) -> String {
    if cfg!(any(windows, target_os = "android")) {
        format!("http://preview.localhost/{}/index.html", generation)
    } else {
        format!("preview://localhost/{}/index.html", generation)
    }
}

/// 从请求路径（如 `/12/index.html`）解析预览代号
pub fn parse_generation(request_path: &str) -> Option<u64> {
    request_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
