//! # 文件类型映射
//!
//! 根据文件名后缀推导编辑器语言模式和文件列表图标。
//! 后缀匹配区分大小写（`INDEX.HTML` 视为纯文本），与存储中既有数据保持一致。

/// 后缀 → (语言模式, 图标类, 颜色类)
///
/// 按顺序匹配，第一个命中的后缀生效。
const FILE_KINDS: &[FileKind] = &[
    (".html", "html", "fa-brands fa-html5", "html"),
    (".css", "css", "fa-brands fa-css3-alt", "css"),
    (".js", "javascript", "fa-brands fa-js", "js"),
    (".json", "json", "fa-solid fa-code", "json"),
];

/// 未匹配任何后缀时的语言模式
pub const PLAINTEXT: &str = "plaintext";

/// 未匹配任何后缀时的图标
const DEFAULT_ICON: &str = "fa-file";

type FileKind = (&'static str, &'static str, &'static str, &'static str);

fn kind_of(file_name: &str) -> Option<&'static FileKind> {
    FILE_KINDS
        .iter()
        .find(|(suffix, ..)| file_name.ends_with(suffix))
}

/// 根据文件名推导编辑器语言模式
///
/// `.html`→html，`.css`→css，`.js`→javascript，`.json`→json，其余为 plaintext。
pub fn language_for(file_name: &str) -> &'static str {
    kind_of(file_name).map_or(PLAINTEXT, |&(_, lang, ..)| lang)
}

/// 文件列表图标类与颜色类
pub fn icon_for(file_name: &str) -> (&'static str, &'static str) {
    kind_of(file_name).map_or((DEFAULT_ICON, ""), |&(_, _, icon, color)| (icon, color))
}

/// 是否为 HTML 文件（打开时立即刷新预览）
pub fn is_html(file_name: &str) -> bool {
    language_for(file_name) == "html"
}
