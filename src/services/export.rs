//! # 项目导出服务
//!
//! 把内存中的项目快照导出为可下载的文档：
//! - **JSON**：`{name, files[]}` 完整快照，2 空格缩进美化输出
//! - **ZIP**：每个文件按文件名平铺为一个压缩条目，可直接解压后用浏览器打开
//!
//! 导出读取的是会话内存中的内容，包含尚未落盘的编辑。

use std::io::{Cursor, Write};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::models::project::ProjectSnapshot;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    Json,
    Zip,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Zip => "zip",
        }
    }

    /// 按格式渲染导出内容
    pub fn render(self, snapshot: &ProjectSnapshot) -> Result<Vec<u8>> {
        match self {
            Self::Json => Ok(to_json(snapshot)?.into_bytes()),
            Self::Zip => to_zip(snapshot),
        }
    }

    /// 建议的导出文件名
    pub fn file_name(self, project_name: &str) -> String {
        export_file_name(project_name, self.extension())
    }
}

/// 文件名中的空白序列
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 将项目快照导出为 JSON 字符串
pub fn to_json(snapshot: &ProjectSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// 导出文件名：项目名中的空白序列替换为 `_`，再追加后缀
///
/// 例如 `My Site` 得到 `My_Site_export.json`。
pub fn export_file_name(project_name: &str, extension: &str) -> String {
    format!(
        "{}_export.{}",
        WHITESPACE_RE.replace_all(project_name, "_"),
        extension
    )
}

/// 将项目快照打包为 ZIP 字节流
pub fn to_zip(snapshot: &ProjectSnapshot) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for file in &snapshot.files {
        zip.start_file(file.name.as_str(), options)?;
        zip.write_all(file.content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::models::project::ProjectFile;

    fn snapshot() -> ProjectSnapshot {
        let file = |id: &str, name: &str, content: &str| ProjectFile {
            id: id.into(),
            project_id: "p-1".into(),
            name: name.into(),
            language: crate::services::language::language_for(name).into(),
            content: content.into(),
            updated_at: Some(1_700_000_000),
        };
        ProjectSnapshot {
            name: "My  Demo\tSite".into(),
            files: vec![
                file("f-1", "index.html", "<h1>Hi</h1>"),
                file("f-2", "style.css", "h1 { color: red; }"),
            ],
        }
    }

    #[test]
    fn test_export_file_name_collapses_whitespace() {
        assert_eq!(
            export_file_name("My  Demo\tSite", "json"),
            "My_Demo_Site_export.json"
        );
        assert_eq!(export_file_name("plain", "zip"), "plain_export.zip");
    }

    #[test]
    fn test_json_export_is_pretty_and_camel_case() {
        let json = to_json(&snapshot()).unwrap();
        assert!(json.starts_with("{\n  \"name\""));
        assert!(json.contains("\"projectId\": \"p-1\""));
        assert!(json.contains("\"updatedAt\": 1700000000"));

        let parsed: ProjectSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.files.len(), 2);
    }

    #[test]
    fn test_zip_export_contains_every_file() {
        let bytes = to_zip(&snapshot()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut css = String::new();
        archive
            .by_name("style.css")
            .unwrap()
            .read_to_string(&mut css)
            .unwrap();
        assert_eq!(css, "h1 { color: red; }");
    }

    #[test]
    fn test_format_dispatch() {
        let format: ExportFormat = serde_json::from_str("\"zip\"").unwrap();
        assert_eq!(format, ExportFormat::Zip);
        assert_eq!(format.file_name("My Site"), "My_Site_export.zip");

        let json = ExportFormat::Json.render(&snapshot()).unwrap();
        assert_eq!(json, to_json(&snapshot()).unwrap().into_bytes());
    }

    #[test]
    fn test_zip_export_of_empty_project() {
        let empty = ProjectSnapshot {
            name: "empty".into(),
            files: Vec::new(),
        };
        let bytes = to_zip(&empty).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
