//! # 默认项目文件
//!
//! 项目首次打开且没有任何文件时，批量插入以下三个种子文件。
//! 文件名与语言标签需与存储中既有数据逐字一致。

use crate::models::project::NewProjectFile;
use crate::services::language;

/// 预览入口文件名
pub const INDEX_HTML: &str = "index.html";

/// 预览样式文件名
pub const STYLE_CSS: &str = "style.css";

/// 预览脚本文件名
pub const SCRIPT_JS: &str = "script.js";

const DEFAULT_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Mon Site</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="container">
        <h1>Bienvenue sur WebForge AI</h1>
        <p>Modifiez ce code pour commencer.</p>
        <button id="click-btn">Cliquez-moi</button>
    </div>
    <script src="script.js"></script>
</body>
</html>"#;

const DEFAULT_CSS: &str = r#"body {
    font-family: system-ui, sans-serif;
    background-color: #f3f4f6;
    display: flex;
    justify-content: center;
    align-items: center;
    height: 100vh;
    margin: 0;
}
.container {
    background: white;
    padding: 2rem;
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    text-align: center;
}
button {
    background: #6366f1;
    color: white;
    border: none;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    cursor: pointer;
    margin-top: 1rem;
}
button:hover {
    background: #4f46e5;
}"#;

const DEFAULT_JS: &str = r#"document.getElementById('click-btn').addEventListener('click', () => {
    alert('Le JavaScript fonctionne ! 🚀');
});"#;

/// 构造某个项目的三个默认文件
///
/// 插入后的顺序与 ID 以存储返回结果为准。
pub fn default_files(project_id: &str) -> Vec<NewProjectFile> {
    [
        (INDEX_HTML, DEFAULT_HTML),
        (STYLE_CSS, DEFAULT_CSS),
        (SCRIPT_JS, DEFAULT_JS),
    ]
    .into_iter()
    .map(|(name, content)| NewProjectFile {
        project_id: project_id.to_string(),
        name: name.to_string(),
        language: language::language_for(name).to_string(),
        content: content.to_string(),
    })
    .collect()
}
