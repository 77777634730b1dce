//! # 应用全局状态
//!
//! 通过 Tauri 的 `manage()` 注册，所有 command 以 `State<AppState>` 注入访问。
//! 持有项目存储、身份提供者、编辑器配置，以及当前打开的编辑会话（同一时刻至多一个）。
//!
//! ## 线程安全
//! 当前会话槽使用 `std::sync::RwLock`：`preview://` 协议处理器是同步回调，
//! 只需短暂读锁即可取到控制器。锁从不跨越 `.await`。

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{EditorError, Result};
use crate::models::project::Project;
use crate::models::settings::EditorConfig;
use crate::services::bootstrap;
use crate::services::identity::{self, LocalIdentityProvider};
use crate::services::local_store::LocalProjectStore;
use crate::services::preview;
use crate::services::store::ProjectStore;
use crate::services::view::{EditorWidget, WorkbenchView};
use crate::services::workbench::EditorController;
use crate::utils::path;

pub struct AppState {
    config: RwLock<EditorConfig>,
    store: Arc<LocalProjectStore>,
    identity: LocalIdentityProvider,
    session: RwLock<Option<Arc<EditorController>>>,
}

impl AppState {
    /// 按配置解析数据目录并创建状态
    ///
    /// 数据目录只在启动时解析一次，修改 `dataDir` 需重启生效。
    pub fn new(config: EditorConfig) -> Result<Self> {
        let root = path::resolve_data_path(config.data_dir.as_deref())?;
        Ok(Self::with_root(config, root))
    }

    pub fn with_root(config: EditorConfig, root: PathBuf) -> Self {
        log::info!("数据目录: {}", root.display());
        Self {
            config: RwLock::new(config),
            store: Arc::new(LocalProjectStore::new(root.clone())),
            identity: LocalIdentityProvider::new(root),
            session: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &LocalProjectStore {
        &self.store
    }

    pub fn identity(&self) -> &LocalIdentityProvider {
        &self.identity
    }

    pub fn config(&self) -> EditorConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 替换内存中的配置（对之后打开的项目生效）
    pub fn set_config(&self, config: EditorConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// 当前打开的会话
    pub fn current(&self) -> Option<Arc<EditorController>> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 当前打开的会话，没有时返回 `NoActiveSession`
    pub fn require_current(&self) -> Result<Arc<EditorController>> {
        self.current().ok_or(EditorError::NoActiveSession)
    }

    fn take_current(&self) -> Option<Arc<EditorController>> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// 按 `preview://` 请求路径取出当前会话的预览文档
    ///
    /// 代号已被新预览取代、或没有打开的会话时返回 `None`。
    pub fn resolve_preview(&self, request_path: &str) -> Option<Arc<str>> {
        let generation = preview::parse_generation(request_path)?;
        self.current()?.previews().resolve(generation)
    }

    /// 登录检查 → 会话初始化 → 启动控制器
    ///
    /// 已有打开的项目时先关闭它（写入其等待中的编辑）。
    /// 初始化失败时不会留下半初始化的会话。
    pub async fn open_project(
        &self,
        project_id: &str,
        widget: Arc<dyn EditorWidget>,
        view: Arc<dyn WorkbenchView>,
    ) -> Result<Project> {
        if let Err(e) = self.close_project().await {
            log::warn!("关闭上一个项目时保存失败: {}", e);
        }

        let identity = identity::require_identity(&self.identity).await?;
        let session = match bootstrap::bootstrap(self.store.as_ref(), &identity, project_id).await {
            Ok(session) => session,
            Err(e) if e.is_fatal_to_bootstrap() => {
                log::error!("打开项目 {} 失败: {}", project_id, e);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let store: Arc<dyn ProjectStore> = self.store.clone();
        let controller = EditorController::new(session, &self.config(), store, widget, view);
        controller.start();
        let project = controller.project();

        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(controller);
        Ok(project)
    }

    /// 关闭当前项目：写入等待中的编辑并释放会话
    pub async fn close_project(&self) -> Result<()> {
        match self.take_current() {
            Some(controller) => {
                let project = controller.project();
                let result = controller.shutdown().await;
                log::info!("已关闭项目 {} ({})", project.name, project.id);
                result
            }
            None => Ok(()),
        }
    }
}
