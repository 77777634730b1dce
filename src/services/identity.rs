//! # 身份检查
//!
//! 会话初始化前的登录门槛。`IdentityProvider::current_identity()` 返回 `None`
//! 时，调用方以 `AuthRequired` 中止初始化并引导前端跳转登录界面。
//!
//! 本地实现把身份保存在数据目录下的 `identity.json`。

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{EditorError, Result};
use crate::models::settings::Identity;
use crate::services::file_guard;

const IDENTITY_FILE: &str = "identity.json";

/// 身份提供者
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 当前登录身份；未登录时返回 `None`
    async fn current_identity(&self) -> Result<Option<Identity>>;
}

/// 获取当前身份，未登录时返回 `AuthRequired`
pub async fn require_identity(provider: &dyn IdentityProvider) -> Result<Identity> {
    provider
        .current_identity()
        .await?
        .ok_or(EditorError::AuthRequired)
}

/// 基于本地文件的身份提供者
pub struct LocalIdentityProvider {
    root: PathBuf,
}

impl LocalIdentityProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn identity_path(&self) -> PathBuf {
        self.root.join(IDENTITY_FILE)
    }

    /// 以邮箱登录并写入 `identity.json`
    ///
    /// 用户 ID 由规范化（去空白、小写）后的邮箱经 UUID v5 派生，
    /// 同一邮箱重新登录后仍能看到自己的项目。
    pub async fn sign_in(&self, email: &str) -> Result<Identity> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(EditorError::Config("邮箱不能为空".to_string()));
        }

        let identity = Identity {
            user_id: uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, email.as_bytes()).to_string(),
            email,
        };

        file_guard::write_json(&self.root, &self.identity_path(), &identity).await?;
        log::info!("用户已登录: {}", identity.email);
        Ok(identity)
    }

    /// 退出登录
    pub async fn sign_out(&self) -> Result<()> {
        file_guard::safe_delete_file(&self.root, &self.identity_path()).await
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        file_guard::read_json(&self.identity_path()).await
    }
}
