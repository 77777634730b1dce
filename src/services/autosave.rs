//! # 自动保存防抖槽
//!
//! 每个会话至多一个待触发的保存定时器。重新布防会替换并取消上一个定时器，
//! 被替换的定时器永远不会再触发写入。
//!
//! ## 取消语义
//! 取消只作用于仍在等待中的定时器任务：定时器触发时会在会话锁内调用
//! `take_if_current` 认领自己的代号并清空槽位，此后写入已不在槽中，
//! 不会被后续布防中止。即使 `abort` 与定时器唤醒恰好交错，代号校验也会让
//! 过期定时器放弃写入。

use std::time::Duration;

use tokio::task::JoinHandle;

/// 已布防的保存
struct PendingSave {
    generation: u64,
    /// 布防时的激活文件 ID（定时器触发时写入该文件，而不是触发时的激活文件）
    file_id: String,
    handle: JoinHandle<()>,
}

/// 防抖槽
pub struct Debouncer {
    delay: Duration,
    last_generation: u64,
    pending: Option<PendingSave>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_generation: 0,
            pending: None,
        }
    }

    /// 静默期
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 下一个定时器的代号
    pub fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }

    /// 安装新的定时器，取消上一个
    ///
    /// # 返回值
    /// 被替换的定时器所针对的文件 ID（若与新文件不同，调用方负责立即保存它）
    pub fn arm(&mut self, generation: u64, file_id: String, handle: JoinHandle<()>) -> Option<String> {
        let previous = self.pending.replace(PendingSave {
            generation,
            file_id,
            handle,
        });
        previous.map(|p| {
            p.handle.abort();
            p.file_id
        })
    }

    /// 定时器触发时认领槽位
    ///
    /// 代号仍是当前代号时清空槽位并返回目标文件 ID；否则说明已被替换，返回 `None`。
    pub fn take_if_current(&mut self, generation: u64) -> Option<String> {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.generation == generation)
        {
            self.pending.take().map(|p| p.file_id)
        } else {
            None
        }
    }

    /// 取消等待中的定时器
    ///
    /// # 返回值
    /// 被取消定时器的目标文件 ID
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| {
            p.handle.abort();
            p.file_id
        })
    }

    /// 是否有等待中的定时器
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 等待中的定时器的目标文件
    #[cfg(test)]
    pub fn pending_file(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.file_id.as_str())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
