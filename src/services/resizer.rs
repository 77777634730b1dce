//! # 面板拖拽调整
//!
//! 编辑器 / 预览分栏的指针拖拽状态机：
//!
//! ```text
//! Idle ──pointer_down──▶ Dragging ──pointer_up──▶ Idle
//!                         │  ▲
//!                         └──┘ pointer_move：计算新宽度
//! ```
//!
//! 新宽度 = 容器宽度 - (指针 X - 文件栏宽度)。结果不在
//! `[最小预览宽度, 容器宽度 - 编辑器保留宽度]` 区间内时直接丢弃并保留上一次的有效宽度，
//! 不做截断。

use crate::models::settings::EditorConfig;

/// 拖拽状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// 状态转移产生的界面副作用
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeEffect {
    /// 拖拽开始：预览 iframe 停止拦截指针事件
    BeginDrag,
    /// 应用新的预览面板宽度
    SetWidth(f64),
    /// 拖拽结束：恢复 iframe 指针事件并通知编辑器重新布局
    EndDrag,
}

/// 布局约束
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    pub sidebar_width: f64,
    pub min_preview_width: f64,
    pub editor_reserve: f64,
}

impl From<&EditorConfig> for LayoutConstraints {
    fn from(config: &EditorConfig) -> Self {
        Self {
            sidebar_width: config.sidebar_width,
            min_preview_width: config.min_preview_width,
            editor_reserve: config.editor_reserve,
        }
    }
}

/// 分栏拖拽器
#[derive(Debug, Clone)]
pub struct Resizer {
    state: DragState,
    constraints: LayoutConstraints,
    /// 最近一次应用的预览宽度；尚未拖拽过时为 `None`（使用 CSS 初始宽度）
    preview_width: Option<f64>,
}

impl Resizer {
    pub fn new(constraints: LayoutConstraints) -> Self {
        Self {
            state: DragState::Idle,
            constraints,
            preview_width: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn preview_width(&self) -> Option<f64> {
        self.preview_width
    }

    /// 在分隔条上按下指针
    pub fn pointer_down(&mut self) -> Option<ResizeEffect> {
        match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging;
                Some(ResizeEffect::BeginDrag)
            }
            DragState::Dragging => None,
        }
    }

    /// 指针移动；仅在拖拽中且新宽度有效时返回 `SetWidth`
    pub fn pointer_move(&mut self, pointer_x: f64, container_width: f64) -> Option<ResizeEffect> {
        if self.state != DragState::Dragging {
            return None;
        }

        let width = self.compute_width(pointer_x, container_width)?;
        self.preview_width = Some(width);
        Some(ResizeEffect::SetWidth(width))
    }

    /// 在任意位置抬起指针
    pub fn pointer_up(&mut self) -> Option<ResizeEffect> {
        match self.state {
            DragState::Dragging => {
                self.state = DragState::Idle;
                Some(ResizeEffect::EndDrag)
            }
            DragState::Idle => None,
        }
    }

    /// 计算候选宽度，越界时返回 `None`
    fn compute_width(&self, pointer_x: f64, container_width: f64) -> Option<f64> {
        let c = &self.constraints;
        let width = container_width - (pointer_x - c.sidebar_width);
        let max = container_width - c.editor_reserve;
        (width.is_finite() && width >= c.min_preview_width && width <= max).then_some(width)
    }
}
