//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chart::MIN_BAR_PERCENT;
use crate::models::{AirQualityReading, ReadingList};
use crate::theme::Theme;

/// 应用状态
pub struct App {
    pub readings: ReadingList,
    pub selected_index: usize,
    pub grid_columns: usize, // 由渲染时的终端宽度决定
    pub mode: AppMode,
    pub search_query: String,
    pub theme: Theme,
    pub min_bar_percent: f64,
    pub message: Option<String>,
    pub(super) rng: StdRng,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Searching,
}

impl App {
    /// 创建新的应用实例
    pub fn new(seed: Vec<AirQualityReading>, theme: Theme) -> Self {
        Self::with_rng(seed, theme, StdRng::from_entropy())
    }

    /// 使用指定随机源创建，测试中用于得到确定的读数
    pub fn with_rng(seed: Vec<AirQualityReading>, theme: Theme, rng: StdRng) -> Self {
        Self {
            readings: ReadingList::new(seed),
            selected_index: 0,
            grid_columns: 1,
            mode: AppMode::Normal,
            search_query: String::new(),
            theme,
            min_bar_percent: MIN_BAR_PERCENT,
            message: None,
            rng,
        }
    }
}
