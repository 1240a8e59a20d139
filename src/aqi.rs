//! AQI 分级
//!
//! 将空气质量指数映射到六个固定等级

/// AQI 等级，按严重程度升序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    #[allow(dead_code)]
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// 显示文本
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// 窄卡片上使用的徽章文本
    pub fn short_label(self) -> &'static str {
        match self {
            AqiCategory::UnhealthyForSensitive => "Sensitive",
            other => other.label(),
        }
    }

    /// 严重程度 (0 = Good, 5 = Hazardous)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// 稳定的等级标识，用于结构化日志字段；颜色由 theme::category_colors 按枚举选择
    pub fn class_name(self) -> &'static str {
        match self {
            AqiCategory::Good => "aqi-good",
            AqiCategory::Moderate => "aqi-moderate",
            AqiCategory::UnhealthyForSensitive => "aqi-unhealthy-sensitive",
            AqiCategory::Unhealthy => "aqi-unhealthy",
            AqiCategory::VeryUnhealthy => "aqi-very-unhealthy",
            AqiCategory::Hazardous => "aqi-hazardous",
        }
    }
}

/// 按上界（含）依次匹配，最后一档无条件兜底
pub fn classify(aqi: i32) -> AqiCategory {
    match aqi {
        i32::MIN..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitive,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        _ => AqiCategory::Hazardous,
    }
}
