//! 明暗主题与配色

use ratatui::style::Color;

use crate::aqi::AqiCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// 一套主题所用的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub border: Color,
    pub highlight: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(240, 246, 252),
    surface: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
    primary: Color::Rgb(37, 99, 235),
    border: Color::Rgb(191, 219, 254),
    highlight: Color::Rgb(234, 179, 8),
};

const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    foreground: Color::Rgb(241, 245, 249),
    muted: Color::Rgb(148, 163, 184),
    primary: Color::Rgb(96, 165, 250),
    border: Color::Rgb(51, 65, 85),
    highlight: Color::Rgb(250, 204, 21),
};

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// 切换按钮显示的图标：暗色模式下显示太阳，否则显示月亮
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// AQI 徽章的 (前景, 背景) 颜色
pub fn category_colors(category: AqiCategory) -> (Color, Color) {
    match category {
        AqiCategory::Good => (Color::Rgb(255, 255, 255), Color::Rgb(22, 163, 74)),
        AqiCategory::Moderate => (Color::Rgb(30, 30, 30), Color::Rgb(234, 179, 8)),
        AqiCategory::UnhealthyForSensitive => (Color::Rgb(30, 30, 30), Color::Rgb(249, 115, 22)),
        AqiCategory::Unhealthy => (Color::Rgb(255, 255, 255), Color::Rgb(220, 38, 38)),
        AqiCategory::VeryUnhealthy => (Color::Rgb(255, 255, 255), Color::Rgb(147, 51, 234)),
        AqiCategory::Hazardous => (Color::Rgb(255, 255, 255), Color::Rgb(127, 29, 29)),
    }
}
