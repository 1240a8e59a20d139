//! 通用 UI 组件
//!
//! 搜索框、空气质量卡片等组件

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::chart::sparkline_values;
use crate::models::AirQualityReading;
use crate::theme::{Palette, category_colors};

pub const SEARCH_PLACEHOLDER: &str = "Enter city name...";

/// [组件] 带边框的面板，返回内部区域
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    footer: Option<&str>,
    palette: &Palette,
    focused: bool,
) -> Rect {
    let border = if focused { palette.highlight } else { palette.border };
    let mut block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.surface).fg(palette.foreground));
    if let Some(footer) = footer {
        block = block.title_bottom(
            Line::from(Span::styled(footer.to_string(), Style::default().fg(palette.muted)))
                .right_aligned(),
        );
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 搜索输入框，空内容时显示占位文本
pub fn render_search_input(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let inner = render_panel(frame, area, " Search ", None, palette, is_focused);

    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(palette.muted)),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(palette.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(palette.muted)),
            Span::styled(query, Style::default().fg(palette.foreground)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if is_focused {
        // 超长输入时光标停在输入框右边缘
        let offset = u16::try_from(query.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// [组件] 单个城市的空气质量卡片
pub fn render_reading_card(
    frame: &mut Frame,
    area: Rect,
    reading: &AirQualityReading,
    is_selected: bool,
    min_bar_percent: f64,
    palette: &Palette,
) {
    let title = format!(" {} ", reading.city);
    let footer = format!(" updated {} ", reading.observed_at.format("%H:%M"));
    let inner = render_panel(frame, area, &title, Some(&footer), palette, is_selected);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 国家 + 天气
            Constraint::Length(1), // AQI
            Constraint::Length(1), // 等级徽章
            Constraint::Length(3), // 历史
            Constraint::Length(1), // 温度 / 湿度
            Constraint::Length(1), // PM2.5
            Constraint::Min(0),
        ])
        .split(inner);

    let country = Line::from(vec![
        Span::styled(reading.country.as_str(), Style::default().fg(palette.muted)),
        Span::raw("  "),
        Span::styled(reading.weather_icon().glyph(), Style::default().fg(palette.primary)),
    ]);
    frame.render_widget(Paragraph::new(country), chunks[0]);

    let aqi = Line::from(Span::styled(
        format!("AQI {}", reading.aqi),
        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(aqi), chunks[1]);

    let category = reading.category();
    let (badge_fg, badge_bg) = category_colors(category);
    let label = if category.label().len() + 2 <= chunks[2].width as usize {
        category.label()
    } else {
        category.short_label()
    };
    let badge = Line::from(Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(badge_fg)
            .bg(badge_bg)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(badge), chunks[2]);

    let history = Sparkline::default()
        .data(sparkline_values(&reading.history, min_bar_percent))
        .max(100)
        .style(Style::default().fg(palette.primary));
    frame.render_widget(history, chunks[3]);

    let weather = Line::from(vec![
        Span::styled("Temp ", Style::default().fg(palette.muted)),
        Span::raw(format!("{}°C", reading.temperature)),
        Span::styled("   Humidity ", Style::default().fg(palette.muted)),
        Span::raw(format!("{}%", reading.humidity)),
    ]);
    frame.render_widget(Paragraph::new(weather), chunks[4]);

    let pm25 = Line::from(vec![
        Span::styled("PM2.5: ", Style::default().fg(palette.muted)),
        Span::raw(format!("{} μg/m³", reading.pm25)),
    ]);
    frame.render_widget(Paragraph::new(pm25), chunks[5]);
}
