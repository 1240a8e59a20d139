//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::theme::Palette;
use components::{render_reading_card, render_search_input};
use layouts::{CARD_HEIGHT, card_areas, first_visible_row, grid_columns};

pub const API_URL: &str = "https://api.airvisual.com";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 标题
            Constraint::Length(3), // 搜索
            Constraint::Min(CARD_HEIGHT), // 卡片
            Constraint::Length(4), // 提示
            Constraint::Length(1), // 帮助
        ])
        .split(area);

    render_header(frame, app, chunks[0], &palette);
    render_search(frame, app, chunks[1], &palette);
    render_cards(frame, app, chunks[2], &palette);
    render_note(frame, chunks[3], &palette);
    render_help(frame, app, chunks[4], &palette);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let toggle = format!(
        " [t] {} {} mode ",
        app.theme.toggle_glyph(),
        app.theme.toggled().name()
    );
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .title_top(Line::from(Span::styled(toggle, Style::default().fg(palette.muted))).right_aligned());

    let lines = vec![
        Line::from(Span::styled(
            "Air Quality Dashboard",
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Realtime air quality & weather data",
            Style::default().fg(palette.muted),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    // 搜索框居中，最多 60 列
    let width = area.width.min(60);
    let centered = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    render_search_input(
        frame,
        centered,
        &app.search_query,
        app.mode == AppMode::Searching,
        palette,
    );
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    app.grid_columns = grid_columns(area.width);

    if app.readings.is_empty() {
        let empty = Paragraph::new("No cities yet, press / to search")
            .style(Style::default().fg(palette.muted))
            .centered();
        frame.render_widget(empty, area);
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(app.selected_index, app.grid_columns, visible_rows);

    for (index, card_area) in card_areas(area, app.grid_columns, app.readings.len(), first_row) {
        if let Some(reading) = app.readings.get(index) {
            render_reading_card(
                frame,
                card_area,
                reading,
                index == app.selected_index,
                app.min_bar_percent,
                palette,
            );
        }
    }
}

fn render_note(frame: &mut Frame, area: Rect, palette: &Palette) {
    let note = Line::from(vec![
        Span::styled("Note: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("This is a demo using mock data. To use real data, integrate with the "),
        Span::styled(
            format!("IQAir AirVisual API ({})", API_URL),
            Style::default().fg(palette.primary),
        ),
        Span::raw(" by adding your API key."),
    ]);

    let paragraph = Paragraph::new(note)
        .style(Style::default().fg(palette.muted))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let help_text = match app.mode {
        AppMode::Normal => "[/] search  [t] theme  [h/j/k/l] navigate  [q] quit",
        AppMode::Searching => "type a city, [Enter] search  [Esc] cancel",
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text.to_string(),
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(palette.muted)),
        area,
    );
}
