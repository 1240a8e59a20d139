//! 布局计算
//!
//! 卡片网格的列数、滚动与位置，均为纯函数

use ratatui::layout::Rect;

/// 单张卡片的高度（含边框）
pub const CARD_HEIGHT: u16 = 11;

/// 根据宽度决定列数：< 80 一列，< 120 两列，否则三列
pub fn grid_columns(width: u16) -> usize {
    if width < 80 {
        1
    } else if width < 120 {
        2
    } else {
        3
    }
}

/// 计算首个可见行，使选中的卡片所在行可见
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(visible_rows.max(1) - 1)
}

/// 返回可见卡片的 (索引, 区域)，最后一列吸收剩余宽度
pub fn card_areas(area: Rect, columns: usize, count: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let column_width = area.width / columns as u16;
    let mut result = Vec::new();

    for row in 0..visible_rows {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            if index >= count {
                return result;
            }

            let x = area.x + column_width * col as u16;
            let width = if col + 1 == columns {
                area.width - column_width * col as u16
            } else {
                column_width
            };
            let y = area.y + CARD_HEIGHT * row as u16;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            result.push((index, Rect::new(x, y, width, height)));
        }
    }

    result
}
