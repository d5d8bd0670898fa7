//! Dropdown panel rendering

use super::colors;
use crate::menu::{GROUP_GAP, MenuColumn, MenuId, MenuItem};
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const NEW_BADGE: &str = " [NEW]";

/// Draw `menu`'s panel into `area`, covering whatever is underneath
pub fn render_panel(frame: &mut Frame<'_>, menu: MenuId, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUSED))
        .style(Style::default().bg(colors::PANEL_BG));
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(block, area);

    let gap = u16::try_from(GROUP_GAP).unwrap_or(0);
    let mut x = inner.x;
    for group in menu.groups() {
        let width = group.iter().map(MenuColumn::width).max().unwrap_or(0);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let rect = Rect::new(x, inner.y, width, inner.height).intersection(inner);
        if rect.width == 0 {
            break;
        }

        let mut lines = Vec::new();
        for (index, column) in group.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.extend(column_lines(column));
        }
        frame.render_widget(Paragraph::new(lines), rect);

        x = x.saturating_add(width).saturating_add(gap);
    }
}

/// Heading, then a name line and a description line per entry row.
/// Long columns put two entries side by side.
fn column_lines(column: &MenuColumn) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        column.title,
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))];

    let rows = column.rows();
    let entry_width = column.entry_width();
    for row in 0..rows {
        let mut name_spans = Vec::new();
        let mut desc_spans = Vec::new();
        for split in 0..column.splits() {
            let Some(item) = column.items.get(split * rows + row) else {
                continue;
            };
            if split > 0 {
                let spacer = " ".repeat(MenuColumn::SPLIT_GAP);
                name_spans.push(Span::raw(spacer.clone()));
                desc_spans.push(Span::raw(spacer));
            }
            name_spans.extend(name_spans_for(item, entry_width));
            desc_spans.push(Span::styled(
                format!("{:<entry_width$}", item.desc),
                Style::default().fg(colors::TEXT_DIM),
            ));
        }
        lines.push(Line::from(name_spans));
        lines.push(Line::from(desc_spans));
    }
    lines
}

fn name_spans_for(item: &MenuItem, entry_width: usize) -> Vec<Span<'static>> {
    let name = Span::styled(
        item.name,
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    );
    let used = item.name.chars().count() + if item.is_new { NEW_BADGE.len() } else { 0 };
    let padding = Span::raw(" ".repeat(entry_width.saturating_sub(used)));

    if item.is_new {
        vec![
            name,
            Span::styled(NEW_BADGE, Style::default().fg(colors::BADGE_NEW)),
            padding,
        ]
    } else {
        vec![name, padding]
    }
}
