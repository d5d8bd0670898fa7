//! Home page: banner, hero text and the open dropdown

use super::{colors, menus};
use crate::app::App;
use crate::tui::layout::{BannerItem, BannerLayout};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HERO: [&str; 3] = [
    "Generate conversion-focused ad creatives",
    "and social media post creatives in seconds using AI.",
    "Get better results while saving time.",
];

pub fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let banner = BannerLayout::compute(frame.area());
    render_banner(frame, app, &banner);
    render_hero(frame, area, banner.area.bottom());

    // Drawn last so it covers the hero text
    if let Some((menu, panel)) = app.open_panel() {
        menus::render_panel(frame, menu, panel);
    }
}

fn render_banner(frame: &mut Frame<'_>, app: &App, banner: &BannerLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(block, banner.area);

    for &(item, rect) in banner.items() {
        if rect.width == 0 {
            continue;
        }
        let style = item_style(app, item);
        let label = Paragraph::new(Line::from(Span::styled(format!(" {} ", item.label()), style)));
        frame.render_widget(label, rect);
    }
}

fn item_style(app: &App, item: BannerItem) -> Style {
    match item {
        BannerItem::Logo => Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
        BannerItem::Menu(menu) if app.active_menu.is_open(menu) => Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
        BannerItem::TryFree => Style::default()
            .fg(colors::TEXT_ON_ACCENT)
            .bg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
        BannerItem::GoogleStart => Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT),
        BannerItem::Login => Style::default().fg(colors::ACCENT_SOFT),
        _ => Style::default().fg(colors::TEXT_PRIMARY),
    }
}

fn render_hero(frame: &mut Frame<'_>, area: Rect, banner_bottom: u16) {
    let top = banner_bottom.saturating_add(3);
    if top >= area.bottom() {
        return;
    }
    let hero_area = Rect::new(area.x, top, area.width, area.bottom() - top);

    let mut lines = vec![Line::from(Span::styled(
        HERO[0],
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        HERO[1..]
            .iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(colors::TEXT_DIM)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Try it free, no credit card required",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        hero_area,
    );
}
