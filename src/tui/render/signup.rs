//! Sign-up page: form on the left, testimonial and logo marquee on the right

use super::colors;
use crate::app::App;
use crate::form::{Focus, FormField};
use crate::tui::layout::{REVEAL_HIDE, REVEAL_SHOW, SignupLayout, wrap_words};
use crate::validate::FieldKind;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CURSOR: char = '│';
const MASK: char = '•';
const SUBMIT_LABEL: &str = "Sign up today to get 10 free downloads";

const TESTIMONIAL: &str = "As one of the top real estate teams in Canada, we leverage \
    software like Adcreative.ai to help deploy new dynamic ad campaigns. With the least \
    effort of a few clicks, this tool gives you the best shot in getting your audience's \
    attention.";

pub fn render_signup(frame: &mut Frame<'_>, app: &App) {
    let layout = SignupLayout::compute(frame.area());

    render_intro(frame, &layout);
    for kind in FieldKind::ALL {
        render_field(frame, app, &layout, kind);
    }
    render_submit(frame, app, layout.submit);
    render_footer(frame, &layout);
    render_showcase(frame, layout.showcase);
    render_marquee(frame, app, layout.marquee);
}

fn render_intro(frame: &mut Frame<'_>, layout: &SignupLayout) {
    let headline = vec![
        Line::from(Span::styled(
            "#1 most used AI tool for advertising.",
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Sign up today to ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                "get 10 free downloads",
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        layout.headline,
    );

    let google = Paragraph::new(Line::from(Span::styled(
        " G  Sign up with Google ",
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(google, layout.google);

    let divider = Paragraph::new(Line::from(Span::styled(
        "──────── OR ────────",
        Style::default().fg(colors::TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(divider, layout.divider);
}

fn render_field(frame: &mut Frame<'_>, app: &App, layout: &SignupLayout, kind: FieldKind) {
    let field = app.form.field(kind);
    let focused = app.form.focus() == Focus::Field(kind);
    let area = layout.field(kind);

    let border_color = if field.is_invalid() {
        colors::WARNING
    } else if focused {
        colors::BORDER_FOCUSED
    } else {
        colors::BORDER
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors::INPUT_BG));

    // Floating label
    if field.has_content() {
        let label_color = if field.is_invalid() {
            colors::WARNING
        } else {
            colors::TEXT_DIM
        };
        block = block.title(Span::styled(
            format!(" {} ", kind.label()),
            Style::default().fg(label_color),
        ));
    }

    let mut inner = block.inner(area);
    frame.render_widget(block, area);

    if kind == FieldKind::Password && layout.reveal.width > 0 {
        let toggle = if app.form.password_revealed() {
            REVEAL_HIDE
        } else {
            REVEAL_SHOW
        };
        frame.render_widget(
            Paragraph::new(Span::styled(toggle, Style::default().fg(colors::ACCENT_SOFT))),
            layout.reveal,
        );
        inner.width = layout.reveal.x.saturating_sub(inner.x + 1);
    }

    let content = if field.has_content() {
        let masked = kind == FieldKind::Password && !app.form.password_revealed();
        Line::from(Span::styled(
            visible_text(field, masked, focused, usize::from(inner.width)),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
    } else if focused {
        Line::from(Span::styled(
            CURSOR.to_string(),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
    } else {
        Line::from(Span::styled(
            kind.placeholder(),
            Style::default().fg(colors::TEXT_MUTED),
        ))
    };
    frame.render_widget(Paragraph::new(content), inner);

    if field.shows_warning() {
        let area = layout.warning(kind);
        let lines: Vec<Line<'_>> = wrap_words(kind.warning(), area.width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::WARNING))))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Field text as drawn: masked if needed, with the cursor marker when
/// focused, scrolled so the cursor stays within `width` cells
fn visible_text(field: &FormField, masked: bool, focused: bool, width: usize) -> String {
    let mut chars: Vec<char> = if masked {
        field.value().chars().map(|_| MASK).collect()
    } else {
        field.value().chars().collect()
    };

    let cursor = field.value()[..field.cursor()].chars().count();
    if focused {
        chars.insert(cursor, CURSOR);
    }

    let start = if chars.len() > width {
        (cursor + 1).saturating_sub(width)
    } else {
        0
    };
    chars.into_iter().skip(start).take(width).collect()
}

fn render_submit(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let enabled = app.form.can_submit();
    let focused = app.form.focus() == Focus::Submit;

    let (fg, bg, border) = if enabled {
        (colors::TEXT_ON_ACCENT, colors::ACCENT, colors::ACCENT)
    } else {
        (colors::TEXT_MUTED, colors::DISABLED, colors::DISABLED)
    };
    let mut style = Style::default().fg(fg).bg(bg);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    let border_style = if focused {
        Style::default().fg(colors::TEXT_PRIMARY)
    } else {
        Style::default().fg(border)
    };

    let button = Paragraph::new(Line::from(SUBMIT_LABEL))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}

fn render_footer(frame: &mut Frame<'_>, layout: &SignupLayout) {
    let terms = Line::from(vec![
        Span::styled(
            "By registering you agree to our ",
            Style::default().fg(colors::TEXT_DIM),
        ),
        Span::styled(
            "terms of use",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(terms).alignment(Alignment::Center),
        layout.terms,
    );

    let account = Line::from(vec![
        Span::styled(
            "Do you have an account? ",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Login",
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(account).alignment(Alignment::Center),
        layout.account,
    );
}

fn render_showcase(frame: &mut Frame<'_>, area: Rect) {
    let bold = Style::default()
        .fg(colors::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(colors::TEXT_DIM);

    let lines = vec![
        Line::from(Span::styled("Cody T.", bold)),
        Line::from(Span::styled(
            "Minimum Effort Maximum Attention",
            Style::default().fg(colors::ACCENT),
        )),
        Line::default(),
        Line::from(Span::styled(TESTIMONIAL, dim)),
        Line::default(),
        Line::from(vec![
            Span::styled("★★★★★ ", Style::default().fg(colors::ACCENT)),
            Span::styled("500+ 5 star reviews", dim),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Supporting over ", dim),
            Span::styled("3,000,000 users", bold),
            Span::styled(" worldwide", dim),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Over ", dim),
            Span::styled("1 Billion Ad Creatives", bold),
            Span::styled(" Generated by Top Brands Including:", dim),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_marquee(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let strip = app.marquee.visible(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Span::styled(
            strip,
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(value: &str, cursor_home: bool) -> FormField {
        let mut field = FormField::new(FieldKind::Password);
        field.set(value);
        if cursor_home {
            field.cursor_home();
        }
        field
    }

    #[test]
    fn test_visible_text_masks() {
        let field = field_with("Secret1!", false);
        assert_eq!(visible_text(&field, true, false, 20), "••••••••");
        assert_eq!(visible_text(&field, false, false, 20), "Secret1!");
    }

    #[test]
    fn test_visible_text_places_cursor() {
        let field = field_with("abc", false);
        assert_eq!(visible_text(&field, false, true, 20), "abc│");

        let field = field_with("abc", true);
        assert_eq!(visible_text(&field, false, true, 20), "│abc");
    }

    #[test]
    fn test_visible_text_scrolls_to_cursor() {
        let field = field_with("abcdefghij", false);
        assert_eq!(visible_text(&field, false, true, 5), "ghij│");

        let field = field_with("abcdefghij", true);
        assert_eq!(visible_text(&field, false, true, 5), "│abcd");
    }

    #[test]
    fn test_visible_text_counts_multibyte_chars() {
        let field = field_with("café", false);
        assert_eq!(visible_text(&field, true, true, 20), "••••│");
    }
}
