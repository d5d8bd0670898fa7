//! Screen geometry shared by rendering and mouse hit-testing
//!
//! Every rectangle the renderer draws into and the mouse handler tests
//! against comes from here, so the two never disagree.

use crate::menu::{MenuId, rect_contains};
use crate::validate::FieldKind;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Brand mark at the left of the banner
pub const LOGO: &str = "◆ adcreative";

/// Password reveal toggle text while the password is masked
pub const REVEAL_SHOW: &str = "[show]";

/// Password reveal toggle text while the password is visible
pub const REVEAL_HIDE: &str = "[hide]";

const BANNER_HEIGHT: u16 = 3;
const BANNER_TOP_MARGIN: u16 = 1;
const ITEM_GAP: u16 = 1;
const SECTION_GAP: u16 = 3;
const FORM_WIDTH: u16 = 48;

/// Clickable entries of the banner, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerItem {
    /// Brand mark
    Logo,
    /// "Home" link
    Home,
    /// Dropdown trigger
    Menu(MenuId),
    /// "Enterprise" link
    Enterprise,
    /// "Pricing" link
    Pricing,
    /// "Login" button
    Login,
    /// "Try For Free Now" button
    TryFree,
    /// "Start Free With Google" button
    GoogleStart,
}

impl BannerItem {
    /// Banner order
    pub const ALL: [Self; 9] = [
        Self::Logo,
        Self::Home,
        Self::Menu(MenuId::Features),
        Self::Menu(MenuId::Solutions),
        Self::Enterprise,
        Self::Pricing,
        Self::Login,
        Self::TryFree,
        Self::GoogleStart,
    ];

    /// Text drawn for this item
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Logo => LOGO,
            Self::Home => "Home",
            Self::Menu(MenuId::Features) => "Features ▾",
            Self::Menu(MenuId::Solutions) => "Solutions ▾",
            Self::Enterprise => "Enterprise",
            Self::Pricing => "Pricing",
            Self::Login => "Login",
            Self::TryFree => "Try For Free Now",
            Self::GoogleStart => "Start Free With Google",
        }
    }

    /// Whether clicking this item opens the sign-up page
    #[must_use]
    pub const fn opens_signup(self) -> bool {
        matches!(self, Self::Login | Self::TryFree)
    }

    /// Cells taken by the item, one padding cell on each side
    fn width(self) -> u16 {
        let chars = self.label().chars().count();
        u16::try_from(chars).unwrap_or(u16::MAX).saturating_add(2)
    }

    const fn gap_before(self) -> u16 {
        match self {
            Self::Logo => 0,
            Self::Home | Self::Login => SECTION_GAP,
            _ => ITEM_GAP,
        }
    }
}

/// Split the frame into the page body and the one-row status bar
#[must_use]
pub fn page_areas(frame: Rect) -> (Rect, Rect) {
    let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame);
    (body, status)
}

/// Width the banner wants: border, padding and every item
#[must_use]
pub fn banner_natural_width() -> u16 {
    BannerItem::ALL
        .iter()
        .fold(4, |acc: u16, item| {
            acc.saturating_add(item.gap_before()).saturating_add(item.width())
        })
}

/// Rectangle of the banner box, centred near the top of the body
#[must_use]
pub fn banner_area(frame: Rect) -> Rect {
    let (body, _) = page_areas(frame);
    let width = banner_natural_width().min(body.width);
    let x = body.x + (body.width - width) / 2;
    let y = body.y.saturating_add(BANNER_TOP_MARGIN).min(body.bottom());
    let height = BANNER_HEIGHT.min(body.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}

/// Item rectangles inside the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLayout {
    /// The banner box
    pub area: Rect,
    items: Vec<(BannerItem, Rect)>,
}

impl BannerLayout {
    /// Lay out the banner for a frame. Items past the right edge get an
    /// empty rectangle.
    #[must_use]
    pub fn compute(frame: Rect) -> Self {
        let area = banner_area(frame);
        let inner = area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        let mut x = inner.x;
        let items = BannerItem::ALL
            .iter()
            .map(|&item| {
                x = x.saturating_add(item.gap_before());
                let rect = Rect::new(x, inner.y, item.width(), inner.height.min(1));
                x = x.saturating_add(item.width());
                (item, rect.intersection(inner))
            })
            .collect();

        Self { area, items }
    }

    /// Every item with its rectangle
    #[must_use]
    pub fn items(&self) -> &[(BannerItem, Rect)] {
        &self.items
    }

    /// Rectangle of one item
    #[must_use]
    pub fn rect_of(&self, item: BannerItem) -> Rect {
        self.items
            .iter()
            .find_map(|&(candidate, rect)| (candidate == item).then_some(rect))
            .unwrap_or_default()
    }

    /// Rectangle of a dropdown trigger
    #[must_use]
    pub fn trigger(&self, menu: MenuId) -> Rect {
        self.rect_of(BannerItem::Menu(menu))
    }

    /// The item under a point
    #[must_use]
    pub fn item_at(&self, x: u16, y: u16) -> Option<BannerItem> {
        self.items
            .iter()
            .find_map(|&(item, rect)| rect_contains(rect, x, y).then_some(item))
    }
}

/// Areas of the sign-up page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupLayout {
    /// Two-line headline
    pub headline: Rect,
    /// "Sign up with Google" row
    pub google: Rect,
    /// "OR" separator row
    pub divider: Rect,
    /// Input boxes, in [`FieldKind::ALL`] order
    pub fields: [Rect; 3],
    /// Warning area under each input box, tall enough for the wrapped text
    pub warnings: [Rect; 3],
    /// Password reveal toggle inside the password box
    pub reveal: Rect,
    /// Submit button
    pub submit: Rect,
    /// Terms line
    pub terms: Rect,
    /// "Do you have an account?" line
    pub account: Rect,
    /// Testimonial column
    pub showcase: Rect,
    /// Logo marquee row
    pub marquee: Rect,
}

impl SignupLayout {
    /// Lay out the sign-up page for a frame
    #[must_use]
    pub fn compute(frame: Rect) -> Self {
        let (body, _) = page_areas(frame);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);

        let width = left.width.saturating_sub(4).min(FORM_WIDTH);
        let column = Rect::new(left.x + (left.width - width) / 2, left.y, width, left.height);
        let warning_rows = FieldKind::ALL.map(|kind| warning_height(kind, width));
        let [
            _,
            headline,
            google,
            divider,
            name,
            name_warning,
            email,
            email_warning,
            password,
            password_warning,
            submit,
            terms,
            account,
            _,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(warning_rows[0]),
            Constraint::Length(3),
            Constraint::Length(warning_rows[1]),
            Constraint::Length(3),
            Constraint::Length(warning_rows[2]),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        let reveal_width = u16::try_from(REVEAL_SHOW.len()).unwrap_or(0);
        let reveal = if password.width >= reveal_width + 4 && password.height >= 3 {
            Rect::new(password.right() - 2 - reveal_width, password.y + 1, reveal_width, 1)
        } else {
            Rect::default()
        };

        let right = right.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let [showcase, marquee] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(right);

        Self {
            headline,
            google,
            divider,
            fields: [name, email, password],
            warnings: [name_warning, email_warning, password_warning],
            reveal,
            submit,
            terms,
            account,
            showcase,
            marquee,
        }
    }

    /// Input box of a field
    #[must_use]
    pub const fn field(&self, kind: FieldKind) -> Rect {
        self.fields[kind.index()]
    }

    /// Warning row of a field
    #[must_use]
    pub const fn warning(&self, kind: FieldKind) -> Rect {
        self.warnings[kind.index()]
    }

    /// The field whose box contains a point
    #[must_use]
    pub fn field_at(&self, x: u16, y: u16) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|&kind| rect_contains(self.field(kind), x, y))
    }
}

/// Greedy word wrap into lines at most `width` cells wide.
///
/// Words longer than a line are split across lines.
#[must_use]
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            let needed = if line_len == 0 {
                chunk.len()
            } else {
                line_len + 1 + chunk.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chunk);
            line_len += chunk.len();
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

fn warning_height(kind: FieldKind, width: u16) -> u16 {
    let rows = wrap_words(kind.warning(), width).len().max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}
