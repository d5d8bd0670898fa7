//! Dropdown menus anchored beneath the banner
//!
//! At most one dropdown is open at a time. The selector is a single value,
//! so mutual exclusion holds by construction. Panels are placed from the
//! latest [`AnchorRect`], which the app refreshes on start-up and on every
//! resize.

mod content;
mod outside;

pub use content::{FEATURES, MenuColumn, MenuItem, SOLUTIONS};
pub use outside::{OutsideClick, rect_contains};

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity of a dropdown and of the trigger that opens it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// The "Features" dropdown
    Features,
    /// The "Solutions" dropdown
    Solutions,
}

/// Blank columns between column groups inside a panel
pub const GROUP_GAP: usize = 3;

impl MenuId {
    /// Every dropdown, in banner order
    pub const ALL: [Self; 2] = [Self::Features, Self::Solutions];

    /// Trigger label shown in the banner
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Solutions => "Solutions",
        }
    }

    /// Content columns, grouped left to right.
    ///
    /// Columns inside a group are stacked vertically.
    #[must_use]
    pub fn groups(self) -> Vec<&'static [MenuColumn]> {
        match self {
            Self::Features => vec![&FEATURES[..1], &FEATURES[1..2], &FEATURES[2..]],
            Self::Solutions => vec![SOLUTIONS],
        }
    }

    /// Size the panel wants (borders and padding included)
    #[must_use]
    pub fn content_size(self) -> (u16, u16) {
        let groups = self.groups();
        let inner_width: usize = groups
            .iter()
            .map(|group| group.iter().map(MenuColumn::width).max().unwrap_or(0))
            .sum::<usize>()
            + GROUP_GAP * groups.len().saturating_sub(1);
        let inner_height = groups
            .iter()
            .map(|group| {
                group.iter().map(MenuColumn::height).sum::<usize>() + group.len().saturating_sub(1)
            })
            .max()
            .unwrap_or(0);

        // Border plus one column of padding on each side
        let width = u16::try_from(inner_width + 4).unwrap_or(u16::MAX);
        let height = u16::try_from(inner_height + 2).unwrap_or(u16::MAX);
        (width, height)
    }

    /// Where this dropdown's panel goes.
    ///
    /// The panel sits `panel_gap` rows below the anchor, starts at the
    /// anchor's left edge (shifted for Solutions), never grows wider than the
    /// anchor, and is clipped to the viewport.
    #[must_use]
    pub fn panel_rect(self, anchor: AnchorRect, placement: MenuPlacement, viewport: Rect) -> Rect {
        let x = anchor.left.saturating_add(placement.offset(self));
        let y = anchor.bottom.saturating_add(placement.panel_gap);
        let (width, height) = self.content_size();

        let width = width
            .min(anchor.width)
            .min(viewport.right().saturating_sub(x));
        let height = height.min(viewport.bottom().saturating_sub(y));
        Rect::new(x, y, width, height)
    }
}

/// Measured position of the banner, used to place dropdown panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorRect {
    /// Banner width in cells
    pub width: u16,
    /// Banner left edge
    pub left: u16,
    /// First row below the banner
    pub bottom: u16,
}

impl AnchorRect {
    /// Take a measurement of the banner area
    #[must_use]
    pub const fn measure(area: Rect) -> Self {
        Self {
            width: area.width,
            left: area.x,
            bottom: area.y.saturating_add(area.height),
        }
    }
}

/// Placement tunables for dropdown panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPlacement {
    /// Rows between the banner bottom and the panel
    #[serde(default = "default_panel_gap")]
    pub panel_gap: u16,

    /// Columns the Solutions panel is shifted right of the banner's left edge
    #[serde(default = "default_solutions_offset")]
    pub solutions_offset: u16,
}

const fn default_panel_gap() -> u16 {
    1
}

const fn default_solutions_offset() -> u16 {
    15
}

impl Default for MenuPlacement {
    fn default() -> Self {
        Self {
            panel_gap: default_panel_gap(),
            solutions_offset: default_solutions_offset(),
        }
    }
}

impl MenuPlacement {
    /// Horizontal shift for a given dropdown
    #[must_use]
    pub const fn offset(self, menu: MenuId) -> u16 {
        match menu {
            MenuId::Features => 0,
            MenuId::Solutions => self.solutions_offset,
        }
    }
}

/// Which dropdown is open, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveMenu(Option<MenuId>);

impl ActiveMenu {
    /// No dropdown open
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// The open dropdown
    #[must_use]
    pub const fn current(self) -> Option<MenuId> {
        self.0
    }

    /// Whether `menu` is the open dropdown
    #[must_use]
    pub fn is_open(self, menu: MenuId) -> bool {
        self.0 == Some(menu)
    }

    /// Handle a click on `trigger`.
    ///
    /// Clicking the open trigger closes it; clicking the other trigger
    /// switches straight to it.
    pub fn toggle(&mut self, trigger: MenuId) {
        self.0 = if self.0 == Some(trigger) {
            None
        } else {
            Some(trigger)
        };
        debug!(?trigger, open = ?self.0, "Menu toggled");
    }

    /// Close whatever is open. Returns whether anything was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.0.take();
        if let Some(menu) = was_open {
            debug!(?menu, "Menu dismissed");
        }
        was_open.is_some()
    }
}
