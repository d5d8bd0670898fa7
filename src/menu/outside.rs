//! Outside-interaction detection over a set of excluded regions

use ratatui::layout::Rect;

/// Whether the cell `(x, y)` lies inside `rect`
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}

/// A set of regions whose clicks do not count as "outside".
///
/// Register the rectangles that own an interaction (e.g. dropdown triggers)
/// and ask whether a click landed outside all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutsideClick {
    excluded: Vec<Rect>,
}

impl OutsideClick {
    /// Create a detector with no excluded regions
    #[must_use]
    pub const fn new() -> Self {
        Self {
            excluded: Vec::new(),
        }
    }

    /// Build a detector from a set of regions
    #[must_use]
    pub fn with_regions(regions: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            excluded: regions.into_iter().collect(),
        }
    }

    /// Add a region that does not count as outside
    pub fn exclude(&mut self, region: Rect) {
        self.excluded.push(region);
    }

    /// Forget all regions
    pub fn clear(&mut self) {
        self.excluded.clear();
    }

    /// Registered regions
    #[must_use]
    pub fn regions(&self) -> &[Rect] {
        &self.excluded
    }

    /// Whether `(x, y)` is outside every registered region.
    ///
    /// With no regions registered every point is outside.
    #[must_use]
    pub fn is_outside(&self, x: u16, y: u16) -> bool {
        !self
            .excluded
            .iter()
            .any(|&region| rect_contains(region, x, y))
    }
}
