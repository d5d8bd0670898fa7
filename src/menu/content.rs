//! Static dropdown content

/// One entry of a dropdown column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Entry title
    pub name: &'static str,
    /// One-line description under the title
    pub desc: &'static str,
    /// Whether the entry carries a "NEW" badge
    pub is_new: bool,
}

/// A titled column of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuColumn {
    /// Column heading
    pub title: &'static str,
    /// Entries under the heading
    pub items: &'static [MenuItem],
}

impl MenuColumn {
    /// Columns with this many entries or more lay them out side by side
    pub const SPLIT_AT: usize = 6;

    /// Gap between side-by-side entry lists, in characters
    pub const SPLIT_GAP: usize = 3;

    /// Number of side-by-side entry lists
    #[must_use]
    pub const fn splits(&self) -> usize {
        if self.items.len() >= Self::SPLIT_AT { 2 } else { 1 }
    }

    /// Entries per side-by-side list
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.items.len().div_ceil(self.splits())
    }

    /// Lines this column needs: heading, then two lines per entry row
    #[must_use]
    pub const fn height(&self) -> usize {
        1 + self.rows() * 2
    }

    /// Widest single entry, in characters
    #[must_use]
    pub fn entry_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| {
                let title = item.name.chars().count() + if item.is_new { 6 } else { 0 };
                title.max(item.desc.chars().count())
            })
            .max()
            .unwrap_or(0)
    }

    /// Width of the whole column, in characters
    #[must_use]
    pub fn width(&self) -> usize {
        let splits = self.splits();
        let entries = self.entry_width() * splits + Self::SPLIT_GAP * (splits - 1);
        entries.max(self.title.chars().count())
    }
}

const fn item(name: &'static str, desc: &'static str, is_new: bool) -> MenuItem {
    MenuItem { name, desc, is_new }
}

/// Columns of the Features dropdown
pub const FEATURES: &[MenuColumn] = &[
    MenuColumn {
        title: "GENERATE",
        items: &[
            item("Ad Creatives", "Generate conversion-focused ad creatives", false),
            item("Product Videoshoots", "Turn product photos into product videoshoots", false),
            item("Product Photoshoots", "Elevate product photos to e-commerce visuals", false),
            item("Stock Videos", "Generate unique, commercially safe stock videos", false),
            item("Fashion Videoshoots", "Create fashion videos from any image", true),
            item("Instant Ads", "Generate ready-to-launch, conversion-driven ads", true),
            item("Fashion Photoshoots", "Fit product photos onto AI-generated models", false),
            item("Creative Utility Suite", "The all-in-one AI toolkit for creatives", true),
            item("Stock Image Generation", "Premium stock images for commercial use", false),
            item("Buyer Personas", "AI-powered audience profiling", true),
            item("Text & Headlines", "Generate high-conversion text", false),
        ],
    },
    MenuColumn {
        title: "ANALYSE",
        items: &[
            item("Creative Insights", "Identify your top-performing creatives", false),
            item("Competitor Insights", "Gain insights from competitors' websites", false),
            item("Compliance Checker", "Check ads for brand and policy compliance", true),
            item("Ad Inspiration Gallery", "One click away from your next winning ad", false),
        ],
    },
    MenuColumn {
        title: "PREDICT",
        items: &[item(
            "Creative Scoring",
            "Score creatives before you spend",
            false,
        )],
    },
    MenuColumn {
        title: "AUTOMATE",
        items: &[item(
            "Custom Templates",
            "Generate creatives from your own templates",
            false,
        )],
    },
];

/// Columns of the Solutions dropdown
pub const SOLUTIONS: &[MenuColumn] = &[
    MenuColumn {
        title: "ADCREATIVE.AI FOR",
        items: &[
            item("Small Business", "Boost sales with instant ads", false),
            item("E-Commerce", "Convert shoppers into buyers", false),
            item("Agency", "Scale client campaigns effortlessly", false),
        ],
    },
    MenuColumn {
        title: "ESTIMATE YOUR PROFIT",
        items: &[item("ROI Calculator", "See your profit before you spend", true)],
    },
];
