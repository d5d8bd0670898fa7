//! Auto-scrolling logo strip
//!
//! The strip holds two copies of the logo list. The offset moves left by a
//! fixed step per tick and snaps back to zero once the first copy has fully
//! scrolled past, so the second copy takes its place without a visible jump.

use crate::ticker::Periodic;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Brands shown in the strip
pub const LOGOS: &[&str] = &[
    "Northwind", "Contoso", "Globex", "Initech", "Umbrella", "Hooli", "Acme", "Vandelay",
    "Soylent", "Tyrell", "Cyberdyne", "Wonka", "Oscorp", "Gringotts",
];

/// Marquee tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Cells moved per tick
    #[serde(default = "default_step")]
    pub step: f64,

    /// Tick period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Delay before the first tick, letting layout settle
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,

    /// Blank cells between logos
    #[serde(default = "default_logo_gap")]
    pub logo_gap: u16,
}

const fn default_step() -> f64 {
    0.5
}

const fn default_interval_ms() -> u64 {
    33
}

const fn default_startup_delay_ms() -> u64 {
    100
}

const fn default_logo_gap() -> u16 {
    3
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            interval_ms: default_interval_ms(),
            startup_delay_ms: default_startup_delay_ms(),
            logo_gap: default_logo_gap(),
        }
    }
}

/// Offset counter with wraparound at half the duplicated width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLoop {
    offset: f64,
    step: f64,
    full_width: f64,
}

impl ScrollLoop {
    /// Create a loop at offset zero with no measured width
    #[must_use]
    pub const fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            step,
            full_width: 0.0,
        }
    }

    /// Record the rendered width of the duplicated list.
    ///
    /// With a width of zero every tick wraps straight back to zero.
    pub const fn set_full_width(&mut self, full_width: f64) {
        self.full_width = full_width;
    }

    /// Rendered width of the duplicated list
    #[must_use]
    pub const fn full_width(&self) -> f64 {
        self.full_width
    }

    /// Current translation (zero or negative)
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Back to offset zero with no measured width
    pub const fn reset(&mut self) {
        self.offset = 0.0;
        self.full_width = 0.0;
    }

    /// Advance one step. Returns the new offset.
    pub fn tick(&mut self) -> f64 {
        self.offset -= self.step;
        if self.offset <= -(self.full_width / 2.0) {
            self.offset = 0.0;
        }
        self.offset
    }
}

/// The duplicated logo text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoStrip {
    single: Vec<char>,
}

impl LogoStrip {
    /// Lay out `logos` separated by `gap` blanks (a trailing gap included)
    #[must_use]
    pub fn new(logos: &[&str], gap: u16) -> Self {
        let spacer = " ".repeat(usize::from(gap));
        let single = logos
            .iter()
            .flat_map(|logo| logo.chars().chain(spacer.chars()))
            .collect();
        Self { single }
    }

    /// Width of one copy of the list
    #[must_use]
    pub fn single_width(&self) -> usize {
        self.single.len()
    }

    /// Width of both copies
    #[must_use]
    pub fn full_width(&self) -> usize {
        self.single.len() * 2
    }

    /// The visible slice for a translation of `offset`, `width` cells wide.
    ///
    /// The text repeats as often as needed to fill `width`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "offset is clamped to [0, full_width) before the cast"
    )]
    pub fn window(&self, offset: f64, width: usize) -> String {
        if self.single.is_empty() {
            return " ".repeat(width);
        }
        let shift = (-offset).floor().clamp(0.0, self.full_width() as f64) as usize;
        self.single
            .iter()
            .cycle()
            .skip(shift % self.single.len())
            .take(width)
            .collect()
    }
}

/// Logo strip plus the ticker that moves it
#[derive(Debug, Clone)]
pub struct Marquee {
    strip: LogoStrip,
    scroll: ScrollLoop,
    ticker: Periodic,
    measured: bool,
}

impl Marquee {
    /// Build a stopped marquee over `logos`
    #[must_use]
    pub fn new(logos: &[&str], config: MarqueeConfig) -> Self {
        Self {
            strip: LogoStrip::new(logos, config.logo_gap),
            scroll: ScrollLoop::new(config.step),
            ticker: Periodic::new(
                Duration::from_millis(config.interval_ms),
                Duration::from_millis(config.startup_delay_ms),
            ),
            measured: false,
        }
    }

    /// Start scrolling from offset zero after the start-up delay. The strip
    /// is measured again on the first tick.
    pub fn start(&mut self, now: Instant) {
        self.scroll.reset();
        self.measured = false;
        self.ticker.start(now);
    }

    /// Stop scrolling
    pub const fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Whether the marquee is scrolling
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Advance if a tick is due. Returns whether the offset moved.
    ///
    /// The strip width is measured on the first tick, after the start-up
    /// delay has elapsed.
    #[expect(
        clippy::cast_precision_loss,
        reason = "strip widths are far below f64 precision limits"
    )]
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        if !self.measured {
            self.scroll.set_full_width(self.strip.full_width() as f64);
            self.measured = true;
            debug!(width = self.strip.full_width(), "Marquee measured");
        }
        self.scroll.tick();
        true
    }

    /// Time until the next tick, if running
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    /// Current translation
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Visible text for a viewport `width` cells wide
    #[must_use]
    pub fn visible(&self, width: usize) -> String {
        self.strip.window(self.scroll.offset(), width)
    }
}
