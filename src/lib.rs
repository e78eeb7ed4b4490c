#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/page-indicator/")]

//! # page-indicator
//!
//! An animated, scrolling page indicator widget for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The indicator renders one dot per page and tracks a *fractional* scroll
//! position: as the host scroll surface moves between pages, the focused
//! dot stretches into a dash, its color blends from the inactive tint
//! toward the active tint, and the next dot grows in behind it. When the
//! page count exceeds a visible maximum the dot row slides within a
//! bounded window (a fixed lead-in at the head, smooth tracking through
//! the middle, and a pinned tail) while dots leaving the window shrink
//! away continuously.
//!
//! The core is pure layout math: every update recomputes an ordered list
//! of [`geometry::Dot`] render objects (center, radius, color, shape) from
//! the latest [`indicator::State`] snapshot. The built-in
//! [`view()`](indicator::Model::view) draws that list as styled terminal
//! glyphs; hosts with richer canvases can consume
//! [`dots()`](indicator::Model::dots) directly.
//!
//! ## Quick start
//!
//! ```rust
//! use page_indicator::prelude::*;
//!
//! let mut indicator = PageIndicator::new();
//! indicator.apply(State::new(10, 0.0));
//!
//! // Drive it from the host's scroll events, once per frame during a drag:
//! indicator.set_progress(3.6);
//!
//! println!("{}", indicator.view());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use page_indicator::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     indicator: PageIndicator,
//!     pages: Vec<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let pages: Vec<String> = (1..=8).map(|i| format!("Page {}", i)).collect();
//!         let mut indicator = PageIndicator::new();
//!         indicator.apply(State::new(pages.len(), 0.0));
//!         (Self { indicator, pages }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // ←/h and →/l step the indicator by whole pages.
//!         self.indicator.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         let page = self.indicator.current_page().floor() as usize;
//!         format!("{}\n\n{}", self.pages[page], self.indicator.view())
//!     }
//! }
//! ```

pub mod color;
pub mod geometry;
pub mod indicator;
pub mod key;

pub use color::{interpolate, AdaptiveRgb, ColorMode, Rgb};
pub use geometry::{Dot, DotShape, Metrics, Point};
pub use indicator::{IndicatorKeyMap, Model as PageIndicator, State};
pub use key::{Binding, KeyMap};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use page_indicator::prelude::*;
///
/// let mut indicator = PageIndicator::new();
/// indicator.apply(State::new(3, 0.0));
/// ```
pub mod prelude {
    pub use crate::color::{interpolate, AdaptiveRgb, ColorMode, Rgb};
    pub use crate::geometry::{Dot, DotShape, Metrics, Point};
    pub use crate::indicator::{IndicatorKeyMap, Model as PageIndicator, State};
    pub use crate::key::{Binding, KeyMap};
}
