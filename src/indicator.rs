//! An animated, scrolling page indicator component.
//!
//! This component renders a row of dots tracking a fractional scroll
//! position. The focused dot stretches into a dash as the position moves
//! between pages, its color blending from the inactive tint toward the
//! active tint, and when there are more pages than fit the row slides so
//! the focused dot stays inside a bounded window.
//!
//! The component does not own a scroll surface. A host (a carousel, a
//! wizard, a pager) feeds it a `(num_pages, current_page)` signal through
//! [`Model::apply`] or [`Model::set_progress`], typically once per frame
//! during a drag:
//!
//! ```rust
//! use page_indicator::indicator::{Model, State};
//!
//! let mut indicator = Model::new();
//! indicator.apply(State::new(7, 0.0));
//!
//! // Scroll surface reports the page fraction as the user drags.
//! indicator.set_progress(2.4);
//! assert_eq!(indicator.current_page(), 2.4);
//! ```
//!
//! Layout is purely functional: every `apply` recomputes the full dot
//! geometry from the latest snapshot, so there is no animation state to
//! drift. The computed [`Dot`] list is available through [`Model::dots`]
//! for hosts that draw with their own primitives; [`Model::view`] is the
//! built-in terminal backend over that same list.

use crate::color::{interpolate, AdaptiveRgb, ColorMode, Rgb};
use crate::geometry::{Dot, DotShape, Metrics, Point};
use crate::key::{Binding, KeyMap as KeyMapTrait};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss::{Color as LGColor, Style};

/// Distance, in dot-gap units, over which receding dots shrink to nothing.
const MAX_SCALE_DISTANCE: f64 = 2.0;

/// An immutable snapshot of the indicator's input signal.
///
/// The host constructs one of these per update and hands it to
/// [`Model::apply`]. There is no diffing; each snapshot fully supersedes
/// the previous one.
///
/// # Examples
///
/// ```rust
/// use page_indicator::color::{AdaptiveRgb, Rgb};
/// use page_indicator::indicator::State;
///
/// // Default tints: white active, black inactive.
/// let state = State::new(5, 1.5);
/// assert_eq!(state.num_pages, 5);
///
/// // Custom tints, adaptive to light/dark backgrounds if desired.
/// let state = State::new(5, 1.5).with_colors(
///     AdaptiveRgb::from(Rgb::from_rgb8(90, 86, 224)),
///     AdaptiveRgb::new(Rgb::from_rgb8(40, 40, 40), Rgb::from_rgb8(96, 96, 96)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Total number of pages.
    pub num_pages: usize,
    /// The current page, with the fractional part representing transition
    /// progress toward the next page. Clamped to `[0, num_pages − 1]` when
    /// applied.
    pub current_page: f64,
    /// Tint of the focused page's indicator.
    pub active: AdaptiveRgb,
    /// Tint of every other page's indicator.
    pub inactive: AdaptiveRgb,
}

impl State {
    /// Creates a snapshot with the default tints (white active, black
    /// inactive).
    pub fn new(num_pages: usize, current_page: f64) -> Self {
        Self {
            num_pages,
            current_page,
            active: AdaptiveRgb::from(Rgb::WHITE),
            inactive: AdaptiveRgb::from(Rgb::BLACK),
        }
    }

    /// Sets the active and inactive tints (builder pattern).
    pub fn with_colors(mut self, active: AdaptiveRgb, inactive: AdaptiveRgb) -> Self {
        self.active = active;
        self.inactive = inactive;
        self
    }
}

/// Key bindings for stepping the indicator by whole pages.
///
/// The indicator is usually driven by a host scroll surface, but it can
/// also be navigated directly, the same way the classic paginator is.
#[derive(Debug, Clone)]
pub struct IndicatorKeyMap {
    /// Key binding for snapping to the previous page.
    /// Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: Binding,
    /// Key binding for snapping to the next page.
    /// Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: Binding,
}

impl Default for IndicatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for IndicatorKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// The page indicator model.
///
/// Owns the latest applied [`State`] snapshot and the dot render list
/// derived from it. The dot set is rebuilt only when the page count
/// changes; geometry and colors are recomputed in place on every
/// [`apply`](Model::apply) or [`set_bounds`](Model::set_bounds).
///
/// # Examples
///
/// ```rust
/// use page_indicator::indicator::{Model, State};
///
/// let mut indicator = Model::new();
/// indicator.set_bounds(200.0, 24.0);
/// indicator.apply(State::new(7, 3.25));
///
/// assert_eq!(indicator.dots().len(), 7);
/// // The focused dot is a dash, three quarters extended.
/// assert!(indicator.dots()[3].is_dash());
/// assert_eq!(indicator.dots()[3].dash_length(), 9.0 * 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    state: State,
    metrics: Metrics,
    color_mode: ColorMode,
    bounds: (f64, f64),
    dots: Vec<Dot>,
    /// Key bindings.
    pub keymap: IndicatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty indicator: zero pages, nothing rendered.
    pub fn new() -> Self {
        Self {
            state: State::new(0, 0.0),
            metrics: Metrics::default(),
            color_mode: ColorMode::default(),
            bounds: (0.0, 0.0),
            dots: Vec::new(),
            keymap: IndicatorKeyMap::default(),
        }
    }

    /// Sets the layout constants (builder pattern).
    ///
    /// A `fixed_pages` larger than `max_pages` is clamped down to
    /// `max_pages` here, so malformed metrics never reach the window math.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::geometry::Metrics;
    /// use page_indicator::indicator::Model;
    ///
    /// let indicator = Model::new().with_metrics(Metrics {
    ///     gap: 14.0,
    ///     ..Metrics::default()
    /// });
    /// assert_eq!(indicator.metrics().gap, 14.0);
    /// ```
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self.metrics.fixed_pages = self.metrics.fixed_pages.min(self.metrics.max_pages);
        self.layout();
        self
    }

    /// Sets the background mode colors resolve against (builder pattern).
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self.layout();
        self
    }

    /// The latest applied snapshot.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The layout constants in effect.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Total number of pages.
    pub fn num_pages(&self) -> usize {
        self.state.num_pages
    }

    /// The current fractional page, after boundary clamping.
    pub fn current_page(&self) -> f64 {
        self.state.current_page
    }

    /// The ordered dot render list for the latest layout pass.
    ///
    /// External rendering backends consume this directly; positions are in
    /// content coordinates, before the [`content_offset`](Model::content_offset)
    /// translation is applied.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Applies a new snapshot, superseding the previous visual state.
    ///
    /// `current_page` is clamped to `[0, num_pages − 1]` here at the
    /// boundary; the layout math downstream assumes in-range input. The dot
    /// set is rebuilt if the page count changed, then the full geometry is
    /// recomputed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::indicator::{Model, State};
    ///
    /// let mut indicator = Model::new();
    /// indicator.apply(State::new(5, 9.7));
    /// assert_eq!(indicator.current_page(), 4.0); // clamped
    /// ```
    pub fn apply(&mut self, state: State) {
        let mut state = state;
        state.current_page = clamp_page(state.current_page, state.num_pages);
        let rebuild = self.dots.len() != state.num_pages;
        self.state = state;
        if rebuild {
            self.rebuild_dots();
        }
        self.layout();
    }

    /// Updates only the scroll position, keeping page count and tints.
    ///
    /// This is the high-frequency path a host scroll surface drives while
    /// the user drags.
    pub fn set_progress(&mut self, current_page: f64) {
        let mut state = self.state;
        state.current_page = current_page;
        self.apply(state);
    }

    /// Notifies the indicator of a host bounds change.
    ///
    /// The vertical center line and the centered viewport frame are derived
    /// from these bounds, so a bounds change triggers a full re-layout.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.bounds = (width, height);
        self.layout();
    }

    /// Snaps to the start of the previous page.
    ///
    /// Mid-transition this settles back onto the page currently being left;
    /// on a whole page it steps one page back. Has no effect on page zero.
    pub fn prev_page(&mut self) {
        if self.state.num_pages == 0 {
            return;
        }
        let current = self.state.current_page;
        let target = if current.fract() > 0.0 {
            current.floor()
        } else {
            (current - 1.0).max(0.0)
        };
        self.set_progress(target);
    }

    /// Snaps to the start of the next page. Has no effect on the last page.
    pub fn next_page(&mut self) {
        let n = self.state.num_pages;
        if n == 0 {
            return;
        }
        let target = (self.state.current_page.floor() + 1.0).min((n - 1) as f64);
        self.set_progress(target);
    }

    /// Handles key messages for whole-page navigation.
    ///
    /// Call this from the host's `update()` to let the configured bindings
    /// step the indicator, the same way the classic paginator is driven.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Total size of the dot row content, before windowing.
    ///
    /// Zero pages short-circuit to a zero content size.
    pub fn content_size(&self) -> (f64, f64) {
        let n = self.state.num_pages;
        if n == 0 {
            return (0.0, 0.0);
        }
        let m = &self.metrics;
        (m.dash_length + (n - 1) as f64 * m.gap, self.bounds.1)
    }

    /// Width of the visible window the dot row scrolls within.
    pub fn viewport_width(&self) -> f64 {
        let n = self.state.num_pages;
        if n == 0 {
            return 0.0;
        }
        let m = &self.metrics;
        m.dash_length + m.max_pages.min(n) as f64 * m.gap + m.gap - m.line_width
    }

    /// The viewport's `(x, width)` frame, centered in the host bounds.
    pub fn viewport_frame(&self) -> (f64, f64) {
        let width = self.viewport_width();
        ((self.bounds.0 - width) / 2.0, width)
    }

    /// Horizontal offset translating the dot row within the viewport.
    ///
    /// Three zones when the page count exceeds the visible maximum: the
    /// lead-in pages pin the row at zero, the middle tracks the focus
    /// smoothly at `gap × (current − fixed)`, and the tail pins at
    /// `gap × (pages − max)` so the row never over-scrolls. With
    /// `num_pages ≤ max_pages` the offset is always zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::indicator::{Model, State};
    ///
    /// let mut indicator = Model::new();
    /// indicator.apply(State::new(10, 4.0));
    /// assert_eq!(indicator.content_offset(), 11.0 * 2.0);
    /// ```
    pub fn content_offset(&self) -> f64 {
        let n = self.state.num_pages;
        let m = &self.metrics;
        if n <= m.max_pages {
            return 0.0;
        }
        let current = self.state.current_page;
        let fixed = m.fixed_pages as f64;
        if current < fixed {
            0.0
        } else if current < (n - (m.max_pages - m.fixed_pages)) as f64 {
            m.gap * (current - fixed)
        } else {
            m.gap * (n - m.max_pages) as f64
        }
    }

    fn rebuild_dots(&mut self) {
        let radius = self.metrics.radius();
        let inactive = self.state.inactive.resolve(self.color_mode);
        self.dots = (0..self.state.num_pages)
            .map(|index| Dot {
                index,
                center: Point::default(),
                radius,
                color: inactive,
                shape: DotShape::Circle,
            })
            .collect();
    }

    /// Recomputes every dot's frame and color from the current snapshot.
    fn layout(&mut self) {
        let n = self.state.num_pages;
        if n == 0 {
            return;
        }
        let m = self.metrics;
        let radius = m.radius();
        let active = self.state.active.resolve(self.color_mode);
        let inactive = self.state.inactive.resolve(self.color_mode);
        let current = self.state.current_page;

        let page = current.floor() as usize;
        let first_scale = page as f64 - current + 1.0;
        // The last page never shrinks colorwise while leaving forward, only
        // while entering.
        let first_color_scale = if page == n - 1 { 1.0 } else { first_scale };
        let second_scale = (current - page as f64).max(0.0);

        let mut pen = Point::new(m.gap - radius, self.bounds.1 / 2.0);

        for index in 0..n {
            if index == page {
                let length = m.dash_length * first_scale;
                self.dots[index] = Dot {
                    index,
                    center: pen,
                    radius,
                    color: interpolate(inactive, active, first_color_scale),
                    shape: DotShape::Dash { length },
                };
                pen.x += length;
            } else if index == page + 1 {
                let length = m.dash_length * second_scale;
                self.dots[index] = Dot {
                    index,
                    center: pen,
                    radius,
                    color: interpolate(inactive, active, second_scale),
                    shape: DotShape::Dash { length },
                };
                pen.x += length;
            } else {
                let scaled = self.scaled_radius(index);
                self.dots[index] = Dot {
                    index,
                    center: pen,
                    radius: scaled,
                    color: inactive,
                    shape: DotShape::Circle,
                };
            }
            pen.x += m.gap;
        }
    }

    /// Radius for a plain (non-focused) dot.
    ///
    /// When the page count exceeds the visible maximum, dots outside the
    /// fixed lead-in shrink linearly with their distance from the focused
    /// region, clamped to `[0, 1]` of the full radius.
    fn scaled_radius(&self, index: usize) -> f64 {
        let m = &self.metrics;
        let n = self.state.num_pages;
        let radius = m.radius();
        if n <= m.max_pages {
            return radius;
        }

        let current = self.state.current_page;
        let scale = if current > m.fixed_pages as f64 - 1.0 && (index as f64) < current {
            // Before the focus region: dots drop off behind the window once
            // the focus has moved past the lead-in.
            let pinned = current.min((n - m.fixed_pages - 1) as f64);
            let dropped = pinned - m.fixed_pages as f64;
            (index as f64 + 1.0 - dropped).clamp(0.0, MAX_SCALE_DISTANCE) / MAX_SCALE_DISTANCE
        } else {
            // At or after the focus region.
            let lead = current.max(MAX_SCALE_DISTANCE);
            (lead + MAX_SCALE_DISTANCE - index as f64 + 1.0).clamp(0.0, MAX_SCALE_DISTANCE)
                / MAX_SCALE_DISTANCE
        };
        radius * scale
    }

    /// Renders the visible window of the dot row as a styled string.
    ///
    /// This is the built-in terminal backend over [`dots`](Model::dots):
    /// one glyph per dot, windowed by the viewport offset. A dash renders
    /// as `━`, a full circle as `●`, shrinking circles as `•` then `·`,
    /// and fully receded dots are omitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::indicator::{Model, State};
    ///
    /// let mut indicator = Model::new();
    /// indicator.apply(State::new(3, 1.0));
    /// let view = indicator.view();
    /// // The focused dash, plus the leading and zero-length trailing circles.
    /// assert_eq!(view.chars().filter(|&c| c == '━').count(), 1);
    /// assert_eq!(view.chars().filter(|&c| c == '●').count(), 2);
    /// ```
    pub fn view(&self) -> String {
        let offset = self.content_offset();
        let viewport = self.viewport_width();
        let mut glyphs = Vec::new();
        for dot in &self.dots {
            let x = dot.center.x - offset;
            if x + dot.radius < 0.0 || x - dot.radius > viewport {
                continue;
            }
            if let Some(glyph) = self.render_dot(dot) {
                glyphs.push(glyph);
            }
        }
        glyphs.join(" ")
    }

    fn render_dot(&self, dot: &Dot) -> Option<String> {
        let full = self.metrics.radius();
        let glyph = if dot.dash_length() > 0.0 {
            "━"
        } else {
            let scale = if full > 0.0 { dot.radius / full } else { 0.0 };
            if scale >= 0.99 {
                "●"
            } else if scale >= 0.5 {
                "•"
            } else if scale > 0.0 {
                "·"
            } else {
                return None;
            }
        };
        Some(
            Style::new()
                .foreground(LGColor::from(dot.color.to_hex().as_str()))
                .render(glyph),
        )
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg);
        None
    }

    fn view(&self) -> String {
        self.view()
    }
}

fn clamp_page(current_page: f64, num_pages: usize) -> f64 {
    if num_pages == 0 || current_page.is_nan() {
        return 0.0;
    }
    current_page.clamp(0.0, (num_pages - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: f64 = 11.0;
    const DASH: f64 = 9.0;
    const RADIUS: f64 = 3.0;

    fn indicator(num_pages: usize, current_page: f64) -> Model {
        let mut m = Model::new();
        m.set_bounds(300.0, 24.0);
        m.apply(State::new(num_pages, current_page));
        m
    }

    #[test]
    fn test_offset_zero_when_pages_fit() {
        for n in 0..=5 {
            for current in [0.0, 0.5, 2.0, 4.9] {
                let m = indicator(n, current);
                assert_eq!(m.content_offset(), 0.0, "pages={} current={}", n, current);
            }
        }
    }

    #[test]
    fn test_offset_head_zone() {
        let m = indicator(10, 0.0);
        assert_eq!(m.content_offset(), 0.0);
        let m = indicator(10, 1.9);
        assert_eq!(m.content_offset(), 0.0);
    }

    #[test]
    fn test_offset_tracking_zone() {
        let m = indicator(10, 4.0);
        assert_eq!(m.content_offset(), GAP * 2.0);
        let m = indicator(10, 2.5);
        assert_eq!(m.content_offset(), GAP * 0.5);
    }

    #[test]
    fn test_offset_tail_zone() {
        // Threshold is 10 − (5 − 2) = 7; anything at or past it pins.
        let m = indicator(10, 7.9);
        assert_eq!(m.content_offset(), GAP * 5.0);
        let m = indicator(10, 9.0);
        assert_eq!(m.content_offset(), GAP * 5.0);
    }

    #[test]
    fn test_last_page_color_is_fully_active() {
        let m = indicator(7, 6.0);
        assert_eq!(m.dots()[6].color, Rgb::WHITE);
        assert_eq!(m.dots()[6].dash_length(), DASH);
    }

    #[test]
    fn test_mid_transition_color_blend() {
        let m = indicator(7, 5.5);
        // Leaving page 5: half faded toward inactive.
        assert_eq!(m.dots()[5].color, Rgb::new(0.5, 0.5, 0.5));
        // Entering page 6: half blended toward active.
        assert_eq!(m.dots()[6].color, Rgb::new(0.5, 0.5, 0.5));
        // Everything else stays flat inactive.
        assert_eq!(m.dots()[0].color, Rgb::BLACK);
    }

    #[test]
    fn test_dash_scales_at_quarter_transition() {
        let m = indicator(7, 3.25);
        let dots = m.dots();
        assert!(dots[3].is_dash());
        assert!((dots[3].dash_length() - DASH * 0.75).abs() < 1e-12);
        assert!(dots[4].is_dash());
        assert!((dots[4].dash_length() - DASH * 0.25).abs() < 1e-12);
        for dot in &dots[..3] {
            assert!(!dot.is_dash());
        }
        for dot in &dots[5..] {
            assert!(!dot.is_dash());
        }
    }

    #[test]
    fn test_dash_pushes_following_dots_right() {
        let m = indicator(3, 0.5);
        let dots = m.dots();
        // Pen starts at gap − r, advances by dash length then gap per dot.
        assert_eq!(dots[0].center.x, GAP - RADIUS);
        assert_eq!(dots[1].center.x, GAP - RADIUS + DASH * 0.5 + GAP);
        assert_eq!(dots[2].center.x, GAP - RADIUS + DASH + GAP * 2.0);
    }

    #[test]
    fn test_whole_page_layout() {
        let m = indicator(3, 1.0);
        let dots = m.dots();
        assert!(!dots[0].is_dash());
        assert_eq!(dots[0].radius, RADIUS);
        assert!(dots[1].is_dash());
        assert_eq!(dots[1].dash_length(), DASH);
        assert_eq!(dots[1].color, Rgb::WHITE);
        // The trailing dash has zero elongation and no active blend yet.
        assert!(dots[2].is_dash());
        assert_eq!(dots[2].dash_length(), 0.0);
        assert_eq!(dots[2].color, Rgb::BLACK);
    }

    #[test]
    fn test_vertical_centering() {
        let m = indicator(4, 0.0);
        for dot in m.dots() {
            assert_eq!(dot.center.y, 12.0);
        }
    }

    #[test]
    fn test_shrink_after_focus() {
        let m = indicator(10, 0.0);
        let dots = m.dots();
        assert_eq!(dots[3].radius, RADIUS);
        assert_eq!(dots[4].radius, RADIUS * 0.5);
        assert_eq!(dots[5].radius, 0.0);
        assert_eq!(dots[9].radius, 0.0);
    }

    #[test]
    fn test_shrink_before_focus() {
        let m = indicator(10, 5.0);
        let dots = m.dots();
        assert_eq!(dots[0].radius, 0.0);
        assert_eq!(dots[2].radius, 0.0);
        assert_eq!(dots[3].radius, RADIUS * 0.5);
        assert_eq!(dots[4].radius, RADIUS);
        assert_eq!(dots[7].radius, RADIUS * 0.5);
        assert_eq!(dots[8].radius, 0.0);
    }

    #[test]
    fn test_no_shrink_when_pages_fit() {
        let m = indicator(5, 2.0);
        for dot in m.dots() {
            if !dot.is_dash() {
                assert_eq!(dot.radius, RADIUS);
            }
        }
    }

    #[test]
    fn test_zero_pages_short_circuits() {
        let m = indicator(0, 3.0);
        assert!(m.dots().is_empty());
        assert_eq!(m.content_offset(), 0.0);
        assert_eq!(m.content_size(), (0.0, 0.0));
        assert_eq!(m.viewport_width(), 0.0);
        assert_eq!(m.view(), "");
    }

    #[test]
    fn test_apply_clamps_current_page() {
        let m = indicator(5, 9.7);
        assert_eq!(m.current_page(), 4.0);
        let m = indicator(5, -2.0);
        assert_eq!(m.current_page(), 0.0);
        let m = indicator(5, f64::NAN);
        assert_eq!(m.current_page(), 0.0);
    }

    #[test]
    fn test_dot_set_rebuilt_only_on_count_change() {
        let mut m = indicator(3, 0.0);
        assert_eq!(m.dots().len(), 3);
        m.apply(State::new(8, 2.0));
        assert_eq!(m.dots().len(), 8);
        m.apply(State::new(8, 3.0));
        assert_eq!(m.dots().len(), 8);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut m = indicator(10, 4.3);
        let first = m.dots().to_vec();
        m.apply(State::new(10, 4.3));
        assert_eq!(m.dots(), &first[..]);
        m.set_bounds(300.0, 24.0);
        assert_eq!(m.dots(), &first[..]);
    }

    #[test]
    fn test_content_size() {
        let m = indicator(7, 0.0);
        assert_eq!(m.content_size(), (DASH + 6.0 * GAP, 24.0));
    }

    #[test]
    fn test_viewport_width_caps_at_max_pages() {
        // dash + min(max, n)·gap + gap − line_width
        let m = indicator(3, 0.0);
        assert_eq!(m.viewport_width(), DASH + 3.0 * GAP + GAP - 6.0);
        let m = indicator(12, 0.0);
        assert_eq!(m.viewport_width(), DASH + 5.0 * GAP + GAP - 6.0);
    }

    #[test]
    fn test_viewport_frame_is_centered() {
        let m = indicator(12, 0.0);
        let (x, width) = m.viewport_frame();
        assert_eq!(width, DASH + 5.0 * GAP + GAP - 6.0);
        assert_eq!(x, (300.0 - width) / 2.0);
    }

    #[test]
    fn test_progress_updates_keep_colors() {
        let active = AdaptiveRgb::from(Rgb::from_rgb8(90, 86, 224));
        let inactive = AdaptiveRgb::from(Rgb::from_rgb8(96, 96, 96));
        let mut m = Model::new();
        m.apply(State::new(6, 0.0).with_colors(active, inactive));
        m.set_progress(2.0);
        assert_eq!(m.state().active, active);
        assert_eq!(m.dots()[2].color, active.resolve(ColorMode::Dark));
    }

    #[test]
    fn test_adaptive_colors_resolve_per_mode() {
        let active = AdaptiveRgb::new(Rgb::BLACK, Rgb::WHITE);
        let mut light = Model::new().with_color_mode(ColorMode::Light);
        light.apply(State::new(3, 0.0).with_colors(active, AdaptiveRgb::from(Rgb::BLACK)));
        assert_eq!(light.dots()[0].color, Rgb::BLACK);

        let mut dark = Model::new().with_color_mode(ColorMode::Dark);
        dark.apply(State::new(3, 0.0).with_colors(active, AdaptiveRgb::from(Rgb::BLACK)));
        assert_eq!(dark.dots()[0].color, Rgb::WHITE);
    }

    #[test]
    fn test_next_and_prev_page_snap() {
        let mut m = indicator(5, 0.0);
        m.next_page();
        assert_eq!(m.current_page(), 1.0);
        m.set_progress(2.5);
        m.prev_page();
        assert_eq!(m.current_page(), 2.0);
        m.prev_page();
        assert_eq!(m.current_page(), 1.0);
        m.set_progress(4.0);
        m.next_page();
        assert_eq!(m.current_page(), 4.0);
        m.set_progress(0.0);
        m.prev_page();
        assert_eq!(m.current_page(), 0.0);
    }

    #[test]
    fn test_update_handles_key_bindings() {
        let mut m = indicator(5, 0.0);
        let right: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        m.update(&right);
        assert_eq!(m.current_page(), 1.0);

        let left: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('h'),
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        m.update(&left);
        assert_eq!(m.current_page(), 0.0);
    }

    #[test]
    fn test_view_glyphs() {
        let m = indicator(3, 1.0);
        let view = m.view();
        // One full circle, the focused dash, and a zero-length trailing
        // dash that renders as a circle.
        assert_eq!(view.chars().filter(|&c| c == '●').count(), 2);
        assert_eq!(view.chars().filter(|&c| c == '━').count(), 1);
    }

    #[test]
    fn test_view_windows_to_max_pages() {
        let m = indicator(10, 9.0);
        let view = m.view();
        let glyphs = view
            .chars()
            .filter(|&c| matches!(c, '●' | '•' | '·' | '━'))
            .count();
        assert_eq!(glyphs, 5);
        assert_eq!(view.chars().filter(|&c| c == '━').count(), 1);
    }

    #[test]
    fn test_degenerate_metrics_are_clamped() {
        // A lead-in wider than the visible window must not reach the
        // offset math.
        let mut m = Model::new().with_metrics(Metrics {
            max_pages: 2,
            fixed_pages: 3,
            ..Metrics::default()
        });
        m.apply(State::new(4, 3.0));
        assert_eq!(m.metrics().fixed_pages, 2);
        assert_eq!(m.content_offset(), GAP);
        assert_eq!(m.dots().len(), 4);
    }

    #[test]
    fn test_keymap_help() {
        let keymap = IndicatorKeyMap::default();
        assert_eq!(keymap.short_help().len(), 2);
        assert_eq!(keymap.full_help().len(), 1);
        assert_eq!(keymap.short_help()[0].description, "prev page");
    }
}
