//! Geometry primitives for the page indicator's render-object list.
//!
//! The layout engine does not draw anything. It produces an ordered list of
//! [`Dot`] values (center, radius, color, shape) that a rendering backend
//! consumes each pass. The built-in terminal renderer in
//! [`crate::indicator`] is one such backend; a host can just as well read
//! [`crate::indicator::Model::dots`] and draw with whatever primitive it has.

use crate::color::Rgb;

/// A point in the indicator's local coordinate space.
///
/// `x` grows rightward along the dot row; `y` is the vertical center line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The shape a dot is rendered as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DotShape {
    /// A plain circle. The radius lives on the owning [`Dot`].
    Circle,
    /// An elongated capsule used for the focused page mid-transition.
    Dash {
        /// Extra length beyond the circular end caps. A length of zero is
        /// geometrically a circle, but keeps its dash identity so the pen
        /// advance stays uniform across a transition.
        length: f64,
    },
}

/// One render object in the indicator's dot row.
///
/// The full set is rebuilt when the page count changes; geometry and color
/// are recomputed on every layout pass without rebuilding the set.
///
/// # Examples
///
/// ```rust
/// use page_indicator::color::Rgb;
/// use page_indicator::geometry::{Dot, DotShape, Point};
///
/// let dot = Dot {
///     index: 0,
///     center: Point::new(8.0, 12.0),
///     radius: 3.0,
///     color: Rgb::WHITE,
///     shape: DotShape::Dash { length: 9.0 },
/// };
/// assert!(dot.is_dash());
/// assert_eq!(dot.width(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// The page index this dot represents.
    pub index: usize,
    /// Center of the dot's leading circular cap.
    pub center: Point,
    /// Radius of the dot (or of a dash's end caps).
    pub radius: f64,
    /// Resolved fill color.
    pub color: Rgb,
    /// Circle or dash.
    pub shape: DotShape,
}

impl Dot {
    /// Returns true if this dot is rendered as a dash.
    pub fn is_dash(&self) -> bool {
        matches!(self.shape, DotShape::Dash { .. })
    }

    /// The dash elongation, or `0.0` for a circle.
    pub fn dash_length(&self) -> f64 {
        match self.shape {
            DotShape::Circle => 0.0,
            DotShape::Dash { length } => length,
        }
    }

    /// Total frame width: `2r` for a circle, `2r + length` for a dash.
    pub fn width(&self) -> f64 {
        self.radius * 2.0 + self.dash_length()
    }
}

/// Layout constants for the indicator row.
///
/// The defaults reproduce the classic look: 6-unit line width (3-unit dot
/// radius), 9-unit dash elongation, dots spaced 11 units apart, with at most
/// 5 dots visible and the first 2 pinned while scrolling.
///
/// # Examples
///
/// ```rust
/// use page_indicator::geometry::Metrics;
///
/// let metrics = Metrics::default();
/// assert_eq!(metrics.radius(), 3.0);
/// assert_eq!(metrics.max_pages, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Stroke width of a dot; the dot radius is half of this.
    pub line_width: f64,
    /// Elongation of a fully-extended dash beyond its end caps.
    pub dash_length: f64,
    /// Horizontal spacing between consecutive dot anchors.
    pub gap: f64,
    /// Maximum number of dots visible at once before the row scrolls.
    pub max_pages: usize,
    /// Number of lead-in dots that never shrink or scroll. Expected to be
    /// at most `max_pages`; [`crate::indicator::Model::with_metrics`]
    /// clamps it there.
    pub fixed_pages: usize,
}

impl Metrics {
    /// Radius of a full-size dot.
    pub fn radius(&self) -> f64 {
        self.line_width / 2.0
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            line_width: 6.0,
            dash_length: 9.0,
            gap: 11.0,
            max_pages: 5,
            fixed_pages: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let m = Metrics::default();
        assert_eq!(m.line_width, 6.0);
        assert_eq!(m.radius(), 3.0);
        assert_eq!(m.dash_length, 9.0);
        assert_eq!(m.gap, 11.0);
        assert_eq!(m.max_pages, 5);
        assert_eq!(m.fixed_pages, 2);
    }

    #[test]
    fn test_dot_width() {
        let circle = Dot {
            index: 0,
            center: Point::default(),
            radius: 3.0,
            color: Rgb::BLACK,
            shape: DotShape::Circle,
        };
        assert_eq!(circle.width(), 6.0);
        assert!(!circle.is_dash());
        assert_eq!(circle.dash_length(), 0.0);

        let dash = Dot {
            shape: DotShape::Dash { length: 4.5 },
            ..circle
        };
        assert_eq!(dash.width(), 10.5);
        assert!(dash.is_dash());
        assert_eq!(dash.dash_length(), 4.5);
    }

    #[test]
    fn test_zero_length_dash_is_still_a_dash() {
        let dot = Dot {
            index: 1,
            center: Point::new(19.0, 12.0),
            radius: 3.0,
            color: Rgb::WHITE,
            shape: DotShape::Dash { length: 0.0 },
        };
        assert!(dot.is_dash());
        assert_eq!(dot.width(), 6.0);
    }
}
