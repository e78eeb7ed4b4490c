//! Color values and interpolation for the page indicator.
//!
//! The indicator animates between an inactive and an active tint as the
//! focused page changes, so colors here are plain linear-RGB values with a
//! channel-wise `interpolate` function. Channels are `f64` in `[0.0, 1.0]`;
//! alpha is always fully opaque.
//!
//! # Examples
//!
//! ```rust
//! use page_indicator::color::{interpolate, Rgb};
//!
//! let mid = interpolate(Rgb::BLACK, Rgb::WHITE, 0.5);
//! assert_eq!(mid, Rgb::new(0.5, 0.5, 0.5));
//! ```

/// An opaque RGB color with `f64` channels in `[0.0, 1.0]`.
///
/// This is the value type the layout engine attaches to every dot. It is
/// deliberately backend-neutral; [`Rgb::to_hex`] converts to the `#rrggbb`
/// form that terminal styling crates such as lipgloss accept.
///
/// # Examples
///
/// ```rust
/// use page_indicator::color::Rgb;
///
/// let coral = Rgb::from_rgb8(255, 127, 80);
/// assert_eq!(coral.to_hex(), "#ff7f50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel in `[0.0, 1.0]`.
    pub r: f64,
    /// Green channel in `[0.0, 1.0]`.
    pub g: f64,
    /// Blue channel in `[0.0, 1.0]`.
    pub b: f64,
}

impl Rgb {
    /// Fully opaque black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Fully opaque white.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a color from unit-range channels, clamping each to `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::color::Rgb;
    ///
    /// let c = Rgb::new(0.2, 1.5, -0.1);
    /// assert_eq!(c, Rgb::new(0.2, 1.0, 0.0));
    /// ```
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from 8-bit channels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_rgb8(255, 255, 255), Rgb::WHITE);
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parses a `#rrggbb` hex string.
    ///
    /// Returns `None` for anything that is not exactly seven characters
    /// starting with `#` followed by six hex digits. Malformed colors are
    /// rejected at this boundary rather than propagated into layout math.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use page_indicator::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#000000"), Some(Rgb::BLACK));
    /// assert_eq!(Rgb::from_hex("red"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return None;
        }
        let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

/// Linearly blends two colors.
///
/// Each channel is computed as `(1 − progress) × from + progress × to`, with
/// `progress` clamped to `[0.0, 1.0]`. The result is always fully opaque.
///
/// # Examples
///
/// ```rust
/// use page_indicator::color::{interpolate, Rgb};
///
/// assert_eq!(interpolate(Rgb::BLACK, Rgb::WHITE, 0.0), Rgb::BLACK);
/// assert_eq!(interpolate(Rgb::BLACK, Rgb::WHITE, 1.0), Rgb::WHITE);
/// ```
pub fn interpolate(from: Rgb, to: Rgb, progress: f64) -> Rgb {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    Rgb {
        r: (1.0 - p) * from.r + p * to.r,
        g: (1.0 - p) * from.g + p * to.g,
        b: (1.0 - p) * from.b + p * to.b,
    }
}

/// The background mode a color should be resolved against.
///
/// The layout core itself is mode-agnostic: colors enter as [`AdaptiveRgb`]
/// pairs and are resolved once, before interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Resolve against a light background.
    Light,
    /// Resolve against a dark background (the terminal-typical default).
    #[default]
    Dark,
}

/// A color with separate light- and dark-background variants.
///
/// Mirrors the adaptive-color idea from lipgloss: a single logical color
/// that resolves to a concrete [`Rgb`] for the current [`ColorMode`]. A
/// plain `Rgb` converts into an `AdaptiveRgb` whose variants are identical.
///
/// # Examples
///
/// ```rust
/// use page_indicator::color::{AdaptiveRgb, ColorMode, Rgb};
///
/// let tint = AdaptiveRgb::new(Rgb::BLACK, Rgb::WHITE);
/// assert_eq!(tint.resolve(ColorMode::Light), Rgb::BLACK);
/// assert_eq!(tint.resolve(ColorMode::Dark), Rgb::WHITE);
///
/// let fixed: AdaptiveRgb = Rgb::BLACK.into();
/// assert_eq!(fixed.resolve(ColorMode::Dark), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveRgb {
    /// Variant used on light backgrounds.
    pub light: Rgb,
    /// Variant used on dark backgrounds.
    pub dark: Rgb,
}

impl AdaptiveRgb {
    /// Creates an adaptive color from its two variants.
    pub fn new(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }

    /// Resolves to the concrete color for `mode`.
    pub fn resolve(self, mode: ColorMode) -> Rgb {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}

impl From<Rgb> for AdaptiveRgb {
    fn from(color: Rgb) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }
}
