//! Indicator configuration.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::easing::Interpolator;
use crate::error::ConfigError;
use crate::position::PositionState;

const DEFAULT_MIN_DOT_SIZE: f32 = 4.0;
const DEFAULT_MAX_DOT_SIZE: f32 = 12.0;
const DEFAULT_DOT_SPACING: f32 = 4.0;
const DEFAULT_RESIZING_SPAN: u32 = 3;
const DEFAULT_DOT_SIZE: f32 = 12.0;
const DEFAULT_DOT_PADDING: f32 = 2.0;
const DEFAULT_PIE_SIZE: f32 = 16.0;
const DEFAULT_ACTIVE_COLOR: Color = Color::from_argb(0xFFFF_4081);
const DEFAULT_INACTIVE_COLOR: Color = Color::from_argb(0xFF3F_51B5);

/// Which rendering strategy an indicator uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// One dot per page, resized and recolored by distance.
    #[default]
    Resizing,
    /// One fixed-size dot per page, recolored by distance.
    ColorOnly,
    /// A single wedge filled by progress.
    Pie,
    /// A single percentage label.
    Percent,
    /// Resizing dots with leading/trailing dots suppressed.
    IgnoreRange,
}

impl IndicatorStyle {
    pub const ALL: [IndicatorStyle; 5] = [
        IndicatorStyle::Resizing,
        IndicatorStyle::ColorOnly,
        IndicatorStyle::Pie,
        IndicatorStyle::Percent,
        IndicatorStyle::IgnoreRange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndicatorStyle::Resizing => "resizing",
            IndicatorStyle::ColorOnly => "color-only",
            IndicatorStyle::Pie => "pie",
            IndicatorStyle::Percent => "percent",
            IndicatorStyle::IgnoreRange => "ignore-range",
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownStyle(s.to_string()))
    }
}

/// Design-time rendering with fixed substitute values.
///
/// When on, the indicator shows six pages positioned on page three no matter
/// what container is bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewMode {
    #[default]
    Off,
    On,
}

/// Gesture and click gates, flipped by the host at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorFlags {
    pub swipe_enabled: bool,
    pub click_enabled: bool,
}

impl Default for BehaviorFlags {
    fn default() -> Self {
        Self {
            swipe_enabled: true,
            click_enabled: true,
        }
    }
}

/// Every option an indicator reads. Dimensions are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOptions {
    pub min_dot_size: f32,
    pub max_dot_size: f32,
    pub dot_spacing: f32,
    /// Number of neighbours on each side that visibly resize.
    pub resizing_span: u32,
    /// Dot diameter for the color-only style.
    pub dot_size: f32,
    /// Inset of the color-only dot inside its slot.
    pub dot_padding: f32,
    pub active_color: Color,
    pub inactive_color: Color,
    pub interpolator: Interpolator,
    /// Multiplier applied to resizing dot sizes.
    pub size_scale: f32,
    pub pie_color: Color,
    pub pie_size: f32,
    pub pie_start_angle: f32,
    pub ignore_first: usize,
    pub ignore_last: usize,
    /// Draw nothing while the position sits inside an ignored range.
    pub ignore_hides: bool,
    pub flags: BehaviorFlags,
    pub preview: PreviewMode,
    /// Position shown before the container reports one.
    pub initial_position: PositionState,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            min_dot_size: DEFAULT_MIN_DOT_SIZE,
            max_dot_size: DEFAULT_MAX_DOT_SIZE,
            dot_spacing: DEFAULT_DOT_SPACING,
            resizing_span: DEFAULT_RESIZING_SPAN,
            dot_size: DEFAULT_DOT_SIZE,
            dot_padding: DEFAULT_DOT_PADDING,
            active_color: DEFAULT_ACTIVE_COLOR,
            inactive_color: DEFAULT_INACTIVE_COLOR,
            interpolator: Interpolator::default(),
            size_scale: 1.0,
            pie_color: DEFAULT_ACTIVE_COLOR,
            pie_size: DEFAULT_PIE_SIZE,
            pie_start_angle: 0.0,
            ignore_first: 0,
            ignore_last: 0,
            ignore_hides: false,
            flags: BehaviorFlags::default(),
            preview: PreviewMode::Off,
            initial_position: PositionState::PREVIEW,
        }
    }
}

impl IndicatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with every dimension multiplied by `density`.
    pub fn scaled(density: f32) -> Self {
        let defaults = Self::default();
        Self {
            min_dot_size: defaults.min_dot_size * density,
            max_dot_size: defaults.max_dot_size * density,
            dot_spacing: defaults.dot_spacing * density,
            dot_size: defaults.dot_size * density,
            dot_padding: defaults.dot_padding * density,
            pie_size: defaults.pie_size * density,
            ..defaults
        }
    }

    /// Resolve options from a host attribute set, falling back to defaults.
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            min_dot_size: attrs.parse_or("dot_min_size", defaults.min_dot_size)?,
            max_dot_size: attrs.parse_or("dot_max_size", defaults.max_dot_size)?,
            dot_spacing: attrs.parse_or("dot_spacing", defaults.dot_spacing)?,
            resizing_span: attrs.parse_or("resizing_span", defaults.resizing_span)?,
            dot_size: attrs.parse_or("dot_size", defaults.dot_size)?,
            dot_padding: attrs.parse_or("dot_padding", defaults.dot_padding)?,
            active_color: attrs.color_or("dot_active_color", defaults.active_color)?,
            inactive_color: attrs.color_or("dot_inactive_color", defaults.inactive_color)?,
            interpolator: match attrs.get("interpolator") {
                Some(value) => value.parse()?,
                None => defaults.interpolator,
            },
            size_scale: attrs.parse_or("size_scale", defaults.size_scale)?,
            pie_color: attrs.color_or("pie_color", defaults.pie_color)?,
            pie_size: attrs.parse_or("pie_size", defaults.pie_size)?,
            pie_start_angle: attrs.parse_or("pie_start_angle", defaults.pie_start_angle)?,
            ignore_first: attrs.parse_or("ignore_first", defaults.ignore_first)?,
            ignore_last: attrs.parse_or("ignore_last", defaults.ignore_last)?,
            ignore_hides: attrs.parse_or("ignore_hides", defaults.ignore_hides)?,
            flags: BehaviorFlags {
                swipe_enabled: attrs.parse_or("swipe_enabled", true)?,
                click_enabled: attrs.parse_or("click_enabled", true)?,
            },
            preview: if attrs.parse_or("preview", false)? {
                PreviewMode::On
            } else {
                PreviewMode::Off
            },
            initial_position: defaults.initial_position,
        })
    }

    pub fn dot_sizes(mut self, min: f32, max: f32) -> Self {
        self.min_dot_size = min;
        self.max_dot_size = max;
        self
    }

    pub fn dot_spacing(mut self, spacing: f32) -> Self {
        self.dot_spacing = spacing;
        self
    }

    pub fn resizing_span(mut self, span: u32) -> Self {
        self.resizing_span = span;
        self
    }

    pub fn colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    pub fn interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn size_scale(mut self, scale: f32) -> Self {
        self.size_scale = scale;
        self
    }

    pub fn ignore(mut self, first: usize, last: usize, hides: bool) -> Self {
        self.ignore_first = first;
        self.ignore_last = last;
        self.ignore_hides = hides;
        self
    }

    pub fn swipe_enabled(mut self, enabled: bool) -> Self {
        self.flags.swipe_enabled = enabled;
        self
    }

    pub fn click_enabled(mut self, enabled: bool) -> Self {
        self.flags.click_enabled = enabled;
        self
    }

    pub fn preview(mut self, preview: PreviewMode) -> Self {
        self.preview = preview;
        self
    }

    pub fn initial_position(mut self, position: PositionState) -> Self {
        self.initial_position = position;
        self
    }
}

/// Raw attribute values as resolved by the host, keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    values: HashMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => Ok(default),
        }
    }

    fn color_or(&self, key: &str, default: Color) -> Result<Color, ConfigError> {
        self.get(key).map_or(Ok(default), Color::parse)
    }
}
