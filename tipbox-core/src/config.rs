//! Tooltip configuration record and the enumerations it is built from.
//!
//! Every field holds one of its enumerated values or a number inside its
//! documented range. Raw control input enters through [`ConfigField::parse`],
//! which rejects anything outside the domain, and numeric updates applied via
//! [`TooltipConfig::apply`] are clamped.

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub const WIDTH_MIN: u16 = 100;
pub const WIDTH_MAX: u16 = 400;
pub const FONT_SIZE_MIN: u16 = 10;
pub const FONT_SIZE_MAX: u16 = 24;

pub const DEFAULT_BACKGROUND: &str = "#333333";
pub const DEFAULT_TEXT: &str = "#ffffff";
pub const DEFAULT_CONTENT: &str = "This is a sample tooltip";

/// How the tooltip is opened and closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Hover,
    Click,
    Focus,
}

impl Trigger {
    pub const ALL: [Self; 3] = [Self::Hover, Self::Click, Self::Focus];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Focus => "focus",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hover => "Hover",
            Self::Click => "Click",
            Self::Focus => "Focus",
        }
    }

    /// Caption of the preview button for this trigger mode.
    #[must_use]
    pub const fn preview_label(self) -> &'static str {
        match self {
            Self::Hover => "Hover me!",
            Self::Click => "Click me!",
            Self::Focus => "Focus me!",
        }
    }

    /// One-line usage hint shown under the preview button.
    #[must_use]
    pub const fn instructions(self) -> &'static str {
        match self {
            Self::Hover => "Hover over the button to see the tooltip",
            Self::Click => "Click the button to toggle the tooltip",
            Self::Focus => "Tab to focus the button or click it",
        }
    }
}

/// Side of the trigger the overlay is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    /// Order used by the position selector.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// Corner and pointer treatment of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rectangle,
    #[default]
    Rounded,
    Speech,
}

impl Shape {
    pub const ALL: [Self; 3] = [Self::Rectangle, Self::Rounded, Self::Speech];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Rounded => "rounded",
            Self::Speech => "speech",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Rounded => "Rounded",
            Self::Speech => "Speech Bubble",
        }
    }

    /// Whether the overlay carries a pointer aimed back at the trigger.
    #[must_use]
    pub const fn has_pointer(self) -> bool {
        matches!(self, Self::Speech)
    }
}

/// Enter transition applied to the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Fade,
    Slide,
    Scale,
}

impl Animation {
    pub const ALL: [Self; 3] = [Self::Fade, Self::Slide, Self::Scale];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fade => "Fade",
            Self::Slide => "Slide",
            Self::Scale => "Scale",
        }
    }
}

macro_rules! lowercase_enum_text {
    ($ty:ty, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| ConfigError::$err(s.to_string()))
            }
        }
    };
}

lowercase_enum_text!(Trigger, UnknownTrigger);
lowercase_enum_text!(Position, UnknownPosition);
lowercase_enum_text!(Shape, UnknownShape);
lowercase_enum_text!(Animation, UnknownAnimation);

fn hex_color_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").ok())
        .as_ref()
}

/// A `#rrggbb` color as produced by a native color input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate and normalize a color to lowercase `#rrggbb`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidColor`] when `raw` is not a six-digit hex color.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if hex_color_pattern().is_some_and(|re| re.is_match(trimmed)) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(ConfigError::InvalidColor(raw.to_string()))
        }
    }

    #[must_use]
    pub fn default_background() -> Self {
        Self(DEFAULT_BACKGROUND.to_string())
    }

    #[must_use]
    pub fn default_text() -> Self {
        Self(DEFAULT_TEXT.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// One entry of the icon picker; `value: None` clears the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconOption {
    pub value: Option<&'static str>,
    pub label: &'static str,
}

pub const ICON_OPTIONS: [IconOption; 6] = [
    IconOption {
        value: None,
        label: "None",
    },
    IconOption {
        value: Some("💡"),
        label: "💡 Light bulb",
    },
    IconOption {
        value: Some("⚠️"),
        label: "⚠️ Warning",
    },
    IconOption {
        value: Some("✨"),
        label: "✨ Sparkles",
    },
    IconOption {
        value: Some("📍"),
        label: "📍 Pin",
    },
    IconOption {
        value: Some("🔥"),
        label: "🔥 Fire",
    },
];

/// The full tooltip configuration edited by the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub trigger: Trigger,
    pub position: Position,
    pub shape: Shape,
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub width: u16,
    pub font_size: u16,
    pub content: String,
    pub animation: Animation,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            trigger: Trigger::default(),
            position: Position::default(),
            shape: Shape::default(),
            background_color: HexColor::default_background(),
            text_color: HexColor::default_text(),
            width: 200,
            font_size: 14,
            content: DEFAULT_CONTENT.to_string(),
            animation: Animation::default(),
            icon: None,
        }
    }
}

impl TooltipConfig {
    /// Replace exactly one field. Numeric values are clamped into range.
    pub fn apply(&mut self, field: ConfigField) {
        match field {
            ConfigField::Trigger(v) => self.trigger = v,
            ConfigField::Position(v) => self.position = v,
            ConfigField::Shape(v) => self.shape = v,
            ConfigField::BackgroundColor(v) => self.background_color = v,
            ConfigField::TextColor(v) => self.text_color = v,
            ConfigField::Width(v) => self.width = v.clamp(WIDTH_MIN, WIDTH_MAX),
            ConfigField::FontSize(v) => self.font_size = v.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            ConfigField::Content(v) => self.content = v,
            ConfigField::Animation(v) => self.animation = v,
            ConfigField::Icon(v) => self.icon = v.filter(|icon| !icon.is_empty()),
        }
    }

    /// Copy of this config with one field replaced.
    #[must_use]
    pub fn with(&self, field: ConfigField) -> Self {
        let mut next = self.clone();
        next.apply(field);
        next
    }
}

/// A single-field update emitted by one sandbox control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigField {
    Trigger(Trigger),
    Position(Position),
    Shape(Shape),
    BackgroundColor(HexColor),
    TextColor(HexColor),
    Width(u16),
    FontSize(u16),
    Content(String),
    Animation(Animation),
    Icon(Option<String>),
}

impl ConfigField {
    /// Field names, matching the tooltip's prop names.
    pub const NAMES: [&'static str; 10] = [
        "trigger",
        "position",
        "shape",
        "backgroundColor",
        "textColor",
        "width",
        "fontSize",
        "content",
        "animation",
        "icon",
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Trigger(_) => "trigger",
            Self::Position(_) => "position",
            Self::Shape(_) => "shape",
            Self::BackgroundColor(_) => "backgroundColor",
            Self::TextColor(_) => "textColor",
            Self::Width(_) => "width",
            Self::FontSize(_) => "fontSize",
            Self::Content(_) => "content",
            Self::Animation(_) => "animation",
            Self::Icon(_) => "icon",
        }
    }

    /// Build a typed update from a control name and its raw string value.
    ///
    /// An empty `icon` value clears the icon.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the name is unknown or the value is
    /// outside the field's domain.
    pub fn parse(name: &str, raw: &str) -> Result<Self, ConfigError> {
        Ok(match name {
            "trigger" => Self::Trigger(raw.parse()?),
            "position" => Self::Position(raw.parse()?),
            "shape" => Self::Shape(raw.parse()?),
            "backgroundColor" => Self::BackgroundColor(HexColor::parse(raw)?),
            "textColor" => Self::TextColor(HexColor::parse(raw)?),
            "width" => Self::Width(parse_bounded("width", raw, WIDTH_MIN, WIDTH_MAX)?),
            "fontSize" => Self::FontSize(parse_bounded(
                "fontSize",
                raw,
                FONT_SIZE_MIN,
                FONT_SIZE_MAX,
            )?),
            "content" => Self::Content(raw.to_string()),
            "animation" => Self::Animation(raw.parse()?),
            "icon" => Self::Icon((!raw.is_empty()).then(|| raw.to_string())),
            other => return Err(ConfigError::UnknownField(other.to_string())),
        })
    }
}

fn parse_bounded(field: &'static str, raw: &str, min: u16, max: u16) -> Result<u16, ConfigError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber {
            field,
            raw: raw.to_string(),
        })?;
    u16::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(ConfigError::OutOfRange {
            field,
            min,
            max,
            value,
        })
}
