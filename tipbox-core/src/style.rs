//! Inline CSS derived from the tooltip's visual parameters.

use crate::config::{Animation, HexColor, Position, Shape, TooltipConfig};
use crate::geometry::Anchor;
use std::fmt::Write as _;

/// Side length of the speech-bubble pointer triangle.
pub const ARROW_SIZE_PX: u16 = 6;

/// Visual subset of a tooltip configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub position: Position,
    pub shape: Shape,
    pub background_color: HexColor,
    pub text_color: HexColor,
    pub width: u16,
    pub font_size: u16,
}

impl From<&TooltipConfig> for Appearance {
    fn from(cfg: &TooltipConfig) -> Self {
        Self {
            position: cfg.position,
            shape: cfg.shape,
            background_color: cfg.background_color.clone(),
            text_color: cfg.text_color.clone(),
            width: cfg.width,
            font_size: cfg.font_size,
        }
    }
}

#[must_use]
pub const fn border_radius(shape: Shape) -> &'static str {
    match shape {
        Shape::Rectangle => "0px",
        Shape::Rounded => "8px",
        Shape::Speech => "12px",
    }
}

/// Transform that moves the overlay off the anchor so it sits beside the trigger.
#[must_use]
pub const fn placement_transform(position: Position) -> &'static str {
    match position {
        Position::Top => "translateX(-50%) translateY(-100%)",
        Position::Bottom => "translateX(-50%)",
        Position::Left => "translateX(-100%) translateY(-50%)",
        Position::Right => "translateY(-50%)",
    }
}

#[must_use]
pub const fn animation_class(animation: Animation) -> &'static str {
    match animation {
        Animation::Fade => "tooltip-fade",
        Animation::Slide => "tooltip-slide",
        Animation::Scale => "tooltip-scale",
    }
}

impl Appearance {
    /// Full inline style for the overlay placed at `anchor`.
    #[must_use]
    pub fn overlay_style(&self, anchor: Anchor) -> String {
        let mut css = String::with_capacity(384);
        let _ = write!(
            css,
            "background-color:{bg};color:{fg};width:{w}px;font-size:{fs}px;\
             padding:8px 12px;border-radius:{radius};position:absolute;z-index:1000;\
             max-width:300px;word-wrap:break-word;box-shadow:0 4px 12px rgba(0, 0, 0, 0.15);\
             border:1px solid rgba(255, 255, 255, 0.1);display:flex;align-items:center;gap:8px;\
             transform:{transform};left:{x}px;top:{y}px;",
            bg = self.background_color,
            fg = self.text_color,
            w = self.width,
            fs = self.font_size,
            radius = border_radius(self.shape),
            transform = placement_transform(self.position),
            x = anchor.x,
            y = anchor.y,
        );
        css
    }

    /// Style of the speech-bubble pointer, or `None` for shapes without one.
    ///
    /// The triangle sits on the overlay edge facing the trigger and is filled
    /// with the background color.
    #[must_use]
    pub fn arrow_style(&self) -> Option<String> {
        if !self.shape.has_pointer() {
            return None;
        }
        let s = ARROW_SIZE_PX;
        let bg = &self.background_color;
        let (placement, widths, colors) = match self.position {
            Position::Top => (
                "top:100%;left:50%;transform:translateX(-50%);",
                format!("{s}px {s}px 0 {s}px"),
                format!("{bg} transparent transparent transparent"),
            ),
            Position::Bottom => (
                "bottom:100%;left:50%;transform:translateX(-50%);",
                format!("0 {s}px {s}px {s}px"),
                format!("transparent transparent {bg} transparent"),
            ),
            Position::Left => (
                "left:100%;top:50%;transform:translateY(-50%);",
                format!("{s}px 0 {s}px {s}px"),
                format!("transparent transparent transparent {bg}"),
            ),
            Position::Right => (
                "right:100%;top:50%;transform:translateY(-50%);",
                format!("{s}px {s}px {s}px 0"),
                format!("transparent {bg} transparent transparent"),
            ),
        };
        Some(format!(
            "position:absolute;width:0;height:0;border-style:solid;{placement}\
             border-width:{widths};border-color:{colors};"
        ))
    }
}
