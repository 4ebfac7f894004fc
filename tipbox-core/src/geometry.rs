use crate::config::Position;
use serde::{Deserialize, Serialize};

/// Gap between the trigger edge and the anchor point, in pixels.
pub const ANCHOR_OFFSET_PX: f64 = 10.0;

/// Viewport-relative bounding box of the trigger element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Document scroll offset at the time of measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Everything needed to place the overlay: trigger box plus scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerGeometry {
    pub rect: Rect,
    pub scroll: ScrollOffset,
}

/// Page coordinate the overlay is positioned from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl TriggerGeometry {
    /// Anchor for `position`, `ANCHOR_OFFSET_PX` away from the matching edge
    /// and centered along the other axis.
    #[must_use]
    pub fn anchor(&self, position: Position) -> Anchor {
        let Self { rect, scroll } = self;
        let center_x = rect.left + scroll.x + rect.width / 2.0;
        let center_y = rect.top + scroll.y + rect.height / 2.0;
        match position {
            Position::Top => Anchor {
                x: center_x,
                y: rect.top + scroll.y - ANCHOR_OFFSET_PX,
            },
            Position::Bottom => Anchor {
                x: center_x,
                y: rect.bottom() + scroll.y + ANCHOR_OFFSET_PX,
            },
            Position::Left => Anchor {
                x: rect.left + scroll.x - ANCHOR_OFFSET_PX,
                y: center_y,
            },
            Position::Right => Anchor {
                x: rect.right() + scroll.x + ANCHOR_OFFSET_PX,
                y: center_y,
            },
        }
    }
}
