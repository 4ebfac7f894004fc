//! Tipbox Tooltip Model
//!
//! Platform-agnostic core of the Tipbox tooltip sandbox: the configuration
//! record edited by the sandbox, the show/hide state machine and anchor
//! geometry of the tooltip widget, inline style derivation, and the code
//! snippet generator. This crate has no browser dependencies.

pub mod codegen;
pub mod config;
pub mod error;
pub mod geometry;
pub mod style;
pub mod visibility;

pub use codegen::generate_code;
pub use config::{
    Animation, ConfigField, HexColor, ICON_OPTIONS, IconOption, Position, Shape, TooltipConfig,
    Trigger,
};
pub use error::ConfigError;
pub use geometry::{ANCHOR_OFFSET_PX, Anchor, Rect, ScrollOffset, TriggerGeometry};
pub use style::{Appearance, animation_class};
pub use visibility::{TooltipState, TriggerEvent};
