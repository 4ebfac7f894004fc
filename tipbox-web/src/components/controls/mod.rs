//! Form controls bound to single configuration fields.

pub mod color;
pub mod foundation;
pub mod range;
pub mod select;
pub mod textarea;

pub use color::ColorInput;
pub use foundation::ControlGroup;
pub use range::Range;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
