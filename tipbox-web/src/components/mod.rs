pub mod code_panel;
pub mod config_panel;
pub mod controls;
pub mod header;
pub mod preview;
pub mod tooltip;
