use thiserror::Error;

/// Errors raised when control input falls outside the tooltip configuration domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown trigger `{0}` (expected hover, click or focus)")]
    UnknownTrigger(String),
    #[error("unknown position `{0}` (expected top, bottom, left or right)")]
    UnknownPosition(String),
    #[error("unknown shape `{0}` (expected rectangle, rounded or speech)")]
    UnknownShape(String),
    #[error("unknown animation `{0}` (expected fade, slide or scale)")]
    UnknownAnimation(String),
    #[error("`{0}` is not a #rrggbb color")]
    InvalidColor(String),
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: u16,
        max: u16,
        value: i64,
    },
    #[error("{field} expects a whole number (got `{raw}`)")]
    NotANumber { field: &'static str, raw: String },
    #[error("unknown configuration field `{0}`")]
    UnknownField(String),
}
