use crate::config::TooltipConfig;
use std::fmt::Write as _;

/// Markup reproducing `cfg` as a `<Tooltip>` usage.
///
/// String props are double-quoted and numeric props braced, with values
/// substituted verbatim. The `icon` line only appears when an icon is set.
#[must_use]
pub fn generate_code(cfg: &TooltipConfig) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(out, "<Tooltip");
    let _ = writeln!(out, "  trigger=\"{}\"", cfg.trigger);
    let _ = writeln!(out, "  position=\"{}\"", cfg.position);
    let _ = writeln!(out, "  shape=\"{}\"", cfg.shape);
    let _ = writeln!(out, "  backgroundColor=\"{}\"", cfg.background_color);
    let _ = writeln!(out, "  textColor=\"{}\"", cfg.text_color);
    let _ = writeln!(out, "  width={{{}}}", cfg.width);
    let _ = writeln!(out, "  fontSize={{{}}}", cfg.font_size);
    let _ = writeln!(out, "  animation=\"{}\"", cfg.animation);
    let _ = writeln!(out, "  content=\"{}\"", cfg.content);
    if let Some(icon) = cfg.icon.as_deref() {
        let _ = writeln!(out, "  icon=\"{icon}\"");
    }
    out.push_str(">\n  <button>Hover me!</button>\n</Tooltip>");
    out
}
