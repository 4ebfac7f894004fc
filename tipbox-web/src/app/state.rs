use tipbox_core::{ConfigField, TooltipConfig, Trigger};
use yew::prelude::*;

/// Page-wide color scheme, independent of the tooltip configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph of the toggle button: the scheme a click switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone)]
pub struct SandboxState {
    pub config: UseStateHandle<TooltipConfig>,
    pub scheme: UseStateHandle<ColorScheme>,
    pub preview_visible: UseStateHandle<bool>,
}

#[hook]
pub fn use_sandbox_state(initial: TooltipConfig, scheme: ColorScheme) -> SandboxState {
    SandboxState {
        config: use_state(move || initial),
        scheme: use_state(move || scheme),
        preview_visible: use_state(|| false),
    }
}

impl SandboxState {
    /// Shallow-merge one field into the live configuration.
    #[must_use]
    pub fn update_field(&self) -> Callback<ConfigField> {
        let config = self.config.clone();
        Callback::from(move |field: ConfigField| {
            log::debug!("config update: {}", field.name());
            config.set(config.with(field));
        })
    }

    #[must_use]
    pub fn toggle_scheme(&self) -> Callback<()> {
        let scheme = self.scheme.clone();
        Callback::from(move |()| scheme.set(scheme.toggled()))
    }

    #[must_use]
    pub fn track_preview(&self) -> Callback<bool> {
        let preview_visible = self.preview_visible.clone();
        Callback::from(move |visible: bool| preview_visible.set(visible))
    }

    /// Override handed to the preview tooltip: the sandbox drives click mode,
    /// other modes manage themselves.
    #[must_use]
    pub fn preview_override(&self) -> Option<bool> {
        (self.config.trigger == Trigger::Click).then_some(*self.preview_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_toggle_round_trips() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme, ColorScheme::Light);
        assert_eq!(scheme.toggled(), ColorScheme::Dark);
        assert_eq!(scheme.toggled().toggled(), scheme);
        assert_eq!(ColorScheme::Dark.class(), "dark");
        assert_ne!(ColorScheme::Light.toggle_icon(), ColorScheme::Dark.toggle_icon());
    }
}
