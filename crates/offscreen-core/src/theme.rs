//! Color palettes keyed by semantic role.
//!
//! The palette is passed explicitly to whatever renders it; there is no
//! process-wide theme singleton. `ThemeMode::System` resolves through the
//! configured fallback since a headless build has no OS color scheme to ask.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Semantic color roles for screens and components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#F5F5F7",
            card: "#FFFFFF",
            text: "#333333",
            text_secondary: "#666666",
            accent: "#5A78FF",
            border: "#F0F0F0",
            error: "#FF6B6B",
            success: "#4CAF50",
            warning: "#FFA26B",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#121212",
            card: "#1E1E1E",
            text: "#FFFFFF",
            text_secondary: "#CCCCCC",
            accent: "#738AFF",
            border: "#333333",
            error: "#FF7676",
            success: "#66BB6A",
            warning: "#FFAC71",
        }
    }

    /// Resolve a palette from the configured mode. `System` falls back to
    /// `dark_fallback`.
    pub fn for_mode(mode: ThemeMode, dark_fallback: bool) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::System => {
                if dark_fallback {
                    Self::dark()
                } else {
                    Self::light()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_differ() {
        assert_ne!(Palette::light(), Palette::dark());
        assert_eq!(Palette::light().accent, "#5A78FF");
        assert_eq!(Palette::dark().background, "#121212");
    }

    #[test]
    fn system_mode_uses_fallback() {
        assert_eq!(Palette::for_mode(ThemeMode::System, true), Palette::dark());
        assert_eq!(Palette::for_mode(ThemeMode::System, false), Palette::light());
        assert_eq!(Palette::for_mode(ThemeMode::Dark, false), Palette::dark());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ThemeMode::System);
    }
}
