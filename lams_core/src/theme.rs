//! Theme mode and derived palette.
//!
//! The mode is the single source of truth; every color and CSS class is
//! a pure function of it. Nothing here caches - recomputing a palette is
//! a couple of pointer copies, so derived values are rebuilt on demand.

use serde::{Deserialize, Serialize};

/// The light/dark selector. Process-wide single value, persisted to
/// durable storage under [`crate::storage::THEME_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Storage representation ("light" / "dark").
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two valid strings
    /// is treated as "no stored preference".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    /// Class toggled on `<body>` so non-directive surfaces follow the
    /// theme ("light" / "dark").
    pub fn body_class(self) -> &'static str {
        self.as_str()
    }

    /// Container-level class ("theme-light" / "theme-dark").
    pub fn container_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Class the themed directive applies to its bound element.
    pub fn themed_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light-themed",
            ThemeMode::Dark => "dark-themed",
        }
    }
}

/// Semantic color roles the palette defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    Primary,
    Secondary,
    Surface,
    Background,
    Text,
    Accent,
    Warn,
    Success,
    Info,
    Error,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 10] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Surface,
        PaletteRole::Background,
        PaletteRole::Text,
        PaletteRole::Accent,
        PaletteRole::Warn,
        PaletteRole::Success,
        PaletteRole::Info,
        PaletteRole::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Surface => "surface",
            PaletteRole::Background => "background",
            PaletteRole::Text => "text",
            PaletteRole::Accent => "accent",
            PaletteRole::Warn => "warn",
            PaletteRole::Success => "success",
            PaletteRole::Info => "info",
            PaletteRole::Error => "error",
        }
    }
}

/// Fixed-shape mapping from semantic role to a hex color. Derived
/// deterministically from [`ThemeMode`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub surface: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub warn: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    pub error: &'static str,
}

impl ThemePalette {
    /// Derive the full palette for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemePalette {
                primary: "#3b82f6",
                secondary: "#8b5cf6",
                surface: "#ffffff",
                background: "#f8fafc",
                text: "#1f2937",
                accent: "#10b981",
                warn: "#f59e0b",
                success: "#22c55e",
                info: "#0ea5e9",
                error: "#ef4444",
            },
            ThemeMode::Dark => ThemePalette {
                primary: "#60a5fa",
                secondary: "#a78bfa",
                surface: "#1e293b",
                background: "#0f172a",
                text: "#f8fafc",
                accent: "#34d399",
                warn: "#fbbf24",
                success: "#4ade80",
                info: "#38bdf8",
                error: "#f87171",
            },
        }
    }

    /// Look up a color by role.
    pub fn color(&self, role: PaletteRole) -> &'static str {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::Surface => self.surface,
            PaletteRole::Background => self.background,
            PaletteRole::Text => self.text,
            PaletteRole::Accent => self.accent,
            PaletteRole::Warn => self.warn,
            PaletteRole::Success => self.success,
            PaletteRole::Info => self.info,
            PaletteRole::Error => self.error,
        }
    }

    /// Border color used by the themed directive. Not part of the ten
    /// semantic roles, so it lives beside the palette.
    pub fn border_color(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "#e5e7eb",
            ThemeMode::Dark => "#475569",
        }
    }
}

/// Startup resolution order: explicit persisted preference, else the
/// OS-reported preference, else light.
pub fn initial_mode(stored: Option<ThemeMode>, os: Option<ThemeMode>) -> ThemeMode {
    stored.or(os).unwrap_or_default()
}

/// OS preference mirroring rule: an OS change is mirrored only while no
/// explicit preference has ever been persisted. Returns the mode to
/// apply, or `None` when the change must be ignored.
pub fn resolve_os_change(stored: Option<ThemeMode>, os: ThemeMode) -> Option<ThemeMode> {
    match stored {
        Some(_) => None,
        None => Some(os),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.opposite().opposite(), mode);
            assert_eq!(
                ThemePalette::for_mode(mode.opposite().opposite()),
                ThemePalette::for_mode(mode)
            );
        }
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("solarized"), None);
        assert_eq!(ThemeMode::parse(""), None);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn every_role_defined_and_distinct_per_mode() {
        let light = ThemePalette::for_mode(ThemeMode::Light);
        let dark = ThemePalette::for_mode(ThemeMode::Dark);

        for role in PaletteRole::ALL {
            let lc = light.color(role);
            let dc = dark.color(role);
            assert!(lc.starts_with('#') && lc.len() == 7, "{role:?} light: {lc}");
            assert!(dc.starts_with('#') && dc.len() == 7, "{role:?} dark: {dc}");
            assert_ne!(lc, dc, "{role:?} must differ between modes");
        }

        assert_ne!(
            ThemePalette::border_color(ThemeMode::Light),
            ThemePalette::border_color(ThemeMode::Dark)
        );
    }

    #[test]
    fn class_helpers() {
        assert_eq!(ThemeMode::Light.body_class(), "light");
        assert_eq!(ThemeMode::Dark.body_class(), "dark");
        assert_eq!(ThemeMode::Light.container_class(), "theme-light");
        assert_eq!(ThemeMode::Dark.container_class(), "theme-dark");
        assert_eq!(ThemeMode::Light.themed_class(), "light-themed");
        assert_eq!(ThemeMode::Dark.themed_class(), "dark-themed");
    }

    #[test]
    fn default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn startup_resolution_order() {
        // stored beats OS beats default
        assert_eq!(
            initial_mode(Some(ThemeMode::Dark), Some(ThemeMode::Light)),
            ThemeMode::Dark
        );
        assert_eq!(initial_mode(None, Some(ThemeMode::Dark)), ThemeMode::Dark);
        assert_eq!(initial_mode(None, None), ThemeMode::Light);
    }

    #[test]
    fn explicit_preference_wins_over_os_changes() {
        // Simulated OS flips are ignored once a preference is persisted.
        assert_eq!(
            resolve_os_change(Some(ThemeMode::Light), ThemeMode::Dark),
            None
        );
        assert_eq!(
            resolve_os_change(Some(ThemeMode::Dark), ThemeMode::Light),
            None
        );
        assert_eq!(
            resolve_os_change(None, ThemeMode::Dark),
            Some(ThemeMode::Dark)
        );
    }
}
