use dioxus::prelude::*;

/// Theme families available in the portal.
///
/// Clinic and Slate have both dark and light modes; HighContrast is a
/// single accessibility-focused mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFamily {
    #[default]
    Clinic,
    Slate,
    HighContrast,
}

pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Clinic,
    ThemeFamily::Slate,
    ThemeFamily::HighContrast,
];

impl ThemeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Clinic => "clinic",
            ThemeFamily::Slate => "slate",
            ThemeFamily::HighContrast => "high-contrast",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Clinic => "Clinic",
            ThemeFamily::Slate => "Slate",
            ThemeFamily::HighContrast => "High contrast",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "slate" => ThemeFamily::Slate,
            "high-contrast" => ThemeFamily::HighContrast,
            _ => ThemeFamily::Clinic,
        }
    }

    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::HighContrast)
    }

    pub fn has_light(&self) -> bool {
        true
    }

    /// Resolve family + mode to a concrete `data-theme` value.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Clinic, true) => "clinic-dark",
            (ThemeFamily::Clinic, false) => "clinic-light",
            (ThemeFamily::Slate, true) => "slate-dark",
            (ThemeFamily::Slate, false) => "slate-light",
            // High contrast is single-mode
            (ThemeFamily::HighContrast, _) => "high-contrast",
        }
    }
}

/// Shared theme state provided as context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document root.
/// Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'clinic-light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage('{theme}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_family_default_is_clinic() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Clinic);
    }

    #[test]
    fn theme_family_as_str_roundtrip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
    }

    #[test]
    fn theme_family_from_key_unknown_falls_back() {
        assert_eq!(ThemeFamily::from_key("unknown"), ThemeFamily::Clinic);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Clinic);
    }

    #[test]
    fn theme_family_resolve_dual_mode() {
        assert_eq!(ThemeFamily::Clinic.resolve(true), "clinic-dark");
        assert_eq!(ThemeFamily::Clinic.resolve(false), "clinic-light");
        assert_eq!(ThemeFamily::Slate.resolve(true), "slate-dark");
        assert_eq!(ThemeFamily::Slate.resolve(false), "slate-light");
    }

    #[test]
    fn theme_family_resolve_single_mode() {
        assert_eq!(ThemeFamily::HighContrast.resolve(true), "high-contrast");
        assert_eq!(ThemeFamily::HighContrast.resolve(false), "high-contrast");
    }

    #[test]
    fn theme_family_mode_support() {
        assert!(ThemeFamily::Clinic.has_dark());
        assert!(ThemeFamily::Clinic.has_light());
        assert!(!ThemeFamily::HighContrast.has_dark());
        assert!(ThemeFamily::HighContrast.has_light());
    }
}
