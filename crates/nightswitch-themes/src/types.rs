//! Core theme types and the fixed external surface constants

/// Storage key the theme preference lives under
pub const STORAGE_KEY: &str = "darkSwitch";

/// Marker value stored under [`STORAGE_KEY`] when dark mode is active
pub const DARK_MARKER: &str = "dark";

/// Stylesheet URL for the light theme
pub const LIGHT_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/bootswatch/4.3.1/flatly/bootstrap.min.css";

/// Stylesheet URL for the dark theme
pub const DARK_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/bootswatch/4.3.1/darkly/bootstrap.min.css";

/// The two page themes
///
/// The persisted representation is presence/absence of the dark marker:
/// a stored marker means [`Theme::Dark`], an absent key means
/// [`Theme::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default theme; no key is persisted
    #[default]
    Light,
    /// Dark theme; the marker value is persisted
    Dark,
}

impl Theme {
    /// Get a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme's name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The stylesheet URL this theme activates
    pub fn stylesheet_url(&self) -> &'static str {
        match self {
            Self::Light => LIGHT_STYLESHEET_URL,
            Self::Dark => DARK_STYLESHEET_URL,
        }
    }

    /// The marker to persist for this theme, if any
    ///
    /// Light mode persists nothing; the key is removed instead.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some(DARK_MARKER),
        }
    }

    /// Derive the theme from a stored marker value
    ///
    /// Only a present value equal to the dark marker selects dark mode;
    /// absence or any other value is light.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(value) if value == DARK_MARKER => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
