use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;
use crate::config::Config;

/// The two color themes a page can be in.
///
/// The lowercase name (`"light"` / `"dark"`) is the wire form used for the
/// stored preference, the `data-theme` attribute and the toggle's label.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_prefers_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Class for `<html>` and `<body>`; light mode clears it.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => Config::DARK_CLASS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_string())),
        }
    }
}
