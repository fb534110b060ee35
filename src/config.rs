/// Configuration constants for the theme controller
pub struct Config;

impl Config {
    /// localStorage key holding the bare `"light"` / `"dark"` preference
    pub const STORAGE_KEY: &'static str = "theme-preference";

    /// Media query backing the system color-scheme signal
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Element id of the optional toggle control
    pub const TOGGLE_ELEMENT_ID: &'static str = "theme-toggle";

    /// Class applied to `<html>` and `<body>` in dark mode
    pub const DARK_CLASS: &'static str = "dark";

    pub const DATA_THEME_ATTR: &'static str = "data-theme";

    pub const LABEL_ATTR: &'static str = "aria-label";
}
