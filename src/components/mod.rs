pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;
