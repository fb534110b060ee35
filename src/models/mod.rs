pub mod error;
pub mod theme;

pub use error::ThemeError;
pub use theme::Theme;
