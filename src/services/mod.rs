pub mod color_scheme;
pub mod document;
pub mod memory;
pub mod storage;

pub use color_scheme::{ColorSchemeSignal, MediaQuerySignal};
pub use document::{BrowserDocument, BrowserToggle, ThemeDocument, ToggleControl};
pub use storage::{LocalPreferenceStore, PreferenceStore};
