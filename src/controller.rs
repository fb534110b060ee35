use std::cell::Cell;

use crate::models::error::ThemeError;
use crate::models::theme::Theme;
use crate::services::color_scheme::ColorSchemeSignal;
use crate::services::document::{ThemeDocument, ToggleControl};
use crate::services::storage::PreferenceStore;

/// Picks the theme a page starts in.
///
/// A valid stored preference wins. An empty slot, a failed read or an
/// unrecognised value falls back to the system color-scheme signal.
pub fn resolve_initial_theme<S, C>(store: &S, signal: &C) -> Theme
where
    S: PreferenceStore,
    C: ColorSchemeSignal,
{
    let stored = match store.load() {
        Ok(Some(value)) => match value.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme preference: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Theme preference unreadable, using system preference: {e}");
            None
        }
    };

    stored.unwrap_or_else(|| Theme::from_prefers_dark(signal.prefers_dark()))
}

/// Single source of truth for the active theme.
///
/// Keeps storage, the document's presentation attributes and the toggle
/// control's label in line with the current value. Event handlers share it
/// through an `Rc`; every operation takes `&self`.
pub struct ThemeController<S, D> {
    theme: Cell<Theme>,
    store: S,
    document: D,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    /// Resolves the initial theme without touching the document.
    pub fn new<C: ColorSchemeSignal>(store: S, document: D, signal: &C) -> Self {
        let theme = resolve_initial_theme(&store, signal);
        log::debug!("Initial theme: {theme}");
        Self {
            theme: Cell::new(theme),
            store,
            document,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Reflects `theme` onto the document. Each surface is updated
    /// independently; a failure on one is logged and the rest still apply.
    pub fn apply_theme(&self, theme: Theme) {
        let class = theme.css_class();
        report(self.document.set_body_class(class));
        // <html> too, so the background is right when content overflows
        // horizontally on narrow viewports.
        report(self.document.set_root_class(class));
        report(self.document.set_data_theme(theme.as_str()));

        if let Some(control) = self.document.toggle_control() {
            report(control.set_label(theme.as_str()));
        }
    }

    /// Stores the current value, then reflects it. A storage failure leaves
    /// the theme session-only.
    pub fn persist_and_apply(&self) {
        let theme = self.theme.get();
        if let Err(e) = self.store.save(theme.as_str()) {
            log::warn!("Failed to save theme preference: {e}");
        }
        self.apply_theme(theme);
    }

    pub fn on_toggle_activated(&self) {
        self.theme.set(self.theme.get().toggled());
        self.persist_and_apply();
    }

    /// A live system change overrides (and overwrites) any stored choice.
    pub fn on_system_preference_changed(&self, is_dark: bool) {
        self.theme.set(Theme::from_prefers_dark(is_dark));
        self.persist_and_apply();
    }
}

fn report(result: Result<(), ThemeError>) {
    if let Err(e) = result {
        log::debug!("Theme not fully applied: {e}");
    }
}
