use yew::prelude::*;

use crate::config::Config;

/// Theme toggle button component
///
/// Purely presentational: clicks and the `aria-label` belong to the binding
/// installed by `use_theme_controller`, which finds the button by id. Render
/// at most one per page. CSS keyed on `html.dark` picks the glyph.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    html! {
        <button
            id={Config::TOGGLE_ELEMENT_ID}
            class="theme-toggle"
            type="button"
            title="Toggle theme"
        >
            <span class="theme-toggle__icon theme-toggle__icon--light" aria-hidden="true">{"☀️"}</span>
            <span class="theme-toggle__icon theme-toggle__icon--dark" aria-hidden="true">{"🌙"}</span>
        </button>
    }
}
