use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::config::Config;

/// The system's "prefers dark" signal: a point-in-time query plus change
/// notifications.
pub trait ColorSchemeSignal {
    /// Keeps the subscription alive; dropping it unsubscribes.
    type Subscription;

    fn prefers_dark(&self) -> bool;

    /// Returns `None` when the host cannot report changes.
    fn subscribe<F>(&self, on_change: F) -> Option<Self::Subscription>
    where
        F: Fn(bool) + 'static;
}

/// `prefers-color-scheme` media query of the current window
#[derive(Clone, Debug)]
pub struct MediaQuerySignal {
    query: Option<MediaQueryList>,
}

impl MediaQuerySignal {
    pub fn new() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.match_media(Config::DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    type Subscription = EventListener;

    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn subscribe<F>(&self, on_change: F) -> Option<EventListener>
    where
        F: Fn(bool) + 'static,
    {
        let query = self.query.clone()?;
        let current = query.clone();
        Some(EventListener::new(&query, "change", move |event| {
            let is_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| current.matches(), MediaQueryListEvent::matches);
            on_change(is_dark);
        }))
    }
}
