use std::rc::Rc;

use gloo::events::EventListener;

use crate::controller::ThemeController;
use crate::models::error::ThemeError;
use crate::services::color_scheme::{ColorSchemeSignal, MediaQuerySignal};
use crate::services::document::{BrowserDocument, ThemeDocument, ToggleControl};
use crate::services::storage::{LocalPreferenceStore, PreferenceStore};

pub type BrowserController = ThemeController<LocalPreferenceStore, BrowserDocument>;
pub type BrowserBinding = ThemeBinding<LocalPreferenceStore, BrowserDocument, MediaQuerySignal>;

type ToggleSubscription<D> = <<D as ThemeDocument>::Control as ToggleControl>::Subscription;

/// Routes system color-scheme changes to the controller.
pub fn subscribe_system_changes<S, D, C>(
    controller: &Rc<ThemeController<S, D>>,
    signal: &C,
) -> Option<C::Subscription>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
    C: ColorSchemeSignal,
{
    let controller = Rc::clone(controller);
    let subscription =
        signal.subscribe(move |is_dark| controller.on_system_preference_changed(is_dark));
    if subscription.is_none() {
        log::debug!("System color-scheme changes are not observable");
    }
    subscription
}

/// Routes clicks on the toggle control to the controller. Returns `None`
/// without attaching anything when the control is absent.
pub fn attach_toggle<S, D>(controller: &Rc<ThemeController<S, D>>) -> Option<ToggleSubscription<D>>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
{
    let Some(control) = controller.document().toggle_control() else {
        log::debug!("No theme toggle control; click listener not attached");
        return None;
    };
    let handle = Rc::clone(controller);
    Some(control.on_activate(move || handle.on_toggle_activated()))
}

/// A controller wired to its triggers. Dropping the binding unsubscribes.
pub struct ThemeBinding<S, D, C>
where
    D: ThemeDocument,
    C: ColorSchemeSignal,
{
    controller: Rc<ThemeController<S, D>>,
    system: Option<C::Subscription>,
    toggle: Option<ToggleSubscription<D>>,
}

impl<S, D, C> ThemeBinding<S, D, C>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
    C: ColorSchemeSignal,
{
    /// Subscribes to system changes only; call [`Self::page_ready`] once the
    /// document is loaded.
    pub fn new(controller: Rc<ThemeController<S, D>>, signal: &C) -> Self {
        let system = subscribe_system_changes(&controller, signal);
        Self {
            controller,
            system,
            toggle: None,
        }
    }

    /// [`Self::new`] followed by [`Self::page_ready`].
    pub fn install(controller: Rc<ThemeController<S, D>>, signal: &C) -> Self {
        let mut binding = Self::new(controller, signal);
        binding.page_ready();
        binding
    }

    /// Reflects the current theme (so screen readers see the latest label)
    /// and attaches the click listener if it is not attached yet.
    pub fn page_ready(&mut self) {
        self.controller.apply_theme(self.controller.theme());
        if self.toggle.is_none() {
            self.toggle = attach_toggle(&self.controller);
        }
    }

    pub fn controller(&self) -> &Rc<ThemeController<S, D>> {
        &self.controller
    }

    pub fn is_system_subscribed(&self) -> bool {
        self.system.is_some()
    }

    pub fn is_toggle_attached(&self) -> bool {
        self.toggle.is_some()
    }

    /// Keeps every listener alive for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Builds a controller over `localStorage` and the current document.
pub fn browser_controller(signal: &MediaQuerySignal) -> Result<Rc<BrowserController>, ThemeError> {
    let document = BrowserDocument::new()?;
    Ok(Rc::new(ThemeController::new(
        LocalPreferenceStore::new(),
        document,
        signal,
    )))
}

/// Installs the theme controller on a plain page.
///
/// The theme is resolved and system changes are observed immediately; the
/// document is reflected and the toggle wired once the window has loaded.
pub fn install_on_load() -> Result<(), ThemeError> {
    let signal = MediaQuerySignal::new();
    let controller = browser_controller(&signal)?;
    let loaded = controller.document().is_loaded();
    let mut binding = BrowserBinding::new(controller, &signal);

    if loaded {
        binding.page_ready();
        binding.forget();
        return Ok(());
    }

    let window = web_sys::window().ok_or(ThemeError::DocumentUnavailable)?;
    EventListener::once(&window, "load", move |_| {
        binding.page_ready();
        binding.forget();
    })
    .forget();
    Ok(())
}
