use std::rc::Rc;

use yew::prelude::*;

use crate::binding::{BrowserBinding, BrowserController, browser_controller};
use crate::services::color_scheme::MediaQuerySignal;

/// Custom hook installing the page's theme controller
///
/// Call once per page, from the component that renders `ThemeToggle`. The
/// controller is built (and the initial theme resolved) on first render; the
/// binding is installed once the tree is mounted so the toggle can be found.
/// Returns `None` when the browser services are unavailable.
#[hook]
pub fn use_theme_controller() -> Option<Rc<BrowserController>> {
    let services = use_state(|| {
        let signal = MediaQuerySignal::new();
        match browser_controller(&signal) {
            Ok(controller) => Some((controller, signal)),
            Err(e) => {
                log::warn!("Theme controller unavailable: {e}");
                None
            }
        }
    });

    // Effect: wire system changes and toggle clicks for the component's lifetime
    {
        let services = (*services).clone();
        use_effect_with((), move |_| {
            let binding = services
                .map(|(controller, signal)| BrowserBinding::install(controller, &signal));
            move || drop(binding)
        });
    }

    (*services)
        .as_ref()
        .map(|(controller, _)| Rc::clone(controller))
}
