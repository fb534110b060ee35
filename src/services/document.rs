use gloo::events::EventListener;

use crate::config::Config;
use crate::models::error::ThemeError;

/// The interactive element that flips the theme.
pub trait ToggleControl {
    type Subscription;

    fn set_label(&self, label: &str) -> Result<(), ThemeError>;

    fn on_activate<F>(&self, handler: F) -> Self::Subscription
    where
        F: Fn() + 'static;
}

/// Presentation surface the theme is reflected onto.
pub trait ThemeDocument {
    type Control: ToggleControl;

    fn set_root_class(&self, class: &str) -> Result<(), ThemeError>;

    fn set_body_class(&self, class: &str) -> Result<(), ThemeError>;

    fn set_data_theme(&self, value: &str) -> Result<(), ThemeError>;

    /// Looks the control up on every call; it may be rendered late or removed.
    fn toggle_control(&self) -> Option<Self::Control>;
}

#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new() -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::DocumentUnavailable)?;
        Ok(Self { document })
    }

    /// True once the window `load` event has fired.
    pub fn is_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }

    fn root(&self) -> Result<web_sys::Element, ThemeError> {
        self.document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))
    }
}

impl ThemeDocument for BrowserDocument {
    type Control = BrowserToggle;

    fn set_root_class(&self, class: &str) -> Result<(), ThemeError> {
        self.root()?.set_class_name(class);
        Ok(())
    }

    fn set_body_class(&self, class: &str) -> Result<(), ThemeError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| ThemeError::Dom("document has no <body>".to_string()))?;
        body.set_class_name(class);
        Ok(())
    }

    fn set_data_theme(&self, value: &str) -> Result<(), ThemeError> {
        self.root()?
            .set_attribute(Config::DATA_THEME_ATTR, value)
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }

    fn toggle_control(&self) -> Option<BrowserToggle> {
        self.document
            .get_element_by_id(Config::TOGGLE_ELEMENT_ID)
            .map(BrowserToggle)
    }
}

/// `#theme-toggle` element
#[derive(Clone, Debug)]
pub struct BrowserToggle(web_sys::Element);

impl ToggleControl for BrowserToggle {
    type Subscription = EventListener;

    fn set_label(&self, label: &str) -> Result<(), ThemeError> {
        self.0
            .set_attribute(Config::LABEL_ATTR, label)
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }

    fn on_activate<F>(&self, handler: F) -> EventListener
    where
        F: Fn() + 'static,
    {
        EventListener::new(&self.0, "click", move |_| handler())
    }
}
