//! In-memory platform backends for headless hosts and tests.
//!
//! Every handle is cheaply cloneable and clones share state, so a caller can
//! keep one copy for inspection after handing another to a controller.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::color_scheme::ColorSchemeSignal;
use super::document::{ThemeDocument, ToggleControl};
use super::storage::PreferenceStore;
use crate::models::error::ThemeError;

#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: Rc<RefCell<Option<String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(value.to_string());
        store
    }

    /// A store whose every access fails, like disabled browser storage.
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.unavailable.set(true);
        store
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_string()));
        }
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::StorageWrite("storage disabled".to_string()));
        }
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Listeners keyed by slot id so a subscription can remove its own entry.
struct Registry<T: ?Sized> {
    next_id: usize,
    entries: Vec<(usize, Rc<T>)>,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

type SharedRegistry<T> = Rc<RefCell<Registry<T>>>;

fn register<T: ?Sized + 'static>(
    registry: &SharedRegistry<T>,
    listener: Rc<T>,
) -> MemorySubscription {
    let id = {
        let mut registry = registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, listener));
        id
    };

    let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(registry);
    MemorySubscription {
        remove: Some(Box::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().entries.retain(|(slot, _)| *slot != id);
            }
        })),
    }
}

fn snapshot<T: ?Sized>(registry: &SharedRegistry<T>) -> Vec<Rc<T>> {
    registry
        .borrow()
        .entries
        .iter()
        .map(|(_, listener)| Rc::clone(listener))
        .collect()
}

/// Removes its listener when dropped, like `gloo::events::EventListener`.
#[must_use = "dropping the subscription removes the listener"]
pub struct MemorySubscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Drop for MemorySubscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

/// Scriptable system color-scheme signal.
#[derive(Clone, Default)]
pub struct MemoryColorScheme {
    prefers_dark: Rc<Cell<bool>>,
    listeners: SharedRegistry<dyn Fn(bool)>,
    unsupported: bool,
}

impl MemoryColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        let signal = Self::default();
        signal.prefers_dark.set(prefers_dark);
        signal
    }

    /// A host that answers the query but never reports changes.
    pub fn without_notifications(prefers_dark: bool) -> Self {
        Self {
            unsupported: true,
            ..Self::new(prefers_dark)
        }
    }

    /// Simulates an OS-level theme change.
    pub fn set_prefers_dark(&self, is_dark: bool) {
        self.prefers_dark.set(is_dark);
        for listener in snapshot(&self.listeners) {
            listener(is_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl ColorSchemeSignal for MemoryColorScheme {
    type Subscription = MemorySubscription;

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn subscribe<F>(&self, on_change: F) -> Option<MemorySubscription>
    where
        F: Fn(bool) + 'static,
    {
        if self.unsupported {
            return None;
        }
        let listener: Rc<dyn Fn(bool)> = Rc::new(on_change);
        Some(register(&self.listeners, listener))
    }
}

/// Observable state of a [`MemoryDocument`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub root_class: String,
    pub body_class: String,
    pub data_theme: Option<String>,
    pub toggle_label: Option<String>,
}

#[derive(Clone, Default)]
pub struct MemoryDocument {
    root_class: Rc<RefCell<String>>,
    body_class: Rc<RefCell<String>>,
    data_theme: Rc<RefCell<Option<String>>>,
    toggle: Option<MemoryToggle>,
    body_missing: bool,
}

impl MemoryDocument {
    /// A document without a toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggle() -> Self {
        Self {
            toggle: Some(MemoryToggle::default()),
            ..Self::default()
        }
    }

    /// Drops `<body>`, so body class updates fail as they do for a script
    /// running from `<head>` before the body is parsed.
    pub fn without_body(self) -> Self {
        Self {
            body_missing: true,
            ..self
        }
    }

    pub fn toggle(&self) -> Option<&MemoryToggle> {
        self.toggle.as_ref()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            root_class: self.root_class.borrow().clone(),
            body_class: self.body_class.borrow().clone(),
            data_theme: self.data_theme.borrow().clone(),
            toggle_label: self.toggle.as_ref().and_then(MemoryToggle::label),
        }
    }
}

impl ThemeDocument for MemoryDocument {
    type Control = MemoryToggle;

    fn set_root_class(&self, class: &str) -> Result<(), ThemeError> {
        *self.root_class.borrow_mut() = class.to_string();
        Ok(())
    }

    fn set_body_class(&self, class: &str) -> Result<(), ThemeError> {
        if self.body_missing {
            return Err(ThemeError::Dom("document has no <body>".to_string()));
        }
        *self.body_class.borrow_mut() = class.to_string();
        Ok(())
    }

    fn set_data_theme(&self, value: &str) -> Result<(), ThemeError> {
        *self.data_theme.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn toggle_control(&self) -> Option<MemoryToggle> {
        self.toggle.clone()
    }
}

#[derive(Clone, Default)]
pub struct MemoryToggle {
    label: Rc<RefCell<Option<String>>>,
    handlers: SharedRegistry<dyn Fn()>,
}

impl MemoryToggle {
    /// Simulates a user activating the control.
    pub fn click(&self) {
        for handler in snapshot(&self.handlers) {
            handler();
        }
    }

    pub fn label(&self) -> Option<String> {
        self.label.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().entries.len()
    }
}

impl ToggleControl for MemoryToggle {
    type Subscription = MemorySubscription;

    fn set_label(&self, label: &str) -> Result<(), ThemeError> {
        *self.label.borrow_mut() = Some(label.to_string());
        Ok(())
    }

    fn on_activate<F>(&self, handler: F) -> MemorySubscription
    where
        F: Fn() + 'static,
    {
        let handler: Rc<dyn Fn()> = Rc::new(handler);
        register(&self.handlers, handler)
    }
}
