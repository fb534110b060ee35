#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use theme_switch::config::Config;
    use theme_switch::models::{Theme, ThemeError};
    use theme_switch::services::memory::{
        DocumentSnapshot, MemoryColorScheme, MemoryDocument, MemoryPreferenceStore,
    };
    use theme_switch::{ThemeBinding, ThemeController, resolve_initial_theme};

    type TestController = ThemeController<MemoryPreferenceStore, MemoryDocument>;
    type TestBinding = ThemeBinding<MemoryPreferenceStore, MemoryDocument, MemoryColorScheme>;

    // Helper function to build a controller over shared in-memory backends
    fn controller(
        store: &MemoryPreferenceStore,
        document: &MemoryDocument,
        signal: &MemoryColorScheme,
    ) -> Rc<TestController> {
        Rc::new(ThemeController::new(store.clone(), document.clone(), signal))
    }

    fn dark_snapshot(label: Option<&str>) -> DocumentSnapshot {
        DocumentSnapshot {
            root_class: "dark".to_string(),
            body_class: "dark".to_string(),
            data_theme: Some("dark".to_string()),
            toggle_label: label.map(str::to_string),
        }
    }

    // ===== Theme Model Tests =====

    #[test]
    fn test_theme_wire_strings() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Dark.css_class(), Config::DARK_CLASS);
        assert_eq!(Theme::Light.css_class(), "");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ThemeError::InvalidTheme("Dark".to_string()))
        );
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"auto\"").is_err());
    }

    #[test]
    fn test_theme_toggled_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_theme_error_display() {
        let error = ThemeError::StorageWrite("QuotaExceededError".to_string());
        assert_eq!(error.to_string(), "Storage write failed: QuotaExceededError");

        let error = ThemeError::InvalidTheme("blue".to_string());
        assert_eq!(error.to_string(), "Invalid theme: \"blue\"");
    }

    // ===== Initial Theme Resolution Tests =====

    #[test]
    fn test_resolve_falls_back_to_system_preference() {
        let store = MemoryPreferenceStore::new();

        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(true));
        assert_eq!(resolved, Theme::Dark);

        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(false));
        assert_eq!(resolved, Theme::Light);
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        let store = MemoryPreferenceStore::with_value("light");
        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(true));
        assert_eq!(resolved, Theme::Light);
    }

    #[test]
    fn test_resolve_rejects_invalid_stored_value() {
        let store = MemoryPreferenceStore::with_value("solarized");
        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(true));

        assert_eq!(resolved, Theme::Dark);
        // Left untouched until the next persist
        assert_eq!(store.value().as_deref(), Some("solarized"));
    }

    #[test]
    fn test_resolve_treats_empty_value_as_missing() {
        let store = MemoryPreferenceStore::with_value("");
        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(false));
        assert_eq!(resolved, Theme::Light);
    }

    #[test]
    fn test_resolve_with_unavailable_storage() {
        let store = MemoryPreferenceStore::unavailable();
        let resolved = resolve_initial_theme(&store, &MemoryColorScheme::new(true));
        assert_eq!(resolved, Theme::Dark);
    }

    #[test]
    fn test_new_controller_does_not_touch_document() {
        let document = MemoryDocument::with_toggle();
        let controller = controller(
            &MemoryPreferenceStore::with_value("dark"),
            &document,
            &MemoryColorScheme::new(false),
        );

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(document.snapshot(), DocumentSnapshot::default());
    }

    // ===== Apply Tests =====

    #[test]
    fn test_apply_theme_sets_every_surface() {
        let document = MemoryDocument::with_toggle();
        let controller = controller(
            &MemoryPreferenceStore::new(),
            &document,
            &MemoryColorScheme::new(false),
        );

        controller.apply_theme(Theme::Dark);
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));

        controller.apply_theme(Theme::Light);
        let snapshot = document.snapshot();
        assert_eq!(snapshot.root_class, "");
        assert_eq!(snapshot.body_class, "");
        assert_eq!(snapshot.data_theme.as_deref(), Some("light"));
        assert_eq!(snapshot.toggle_label.as_deref(), Some("light"));
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let document = MemoryDocument::with_toggle();
        let controller = controller(
            &MemoryPreferenceStore::new(),
            &document,
            &MemoryColorScheme::new(false),
        );

        for theme in [Theme::Light, Theme::Dark] {
            controller.apply_theme(theme);
            let once = document.snapshot();
            controller.apply_theme(theme);
            assert_eq!(document.snapshot(), once);
        }
    }

    #[test]
    fn test_apply_theme_without_toggle_skips_label() {
        let document = MemoryDocument::new();
        let controller = controller(
            &MemoryPreferenceStore::new(),
            &document,
            &MemoryColorScheme::new(false),
        );

        controller.apply_theme(Theme::Dark);
        assert_eq!(document.snapshot(), dark_snapshot(None));
    }

    #[test]
    fn test_apply_theme_continues_past_failing_surface() {
        let document = MemoryDocument::with_toggle().without_body();
        let controller = controller(
            &MemoryPreferenceStore::new(),
            &document,
            &MemoryColorScheme::new(false),
        );

        controller.apply_theme(Theme::Dark);

        let snapshot = document.snapshot();
        assert_eq!(snapshot.body_class, "");
        assert_eq!(snapshot.root_class, "dark");
        assert_eq!(snapshot.data_theme.as_deref(), Some("dark"));
        assert_eq!(snapshot.toggle_label.as_deref(), Some("dark"));
    }

    // ===== Persistence Tests =====

    #[test]
    fn test_persist_and_apply_round_trips_through_reload() {
        let store = MemoryPreferenceStore::new();
        let signal = MemoryColorScheme::new(false);
        let first = controller(&store, &MemoryDocument::new(), &signal);

        first.on_toggle_activated();
        assert_eq!(first.theme(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));

        // Simulated reload over the same storage
        let reloaded = controller(&store, &MemoryDocument::new(), &signal);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_unavailable_storage_keeps_theme_in_memory() {
        let store = MemoryPreferenceStore::unavailable();
        let document = MemoryDocument::with_toggle();
        let controller = controller(&store, &document, &MemoryColorScheme::new(false));

        controller.on_toggle_activated();

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.value(), None);
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));
    }

    // ===== Trigger Tests =====

    #[test]
    fn test_toggle_complement() {
        for start in ["light", "dark"] {
            let store = MemoryPreferenceStore::with_value(start);
            let controller = controller(
                &store,
                &MemoryDocument::with_toggle(),
                &MemoryColorScheme::new(false),
            );
            let initial = controller.theme();

            controller.on_toggle_activated();
            assert_eq!(controller.theme(), initial.toggled());
            assert_eq!(store.value().as_deref(), Some(initial.toggled().as_str()));

            controller.on_toggle_activated();
            assert_eq!(controller.theme(), initial);
            assert_eq!(store.value().as_deref(), Some(start));
        }
    }

    #[test]
    fn test_system_change_overrides_stored_preference() {
        let store = MemoryPreferenceStore::with_value("light");
        let document = MemoryDocument::with_toggle();
        let controller = controller(&store, &document, &MemoryColorScheme::new(false));
        assert_eq!(controller.theme(), Theme::Light);

        controller.on_system_preference_changed(true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));
    }

    #[test]
    fn test_system_change_to_current_theme_still_persists() {
        let store = MemoryPreferenceStore::new();
        let controller = controller(&store, &MemoryDocument::new(), &MemoryColorScheme::new(true));
        assert_eq!(store.value(), None);

        controller.on_system_preference_changed(true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
    }

    // ===== Binding Tests =====

    #[test]
    fn test_install_reflects_theme_and_wires_triggers() {
        let store = MemoryPreferenceStore::new();
        let document = MemoryDocument::with_toggle();
        let signal = MemoryColorScheme::new(true);

        let binding = TestBinding::install(controller(&store, &document, &signal), &signal);

        assert!(binding.is_system_subscribed());
        assert!(binding.is_toggle_attached());
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));
        // Reflecting on load does not persist
        assert_eq!(store.value(), None);

        let toggle = document.toggle().unwrap();
        assert_eq!(toggle.listener_count(), 1);
        toggle.click();
        assert_eq!(binding.controller().theme(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
        assert_eq!(toggle.label().as_deref(), Some("light"));

        signal.set_prefers_dark(true);
        assert_eq!(binding.controller().theme(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));
    }

    #[test]
    fn test_system_changes_observed_before_page_ready() {
        let store = MemoryPreferenceStore::with_value("light");
        let document = MemoryDocument::with_toggle();
        let signal = MemoryColorScheme::new(false);

        let mut binding = TestBinding::new(controller(&store, &document, &signal), &signal);
        assert!(!binding.is_toggle_attached());
        assert_eq!(signal.listener_count(), 1);

        signal.set_prefers_dark(true);
        assert_eq!(store.value().as_deref(), Some("dark"));

        binding.page_ready();
        binding.page_ready();
        assert!(binding.is_toggle_attached());
        assert_eq!(document.toggle().unwrap().listener_count(), 1);
        assert_eq!(document.snapshot(), dark_snapshot(Some("dark")));
    }

    #[test]
    fn test_dropped_binding_unsubscribes() {
        let store = MemoryPreferenceStore::new();
        let document = MemoryDocument::with_toggle();
        let signal = MemoryColorScheme::new(false);

        let first = controller(&store, &document, &signal);
        let binding = TestBinding::install(Rc::clone(&first), &signal);
        drop(binding);

        let toggle = document.toggle().unwrap();
        assert_eq!(toggle.listener_count(), 0);
        assert_eq!(signal.listener_count(), 0);
        // Only the handle held here keeps the first controller alive
        assert_eq!(Rc::strong_count(&first), 1);

        let binding = TestBinding::install(controller(&store, &document, &signal), &signal);
        assert_eq!(toggle.listener_count(), 1);
        assert_eq!(signal.listener_count(), 1);

        toggle.click();
        signal.set_prefers_dark(true);
        toggle.click();

        assert_eq!(first.theme(), Theme::Light);
        assert_eq!(binding.controller().theme(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_missing_toggle_is_safe() {
        let store = MemoryPreferenceStore::new();
        let document = MemoryDocument::new();
        let signal = MemoryColorScheme::new(false);

        let binding = TestBinding::install(controller(&store, &document, &signal), &signal);
        assert!(!binding.is_toggle_attached());

        let controller = binding.controller();
        controller.on_toggle_activated();
        controller.on_system_preference_changed(false);
        controller.apply_theme(Theme::Dark);
        controller.persist_and_apply();

        assert_eq!(document.snapshot().toggle_label, None);
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_host_without_change_notifications() {
        let store = MemoryPreferenceStore::new();
        let document = MemoryDocument::with_toggle();
        let signal = MemoryColorScheme::without_notifications(true);

        let binding = TestBinding::install(controller(&store, &document, &signal), &signal);

        assert!(!binding.is_system_subscribed());
        assert!(binding.is_toggle_attached());
        assert_eq!(binding.controller().theme(), Theme::Dark);

        signal.set_prefers_dark(false);
        assert_eq!(binding.controller().theme(), Theme::Dark);
    }
}
