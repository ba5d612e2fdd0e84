//! Theme toggle controller
//!
//! Keeps the persisted preference, the toggle switch, and the stylesheet
//! link mutually consistent, and announces every change to registered
//! listeners.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use nightswitch_storage::PreferenceStore;

use crate::{
    config::ToggleConfig,
    surface::{StylesheetLink, ToggleSwitch},
    types::Theme,
};

/// Change notification delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    /// Event payload; `true` for every change, in both directions
    pub detail: bool,
}

impl ThemeChanged {
    /// Event name hosts dispatch this notification under
    pub const NAME: &'static str = "darkMode";
}

/// Type alias for change listeners
type ChangeListeners = Arc<Mutex<Vec<Box<dyn Fn(&ThemeChanged) + Send>>>>;

/// Controller for the light/dark theme toggle
///
/// Holds the current preference plus handles to the two UI elements it
/// drives. All collaborators are injected: the preference store, the
/// stylesheet link, and the toggle switch.
pub struct ThemeToggleController<S, L, T> {
    /// Toggle configuration (storage key, marker, stylesheet URLs)
    config: ToggleConfig,
    /// Current active theme
    current: Arc<Mutex<Theme>>,
    /// Preference store the choice persists in
    store: Arc<S>,
    /// Stylesheet link handle
    link: Arc<Mutex<L>>,
    /// Toggle switch handle
    switch: Arc<Mutex<T>>,
    /// Change listeners
    listeners: ChangeListeners,
}

impl<S, L, T> Clone for ThemeToggleController<S, L, T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            current: Arc::clone(&self.current),
            store: Arc::clone(&self.store),
            link: Arc::clone(&self.link),
            switch: Arc::clone(&self.switch),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<S, L, T> std::fmt::Debug for ThemeToggleController<S, L, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggleController")
            .field("config", &self.config)
            .field("current", &self.current)
            .finish()
    }
}

impl<S, L, T> ThemeToggleController<S, L, T>
where
    S: PreferenceStore,
    L: StylesheetLink,
    T: ToggleSwitch,
{
    /// Create a controller with the default configuration
    pub fn new(store: S, link: L, switch: T) -> Self {
        Self {
            config: ToggleConfig::default(),
            current: Arc::new(Mutex::new(Theme::default())),
            store: Arc::new(store),
            link: Arc::new(Mutex::new(link)),
            switch: Arc::new(Mutex::new(switch)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a controller with a specific configuration
    pub fn with_config(config: ToggleConfig, store: S, link: L, switch: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            current: Arc::new(Mutex::new(Theme::default())),
            store: Arc::new(store),
            link: Arc::new(Mutex::new(link)),
            switch: Arc::new(Mutex::new(switch)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Initialize from the persisted preference
    ///
    /// Reads the stored preference, reflects it into the switch, then runs
    /// the same apply step as a manual toggle so a stored dark preference
    /// ends with the dark stylesheet active before any user interaction.
    /// An absent key is the valid light state, not a fault.
    pub fn initialize(&self) -> Result<()> {
        let stored = self.store.get(&self.config.storage_key)?;
        let dark = stored.as_deref() == Some(self.config.dark_marker.as_str());

        {
            let mut switch = self
                .switch
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to lock switch: {}", e))?;
            switch.set_checked(dark);
        }

        tracing::debug!(
            "initializing theme toggle from stored preference: {}",
            if dark { "dark" } else { "light" }
        );
        self.apply(dark)
    }

    /// Handle a change of the toggle switch
    ///
    /// `checked` is the switch's checked state at the moment of the event.
    pub fn on_toggle(&self, checked: bool) -> Result<()> {
        tracing::debug!("toggle changed: checked = {}", checked);
        self.apply(checked)
    }

    /// Apply a theme choice: persist, update the stylesheet link, notify
    ///
    /// Dark persists the marker under the configured key; light removes
    /// the key entirely rather than writing a light marker. Storage and
    /// href mutation complete before listeners run.
    fn apply(&self, dark: bool) -> Result<()> {
        if dark {
            self.store
                .set(&self.config.storage_key, &self.config.dark_marker)?;
        } else {
            self.store.remove(&self.config.storage_key)?;
        }

        {
            let mut link = self
                .link
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to lock link: {}", e))?;
            link.set_href(self.config.stylesheet_url(dark));
        }

        let theme = if dark { Theme::Dark } else { Theme::Light };
        {
            let mut current = self
                .current
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to lock theme: {}", e))?;
            *current = theme;
        }
        tracing::debug!("theme applied: {}", theme);

        let event = ThemeChanged { detail: true };
        let listeners = self
            .listeners
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock listeners: {}", e))?;
        for listener in listeners.iter() {
            listener(&event);
        }

        Ok(())
    }

    /// Get the current theme
    pub fn current(&self) -> Result<Theme> {
        let theme = *self
            .current
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock theme: {}", e))?;
        Ok(theme)
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> Result<bool> {
        Ok(self.current()?.is_dark())
    }

    /// The stylesheet link's current href
    pub fn stylesheet_href(&self) -> Result<String> {
        let link = self
            .link
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock link: {}", e))?;
        Ok(link.href().to_string())
    }

    /// The toggle switch's current checked state
    pub fn switch_checked(&self) -> Result<bool> {
        let switch = self
            .switch
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock switch: {}", e))?;
        Ok(switch.is_checked())
    }

    /// The controller's configuration
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Register a listener for theme changes
    ///
    /// Listeners receive the [`ThemeChanged`] payload, which is `true` for
    /// every change regardless of direction.
    pub fn on_theme_changed<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(&ThemeChanged) + Send + 'static,
    {
        let mut listeners = self
            .listeners
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock listeners: {}", e))?;
        listeners.push(Box::new(listener));
        Ok(())
    }
}
