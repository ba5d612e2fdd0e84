//! UI surface handles the controller drives
//!
//! The hosting page owns two fixed-id elements: the stylesheet link whose
//! href selects the active theme, and the toggle switch the user flips.
//! They are modeled as small traits so the controller can be exercised
//! against plain in-memory handles.

/// Element id of the stylesheet link
pub const STYLESHEET_LINK_ID: &str = "bootstrap-link";

/// Element id of the toggle switch
pub const TOGGLE_SWITCH_ID: &str = "darkSwitch";

/// The stylesheet link element: a single href-like attribute
pub trait StylesheetLink {
    /// Set the link's href
    fn set_href(&mut self, url: &str);

    /// The link's current href
    fn href(&self) -> &str;
}

/// The toggle switch element: a single checked flag
pub trait ToggleSwitch {
    /// Set the switch's checked state
    fn set_checked(&mut self, checked: bool);

    /// The switch's current checked state
    fn is_checked(&self) -> bool;
}

/// Plain handle for a stylesheet link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHandle {
    /// Element id
    pub id: String,
    /// Current href
    pub href: String,
}

impl LinkHandle {
    /// Create a handle with the default element id and an empty href
    pub fn new() -> Self {
        Self::with_id(STYLESHEET_LINK_ID)
    }

    /// Create a handle with a specific element id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: String::new(),
        }
    }
}

impl Default for LinkHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetLink for LinkHandle {
    fn set_href(&mut self, url: &str) {
        self.href = url.to_string();
    }

    fn href(&self) -> &str {
        &self.href
    }
}

/// Plain handle for a toggle switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchHandle {
    /// Element id
    pub id: String,
    /// Current checked state
    pub checked: bool,
}

impl SwitchHandle {
    /// Create an unchecked handle with the default element id
    pub fn new() -> Self {
        Self::with_id(TOGGLE_SWITCH_ID)
    }

    /// Create an unchecked handle with a specific element id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checked: false,
        }
    }
}

impl Default for SwitchHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleSwitch for SwitchHandle {
    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn is_checked(&self) -> bool {
        self.checked
    }
}
