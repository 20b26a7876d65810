//! Host page theme.
//!
//! The editor never touches global page styles itself. The hosting entry point
//! calls [`HostTheme::apply`] once before mounting; re-applying is harmless.

use web_sys::window;

/// Page colors; the component palette lives in `styles/param_editor.css`.
pub mod palette {
    pub const BACKGROUND: &str = "#f5f8fa";
    pub const BLACK: &str = "#1d1d1f";
}

pub const SYSTEM_FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"SF Pro Display\", \"SF Pro Text\", \"Helvetica Neue\", Arial, sans-serif";

/// Body-level style properties of the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostTheme {
    pub font_family: &'static str,
    pub background: &'static str,
    pub color: &'static str,
}

impl Default for HostTheme {
    fn default() -> Self {
        Self {
            font_family: SYSTEM_FONT_STACK,
            background: palette::BACKGROUND,
            color: palette::BLACK,
        }
    }
}

impl HostTheme {
    /// CSS property/value pairs written to `document.body.style`.
    pub fn declarations(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("margin", "0"),
            ("padding", "0"),
            ("font-family", self.font_family),
            ("-webkit-font-smoothing", "antialiased"),
            ("-moz-osx-font-smoothing", "grayscale"),
            ("background-color", self.background),
            ("color", self.color),
        ]
    }

    /// Writes the declarations onto the body. Returns `false` when there is no body to style.
    pub fn apply(&self) -> bool {
        let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => body,
            None => {
                log::error!("HostTheme: document body not available");
                return false;
            }
        };

        let style = body.style();
        for (property, value) in self.declarations() {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("HostTheme: failed to set {}: {:?}", property, e);
            }
        }
        true
    }
}
