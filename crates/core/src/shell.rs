//! Public site / admin panel switch.
//!
//! The admin panel has no route or deep link: a Ctrl+Shift+A key press
//! toggles between the two views.

/// Which top-level view is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Public,
    Admin,
}

/// A key press as reported by the UI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub ctrl: bool,
    pub shift: bool,
    pub key: char,
}

impl KeyPress {
    /// Whether this press is the admin toggle shortcut (Ctrl+Shift+A).
    pub fn is_admin_shortcut(&self) -> bool {
        self.ctrl && self.shift && self.key.eq_ignore_ascii_case(&'a')
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteShell {
    view: View,
}

impl SiteShell {
    pub fn view(&self) -> View {
        self.view
    }

    /// Toggle the view when `press` is the admin shortcut. Returns whether
    /// the press was consumed.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        if !press.is_admin_shortcut() {
            return false;
        }
        self.view = match self.view {
            View::Public => View::Admin,
            View::Admin => View::Public,
        };
        true
    }

    /// The "Ver Sitio" button: always back to the public site.
    pub fn show_site(&mut self) {
        self.view = View::Public;
    }
}
