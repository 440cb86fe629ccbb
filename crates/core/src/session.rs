//! Admin visibility gate.
//!
//! [`SessionGuard`] compares a candidate against one static shared secret
//! and flips a session flag on match. It is a UI visibility toggle, not an
//! access-control boundary: the secret ships with every deployment, there
//! is no expiry, no lockout and no server-side credential check. Replace
//! it with server-verified credentials before treating admin routes as
//! protected.

/// Secret used when `ADMIN_PASSWORD` is not configured.
pub const DEFAULT_ADMIN_SECRET: &str = "12345678";

#[derive(Debug, Clone)]
pub struct SessionGuard {
    secret: String,
    authenticated: bool,
}

impl SessionGuard {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            authenticated: false,
        }
    }

    /// Compare `candidate` with the secret. On match the session becomes
    /// authenticated until [`logout`](Self::logout).
    pub fn authenticate(&mut self, candidate: &str) -> bool {
        if self.matches(candidate) {
            self.authenticated = true;
            true
        } else {
            false
        }
    }

    /// Compare without touching the session flag.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate == self.secret
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_SECRET)
    }
}
