//! Opaque admin session tokens.
//!
//! Logging in with the shared secret issues a random token; holding one
//! is what the admin routes check. Tokens have no idle expiry and live
//! only in this process, like the session flag they stand in for. At most
//! [`MAX_SESSIONS`] are live; opening one more revokes the oldest.

use std::collections::VecDeque;

use nemitzam_core::session::SessionGuard;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Live tokens kept at once.
pub const MAX_SESSIONS: usize = 32;

pub struct AdminSessions {
    guard: SessionGuard,
    /// Oldest first.
    tokens: RwLock<VecDeque<Uuid>>,
}

impl AdminSessions {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            guard: SessionGuard::new(secret),
            tokens: RwLock::new(VecDeque::with_capacity(MAX_SESSIONS)),
        }
    }

    /// Issue a token when `candidate` matches the secret.
    pub async fn open(&self, candidate: &str) -> Option<Uuid> {
        if !self.guard.matches(candidate) {
            return None;
        }
        let token = Uuid::new_v4();
        let mut tokens = self.tokens.write().await;
        if tokens.len() >= MAX_SESSIONS {
            if let Some(evicted) = tokens.pop_front() {
                tracing::info!(%evicted, "Session limit reached, oldest token revoked");
            }
        }
        tokens.push_back(token);
        Some(token)
    }

    /// Revoke `token`. Returns whether it was live.
    pub async fn close(&self, token: &Uuid) -> bool {
        let mut tokens = self.tokens.write().await;
        match tokens.iter().position(|t| t == token) {
            Some(at) => tokens.remove(at).is_some(),
            None => false,
        }
    }

    pub async fn is_open(&self, token: &Uuid) -> bool {
        self.tokens.read().await.contains(token)
    }

    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wrong_secret_issues_nothing() {
        let sessions = AdminSessions::new("s3cret");
        assert!(sessions.open("nope").await.is_none());
        assert_eq!(sessions.count().await, 0);
    }

    #[tokio::test]
    async fn tokens_are_independent() {
        let sessions = AdminSessions::new("s3cret");
        let a = sessions.open("s3cret").await.unwrap();
        let b = sessions.open("s3cret").await.unwrap();
        assert_ne!(a, b);

        assert!(sessions.close(&a).await);
        assert!(!sessions.is_open(&a).await);
        assert!(sessions.is_open(&b).await);
        assert!(!sessions.close(&a).await);
    }

    #[tokio::test]
    async fn opening_past_the_limit_revokes_the_oldest() {
        let sessions = AdminSessions::new("s3cret");
        let first = sessions.open("s3cret").await.unwrap();
        let second = sessions.open("s3cret").await.unwrap();
        for _ in 2..MAX_SESSIONS {
            sessions.open("s3cret").await.unwrap();
        }
        assert_eq!(sessions.count().await, MAX_SESSIONS);

        let newest = sessions.open("s3cret").await.unwrap();
        assert_eq!(sessions.count().await, MAX_SESSIONS);
        assert!(!sessions.is_open(&first).await);
        assert!(sessions.is_open(&second).await);
        assert!(sessions.is_open(&newest).await);
    }
}
