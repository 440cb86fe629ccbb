//! Notices and confirmations shown to the person operating the panel.
//!
//! Messages are the Spanish strings the site has always shown; callers
//! build them through [`Notice`] and never format gateway errors
//! differently by cause.

use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A blocking message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// `❌ Error al {action}: {cause}`.
    pub fn failure(action: &str, cause: &impl fmt::Display) -> Self {
        Self::error(format!("❌ Error al {action}: {cause}"))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub const WRONG_PASSWORD: &str = "Contraseña incorrecta";
pub const CONFIG_SAVED: &str = "✅ Configuración guardada exitosamente";
pub const CONFIG_SAVE_ACTION: &str = "guardar configuración";

/// Port for user-facing feedback.
///
/// `confirm` blocks the workflow until the operator answers; a `false`
/// answer must leave every piece of state untouched.
pub trait Prompt: Send + Sync {
    fn notify(&self, notice: Notice);

    fn confirm(&self, question: &str) -> bool;
}

/// Non-interactive prompt: logs notices and declines every confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPrompt;

impl Prompt for TracingPrompt {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "Notice"),
            NoticeLevel::Warning => tracing::warn!(message = %notice.message, "Notice"),
            NoticeLevel::Error => tracing::error!(message = %notice.message, "Notice"),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        tracing::debug!(question, "Confirmation declined (non-interactive)");
        false
    }
}
