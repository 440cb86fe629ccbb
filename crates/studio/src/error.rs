use nemitzam_core::error::CoreError;
use nemitzam_db::GatewayError;

/// Errors surfaced by the studio workflows.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    ConfigSave(#[from] ConfigSaveError),
}

pub type StudioResult<T> = Result<T, StudioError>;

/// A config save that stopped part-way.
///
/// Keys in `applied` were written and stay written; keys after
/// `failed_key` were never attempted.
#[derive(Debug, thiserror::Error)]
#[error("config save stopped at key '{failed_key}': {source}")]
pub struct ConfigSaveError {
    pub applied: Vec<&'static str>,
    pub failed_key: &'static str,
    #[source]
    pub source: GatewayError,
}
