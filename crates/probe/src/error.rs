use bluecart_core::error::CoreError;

/// Anything that can stop a probe run.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Invalid or missing configuration.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Connection or query failure reported by sqlx.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
