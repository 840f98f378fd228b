use rg_core::CoreError;
use rg_stops::StopError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("stop roster error: {0}")]
    Stops(#[from] StopError),

    /// A persistence sink refused a day's events.  The day is not committed;
    /// the caller decides between rollback-and-abort and retry-day.
    #[error("persistence sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SimError {
    pub(crate) fn sink<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SimError::Sink(Box::new(err))
    }
}

pub type SimResult<T> = Result<T, SimError>;
