use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopError {
    /// The roster contained no stops — nothing to simulate.
    #[error("roster is empty: no candidate stops")]
    EmptyRoster,

    /// Priority tiers are assigned exactly once per run.
    #[error("priority classes have already been assigned")]
    PrioritiesAlreadyAssigned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster parse error: {0}")]
    Parse(String),
}

pub type StopResult<T> = Result<T, StopError>;
