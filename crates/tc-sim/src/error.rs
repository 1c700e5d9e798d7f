use tc_core::CoreError;
use tc_network::Rejection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("no month is open; call begin_month first")]
    NoOpenMonth,

    #[error("month {month} is still running; simulate it to its end first")]
    MonthInProgress { month: u32 },

    /// Recoverable: the request was refused and nothing changed.
    #[error("construction rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("arrival node #{position} lists {len} agents; at most {limit} fit its id range")]
    ManifestTooLarge { position: usize, len: usize, limit: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
