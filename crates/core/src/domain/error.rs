// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("all {capacity} tables are reserved")]
    CapacityExceeded { capacity: usize },

    #[error("no reservations to cancel")]
    NothingToCancel,
}

pub type Result<T> = std::result::Result<T, DomainError>;
