// Domain Layer - Pure business logic and entities

pub mod error;
pub mod reservation;

// Re-exports
pub use error::DomainError;
pub use reservation::{ReservationQueue, TableNumber};
