// Front Desk Service - reservation use cases

use crate::domain::{ReservationQueue, TableNumber};
use crate::error::{AppError, Result};
use tracing::{info, warn};

/// Front desk over the reservation queue.
///
/// Owns the queue for the life of the process and adds the one policy the
/// queue itself deliberately leaves out: table numbers must fall in
/// `1..=capacity` before a booking reaches the ring buffer.
pub struct FrontDesk {
    queue: ReservationQueue,
}

impl FrontDesk {
    /// Create a front desk managing `tables` tables.
    pub fn new(tables: usize) -> Result<Self> {
        if tables == 0 {
            return Err(AppError::Config(
                "table count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            queue: ReservationQueue::new(tables),
        })
    }

    /// Book a table, validating the number against the configured range.
    ///
    /// Out-of-range numbers are rejected here and never touch the queue.
    /// A table already booked may be booked again; the queue keeps both
    /// entries (reference behavior, kept on purpose).
    pub fn book(&mut self, table: TableNumber) -> Result<TableNumber> {
        let capacity = self.queue.capacity();
        if table == 0 || table as usize > capacity {
            warn!(table, capacity, "rejected out-of-range table number");
            return Err(AppError::InvalidTableNumber { table, capacity });
        }
        let booked = self.queue.book(table)?;
        info!(table = booked, occupied = self.queue.len(), "table booked");
        Ok(booked)
    }

    /// Cancel the oldest reservation and return its table number.
    pub fn cancel(&mut self) -> Result<TableNumber> {
        let table = self.queue.cancel()?;
        info!(table, occupied = self.queue.len(), "reservation cancelled");
        Ok(table)
    }

    pub fn free_tables(&self) -> usize {
        self.queue.free_count()
    }

    pub fn total_tables(&self) -> usize {
        self.queue.capacity()
    }

    pub fn booked(&self) -> usize {
        self.queue.len()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
