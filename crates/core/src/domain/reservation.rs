// Reservation Queue Domain Model

use crate::domain::error::{DomainError, Result};

/// Table identifier, `1..=capacity` by caller contract
pub type TableNumber = u32;

/// Bounded FIFO of booked table numbers, backed by a ring buffer.
///
/// The buffer is allocated once at construction and never resized. `head`
/// points at the oldest reservation; the write position is derived as
/// `(head + count) % capacity`, so both cursors always stay in
/// `[0, capacity)`.
///
/// Range validation of table numbers is the caller's job (see
/// `FrontDesk`); the queue stores whatever it is given, and booking the
/// same table twice creates two independent entries.
#[derive(Debug)]
pub struct ReservationQueue {
    slots: Box<[TableNumber]>,
    head: usize,
    count: usize,
}

impl ReservationQueue {
    /// Create an empty queue for `capacity` tables.
    ///
    /// `capacity` must be positive; `FrontDesk::new` enforces this before
    /// the queue is ever constructed.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "queue capacity must be positive");
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Number of tables still free: `capacity - count`.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.count
    }

    /// Enqueue a reservation, echoing the booked table number.
    ///
    /// Fails with `CapacityExceeded` when every slot is taken; the queue is
    /// untouched on failure.
    pub fn book(&mut self, table: TableNumber) -> Result<TableNumber> {
        if self.is_full() {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let tail = (self.head + self.count) % self.capacity();
        self.slots[tail] = table;
        self.count += 1;
        Ok(table)
    }

    /// Dequeue the oldest reservation and return its table number.
    ///
    /// FIFO only: there is no way to cancel an arbitrary table. Fails with
    /// `NothingToCancel` when empty; the queue is untouched on failure.
    pub fn cancel(&mut self) -> Result<TableNumber> {
        if self.is_empty() {
            return Err(DomainError::NothingToCancel);
        }
        let table = self.slots[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        Ok(table)
    }
}
