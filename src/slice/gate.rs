use std::sync::{Condvar, Mutex, PoisonError};

/// A counting semaphore bounding how many chunk handlers run at once.
///
/// The guarded counter is updated in a single statement, so a poisoned lock
/// still holds a consistent count and is simply recovered.
#[derive(Debug)]
pub(crate) struct Gate {
    available: Mutex<usize>,
    released: Condvar,
}

/// Admission to a [`Gate`]. Dropping it hands the slot back.
#[derive(Debug)]
pub(crate) struct Permit<'g> {
    gate: &'g Gate,
}

impl Gate {
    pub(crate) fn new(permits: usize) -> Self {
        Self {
            available: Mutex::new(permits.max(1)),
            released: Condvar::new(),
        }
    }

    /// Blocks until a slot is free, then takes it.
    pub(crate) fn acquire(&self) -> Permit<'_> {
        let available = self.available.lock().unwrap_or_else(PoisonError::into_inner);
        let mut available = self
            .released
            .wait_while(available, |available| *available == 0)
            .unwrap_or_else(PoisonError::into_inner);
        *available -= 1;

        Permit { gate: self }
    }

    fn release(&self) {
        *self.available.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        self.released.notify_one();
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
