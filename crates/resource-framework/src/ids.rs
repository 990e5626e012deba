//! Monotonic id allocation.

use crate::error::StorageError;
use serde::{Deserialize, Serialize};

/// Hands out ids strictly greater than every id it has issued or observed.
///
/// The allocator tracks a high-water mark rather than the current maximum row id, so an id
/// freed by a delete is never handed out again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdAllocator {
    high_water: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a persisted high-water mark.
    pub fn resume(high_water: u32) -> Self {
        Self { high_water }
    }

    /// Record an id that entered the store without being allocated here (seeds, snapshots).
    pub fn observe(&mut self, id: u32) {
        self.high_water = self.high_water.max(id);
    }

    /// The next id. `1` for a fresh allocator.
    pub fn next_id(&mut self) -> Result<u32, StorageError> {
        let id = self
            .high_water
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted)?;
        self.high_water = id;
        Ok(id)
    }

    pub fn high_water(&self) -> u32 {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id().unwrap(), 1);
        assert_eq!(ids.next_id().unwrap(), 2);
    }

    #[test]
    fn observed_ids_push_the_mark_forward() {
        let mut ids = IdAllocator::new();
        ids.observe(6);
        ids.observe(3);
        assert_eq!(ids.next_id().unwrap(), 7);
    }

    #[test]
    fn exhaustion_is_an_error() {
        let mut ids = IdAllocator::resume(u32::MAX);
        assert!(matches!(ids.next_id(), Err(StorageError::IdsExhausted)));
        assert_eq!(ids.high_water(), u32::MAX);
    }
}
