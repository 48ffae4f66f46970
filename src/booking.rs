//! Booking reference generation

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique booking references
pub trait BookingReferenceProvider: Send + Sync {
    fn next_reference(&self) -> String;
}

/// Monotonic counter rendered as lowercase hex
pub struct SequentialBookingReferences {
    counter: AtomicU64,
}

impl SequentialBookingReferences {
    pub fn new() -> Self {
        Self::starting_at(123_456_789)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialBookingReferences {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingReferenceProvider for SequentialBookingReferences {
    fn next_reference(&self) -> String {
        format!("{:x}", self.counter.fetch_add(1, Ordering::Relaxed))
    }
}
