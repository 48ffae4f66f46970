//! Train data backends
//!
//! The HTTP façade and the ticket office only ever talk to seat state
//! through the [`TrainDataBackend`] trait. The bundled implementation keeps
//! the fleet in memory.

use async_trait::async_trait;

use crate::types::{SeatId, Train};
use crate::Result;

pub mod memory;

pub use memory::InMemoryTrainData;

/// Operations a train data backend must provide
#[async_trait]
pub trait TrainDataBackend: Send + Sync {
    /// Read-only lookup of a train's seat map
    async fn data_for_train(&self, train_id: &str) -> Result<Train>;

    /// Mark the named seats with a booking reference and return the updated
    /// train. All-or-nothing: an unknown seat or a seat already carrying a
    /// different reference fails the whole call without changing any seat.
    async fn reserve(
        &self,
        train_id: &str,
        seats: &[SeatId],
        booking_reference: &str,
    ) -> Result<Train>;

    /// Clear every booking reference on a train
    async fn reset(&self, train_id: &str) -> Result<Train>;
}
