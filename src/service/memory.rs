//! In-memory train data store

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{SeatId, Train};
use crate::{Error, Result};

use super::TrainDataBackend;

/// In-memory seat store keyed by train id
///
/// The fleet map is protected by an RwLock so a single shared instance is
/// safe under concurrent façade calls.
pub struct InMemoryTrainData {
    trains: RwLock<HashMap<String, Train>>,
}

impl InMemoryTrainData {
    pub fn new() -> Self {
        Self::with_trains(HashMap::new())
    }

    pub fn with_trains(trains: HashMap<String, Train>) -> Self {
        Self {
            trains: RwLock::new(trains),
        }
    }

    /// Load the fleet from a JSON seed file of shape
    /// `{ "<train_id>": { "seats": { "<seat_id>": { ... } } } }`.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        let trains: HashMap<String, Train> = serde_json::from_slice(&data)?;
        Ok(Self::with_trains(trains))
    }

    pub async fn train_count(&self) -> usize {
        self.trains.read().await.len()
    }
}

impl Default for InMemoryTrainData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrainDataBackend for InMemoryTrainData {
    async fn data_for_train(&self, train_id: &str) -> Result<Train> {
        let trains = self.trains.read().await;
        trains
            .get(train_id)
            .cloned()
            .ok_or_else(|| Error::TrainNotFound(train_id.to_string()))
    }

    async fn reserve(
        &self,
        train_id: &str,
        seats: &[SeatId],
        booking_reference: &str,
    ) -> Result<Train> {
        if booking_reference.is_empty() {
            return Err(Error::invalid_request("booking_reference must not be empty"));
        }
        if seats.is_empty() {
            return Err(Error::invalid_request("no seats requested"));
        }

        let mut trains = self.trains.write().await;
        let train = trains
            .get_mut(train_id)
            .ok_or_else(|| Error::TrainNotFound(train_id.to_string()))?;

        // Validate the whole batch before touching any seat
        for seat_id in seats {
            let seat = train.seats.get(seat_id).ok_or_else(|| Error::UnknownSeat {
                train: train_id.to_string(),
                seat: seat_id.clone(),
            })?;
            if !seat.is_free() && seat.booking_reference != booking_reference {
                return Err(Error::SeatConflict {
                    seat: seat_id.clone(),
                    existing: seat.booking_reference.clone(),
                });
            }
        }

        for seat_id in seats {
            if let Some(seat) = train.seats.get_mut(seat_id) {
                seat.booking_reference = booking_reference.to_string();
            }
        }

        tracing::debug!(
            train_id,
            booking_reference,
            seats = seats.len(),
            "Seats reserved"
        );

        Ok(train.clone())
    }

    async fn reset(&self, train_id: &str) -> Result<Train> {
        let mut trains = self.trains.write().await;
        let train = trains
            .get_mut(train_id)
            .ok_or_else(|| Error::TrainNotFound(train_id.to_string()))?;

        for seat in train.seats.values_mut() {
            seat.booking_reference.clear();
        }

        tracing::debug!(train_id, "Train reset to baseline");

        Ok(train.clone())
    }
}
