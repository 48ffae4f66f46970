//! Core types for traindata

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Seat identifier, e.g. "1A" (seat number followed by coach label)
pub type SeatId = String;

/// A single seat on a train
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub coach: String,
    pub seat_number: String,
    /// Empty string means the seat is free
    #[serde(default)]
    pub booking_reference: String,
}

impl Seat {
    pub fn is_free(&self) -> bool {
        self.booking_reference.is_empty()
    }
}

/// A train: its seats keyed by seat id
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Train {
    pub seats: HashMap<SeatId, Seat>,
}

impl Train {
    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn reserved_seats(&self) -> usize {
        self.seats.values().filter(|s| !s.is_free()).count()
    }

    /// Free seats grouped by coach, coaches in label order, seats in
    /// numeric seat-number order within each coach.
    pub fn free_seats_by_coach(&self) -> BTreeMap<String, Vec<SeatId>> {
        let mut coaches: BTreeMap<String, Vec<(&Seat, &SeatId)>> = BTreeMap::new();
        for (id, seat) in &self.seats {
            if seat.is_free() {
                coaches.entry(seat.coach.clone()).or_default().push((seat, id));
            }
        }

        coaches
            .into_iter()
            .map(|(coach, mut seats)| {
                seats.sort_by_key(|(seat, id)| {
                    (
                        seat.seat_number.parse::<u32>().unwrap_or(u32::MAX),
                        (*id).clone(),
                    )
                });
                (coach, seats.into_iter().map(|(_, id)| id.clone()).collect())
            })
            .collect()
    }
}

/// Outcome of a ticket office booking. Empty `seats` and an empty reference
/// mean nothing could be reserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub train_id: String,
    pub booking_reference: String,
    pub seats: Vec<SeatId>,
}

impl Reservation {
    pub fn empty(train_id: impl Into<String>) -> Self {
        Self {
            train_id: train_id.into(),
            booking_reference: String::new(),
            seats: Vec::new(),
        }
    }
}
