//! Seat selection for reservations
//!
//! The ticket office applies the booking policy on top of a train data
//! backend: a train is never filled past 70% of its capacity, and all seats
//! of one reservation sit in the same coach.

use std::sync::Arc;

use crate::booking::BookingReferenceProvider;
use crate::service::TrainDataBackend;
use crate::types::{Reservation, SeatId, Train};
use crate::Result;

/// Share of seats that may be reserved on a train, in percent
const MAX_OCCUPANCY_PERCENT: usize = 70;

pub struct TicketOffice {
    backend: Arc<dyn TrainDataBackend>,
    references: Arc<dyn BookingReferenceProvider>,
}

impl TicketOffice {
    pub fn new(
        backend: Arc<dyn TrainDataBackend>,
        references: Arc<dyn BookingReferenceProvider>,
    ) -> Self {
        Self {
            backend,
            references,
        }
    }

    /// Reserve `seat_count` seats on a train.
    ///
    /// Returns an empty reservation (and never calls the backend's
    /// `reserve`) when the request would push occupancy past the limit or no
    /// single coach has enough free seats.
    pub async fn make_reservation(
        &self,
        train_id: &str,
        seat_count: usize,
    ) -> Result<Reservation> {
        if seat_count == 0 {
            return Ok(Reservation::empty(train_id));
        }

        let train = self.backend.data_for_train(train_id).await?;

        let total = train.total_seats();
        let occupied_after = train.reserved_seats() + seat_count;
        if total == 0 || occupied_after * 100 > total * MAX_OCCUPANCY_PERCENT {
            tracing::info!(
                train_id,
                seat_count,
                "Reservation refused: train occupancy limit"
            );
            return Ok(Reservation::empty(train_id));
        }

        let Some(seats) = pick_coach_seats(&train, seat_count) else {
            tracing::info!(
                train_id,
                seat_count,
                "Reservation refused: no coach with enough free seats"
            );
            return Ok(Reservation::empty(train_id));
        };

        let booking_reference = self.references.next_reference();
        self.backend
            .reserve(train_id, &seats, &booking_reference)
            .await?;

        Ok(Reservation {
            train_id: train_id.to_string(),
            booking_reference,
            seats,
        })
    }
}

/// First coach (by label) with enough free seats, lowest seat numbers first
fn pick_coach_seats(train: &Train, seat_count: usize) -> Option<Vec<SeatId>> {
    train
        .free_seats_by_coach()
        .into_values()
        .find(|free| free.len() >= seat_count)
        .map(|free| free[..seat_count].to_vec())
}
