//! Traindata - an HTTP service for train seat data and reservations
//!
//! The HTTP layer is a thin façade: an explicit route table exposing exactly
//! three backend operations (`data_for_train`, `reserve`, `reset`). All seat
//! state lives behind the [`service::TrainDataBackend`] trait; the bundled
//! backend keeps the fleet in memory, seeded from a JSON file.
//! [`ticket_office::TicketOffice`] layers the booking policy on top of the
//! same trait.

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod service;
pub mod ticket_office;
pub mod types;

pub use error::{Error, Result};
