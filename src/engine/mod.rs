mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::EngineError;

use crate::model::*;
use crate::payment::PaymentGateway;

/// The booking engine. Owns the room inventory and the reservation ledger
/// and is their only writer. It performs no I/O of its own: callers load
/// state in bulk at startup and persist in bulk when `revision` moves.
pub struct Engine {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    /// Next reservation id. Seeded from the highest loaded id, then
    /// monotonic; cancellations leave gaps, ids are never reused.
    next_id: ReservationId,
    /// Bumped once per committed mutation; the persistence signal.
    revision: u64,
    gateway: Box<dyn PaymentGateway>,
}

impl Engine {
    pub fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        Self {
            rooms: Vec::new(),
            reservations: Vec::new(),
            next_id: 1,
            revision: 0,
            gateway,
        }
    }

    /// Replace the room inventory wholesale (startup load).
    pub fn load_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// Replace the reservation ledger wholesale and reseed the id counter
    /// past the highest stored id, so a hand-edited file cannot make the
    /// next booking collide. A ledger already at the id ceiling saturates
    /// the counter and `book` refuses instead of wrapping.
    pub fn load_reservations(&mut self, reservations: Vec<Reservation>) {
        self.next_id = reservations
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.reservations = reservations;
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Monotonic counter of committed mutations. Failed operations leave
    /// it untouched, so equal revisions mean nothing new to persist.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
