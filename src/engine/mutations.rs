use crate::model::*;

use super::conflict::find_conflict;
use super::{Engine, EngineError};

impl Engine {
    /// Book `room_id` for `stay`, charging through the payment gateway.
    ///
    /// Checks run in a fixed order (date sanity, room existence,
    /// availability, id capacity, then payment) and nothing is committed
    /// until all of them pass, so a failed booking leaves no trace. The
    /// conflict check treats the interval as closed on both ends:
    /// back-to-back stays that share a single calendar day are rejected.
    pub fn book(
        &mut self,
        room_id: RoomId,
        guest: &str,
        stay: Stay,
        payment_token: &str,
    ) -> Result<Reservation, EngineError> {
        if stay.is_reversed() {
            return Err(EngineError::InvalidDateRange {
                check_in: stay.check_in,
                check_out: stay.check_out,
            });
        }
        if self.room(room_id).is_none() {
            return Err(EngineError::RoomNotFound(room_id));
        }
        if let Some(existing) = find_conflict(&self.reservations, room_id, &stay) {
            return Err(EngineError::Unavailable {
                room_id,
                conflict: existing.id,
            });
        }
        let Quote { total, .. } = self.quote(room_id, stay.check_in, stay.check_out)?;
        // Refuse before charging when the counter cannot advance past the
        // allocated id, so an approved charge is never stranded.
        let Some(next_id) = self.next_id.checked_add(1) else {
            return Err(EngineError::IdsExhausted);
        };
        let payment_ref = self
            .gateway
            .charge(total, payment_token)
            .ok_or(EngineError::PaymentDeclined)?;

        let reservation = Reservation {
            id: self.next_id,
            room_id,
            guest: guest.to_string(),
            stay,
            total,
            status: ReservationStatus::Paid,
            payment_ref,
        };
        self.next_id = next_id;
        self.revision += 1;
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Remove a reservation by id. Returns whether anything was removed;
    /// an unknown id is a normal outcome, not an error. The id is retired
    /// either way and will not be handed out again.
    pub fn cancel(&mut self, id: ReservationId) -> bool {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.id != id);
        if self.reservations.len() == before {
            return false;
        }
        self.revision += 1;
        true
    }
}
