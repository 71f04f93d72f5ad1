use crate::model::{Reservation, RoomId, Stay};

/// First existing reservation on `room_id` whose stay overlaps the
/// candidate, in stored order. Linear scan; the collection is one
/// property's ledger, small enough that no index pays for itself.
pub(crate) fn find_conflict<'a>(
    reservations: &'a [Reservation],
    room_id: RoomId,
    stay: &Stay,
) -> Option<&'a Reservation> {
    reservations
        .iter()
        .find(|r| r.room_id == room_id && r.stay.overlaps(stay))
}
