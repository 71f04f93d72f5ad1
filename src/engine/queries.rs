use chrono::NaiveDate;

use crate::model::*;

use super::conflict::find_conflict;
use super::{Engine, EngineError};

impl Engine {
    /// Rooms whose category matches case-insensitively. Categories are
    /// free-form text, so matching folds case for the whole of Unicode,
    /// not just ASCII. `None` or an empty filter returns the whole
    /// inventory, in stored order.
    pub fn search(&self, category: Option<&str>) -> Vec<&Room> {
        match category {
            None => self.rooms.iter().collect(),
            Some(c) if c.is_empty() => self.rooms.iter().collect(),
            Some(c) => {
                let wanted = c.to_lowercase();
                self.rooms
                    .iter()
                    .filter(|r| r.category.to_lowercase() == wanted)
                    .collect()
            }
        }
    }

    /// Price a prospective stay without touching availability. Nights can
    /// be zero or negative for degenerate ranges; quoting stays permissive
    /// so a front end can show the arithmetic, and `book` is where
    /// rejection happens.
    pub fn quote(
        &self,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Quote, EngineError> {
        let room = self
            .room(room_id)
            .ok_or(EngineError::RoomNotFound(room_id))?;
        let nights = Stay::new(check_in, check_out).nights();
        Ok(Quote {
            nights,
            total: nights as f64 * room.price,
        })
    }

    /// True when no reservation on the room overlaps the stay. A room id
    /// with no reservations (including an id not in the inventory) is
    /// trivially available; `book` resolves existence before this check.
    pub fn is_available(&self, room_id: RoomId, stay: &Stay) -> bool {
        find_conflict(&self.reservations, room_id, stay).is_none()
    }

    pub fn find(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Every reservation, in insertion order.
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
