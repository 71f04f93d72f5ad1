use chrono::NaiveDate;

use crate::model::{ReservationId, RoomId};

#[derive(Debug)]
pub enum EngineError {
    RoomNotFound(RoomId),
    Unavailable {
        room_id: RoomId,
        conflict: ReservationId,
    },
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    PaymentDeclined,
    IdsExhausted,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::RoomNotFound(id) => write!(f, "room not found: {id}"),
            EngineError::Unavailable { room_id, conflict } => {
                write!(f, "room {room_id} unavailable: conflicts with reservation {conflict}")
            }
            EngineError::InvalidDateRange { check_in, check_out } => {
                write!(f, "check-out {check_out} precedes check-in {check_in}")
            }
            EngineError::PaymentDeclined => write!(f, "payment declined"),
            EngineError::IdsExhausted => write!(f, "reservation ids exhausted"),
        }
    }
}

impl std::error::Error for EngineError {}
