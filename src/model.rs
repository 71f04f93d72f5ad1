use chrono::NaiveDate;

/// Room identifier — assigned once at inventory creation, never reused.
pub type RoomId = u32;
/// Reservation identifier. Monotonic; gaps left by cancellations stay gaps.
pub type ReservationId = u32;

/// Closed date interval `[check_in, check_out]`.
///
/// Both endpoints count for conflict purposes: a stay ending on day D and a
/// stay starting on day D collide. Pricing is the asymmetric side, since
/// `nights` excludes the check-out day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// Whole days between check-in and check-out, the pricing basis.
    /// Zero for a same-day stay, negative for a reversed range; callers
    /// that need positivity must reject first.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        !(self.check_out < other.check_in || self.check_in > other.check_out)
    }

    pub fn is_reversed(&self) -> bool {
        self.check_out < self.check_in
    }
}

/// A bookable room. Inventory is immutable after creation; with no edit
/// or delete path, committed reservation totals never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub category: String,
    /// Per-night rate.
    pub price: f64,
}

/// Reservation lifecycle state. Only `Paid` is produced today; the closed
/// enum keeps stored values exhaustiveness-checked as states grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Paid,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Paid => "PAID",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PAID" => Some(ReservationStatus::Paid),
            _ => None,
        }
    }
}

/// A committed booking. Created only by a fully successful book flow and
/// removed only by cancellation; never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    /// Weak reference — display layers must tolerate a dangling room id.
    pub room_id: RoomId,
    pub guest: String,
    pub stay: Stay,
    /// Nights × per-night rate, frozen at booking time.
    pub total: f64,
    pub status: ReservationStatus,
    pub payment_ref: String,
}

// ── Query result types ───────────────────────────────────────────

/// Price preview for a prospective stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub nights: i64,
    pub total: f64,
}
