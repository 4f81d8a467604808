use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::block::{Hold, HoldId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Open,
    Held,
    Reserved,
}

/// One entry of the seat table.
///
/// `hold_ref` points at the hold that owns the seat and is only meaningful while
/// the seat is `Held`. Every transition to `Open` clears it in the same step, so
/// an open seat can never be matched against a stale hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    status: SeatStatus,
    hold_ref: Option<HoldId>,
}

impl Seat {
    pub fn open() -> Self {
        Self {
            status: SeatStatus::Open,
            hold_ref: None,
        }
    }

    pub fn status(&self) -> SeatStatus {
        self.status
    }

    pub fn hold_ref(&self) -> Option<HoldId> {
        self.hold_ref
    }

    pub fn set_status(&mut self, status: SeatStatus) {
        self.status = status;
        if status == SeatStatus::Open {
            self.hold_ref = None;
        }
    }

    pub fn hold(&mut self, id: HoldId) {
        self.status = SeatStatus::Held;
        self.hold_ref = Some(id);
    }

    /// Usable right now: open, or held by a hold that is missing or has lapsed.
    /// Reserved seats are never available.
    pub fn is_available(&self, hold: Option<&Hold>, now: DateTime<Utc>, max_hold: Duration) -> bool {
        match self.status {
            SeatStatus::Open => true,
            SeatStatus::Held => hold.map_or(true, |hold| hold.age(now) >= max_hold),
            SeatStatus::Reserved => false,
        }
    }
}

impl Default for Seat {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_available() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let hold = Hold::new(HoldId(1), t0, "a@b.com", 1, 1);
        let mut seat = Seat::open();

        assert!(seat.is_available(Some(&hold), t0, Duration::milliseconds(500)));

        // Max age already in the past
        seat.hold(HoldId(1));
        assert!(seat.is_available(Some(&hold), t0, Duration::milliseconds(-10)));

        seat.set_status(SeatStatus::Reserved);
        assert!(!seat.is_available(Some(&hold), t0, Duration::milliseconds(500)));
        assert!(!seat.is_available(None, t0, Duration::zero()));

        seat.hold(HoldId(1));
        let later = t0 + Duration::milliseconds(100);
        assert!(seat.is_available(Some(&hold), later, Duration::milliseconds(50)));
        assert!(seat.is_available(Some(&hold), later, Duration::milliseconds(100)));
        assert!(!seat.is_available(Some(&hold), later, Duration::milliseconds(1000)));

        // Held with no backing record
        assert!(seat.is_available(None, later, Duration::milliseconds(1000)));
    }

    #[test]
    fn test_open_clears_hold_ref() {
        let mut seat = Seat::default();
        assert_eq!(seat.hold_ref(), None);

        seat.hold(HoldId(10));
        assert_eq!(seat.status(), SeatStatus::Held);
        assert_eq!(seat.hold_ref(), Some(HoldId(10)));

        seat.set_status(SeatStatus::Open);
        assert_eq!(seat.hold_ref(), None);
    }
}
