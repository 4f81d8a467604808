use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Identifier shared by a hold and the reservation it turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoldId(pub u64);

impl HoldId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HoldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A time-limited claim on `[start_seat, start_seat + seat_count)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hold {
    pub id: HoldId,
    pub created_at: DateTime<Utc>,
    pub customer_email: String,
    pub start_seat: usize,
    pub seat_count: usize,
}

impl Hold {
    pub fn new(
        id: HoldId,
        created_at: DateTime<Utc>,
        customer_email: impl Into<String>,
        start_seat: usize,
        seat_count: usize,
    ) -> Self {
        Self {
            id,
            created_at,
            customer_email: customer_email.into(),
            start_seat,
            seat_count,
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Strictly older than `max_hold`. Seat availability uses `>=` instead, so at
    /// the exact boundary the seats are reusable while the hold itself is not yet
    /// expired.
    pub fn is_expired(&self, now: DateTime<Utc>, max_hold: Duration) -> bool {
        self.age(now) > max_hold
    }

    /// `None` when the deadline falls outside the representable range.
    pub fn expires_at(&self, max_hold: Duration) -> Option<DateTime<Utc>> {
        self.created_at.checked_add_signed(max_hold)
    }

    pub fn seats(&self) -> Range<usize> {
        self.start_seat..self.start_seat + self.seat_count
    }

    /// Case-insensitive owner check.
    pub fn is_owned_by(&self, customer_email: &str) -> bool {
        self.customer_email.to_lowercase() == customer_email.trim().to_lowercase()
    }
}

/// Permanent record of committed seats. Never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: HoldId,
    pub customer_email: String,
    pub start_seat: usize,
    pub seat_count: usize,
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_hold(hold: &Hold, reserved_at: DateTime<Utc>) -> Self {
        Self {
            id: hold.id,
            customer_email: hold.customer_email.clone(),
            start_seat: hold.start_seat,
            seat_count: hold.seat_count,
            reserved_at,
        }
    }

    pub fn seats(&self) -> Range<usize> {
        self.start_seat..self.start_seat + self.seat_count
    }

    pub fn confirmation_code(&self) -> String {
        self.id.to_string()
    }
}
