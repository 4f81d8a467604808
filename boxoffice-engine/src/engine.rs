use boxoffice_core::{
    Clock, Hold, HoldId, Reservation, Seat, SeatStatus, SystemClock, TicketService, Venue,
};
use boxoffice_shared::Masked;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info};

use crate::error::{HoldRejected, ReserveRejected};
use crate::search;

/// Hold lifetime used when none is configured.
pub const DEFAULT_HOLD_TIMEOUT_MS: i64 = 2_000;

/// Everything the lock protects. Seats, holds, reservations and the id counter
/// always change together.
#[derive(Debug)]
struct SeatTable {
    seats: Vec<Seat>,
    holds: HashMap<HoldId, Hold>,
    reservations: HashMap<HoldId, Reservation>,
    /// `None` once every identifier has been handed out.
    next_id: Option<u64>,
}

impl SeatTable {
    fn new(capacity: usize) -> Self {
        Self {
            seats: vec![Seat::open(); capacity],
            holds: HashMap::new(),
            reservations: HashMap::new(),
            next_id: Some(0),
        }
    }

    fn is_available(&self, index: usize, now: DateTime<Utc>, max_hold: Duration) -> bool {
        let seat = &self.seats[index];
        let hold = seat.hold_ref().and_then(|id| self.holds.get(&id));
        seat.is_available(hold, now, max_hold)
    }

    fn count_available(&self, now: DateTime<Utc>, max_hold: Duration) -> usize {
        (0..self.seats.len())
            .filter(|&index| self.is_available(index, now, max_hold))
            .count()
    }

    fn allocate_id(&mut self) -> Option<HoldId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(HoldId(id))
    }

    fn owns_all(&self, hold: &Hold) -> bool {
        self.seats[hold.seats()]
            .iter()
            .all(|seat| seat.status() == SeatStatus::Held && seat.hold_ref() == Some(hold.id))
    }

    /// Reopens the seats that still point at `hold`. Seats already taken over by
    /// a newer hold are left alone.
    fn release(&mut self, hold: &Hold) -> usize {
        let mut released = 0;
        for seat in &mut self.seats[hold.seats()] {
            if seat.status() == SeatStatus::Held && seat.hold_ref() == Some(hold.id) {
                seat.set_status(SeatStatus::Open);
                released += 1;
            }
        }
        released
    }
}

/// In-memory seat allocator for a single venue.
///
/// All state sits behind one `RwLock`: holds and reservations take the write
/// lock for their whole search-and-mark (or expire-or-commit) sequence, and
/// availability counts take the read lock, so a count never sees half of a block.
///
/// Expiry is lazy. A lapsed hold's seats read as available to every later scan,
/// but the hold record itself is only purged when someone tries to reserve it.
/// Holds that are never reserved stay in the map for the life of the engine;
/// [`SeatEngine::pending_holds`] exposes that count.
pub struct SeatEngine {
    state: RwLock<SeatTable>,
    max_hold: Duration,
    clock: Arc<dyn Clock>,
}

impl SeatEngine {
    pub fn new(venue: &Venue, max_hold: Duration) -> Self {
        Self::with_clock(venue, max_hold, Arc::new(SystemClock))
    }

    pub fn with_clock(venue: &Venue, max_hold: Duration, clock: Arc<dyn Clock>) -> Self {
        info!(venue = %venue, max_hold_ms = max_hold.num_milliseconds(), "seat engine ready");
        Self {
            state: RwLock::new(SeatTable::new(venue.number_of_seats())),
            max_hold,
            clock,
        }
    }

    pub fn max_hold(&self) -> Duration {
        self.max_hold
    }

    pub fn capacity(&self) -> usize {
        self.read().seats.len()
    }

    /// Seats that are open or held by a lapsed hold.
    pub fn available_seats(&self) -> usize {
        let state = self.read();
        state.count_available(self.clock.now(), self.max_hold)
    }

    /// Holds the lowest-indexed block of `count` consecutive available seats.
    pub fn try_find_and_hold_seats(
        &self,
        count: u32,
        customer_email: &str,
    ) -> Result<Hold, HoldRejected> {
        self.hold_block(count, customer_email).inspect_err(|reason| match reason {
            HoldRejected::IdentifiersExhausted => error!(reason = %reason, "hold rejected"),
            _ => debug!(
                reason = %reason,
                requested = count,
                customer = %Masked::new(customer_email),
                "hold rejected"
            ),
        })
    }

    /// Turns a live hold into a reservation, or purges it if it has expired.
    pub fn try_reserve_seats(
        &self,
        hold_id: HoldId,
        customer_email: &str,
    ) -> Result<Reservation, ReserveRejected> {
        self.commit_hold(hold_id, customer_email).inspect_err(|reason| {
            debug!(
                reason = %reason,
                hold_id = %hold_id,
                customer = %Masked::new(customer_email),
                "reservation rejected"
            )
        })
    }

    /// Raw hold record. No expiry handling.
    pub fn hold(&self, id: HoldId) -> Option<Hold> {
        self.read().holds.get(&id).cloned()
    }

    /// Raw reservation record.
    pub fn reservation(&self, id: HoldId) -> Option<Reservation> {
        self.read().reservations.get(&id).cloned()
    }

    /// Raw seat entry. A `Held` seat may belong to a hold that has already lapsed.
    pub fn seat(&self, index: usize) -> Option<Seat> {
        self.read().seats.get(index).copied()
    }

    /// Size of the hold map, including lapsed holds nobody has touched since.
    pub fn pending_holds(&self) -> usize {
        self.read().holds.len()
    }

    fn hold_block(&self, count: u32, customer_email: &str) -> Result<Hold, HoldRejected> {
        let customer = customer_email.trim();
        if customer.is_empty() {
            return Err(HoldRejected::MissingCustomer);
        }
        if count == 0 {
            return Err(HoldRejected::InvalidSeatCount);
        }
        let requested = count as usize;

        let mut state = self.write();
        let now = self.clock.now();
        let max_hold = self.max_hold;

        let available = state.count_available(now, max_hold);
        if requested > available {
            return Err(HoldRejected::InsufficientSeats {
                requested,
                available,
            });
        }

        let start = search::first_fit(state.seats.len(), requested, |index| {
            state.is_available(index, now, max_hold)
        })
        .ok_or(HoldRejected::NoContiguousBlock { requested })?;

        let id = state
            .allocate_id()
            .ok_or(HoldRejected::IdentifiersExhausted)?;
        let hold = Hold::new(id, now, customer, start, requested);
        for seat in &mut state.seats[hold.seats()] {
            seat.hold(id);
        }
        state.holds.insert(id, hold.clone());

        info!(
            hold_id = %id,
            start_seat = start,
            seat_count = requested,
            customer = %Masked::new(customer),
            "seats held"
        );
        Ok(hold)
    }

    fn commit_hold(
        &self,
        hold_id: HoldId,
        customer_email: &str,
    ) -> Result<Reservation, ReserveRejected> {
        let customer = customer_email.trim();
        if customer.is_empty() {
            return Err(ReserveRejected::MissingCustomer);
        }

        let mut state = self.write();
        let now = self.clock.now();

        let hold = state
            .holds
            .get(&hold_id)
            .cloned()
            .ok_or(ReserveRejected::HoldNotFound(hold_id))?;

        // A hold whose seats were already handed to someone else is as good as expired.
        if hold.is_expired(now, self.max_hold) || !state.owns_all(&hold) {
            let released = state.release(&hold);
            state.holds.remove(&hold_id);
            info!(
                hold_id = %hold_id,
                released,
                age_ms = hold.age(now).num_milliseconds(),
                "expired hold purged"
            );
            return Err(ReserveRejected::HoldExpired(hold_id));
        }

        if !hold.is_owned_by(customer) {
            return Err(ReserveRejected::CustomerMismatch(hold_id));
        }

        for seat in &mut state.seats[hold.seats()] {
            seat.set_status(SeatStatus::Reserved);
        }
        let reservation = Reservation::from_hold(&hold, now);
        state.reservations.insert(hold_id, reservation.clone());
        state.holds.remove(&hold_id);

        info!(
            reservation_id = %hold_id,
            start_seat = reservation.start_seat,
            seat_count = reservation.seat_count,
            customer = %Masked::new(customer),
            "seats reserved"
        );
        Ok(reservation)
    }

    // No code panics while holding the lock, so a poisoned guard still holds
    // consistent state.
    fn read(&self) -> RwLockReadGuard<'_, SeatTable> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SeatTable> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SeatEngine {
    fn default() -> Self {
        Self::new(
            &Venue::default(),
            Duration::milliseconds(DEFAULT_HOLD_TIMEOUT_MS),
        )
    }
}

impl TicketService for SeatEngine {
    fn number_of_seats_available(&self) -> usize {
        self.available_seats()
    }

    fn find_and_hold_seats(&self, count: u32, customer_email: &str) -> Option<HoldId> {
        self.try_find_and_hold_seats(count, customer_email)
            .ok()
            .map(|hold| hold.id)
    }

    fn reserve_seats(&self, hold_id: HoldId, customer_email: &str) -> Option<String> {
        self.try_reserve_seats(hold_id, customer_email)
            .ok()
            .map(|reservation| reservation.confirmation_code())
    }
}
