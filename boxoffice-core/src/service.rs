use crate::block::HoldId;

/// The call surface of a box office.
///
/// Rejections (bad input, no room, unknown or expired hold, wrong customer) are
/// ordinary outcomes and come back as `None`, never as a panic. An empty or
/// whitespace-only email counts as no email.
pub trait TicketService: Send + Sync {
    /// Seats that are open, or held by a hold that has lapsed.
    fn number_of_seats_available(&self) -> usize;

    /// Hold the lowest-indexed run of `count` consecutive available seats.
    fn find_and_hold_seats(&self, count: u32, customer_email: &str) -> Option<HoldId>;

    /// Commit a live hold. Returns the confirmation code.
    fn reserve_seats(&self, hold_id: HoldId, customer_email: &str) -> Option<String>;
}
