pub mod block;
pub mod clock;
pub mod seat;
pub mod service;
pub mod venue;

pub use block::{Hold, HoldId, Reservation};
pub use clock::{Clock, ManualClock, SystemClock};
pub use seat::{Seat, SeatStatus};
pub use service::TicketService;
pub use venue::Venue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid venue: rows and columns must be positive (got {rows} x {columns})")]
    InvalidVenue { rows: i32, columns: i32 },
    #[error("Venue too large: {rows} x {columns} seats cannot be indexed")]
    VenueTooLarge { rows: i32, columns: i32 },
}

pub type CoreResult<T> = Result<T, CoreError>;
