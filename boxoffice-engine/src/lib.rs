pub mod engine;
pub mod error;
pub mod search;

pub use engine::{SeatEngine, DEFAULT_HOLD_TIMEOUT_MS};
pub use error::{HoldRejected, ReserveRejected};
