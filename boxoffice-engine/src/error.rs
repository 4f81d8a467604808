use boxoffice_core::HoldId;

/// Why no hold was created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoldRejected {
    #[error("A customer email is required")]
    MissingCustomer,

    #[error("Seat count must be at least 1")]
    InvalidSeatCount,

    #[error("Insufficient seats: requested {requested}, available {available}")]
    InsufficientSeats {
        requested: usize,
        available: usize,
    },

    #[error("No block of {requested} consecutive seats is available")]
    NoContiguousBlock {
        requested: usize,
    },

    #[error("Hold identifiers exhausted")]
    IdentifiersExhausted,
}

/// Why a hold could not be turned into a reservation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReserveRejected {
    #[error("A customer email is required")]
    MissingCustomer,

    #[error("Hold not found: {0}")]
    HoldNotFound(HoldId),

    #[error("Hold expired: {0}")]
    HoldExpired(HoldId),

    #[error("Hold {0} belongs to a different customer")]
    CustomerMismatch(HoldId),
}
