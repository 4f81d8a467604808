use std::fmt;

use crate::{CoreError, CoreResult};

pub const DEFAULT_ROWS: i32 = 30;
pub const DEFAULT_COLUMNS: i32 = 50;

/// Physical layout of the house. The allocator only ever sees the flat seat count;
/// rows and columns exist so callers can translate a seat index into a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    rows: u32,
    columns: u32,
    seats: usize,
}

impl Venue {
    /// Fails fast on non-positive dimensions; a zero-capacity engine is a
    /// configuration mistake, not a valid venue.
    pub fn new(rows: i32, columns: i32) -> CoreResult<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(CoreError::InvalidVenue { rows, columns });
        }

        let seats = (rows as usize)
            .checked_mul(columns as usize)
            .filter(|total| u32::try_from(*total).is_ok())
            .ok_or(CoreError::VenueTooLarge { rows, columns })?;

        Ok(Self {
            rows: rows as u32,
            columns: columns as u32,
            seats,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn number_of_seats(&self) -> usize {
        self.seats
    }

    /// Row-major (row, column) of a flat seat index, both zero-based.
    pub fn seat_position(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.seats {
            return None;
        }
        let columns = self.columns as usize;
        Some(((index / columns) as u32, (index % columns) as u32))
    }
}

impl Default for Venue {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS as u32,
            columns: DEFAULT_COLUMNS as u32,
            seats: (DEFAULT_ROWS * DEFAULT_COLUMNS) as usize,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns ({} seats)", self.rows, self.columns, self.seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_dimensions() {
        assert!(Venue::new(3, 5).is_ok());
        assert_eq!(Venue::new(3, 0), Err(CoreError::InvalidVenue { rows: 3, columns: 0 }));
        assert!(Venue::new(-8, 6).is_err());
        assert!(Venue::new(-5, -5).is_err());

        let venue = Venue::new(3, 6).unwrap();
        assert_eq!(venue.number_of_seats(), 18);
        assert_eq!(venue.rows(), 3);
        assert_eq!(venue.columns(), 6);
    }

    #[test]
    fn test_venue_too_large() {
        let result = Venue::new(i32::MAX, i32::MAX);
        assert!(matches!(result, Err(CoreError::VenueTooLarge { .. })));
    }

    #[test]
    fn test_default_venue() {
        let venue = Venue::default();
        assert_eq!(venue.number_of_seats(), 1500);
        assert_eq!(venue, Venue::new(DEFAULT_ROWS, DEFAULT_COLUMNS).unwrap());
    }

    #[test]
    fn test_seat_position() {
        let venue = Venue::new(20, 25).unwrap();
        assert_eq!(venue.seat_position(0), Some((0, 0)));
        assert_eq!(venue.seat_position(24), Some((0, 24)));
        assert_eq!(venue.seat_position(25), Some((1, 0)));
        assert_eq!(venue.seat_position(499), Some((19, 24)));
        assert_eq!(venue.seat_position(500), None);
    }
}
