//! First-fit search for a run of consecutive available seats.
//!
//! The seat table is flat, so a run may wrap from the end of one row onto the
//! start of the next.

/// Lowest starting index of `count` consecutive indices in `0..len` for which
/// `is_available` holds, or `None` when no such run exists.
///
/// When a probe from `start` hits an unavailable seat, the scan resumes just past
/// that seat: every start between `start` and the blocker would hit it too.
pub fn first_fit<F>(len: usize, count: usize, mut is_available: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    if count == 0 || count > len {
        return None;
    }

    let last_start = len - count;
    let mut start = 0;
    while start <= last_start {
        if !is_available(start) {
            start += 1;
            continue;
        }

        match (start + 1..start + count).find(|&index| !is_available(index)) {
            None => return Some(start),
            Some(blocked) => start = blocked + 1,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(pattern: &str, count: usize) -> Option<usize> {
        // '.' = available, 'x' = taken
        let seats: Vec<bool> = pattern.chars().map(|c| c == '.').collect();
        first_fit(seats.len(), count, |i| seats[i])
    }

    #[test]
    fn test_takes_lowest_window() {
        assert_eq!(fit("..........", 3), Some(0));
        assert_eq!(fit("..xx......", 3), Some(4));
        assert_eq!(fit("..xx......", 2), Some(0));
        assert_eq!(fit("xxxxxxxx..", 2), Some(8));
    }

    #[test]
    fn test_fragmented_table_has_no_fit() {
        // Six free seats, never three in a row
        assert_eq!(fit("..x..x..x", 3), None);
        assert_eq!(fit("xxxx", 1), None);
    }

    #[test]
    fn test_degenerate_requests() {
        assert_eq!(fit("....", 0), None);
        assert_eq!(fit("....", 5), None);
        assert_eq!(fit("....", 4), Some(0));
        assert_eq!(fit("", 1), None);
    }

    #[test]
    fn test_skips_past_blocker() {
        let seats: Vec<bool> = ".x.x......".chars().map(|c| c == '.').collect();
        let mut probes = Vec::new();
        let found = first_fit(seats.len(), 4, |i| {
            probes.push(i);
            seats[i]
        });

        assert_eq!(found, Some(4));
        // Seats 1 and 3 are each probed once, never as a fresh start
        assert_eq!(probes.iter().filter(|&&i| i == 1).count(), 1);
        assert_eq!(probes.iter().filter(|&&i| i == 3).count(), 1);
    }
}
