//! Cyclic seat-walk helpers. The game owns a single cursor that persists
//! across hands; these pure functions compute the next stop for it (or for
//! a local walk that must not disturb it).

use crate::seat::Seat;

/// Advances at least one position through the seat array in index order,
/// wrapping, and returns the first seat matching the predicate. Panics if
/// no seat matches; callers guarantee at least one candidate.
pub(crate) fn next_matching<F>(seats: &[Seat], from: usize, matches: F) -> usize
where
    F: Fn(&Seat) -> bool,
{
    let len = seats.len();
    let mut index = from;
    for _ in 0..len {
        index = (index + 1) % len;
        if matches(&seats[index]) {
            return index;
        }
    }
    panic!("no seat matches the rotation predicate");
}

/// First non-folded seat after `from`. Empty seats read as folded, so this
/// walks the live hand.
pub(crate) fn next_unfolded(seats: &[Seat], from: usize) -> usize {
    next_matching(seats, from, |s| !s.folded())
}

/// First occupied seat after `from`, regardless of fold state. Used before
/// dealing, when occupancy is what will become the live hand.
pub(crate) fn next_occupied(seats: &[Seat], from: usize) -> usize {
    next_matching(seats, from, Seat::is_occupied)
}
