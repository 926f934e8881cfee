// ABOUTME: Ordering helpers shared by the RSS entities.
// ABOUTME: Sequence comparison, optional-value comparison, and case-folded hashing.

use std::cmp::Ordering;
use std::hash::Hasher;

use crate::text::fold_case;

/// Compares two ordered lists.
///
/// Length dominates: the shorter list is always less, whatever its content.
/// Lists of equal length are compared position by position and the first
/// non-equal pair decides.
pub fn compare_sequence<T, F>(a: &[T], b: &[T], mut cmp: F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(x, y)| cmp(x, y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Sequence comparison for element types that are already `Ord`.
pub fn compare_ord_sequence<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    compare_sequence(a, b, Ord::cmp)
}

/// `None` sorts before any value.
pub fn compare_option<T, F>(a: Option<&T>, b: Option<&T>, cmp: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Feeds the case-folded serialized form of an entity into a hasher.
pub(crate) fn hash_folded<H: Hasher>(serialized: &str, state: &mut H) {
    state.write(fold_case(serialized).as_bytes());
    state.write_u8(0xff);
}
