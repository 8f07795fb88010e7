//! Sort-by-predicate collaborator used by `Stream::sorted`

use std::cmp::Ordering;

use crate::stream_configuration::SortStrategy;

/// Sort `items` in place using `less` as a strict weak ordering.
///
/// `less(a, b)` must return true when `a` belongs strictly before `b`. A
/// predicate that is not a strict weak ordering leaves the order unspecified
/// and may panic.
pub fn sort_by<T, F>(items: &mut [T], strategy: SortStrategy, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let compare = |a: &T, b: &T| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    };

    match strategy {
        SortStrategy::Stable => items.sort_by(compare),
        SortStrategy::Unstable => items.sort_unstable_by(compare),
    }
}
