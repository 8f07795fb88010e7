//! Terminal operations: matching, folding, counting, finding, extremes

use super::core::Stream;

impl<T> Stream<T> {
    /// Whether every element matches `predicate`. True for an empty stream.
    pub fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Whether at least one element matches `predicate`. False for an empty stream.
    pub fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Whether no element matches `predicate`
    pub fn none_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Run `action` on every element in order
    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(T),
    {
        self.into_iter().for_each(action)
    }

    /// Left fold starting from `initial`
    pub fn reduce<F>(self, initial: T, accumulator: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.into_iter().fold(initial, accumulator)
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.to_slice().len()
    }

    /// Whether the stream has no elements, initialized or not
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The first element, or `None` for an empty or uninitialized stream
    pub fn find_first(&self) -> Option<&T> {
        self.to_slice().first()
    }

    /// The last element, or `None` for an empty or uninitialized stream
    pub fn find_last(&self) -> Option<&T> {
        self.to_slice().last()
    }

    /// Maximum element by linear scan.
    ///
    /// The running best is replaced whenever `less(candidate, best)` holds, so
    /// pass a "greater than" predicate (`|a, b| a > b`) to get the maximum. Of
    /// several equal extremes the first one wins.
    pub fn max<F>(&self, less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.extreme(less)
    }

    /// Minimum element by linear scan with `less` as "a < b"; the first of equal minima wins
    pub fn min<F>(&self, less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.extreme(less)
    }

    fn extreme<F>(&self, mut replaces: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut items = self.iter();
        let first = items.next()?;
        Some(items.fold(first, |best, item| if replaces(item, best) { item } else { best }))
    }

    /// The backing sequence, by reference
    pub fn to_slice(&self) -> &[T] {
        self.source.as_deref().unwrap_or(&[])
    }

    /// Take ownership of the backing sequence
    pub fn into_vec(self) -> Vec<T> {
        self.source.unwrap_or_default()
    }

    /// Borrowing iterator over the elements; yields nothing when uninitialized
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.to_slice().iter()
    }
}
