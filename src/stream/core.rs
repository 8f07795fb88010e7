//! Core eager stream type and its chain combinators
//!
//! Every combinator consumes the stream and returns a new one backed by a
//! freshly built vector. `peek` is the exception and hands back the same value.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::StreamResult;
use crate::fingerprint::{CanonicalEncoding, Fingerprinter};
use crate::sort::sort_by;
use crate::stream_configuration::{SortStrategy, StreamConfig};

/// An eagerly evaluated, ordered sequence of elements.
///
/// A stream either has a backing sequence (possibly empty) or is
/// uninitialized, which is what `Stream::default()` produces. Both behave the
/// same everywhere except [`Stream::limit`], which returns an uninitialized
/// stream untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream<T> {
    pub(crate) source: Option<Vec<T>>,
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self { source: None }
    }
}

impl<T> Stream<T> {
    pub(crate) fn from_source(source: Vec<T>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// An initialized stream with no elements
    pub fn empty() -> Self {
        Self::from_source(Vec::new())
    }

    /// Whether a backing sequence has been allocated
    pub fn is_initialized(&self) -> bool {
        self.source.is_some()
    }

    fn into_source(self) -> Vec<T> {
        self.source.unwrap_or_default()
    }

    /// Remove duplicates, keeping the first occurrence of each element.
    ///
    /// # Panics
    ///
    /// Panics if any element cannot be fingerprinted. Use
    /// [`Stream::try_distinct`] to get the error instead.
    pub fn distinct(self) -> Self
    where
        T: Serialize,
    {
        match self.try_distinct() {
            Ok(stream) => stream,
            Err(e) => panic!("Stream::distinct: {}", e),
        }
    }

    /// Remove duplicates under the canonical structural fingerprint.
    ///
    /// Either every element is fingerprinted and a fully deduplicated stream
    /// is returned, or the first encoding error is.
    pub fn try_distinct(self) -> StreamResult<Self>
    where
        T: Serialize,
    {
        self.distinct_with(&CanonicalEncoding)
    }

    /// Remove duplicates using a caller-supplied fingerprinter
    pub fn distinct_with<P>(self, fingerprinter: &P) -> StreamResult<Self>
    where
        P: Fingerprinter<T> + ?Sized,
    {
        let source = self.into_source();
        let total = source.len();
        let mut seen = HashSet::with_capacity(total);
        let mut keep = Vec::with_capacity(total);

        // Fingerprint everything before moving any element out
        for item in &source {
            keep.push(seen.insert(fingerprinter.fingerprint(item)?));
        }

        let result: Vec<T> = source
            .into_iter()
            .zip(keep)
            .filter_map(|(item, first)| first.then_some(item))
            .collect();

        log::trace!("distinct dropped {} of {} elements", total - result.len(), total);
        Ok(Self::from_source(result))
    }

    /// Keep the elements that match `predicate`
    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self::from_source(self.into_source().into_iter().filter(|item| predicate(item)).collect())
    }

    /// Replace every element with `mapper(element)`
    pub fn map<F>(self, mapper: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self::from_source(self.into_source().into_iter().map(mapper).collect())
    }

    /// Replace every element with the elements of the stream `mapper` returns for it
    pub fn flat_map<F>(self, mut mapper: F) -> Self
    where
        F: FnMut(T) -> Stream<T>,
    {
        let mut source = Vec::new();
        for item in self.into_source() {
            source.extend(mapper(item).into_source());
        }
        Self::from_source(source)
    }

    /// Run `consumer` on every element and return this same stream
    pub fn peek<F>(self, mut consumer: F) -> Self
    where
        F: FnMut(&T),
    {
        if let Some(source) = &self.source {
            source.iter().for_each(&mut consumer);
        }
        self
    }

    /// Drop the first `n` elements.
    ///
    /// A non-positive `n` returns this stream as is.
    pub fn skip(self, n: isize) -> Self {
        if n <= 0 {
            return self;
        }

        let mut source = self.into_source();
        let n = n as usize;
        if n >= source.len() {
            return Self::empty();
        }

        Self::from_source(source.split_off(n))
    }

    /// Keep at most `max_size` elements.
    ///
    /// An uninitialized stream is returned unchanged whatever `max_size` is;
    /// an initialized one with a negative `max_size` becomes empty.
    pub fn limit(self, max_size: isize) -> Self {
        if self.source.is_none() {
            return self;
        }
        if max_size < 0 {
            return Self::empty();
        }

        let mut source = self.into_source();
        source.truncate(max_size as usize);
        Self::from_source(source)
    }

    /// Reverse the order of the elements
    pub fn reverse(self) -> Self {
        let mut source = self.into_source();
        source.reverse();
        Self::from_source(source)
    }

    /// Keep the half-open index range `[start, end)`.
    ///
    /// Negative bounds clamp to 0 and `end` clamps to the stream length. An
    /// empty or inverted range yields an empty stream.
    pub fn range(self, start: isize, end: isize) -> Self {
        let start = start.max(0) as usize;
        let end = end.max(0) as usize;
        if start >= end {
            return Self::empty();
        }

        let mut source = self.into_source();
        let end = end.min(source.len());
        if start >= end {
            return Self::empty();
        }

        source.truncate(end);
        Self::from_source(source.split_off(start))
    }

    /// Sort with `less` as the "a before b" predicate, keeping equal elements in order
    pub fn sorted<F>(self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sorted_with(SortStrategy::Stable, less)
    }

    /// Sort with `less` using the given strategy
    pub fn sorted_with<F>(self, strategy: SortStrategy, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut source = self.into_source();
        sort_by(&mut source, strategy, less);
        Self::from_source(source)
    }

    /// Sort with `less` using the strategy configured in `config`
    pub fn sorted_with_config<F>(self, config: &StreamConfig, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sorted_with(config.sort_strategy, less)
    }

    /// Append the elements of `other` after this stream's elements
    pub fn concat(self, other: Stream<T>) -> Self {
        let mut source = self.into_source();
        source.extend(other.into_source());
        Self::from_source(source)
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(source: Vec<T>) -> Self {
        Self::from_source(source)
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_source(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_source().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_distinguishes_uninitialized_from_empty() {
        let uninit: Stream<i32> = Stream::default();
        let limited = uninit.limit(-1);
        assert!(!limited.is_initialized());

        let limited = Stream::<i32>::empty().limit(-1);
        assert!(limited.is_initialized());
        assert_eq!(limited.count(), 0);
    }

    #[test]
    fn test_chain_ops_initialize_backing_sequence() {
        let s: Stream<i32> = Stream::default();
        assert!(s.clone().filter(|_| true).is_initialized());
        assert!(s.clone().reverse().is_initialized());
        assert!(!s.peek(|_| {}).is_initialized());
    }
}
