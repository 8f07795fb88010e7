//! Stream constructors: of, empty, generate, from_vec, from_slice, from_range, concat

use std::fmt::Display;

use super::core::Stream;
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::StreamConfig;

/// Create a stream whose elements are the given values, in order
pub fn of<T, I>(items: I) -> Stream<T>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}

/// Create an initialized stream with no elements
pub fn empty<T>() -> Stream<T> {
    Stream::empty()
}

/// Wrap `source` as the stream's backing sequence without copying
pub fn from_vec<T>(source: Vec<T>) -> Stream<T> {
    Stream::from_source(source)
}

/// Copy a borrowed slice into a new stream
pub fn from_slice<T: Clone>(source: &[T]) -> Stream<T> {
    Stream::from_source(source.to_vec())
}

/// Build a stream by draining a pull-style generator.
///
/// `factory` is called once to obtain the pull function, which is then called
/// until it returns `None`. The generator is drained eagerly, so one that never
/// returns `None` never lets this function return.
///
/// # Examples
/// ```
/// use rs2_eager::generate;
///
/// let evens = generate(|| {
///     let mut n = 0;
///     move || {
///         n += 2;
///         (n <= 10).then_some(n)
///     }
/// });
/// assert_eq!(evens.to_slice(), &[2, 4, 6, 8, 10]);
/// ```
pub fn generate<T, G, P>(factory: G) -> Stream<T>
where
    G: FnOnce() -> P,
    P: FnMut() -> Option<T>,
{
    generate_with(&StreamConfig::default(), factory)
}

/// Same as [`generate`], reserving `config.drain_capacity` up front
pub fn generate_with<T, G, P>(config: &StreamConfig, factory: G) -> Stream<T>
where
    G: FnOnce() -> P,
    P: FnMut() -> Option<T>,
{
    let mut next = factory();
    let mut source = Vec::with_capacity(config.drain_capacity);

    while let Some(item) = next() {
        source.push(item);
    }

    log::debug!("generator drained after {} elements", source.len());
    Stream::from_source(source)
}

/// Numeric types that can form an arithmetic progression in [`from_range`]
pub trait RangeStep: Copy + PartialOrd + Display {
    /// Whether this value is strictly greater than zero
    fn is_positive(self) -> bool;

    /// Number of elements in `start, start + step, ...` not exceeding `end`,
    /// or `None` if that count does not fit in a `usize`.
    /// Callers guarantee `start <= end` and a positive step.
    fn element_count(start: Self, end: Self, step: Self) -> Option<usize>;

    /// Append the first `count` elements of the progression to `out`
    fn extend_progression(start: Self, end: Self, step: Self, count: usize, out: &mut Vec<Self>);
}

macro_rules! impl_range_step_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeStep for $t {
                fn is_positive(self) -> bool {
                    self > 0
                }

                fn element_count(start: Self, end: Self, step: Self) -> Option<usize> {
                    let steps = (end as i128 - start as i128) / step as i128;
                    usize::try_from(steps).ok()?.checked_add(1)
                }

                fn extend_progression(
                    start: Self,
                    _end: Self,
                    step: Self,
                    count: usize,
                    out: &mut Vec<Self>,
                ) {
                    // Every element lies in start..=end, so the cast back is exact
                    out.extend((0..count).map(|n| (start as i128 + n as i128 * step as i128) as $t));
                }
            }
        )*
    };
}

macro_rules! impl_range_step_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeStep for $t {
                fn is_positive(self) -> bool {
                    self > 0.0
                }

                fn element_count(start: Self, end: Self, step: Self) -> Option<usize> {
                    let span = end - start;
                    let steps = if span.is_finite() {
                        span / step
                    } else {
                        end / step - start / step
                    }
                    .floor();

                    if steps.is_finite() && steps < usize::MAX as $t {
                        (steps as usize).checked_add(1)
                    } else {
                        None
                    }
                }

                fn extend_progression(
                    start: Self,
                    end: Self,
                    step: Self,
                    count: usize,
                    out: &mut Vec<Self>,
                ) {
                    if (end - start).is_finite() {
                        out.extend((0..count).map(|n| start + (n as $t) * step));
                        return;
                    }

                    // `n * step` can overflow even though every element is finite
                    let mut next = start;
                    for _ in 0..count {
                        if next > end {
                            break;
                        }
                        out.push(next);
                        next += step;
                    }
                }
            }
        )*
    };
}

impl_range_step_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_range_step_float!(f32, f64);

/// Create the inclusive progression `start, start + step, ...` up to `end`.
///
/// # Panics
///
/// Panics if `end < start`, `step` is not positive or the progression has
/// too many elements to materialize. Use [`try_from_range`] to get the error
/// instead.
pub fn from_range<T: RangeStep>(start: T, end: T, step: T) -> Stream<T> {
    match try_from_range(start, end, step) {
        Ok(stream) => stream,
        Err(e) => panic!("from_range: {}", e),
    }
}

/// Fallible form of [`from_range`]
pub fn try_from_range<T: RangeStep>(start: T, end: T, step: T) -> StreamResult<Stream<T>> {
    // Negated so that NaN bounds are rejected too
    if !(end >= start) {
        return Err(StreamError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if !step.is_positive() {
        return Err(StreamError::InvalidStep {
            step: step.to_string(),
        });
    }

    // A Vec cannot hold more than isize::MAX bytes
    let max_len = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    let count = T::element_count(start, end, step)
        .filter(|&count| count <= max_len)
        .ok_or_else(|| StreamError::RangeTooLarge {
            start: start.to_string(),
            end: end.to_string(),
            step: step.to_string(),
        })?;

    let mut source = Vec::with_capacity(count);
    T::extend_progression(start, end, step, count, &mut source);
    Ok(Stream::from_source(source))
}

/// Create a stream of `a`'s elements followed by `b`'s
pub fn concat<T>(a: Stream<T>, b: Stream<T>) -> Stream<T> {
    a.concat(b)
}

/// Concatenate any number of streams in order
pub fn concat_all<T, I>(streams: I) -> Stream<T>
where
    I: IntoIterator<Item = Stream<T>>,
{
    streams
        .into_iter()
        .fold(Stream::empty(), |acc, next| acc.concat(next))
}
