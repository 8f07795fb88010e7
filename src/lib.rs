pub mod error;
pub mod fingerprint;
pub mod sort;
pub mod stream;
pub mod stream_configuration;

// Re-export the stream type and its constructors at the crate root
pub use stream::{
    concat, concat_all, empty, from_async_stream, from_channel, from_channel_async,
    from_channel_with, from_range, from_slice, from_vec, generate, generate_with, of,
    try_from_range, BlockingReceiver, RangeStep, Stream,
};
pub use error::{StreamError, StreamResult};
pub use fingerprint::{fingerprint, CanonicalEncoding, EncodingError, Fingerprinter};
pub use stream_configuration::{SortStrategy, StreamConfig};

/// Build a stream from a literal list of elements
///
/// ```
/// use rs2_eager::stream_of;
///
/// let s = stream_of![3, 1, 2].sorted(|a, b| a < b);
/// assert_eq!(s.to_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! stream_of {
    () => {
        $crate::stream::Stream::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::stream::of(vec![$($item),+])
    };
}
