//! Eager stream implementation
//!
//! A [`Stream`] wraps a fully materialized sequence. Chain combinators build
//! a new sequence on every call; terminal operations read it.

pub mod core;
pub mod constructors;
pub mod channel;
pub mod utility;
pub mod async_bridge;

// Re-export core types
pub use self::core::Stream;

// Re-export constructors
pub use constructors::{
    of, empty, from_vec, from_slice, generate, generate_with, from_range, try_from_range,
    concat, concat_all, RangeStep,
};

// Re-export channel draining
pub use channel::{from_channel, from_channel_with, BlockingReceiver};

// Re-export async bridges
pub use async_bridge::{from_async_stream, from_channel_async};
