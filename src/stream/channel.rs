//! Draining channels into streams
//!
//! `from_channel` blocks the calling thread until the producer side closes the
//! channel. It is the only blocking point in the crate; inside an async runtime
//! use [`from_channel_async`](super::async_bridge::from_channel_async) instead.

use futures::StreamExt;

use super::core::Stream;
use crate::stream_configuration::StreamConfig;

/// A channel receiver that can be read from synchronously
pub trait BlockingReceiver<T> {
    /// Block until the next value arrives, or return `None` once the channel
    /// is closed and empty
    fn recv_blocking(&mut self) -> Option<T>;
}

/// Tokio's `blocking_recv` panics when called from within an async context.
impl<T> BlockingReceiver<T> for tokio::sync::mpsc::Receiver<T> {
    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

impl<T> BlockingReceiver<T> for tokio::sync::mpsc::UnboundedReceiver<T> {
    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

impl<T> BlockingReceiver<T> for futures::channel::mpsc::Receiver<T> {
    fn recv_blocking(&mut self) -> Option<T> {
        futures::executor::block_on(self.next())
    }
}

impl<T> BlockingReceiver<T> for futures::channel::mpsc::UnboundedReceiver<T> {
    fn recv_blocking(&mut self) -> Option<T> {
        futures::executor::block_on(self.next())
    }
}

impl<T> BlockingReceiver<T> for std::sync::mpsc::Receiver<T> {
    fn recv_blocking(&mut self) -> Option<T> {
        self.recv().ok()
    }
}

impl<T, R> BlockingReceiver<T> for &mut R
where
    R: BlockingReceiver<T> + ?Sized,
{
    fn recv_blocking(&mut self) -> Option<T> {
        (**self).recv_blocking()
    }
}

/// Receive every value until the channel closes, preserving receive order
pub fn from_channel<T, R>(source: R) -> Stream<T>
where
    R: BlockingReceiver<T>,
{
    from_channel_with(&StreamConfig::default(), source)
}

/// Same as [`from_channel`], reserving `config.drain_capacity` up front
pub fn from_channel_with<T, R>(config: &StreamConfig, mut source: R) -> Stream<T>
where
    R: BlockingReceiver<T>,
{
    let mut items = Vec::with_capacity(config.drain_capacity);
    while let Some(item) = source.recv_blocking() {
        items.push(item);
    }

    log::debug!("channel closed after {} elements", items.len());
    Stream::from_source(items)
}
