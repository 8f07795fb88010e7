//! Bridges between eager streams and async `futures` streams

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use super::core::Stream;

/// Drain an async stream to completion into an eager stream
pub async fn from_async_stream<S>(source: S) -> Stream<S::Item>
where
    S: futures_core::Stream,
{
    let items: Vec<S::Item> = source.collect().await;
    log::debug!("async stream completed after {} elements", items.len());
    Stream::from_source(items)
}

/// Drain a tokio channel without blocking the runtime's worker thread
pub async fn from_channel_async<T>(source: mpsc::Receiver<T>) -> Stream<T> {
    from_async_stream(ReceiverStream::new(source)).await
}

impl<T> Stream<T>
where
    T: Send + 'static,
{
    /// Hand the elements to an async pipeline as a boxed stream
    pub fn into_async_stream(self) -> BoxStream<'static, T> {
        stream::iter(self).boxed()
    }
}
