use futures::SinkExt;
use futures_util::StreamExt;
use rs2_eager::{
    from_async_stream, from_channel, from_channel_async, from_channel_with, stream_of,
    BlockingReceiver, StreamConfig,
};
use std::thread;
use tokio::sync::mpsc;
use tokio_test::assert_ready;

#[test]
fn test_from_tokio_channel() {
    let (tx, rx) = mpsc::channel(4);
    let producer = thread::spawn(move || {
        for i in 0..20 {
            tx.blocking_send(i).unwrap();
        }
    });

    let s = from_channel(rx);
    producer.join().unwrap();
    assert_eq!(s.into_vec(), (0..20).collect::<Vec<_>>());
}

#[test]
fn test_from_tokio_unbounded_channel() {
    let (tx, rx) = mpsc::unbounded_channel();
    for word in ["a", "b", "c"] {
        tx.send(word).unwrap();
    }
    drop(tx);

    assert_eq!(from_channel(rx).to_slice(), &["a", "b", "c"]);
}

#[test]
fn test_from_closed_empty_channel() {
    let (tx, rx) = mpsc::channel::<i32>(1);
    drop(tx);
    let s = from_channel(rx);
    assert!(s.is_initialized());
    assert!(s.is_empty());
}

#[test]
fn test_from_std_channel_multiple_producers() {
    let (tx, rx) = std::sync::mpsc::channel();
    let handles: Vec<_> = (0..4)
        .map(|p| {
            let tx = tx.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    tx.send(p * 100 + i).unwrap();
                }
            })
        })
        .collect();
    drop(tx);

    let s = from_channel(rx);
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(s.count(), 100);
    let sorted = s.sorted(|a, b| a < b);
    assert_eq!(sorted.find_first(), Some(&0));
    assert_eq!(sorted.find_last(), Some(&324));
}

#[test]
fn test_from_futures_channel() {
    let (mut tx, rx) = futures::channel::mpsc::channel(8);
    let producer = thread::spawn(move || {
        futures::executor::block_on(async move {
            for i in 1..=5 {
                tx.send(i).await.unwrap();
            }
        })
    });

    let s = from_channel(rx);
    producer.join().unwrap();
    assert_eq!(s.to_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_from_channel_with_config_and_borrowed_receiver() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded();
    tx.unbounded_send(1).unwrap();
    tx.unbounded_send(2).unwrap();
    drop(tx);

    let config = StreamConfig::new().drain_capacity(2);
    let s = from_channel_with(&config, &mut rx);
    assert_eq!(s.to_slice(), &[1, 2]);
    assert_eq!(rx.recv_blocking(), None);
}

#[tokio::test]
async fn test_from_channel_async() {
    let (tx, rx) = mpsc::channel(2);
    tokio::spawn(async move {
        for i in 0..10 {
            tx.send(i * i).await.unwrap();
        }
    });

    let s = from_channel_async(rx).await;
    assert_eq!(s.find_last(), Some(&81));
    assert_eq!(s.count(), 10);
}

#[tokio::test]
async fn test_from_async_stream() {
    let source = futures_util::stream::iter(vec![3, 1, 2]);
    let s = from_async_stream(source).await.sorted(|a, b| a < b);
    assert_eq!(s.to_slice(), &[1, 2, 3]);
}

#[tokio::test]
async fn test_into_async_stream_round_trip() {
    let collected: Vec<i32> = stream_of![1, 2, 3]
        .into_async_stream()
        .map(|x| x + 1)
        .collect()
        .await;
    assert_eq!(collected, vec![2, 3, 4]);
}

#[test]
fn test_into_async_stream_is_ready_immediately() {
    let mut s = stream_of![7].into_async_stream();
    let mut task = tokio_test::task::spawn(s.next());
    assert_eq!(assert_ready!(task.poll()), Some(7));
}
