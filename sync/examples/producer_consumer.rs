// examples/producer_consumer.rs
//
// A pool of producers and a pool of consumers share one bounded queue. A
// coordinator closes the queue after a while; every worker sees the close as
// an error on its next push/pop and leaves its loop.

use fibre_sync::{BoundedQueue, PopError, PushError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CAPACITY: usize = 8;
const PRODUCERS: usize = 7;
const CONSUMERS: usize = 6;
const RUN_FOR: Duration = Duration::from_secs(1);

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_thread_names(true)
    .init();

  let queue = match BoundedQueue::new(CAPACITY) {
    Ok(queue) => queue,
    Err(err) => {
      eprintln!("cannot create queue: {}", err);
      return;
    }
  };
  let produced = AtomicUsize::new(0);
  let consumed = AtomicUsize::new(0);

  thread::scope(|s| {
    for id in 0..PRODUCERS {
      let (queue, produced) = (&queue, &produced);
      thread::Builder::new()
        .name(format!("producer-{}", id))
        .spawn_scoped(s, move || loop {
          match queue.push(format!("apple-{}", id)) {
            Ok(()) => {
              produced.fetch_add(1, Ordering::Relaxed);
            }
            Err(PushError::Closed(rejected)) => {
              info!(%rejected, "queue closed, producer stopping");
              break;
            }
          }
        })
        .expect("failed to spawn producer");
    }

    for id in 0..CONSUMERS {
      let (queue, consumed) = (&queue, &consumed);
      thread::Builder::new()
        .name(format!("consumer-{}", id))
        .spawn_scoped(s, move || loop {
          match queue.pop() {
            Ok(_item) => {
              consumed.fetch_add(1, Ordering::Relaxed);
            }
            Err(PopError::Closed) => {
              info!("queue drained, consumer stopping");
              break;
            }
          }
        })
        .expect("failed to spawn consumer");
    }

    thread::sleep(RUN_FOR);
    info!(pending = queue.len(), "closing queue");
    queue.close();
  });

  info!(
    produced = produced.load(Ordering::Relaxed),
    consumed = consumed.load(Ordering::Relaxed),
    "all workers joined"
  );
}
