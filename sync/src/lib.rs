#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Blocking synchronization primitives for threaded Rust.
//!
//! `fibre_sync` provides two small, independent building blocks:
//!
//! - [`BoundedQueue`], a closable, capacity-bounded MPMC queue with blocking
//!   `push`/`pop`. Closing the queue wakes every blocked thread; pending items
//!   are still drained by consumers before `pop` starts failing.
//! - [`CyclicGate`], a reusable notification latch. A `notify` releases exactly
//!   one `wait`, redundant notifies coalesce, and waits can be bounded by a
//!   duration or a deadline.
//!
//! Both are built on a single `parking_lot::Mutex` plus condition variables and
//! are meant to be shared by reference (e.g. with `std::thread::scope`) or
//! through an `Arc`.
//!
//! # Example
//!
//! ```
//! use fibre_sync::{BoundedQueue, PopError};
//! use std::thread;
//!
//! let queue = BoundedQueue::new(4).unwrap();
//!
//! thread::scope(|s| {
//!   s.spawn(|| {
//!     for i in 0..10 {
//!       queue.push(i).unwrap();
//!     }
//!     queue.close();
//!   });
//!
//!   let mut received = Vec::new();
//!   loop {
//!     match queue.pop() {
//!       Ok(value) => received.push(value),
//!       Err(PopError::Closed) => break,
//!     }
//!   }
//!   assert_eq!(received, (0..10).collect::<Vec<_>>());
//! });
//! ```

pub mod error;
pub mod gate;
pub mod queue;

// Internal utilities
mod telemetry;

pub use error::{CapacityError, PopError, PushError, TryPopError, TryPushError};
pub use gate::CyclicGate;
pub use queue::BoundedQueue;

// Helper function to check if a type is Send + Sync.
#[allow(dead_code)]
fn assert_send_sync<T: Send + Sync>() {}

#[allow(dead_code)]
fn assert_primitives_send_sync() {
  assert_send_sync::<BoundedQueue<String>>();
  assert_send_sync::<CyclicGate>();
}
