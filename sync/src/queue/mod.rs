// src/queue/mod.rs

//! A closable, capacity-bounded MPMC blocking queue.
//!
//! `BoundedQueue` keeps its buffer and closed flag behind a single
//! `parking_lot::Mutex`. Two condition variables carry the wake-ups: `not_full`
//! for producers blocked in [`push`](BoundedQueue::push) and `not_empty` for
//! consumers blocked in [`pop`](BoundedQueue::pop). Every waiter re-checks its
//! predicate after waking, so spurious wake-ups are harmless.
//!
//! ### Closing
//!
//! [`close`](BoundedQueue::close) is the queue's only cancellation mechanism.
//! It is idempotent and wakes every blocked thread on both sides:
//!
//! - every pending and future `push` fails with [`PushError::Closed`], handing
//!   the value back;
//! - `pop` keeps delivering buffered items and fails with [`PopError::Closed`]
//!   only once the buffer is empty.
//!
//! ### Fairness
//!
//! Waiters on the same side are not woken in FIFO order. Delivered items are
//! always in global FIFO order of successful pushes.

mod iter;

pub use iter::{Iter, TryIter};

use crate::error::{CapacityError, PopError, PushError, TryPopError, TryPushError};
use crate::telemetry;

use std::collections::VecDeque;
use std::fmt;

use parking_lot::{Condvar, Mutex};

/// State guarded by the queue's mutex.
struct QueueInternal<T> {
  buffer: VecDeque<T>,
  /// Monotonic: once set, never cleared.
  closed: bool,
}

/// A thread-safe FIFO queue holding at most `capacity` items.
///
/// Share it between threads by reference (for example with
/// `std::thread::scope`) or wrap it in an `Arc`.
pub struct BoundedQueue<T> {
  capacity: usize,
  internal: Mutex<QueueInternal<T>>,
  not_full: Condvar,
  not_empty: Condvar,
}

impl<T> fmt::Debug for BoundedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let internal = self.internal.lock();
    f.debug_struct("BoundedQueue")
      .field("capacity", &self.capacity)
      .field("len", &internal.buffer.len())
      .field("closed", &internal.closed)
      .finish()
  }
}

impl<T> BoundedQueue<T> {
  /// Creates an open, empty queue that holds at most `capacity` items.
  ///
  /// Returns [`CapacityError::Zero`] if `capacity` is `0`.
  pub fn new(capacity: usize) -> Result<Self, CapacityError> {
    if capacity == 0 {
      return Err(CapacityError::Zero);
    }
    telemetry::queue_created(capacity);
    Ok(Self {
      capacity,
      internal: Mutex::new(QueueInternal {
        buffer: VecDeque::new(),
        closed: false,
      }),
      not_full: Condvar::new(),
      not_empty: Condvar::new(),
    })
  }

  /// Appends `value` to the tail, blocking while the queue is full.
  ///
  /// If the queue is closed before space becomes available, the value is not
  /// enqueued and comes back inside [`PushError::Closed`].
  pub fn push(&self, value: T) -> Result<(), PushError<T>> {
    let capacity = self.capacity;
    let mut guard = self.internal.lock();

    if !guard.closed && guard.buffer.len() >= capacity {
      telemetry::push_blocking(capacity);
      self.not_full.wait_while(&mut guard, |internal| {
        !internal.closed && internal.buffer.len() >= capacity
      });
    }

    if guard.closed {
      return Err(PushError::Closed(value));
    }
    guard.buffer.push_back(value);
    drop(guard);

    self.not_empty.notify_one();
    Ok(())
  }

  /// Removes and returns the head, blocking while the queue is empty and open.
  ///
  /// Buffered items are still delivered after [`close`](Self::close); once the
  /// queue is closed and drained this returns [`PopError::Closed`].
  pub fn pop(&self) -> Result<T, PopError> {
    let mut guard = self.internal.lock();

    if !guard.closed && guard.buffer.is_empty() {
      telemetry::pop_blocking();
      self
        .not_empty
        .wait_while(&mut guard, |internal| !internal.closed && internal.buffer.is_empty());
    }

    match guard.buffer.pop_front() {
      Some(value) => {
        drop(guard);
        self.not_full.notify_one();
        Ok(value)
      }
      // Only reachable once closed: the wait above ends on an item or on close.
      None => Err(PopError::Closed),
    }
  }

  /// Attempts to append `value` without blocking.
  pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
    let mut guard = self.internal.lock();
    if guard.closed {
      return Err(TryPushError::Closed(value));
    }
    if guard.buffer.len() >= self.capacity {
      return Err(TryPushError::Full(value));
    }
    guard.buffer.push_back(value);
    drop(guard);

    self.not_empty.notify_one();
    Ok(())
  }

  /// Attempts to remove the head without blocking.
  ///
  /// Items buffered before a close are still returned.
  pub fn try_pop(&self) -> Result<T, TryPopError> {
    let mut guard = self.internal.lock();
    match guard.buffer.pop_front() {
      Some(value) => {
        drop(guard);
        self.not_full.notify_one();
        Ok(value)
      }
      None if guard.closed => Err(TryPopError::Closed),
      None => Err(TryPopError::Empty),
    }
  }

  /// Closes the queue and wakes every blocked `push` and `pop`.
  ///
  /// Returns `true` for the call that closed the queue and `false` if it was
  /// already closed. Repeated calls have no further effect.
  pub fn close(&self) -> bool {
    let mut guard = self.internal.lock();
    if guard.closed {
      return false;
    }
    guard.closed = true;
    let pending = guard.buffer.len();
    drop(guard);

    telemetry::queue_closed(self.capacity, pending);
    self.not_full.notify_all();
    self.not_empty.notify_all();
    true
  }

  /// Returns `true` once [`close`](Self::close) has been called.
  pub fn is_closed(&self) -> bool {
    self.internal.lock().closed
  }

  /// Returns the number of items currently buffered.
  pub fn len(&self) -> usize {
    self.internal.lock().buffer.len()
  }

  /// Returns `true` if no items are buffered.
  pub fn is_empty(&self) -> bool {
    self.internal.lock().buffer.is_empty()
  }

  /// Returns `true` if the buffer holds `capacity` items.
  pub fn is_full(&self) -> bool {
    self.internal.lock().buffer.len() == self.capacity
  }

  /// Returns the maximum number of items the queue can hold.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns a blocking iterator that pops until the queue is closed and drained.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { queue: self }
  }

  /// Returns a non-blocking iterator over the items available right now.
  pub fn try_iter(&self) -> TryIter<'_, T> {
    TryIter { queue: self }
  }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
  type Item = T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
