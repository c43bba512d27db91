//! Draining iterators over a `BoundedQueue`.

use super::BoundedQueue;

use std::iter::FusedIterator;

/// A blocking iterator returned by [`BoundedQueue::iter`].
///
/// Each call to `next` blocks like [`BoundedQueue::pop`]. Iteration ends once
/// the queue is closed and empty, which makes a consumer loop as short as
/// `for item in &queue { .. }`.
#[derive(Debug)]
pub struct Iter<'a, T> {
  pub(super) queue: &'a BoundedQueue<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.queue.pop().ok()
  }
}

// A closed queue rejects every push, so once `pop` fails it fails forever.
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// A non-blocking iterator returned by [`BoundedQueue::try_iter`].
///
/// Yields items until the queue is empty (or closed and drained). More items
/// may show up later if the queue is still open.
#[derive(Debug)]
pub struct TryIter<'a, T> {
  pub(super) queue: &'a BoundedQueue<T>,
}

impl<'a, T> Iterator for TryIter<'a, T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.queue.try_pop().ok()
  }
}
