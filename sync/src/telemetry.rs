// src/telemetry.rs

//! Structured log events emitted by the primitives.
//!
//! With the `tracing` feature these forward to `tracing` events under the
//! `fibre_sync` target. Without it every hook is an empty inline function.

#[cfg(feature = "tracing")]
mod enabled {
  const TARGET: &str = "fibre_sync";

  #[inline]
  pub(crate) fn queue_created_fn(capacity: usize) {
    tracing::debug!(target: TARGET, capacity, "bounded queue created");
  }

  #[inline]
  pub(crate) fn queue_closed_fn(capacity: usize, pending: usize) {
    tracing::debug!(target: TARGET, capacity, pending, "bounded queue closed");
  }

  #[inline]
  pub(crate) fn push_blocking_fn(capacity: usize) {
    tracing::trace!(target: TARGET, capacity, "push waiting for space");
  }

  #[inline]
  pub(crate) fn pop_blocking_fn() {
    tracing::trace!(target: TARGET, "pop waiting for an item");
  }

  #[inline]
  pub(crate) fn gate_blocking_fn() {
    tracing::trace!(target: TARGET, "gate waiter blocking");
  }

  #[inline]
  pub(crate) fn gate_timed_out_fn() {
    tracing::trace!(target: TARGET, "gate wait timed out");
  }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
  #[inline(always)]
  pub(crate) fn queue_created_fn(_capacity: usize) {}
  #[inline(always)]
  pub(crate) fn queue_closed_fn(_capacity: usize, _pending: usize) {}
  #[inline(always)]
  pub(crate) fn push_blocking_fn(_capacity: usize) {}
  #[inline(always)]
  pub(crate) fn pop_blocking_fn() {}
  #[inline(always)]
  pub(crate) fn gate_blocking_fn() {}
  #[inline(always)]
  pub(crate) fn gate_timed_out_fn() {}
}

// Re-export the correct set of functions based on the feature flag
#[cfg(feature = "tracing")]
pub(crate) use enabled::{
  gate_blocking_fn as gate_blocking, gate_timed_out_fn as gate_timed_out,
  pop_blocking_fn as pop_blocking, push_blocking_fn as push_blocking,
  queue_closed_fn as queue_closed, queue_created_fn as queue_created,
};

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{
  gate_blocking_fn as gate_blocking, gate_timed_out_fn as gate_timed_out,
  pop_blocking_fn as pop_blocking, push_blocking_fn as push_blocking,
  queue_closed_fn as queue_closed, queue_created_fn as queue_created,
};
