// src/gate/mod.rs

//! A reusable, coalescing notification gate.
//!
//! `CyclicGate` behaves like a single-use event that re-arms itself: a
//! [`notify`](CyclicGate::notify) sets the gate, and the next successful wait
//! consumes that notification and resets the gate. Notifies issued while the
//! gate is already set are coalesced rather than counted, so one notify always
//! releases at most one wait.
//!
//! ```
//! use fibre_sync::CyclicGate;
//! use std::time::Duration;
//!
//! let gate = CyclicGate::new(false);
//! gate.notify();
//! gate.notify(); // coalesced with the first
//! assert!(gate.wait_for(Duration::from_millis(10)));
//! assert!(!gate.wait_for(Duration::from_millis(10)));
//! ```

use crate::telemetry;

use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A boolean latch that one `notify` opens for exactly one waiter.
///
/// The gate has no timeout error: bounded waits report a missed deadline by
/// returning `false` and leave the gate untouched.
pub struct CyclicGate {
  notified: Mutex<bool>,
  cv: Condvar,
}

impl fmt::Debug for CyclicGate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CyclicGate")
      .field("notified", &*self.notified.lock())
      .finish()
  }
}

impl Default for CyclicGate {
  /// Creates an unset gate.
  fn default() -> Self {
    Self::new(false)
  }
}

impl CyclicGate {
  /// Creates a gate, optionally already set.
  pub const fn new(initial: bool) -> Self {
    Self {
      notified: parking_lot::const_mutex(initial),
      cv: Condvar::new(),
    }
  }

  /// Sets the gate and wakes at most one blocked waiter.
  ///
  /// With no thread waiting, the gate stays set until the next wait.
  pub fn notify(&self) {
    *self.notified.lock() = true;
    self.cv.notify_one();
  }

  /// Blocks until the gate is set, then resets it.
  pub fn wait(&self) {
    let mut notified = self.notified.lock();
    if !*notified {
      telemetry::gate_blocking();
      self.cv.wait_while(&mut notified, |set| !*set);
    }
    *notified = false;
  }

  /// Blocks for at most `timeout` waiting for the gate to be set.
  ///
  /// Returns `true` and resets the gate if it was set in time, `false` otherwise.
  pub fn wait_for(&self, timeout: Duration) -> bool {
    match Instant::now().checked_add(timeout) {
      Some(deadline) => self.wait_until(deadline),
      // Too far out to represent; no deadline at all.
      None => {
        self.wait();
        true
      }
    }
  }

  /// Blocks until `deadline` waiting for the gate to be set.
  ///
  /// Returns `true` and resets the gate if it was set before the deadline,
  /// `false` otherwise. A deadline in the past still consumes a set gate.
  pub fn wait_until(&self, deadline: Instant) -> bool {
    let mut notified = self.notified.lock();
    if !*notified {
      telemetry::gate_blocking();
      self.cv.wait_while_until(&mut notified, |set| !*set, deadline);
    }

    // Decide on the flag, not on the timeout result: a notify racing the
    // deadline is still delivered.
    if *notified {
      *notified = false;
      true
    } else {
      telemetry::gate_timed_out();
      false
    }
  }

  /// Consumes the notification if the gate is set, without blocking.
  pub fn try_wait(&self) -> bool {
    let mut notified = self.notified.lock();
    ::core::mem::replace(&mut *notified, false)
  }

  /// Returns whether the gate is currently set, without consuming it.
  pub fn is_notified(&self) -> bool {
    *self.notified.lock()
  }
}

#[cfg(test)]
mod tests;
