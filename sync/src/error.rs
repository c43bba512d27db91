// src/error.rs

//! Errors returned by the queue. The gate has none: its timeouts are `bool`s.

use core::fmt;

use thiserror::Error;

// Adds `into_inner` to error enums whose every variant carries the rejected value.
macro_rules! impl_into_inner {
  (
    $enum_name:ident < $generic_param:ident >,
    $($variant:ident),+
    $(,)?
  ) => {
    impl<$generic_param> $enum_name<$generic_param> {
      /// Consumes the error, returning the value that could not be pushed.
      #[inline]
      pub fn into_inner(self) -> $generic_param {
        match self {
          $( $enum_name::$variant(v) => v, )+
        }
      }
    }
  };
}

/// Error returned when constructing a queue with an invalid capacity.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CapacityError {
  /// A bounded queue must be able to hold at least one element.
  #[error("the maximum queue size cannot be zero")]
  Zero,
}

/// Error returned by a blocking `push` on a closed queue.
///
/// The value that was being pushed is handed back and was not enqueued.
#[derive(Error, PartialEq, Eq, Clone)]
pub enum PushError<T> {
  /// The queue was closed before (or while) the push waited for space.
  #[error("queue closed")]
  Closed(T),
}

impl<T> fmt::Debug for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PushError::Closed(_) => write!(f, "PushError::Closed(..)"),
    }
  }
}

impl_into_inner!(PushError<T>, Closed);

/// Error returned by a blocking `pop` once the queue is closed and drained.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PopError {
  /// The queue is closed and holds no more items.
  #[error("queue closed and empty")]
  Closed,
}

/// Error returned by `try_push` when the value could not be enqueued immediately.
#[derive(Error, PartialEq, Eq, Clone)]
pub enum TryPushError<T> {
  /// The queue is at capacity. The value is returned.
  #[error("queue full")]
  Full(T),
  /// The queue is closed. The value is returned.
  #[error("queue closed")]
  Closed(T),
}

impl<T> fmt::Debug for TryPushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryPushError::Full(_) => write!(f, "TryPushError::Full(..)"),
      TryPushError::Closed(_) => write!(f, "TryPushError::Closed(..)"),
    }
  }
}

impl_into_inner!(TryPushError<T>, Full, Closed);

impl<T> From<PushError<T>> for TryPushError<T> {
  fn from(err: PushError<T>) -> Self {
    match err {
      PushError::Closed(v) => TryPushError::Closed(v),
    }
  }
}

/// Error returned by `try_pop` when no item could be taken immediately.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TryPopError {
  /// The queue is open but currently empty.
  #[error("queue empty")]
  Empty,
  /// The queue is closed and holds no more items.
  #[error("queue closed and empty")]
  Closed,
}

impl From<PopError> for TryPopError {
  fn from(err: PopError) -> Self {
    match err {
      PopError::Closed => TryPopError::Closed,
    }
  }
}
