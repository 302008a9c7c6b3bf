//! Converting failing code paths into optional results.
//!
//! A block fails by returning `Err` or by panicking (for example, on integer division by zero). Both are caught and
//! turned into `None`. Aborts cannot be caught, so builds with `panic = "abort"` only get the `Err` half.

use std::any::Any;
use std::convert::Infallible;
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TryError<E> {
  #[error("Block returned an error: {0}")]
  Failed(E),
  #[error("Block panicked: {0}")]
  Panicked(String),
}

impl<E> TryError<E> {
  #[inline]
  pub fn is_panic(&self) -> bool { matches!(self, Self::Panicked(_)) }

  fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
      (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
      message.clone()
    } else {
      "panic payload is not a string".to_string()
    };
    Self::Panicked(message)
  }

  fn kind(&self) -> &'static str {
    match self {
      Self::Failed(_) => "error",
      Self::Panicked(_) => "panic",
    }
  }
}


#[inline]
pub fn try_or_null<T, E>(block: impl FnOnce() -> Result<T, E>) -> Option<T> {
  try_or_null_with(|_| {}, block)
}

/// Runs `block`, returning its value, or `None` if it returned an error or panicked. On failure, `on_error` is called
/// once with the caught failure before returning `None`.
pub fn try_or_null_with<T, E>(
  on_error: impl FnOnce(TryError<E>),
  block: impl FnOnce() -> Result<T, E>,
) -> Option<T> {
  let error = match catch_unwind(AssertUnwindSafe(block)) {
    Ok(Ok(value)) => return Some(value),
    Ok(Err(e)) => TryError::Failed(e),
    Err(payload) => TryError::from_panic(payload),
  };
  match &error {
    TryError::Panicked(message) => tracing::debug!(kind = error.kind(), panic_message = %message, "suppressed failure of block"),
    TryError::Failed(_) => tracing::debug!(kind = error.kind(), "suppressed failure of block"),
  }
  on_error(error);
  None
}

#[inline]
pub fn catch_or_null<T>(block: impl FnOnce() -> T) -> Option<T> {
  catch_or_null_with(|_| {}, block)
}

#[inline]
pub fn catch_or_null_with<T>(on_error: impl FnOnce(TryError<Infallible>), block: impl FnOnce() -> T) -> Option<T> {
  try_or_null_with(on_error, || Ok::<_, Infallible>(block()))
}

pub fn log_error<E: Display>(error: TryError<E>) {
  tracing::warn!(kind = error.kind(), "{}", error);
}
