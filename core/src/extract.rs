use crate::when::{when_not_null, Deferred};
use crate::with::with_not_null;

pub trait OptionExt {
  type Value;

  fn with_not_null(self, block: impl FnOnce(Self::Value));

  fn when_not_null<R, F>(self, block: F) -> Deferred<(Self::Value,), F> where
    F: Fn(Self::Value) -> Option<R>;

  fn get_or_throw<E>(self, error: E) -> Result<Self::Value, E>;

  fn get_or_default(self, default: Self::Value) -> Self::Value;

  fn get_or_else(self, block: impl FnOnce() -> Self::Value) -> Self::Value;
}

impl<T> OptionExt for Option<T> {
  type Value = T;

  #[inline]
  fn with_not_null(self, block: impl FnOnce(T)) {
    with_not_null(self, block)
  }

  #[inline]
  fn when_not_null<R, F>(self, block: F) -> Deferred<(T,), F> where
    F: Fn(T) -> Option<R>
  {
    when_not_null(self, block)
  }

  #[inline]
  fn get_or_throw<E>(self, error: E) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error),
    }
  }

  #[inline]
  fn get_or_default(self, default: T) -> T {
    self.unwrap_or(default)
  }

  #[inline]
  fn get_or_else(self, block: impl FnOnce() -> T) -> T {
    self.unwrap_or_else(block)
  }
}
