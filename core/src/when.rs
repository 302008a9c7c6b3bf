use std::fmt::{self, Debug, Formatter};

use crate::block::{Block, BlockOnce};
use crate::presence::{all_present, Presence};

/// A deferred result of a `when_not_null` combinator.
///
/// Holds the unwrapped inputs if all of them were present when the combinator was called, together with the block
/// that computes the result from them. Presence is never re-checked: only running the block is deferred. Blocks are
/// `Fn` so the result can be recomputed with [`invoke`](Self::invoke); nothing is memoized.
#[must_use = "a deferred result does nothing unless it is forced, e.g. with `or_else`"]
pub struct Deferred<Args, F> {
  args: Option<Args>,
  block: F,
}

impl<Args, F> Deferred<Args, F> {
  #[inline]
  fn new(args: Option<Args>, block: F) -> Self {
    Self { args, block }
  }

  #[inline]
  pub fn is_armed(&self) -> bool { self.args.is_some() }

  #[inline]
  pub fn into_option<R>(self) -> Option<R> where
    F: BlockOnce<Args, Output=Option<R>>
  {
    let block = self.block;
    self.args.and_then(|args| block.apply_once(args))
  }

  #[inline]
  pub fn or_else<R>(self, fallback: impl FnOnce() -> R) -> R where
    F: BlockOnce<Args, Output=Option<R>>
  {
    self.into_option().unwrap_or_else(fallback)
  }

  #[inline]
  pub fn invoke<R>(&self) -> Option<R> where
    Args: Clone,
    F: Block<Args, Output=Option<R>>,
  {
    self.args.as_ref().and_then(|args| self.block.apply(args.clone()))
  }
}

impl<Args: Debug, F> Debug for Deferred<Args, F> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Deferred")
      .field("args", &self.args)
      .finish_non_exhaustive()
  }
}


#[inline]
pub fn when_not_null<A, R, F>(value: Option<A>, block: F) -> Deferred<(A,), F> where
  F: Fn(A) -> Option<R>
{
  Deferred::new(value.map(|a| (a,)), block)
}

#[inline]
pub fn when_not_null2<A, B, R, F>(a: Option<A>, b: Option<B>, block: F) -> Deferred<(A, B), F> where
  F: Fn(A, B) -> Option<R>
{
  let args = match (a, b) {
    (Some(a), Some(b)) => Some((a, b)),
    _ => None,
  };
  Deferred::new(args, block)
}

#[inline]
pub fn when_not_null3<A, B, C, R, F>(a: Option<A>, b: Option<B>, c: Option<C>, block: F) -> Deferred<(A, B, C), F> where
  F: Fn(A, B, C) -> Option<R>
{
  let args = match (a, b, c) {
    (Some(a), Some(b), Some(c)) => Some((a, b, c)),
    _ => None,
  };
  Deferred::new(args, block)
}

#[inline]
pub fn when_all_not_null<R, F>(values: &[&dyn Presence], block: F) -> Deferred<(), F> where
  F: Fn() -> Option<R>
{
  Deferred::new(all_present(values).then_some(()), block)
}
