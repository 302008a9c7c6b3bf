use crate::presence::{all_present, Presence};

#[inline]
pub fn with_not_null<A>(value: Option<A>, block: impl FnOnce(A)) {
  if let Some(a) = value {
    block(a);
  }
}

#[inline]
pub fn with_not_null2<A, B>(a: Option<A>, b: Option<B>, block: impl FnOnce(A, B)) {
  if let (Some(a), Some(b)) = (a, b) {
    block(a, b);
  }
}

#[inline]
pub fn with_not_null3<A, B, C>(a: Option<A>, b: Option<B>, c: Option<C>, block: impl FnOnce(A, B, C)) {
  if let (Some(a), Some(b), Some(c)) = (a, b, c) {
    block(a, b, c);
  }
}

#[inline]
pub fn with_all_not_null(values: &[&dyn Presence], block: impl FnOnce()) {
  if all_present(values) {
    block();
  }
}
