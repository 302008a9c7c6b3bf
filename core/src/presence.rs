/// Object-safe view of an optional value that only answers whether a value is present.
///
/// Used by the variadic combinators, which accept optionals of unrelated types as a slice of `&dyn Presence`.
pub trait Presence {
  fn is_present(&self) -> bool;

  #[inline]
  fn is_absent(&self) -> bool { !self.is_present() }
}

impl<T> Presence for Option<T> {
  #[inline]
  fn is_present(&self) -> bool { self.is_some() }
}

#[inline]
pub fn all_present(values: &[&dyn Presence]) -> bool {
  values.iter().all(|v| v.is_present())
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn option_presence() {
    assert!(Some(1).is_present());
    assert!(None::<u8>.is_absent());
  }

  #[test]
  fn all_present_over_mixed_types() {
    let a = Some(1);
    let b = Some("b".to_string());
    let c: Option<f32> = None;
    assert!(all_present(&[&a, &b]));
    assert!(!all_present(&[&a, &b, &c]));
  }

  #[test]
  fn empty_is_vacuously_present() {
    assert!(all_present(&[]));
  }
}
