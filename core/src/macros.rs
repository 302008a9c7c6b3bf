/// Runs a block if none of the given optional values is absent. The values may have different types.
///
/// `with_all_not_null!(a, b, c => || ...)` is shorthand for
/// [`with_all_not_null(&[&a, &b, &c], || ...)`](crate::with_all_not_null).
#[macro_export]
macro_rules! with_all_not_null {
  ($($value:expr),* $(,)? => $block:expr) => {
    $crate::with_all_not_null(&[$(&$value as &dyn $crate::Presence),*], $block)
  };
}

#[macro_export]
macro_rules! when_all_not_null {
  ($($value:expr),* $(,)? => $block:expr) => {
    $crate::when_all_not_null(&[$(&$value as &dyn $crate::Presence),*], $block)
  };
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  #[test]
  fn with_all_macro() {
    let name = Some("name");
    let age = Some(30u8);
    let email: Option<String> = None;

    let calls = Cell::new(0);
    with_all_not_null!(name, age => || calls.set(calls.get() + 1));
    with_all_not_null!(name, age, email => || calls.set(calls.get() + 1));
    with_all_not_null!(=> || calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn when_all_macro() {
    let width = Some(3);
    let height = Some(4);
    let depth: Option<i32> = None;

    let area = when_all_not_null!(width, height, => || Some(width? * height?)).or_else(|| 0);
    assert_eq!(area, 12);
    let volume = when_all_not_null!(width, height, depth => || Some(width? * height? * depth?)).or_else(|| 0);
    assert_eq!(volume, 0);
    assert_eq!(when_all_not_null!(=> || Some("empty")).or_else(|| "fallback"), "empty");
  }
}
