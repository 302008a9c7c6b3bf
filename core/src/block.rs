/// A block that can be applied once to a tuple of arguments `Args`, spreading the tuple over its parameters.
///
/// Implemented for every `FnOnce` closure of arity 0 to 3, where `Args` is `()`, `(A,)`, `(A, B)`, or
/// `(A, B, C)`.
pub trait BlockOnce<Args> {
  type Output;

  fn apply_once(self, args: Args) -> Self::Output;
}

pub trait Block<Args> {
  type Output;

  fn apply(&self, args: Args) -> Self::Output;
}

macro_rules! impl_block {
  ($($arg:ident),*) => {
    impl<Func, Out, $($arg),*> BlockOnce<($($arg,)*)> for Func where
      Func: FnOnce($($arg),*) -> Out
    {
      type Output = Out;

      #[inline]
      #[allow(non_snake_case)]
      fn apply_once(self, ($($arg,)*): ($($arg,)*)) -> Out {
        self($($arg),*)
      }
    }

    impl<Func, Out, $($arg),*> Block<($($arg,)*)> for Func where
      Func: Fn($($arg),*) -> Out
    {
      type Output = Out;

      #[inline]
      #[allow(non_snake_case)]
      fn apply(&self, ($($arg,)*): ($($arg,)*)) -> Out {
        self($($arg),*)
      }
    }
  };
}

impl_block!();
impl_block!(A);
impl_block!(A, B);
impl_block!(A, B, C);
