//! Combinators for working with optional values.
//!
//! - Conditional execution: [`with_not_null`] and friends run a block only if all inputs are present.
//! - Conditional production: [`when_not_null`] and friends defer a block that produces an optional result, to be
//!   forced with a fallback through [`Deferred::or_else`].
//! - Extraction: [`OptionExt`] unwraps an optional with an error, a default, or a computed fallback.
//! - Failure conversion: [`try_or_null`] and [`catch_or_null`] turn errors and panics into `None`.
//!
//! ```
//! use optcomb::{when_not_null2, OptionExt};
//!
//! let greeting = when_not_null2(Some("Hello"), Some("world"), |a, b| Some(format!("{a}, {b}!")))
//!   .or_else(|| "Hi!".to_string());
//! assert_eq!(greeting, "Hello, world!");
//!
//! let port = None.get_or_default(8080);
//! assert_eq!(port, 8080);
//! ```
//!
//! Variadic forms accept optionals of different types:
//!
//! ```
//! let name = Some("ferris");
//! let age: Option<u32> = None;
//! let description = optcomb::when_all_not_null!(name, age => || Some(format!("{} ({})", name?, age?)))
//!   .or_else(|| "unknown".to_string());
//! assert_eq!(description, "unknown");
//! ```

pub mod presence;
pub mod block;
pub mod with;
pub mod when;
pub mod extract;
pub mod try_or_null;
mod macros;

pub use block::{Block, BlockOnce};
pub use extract::OptionExt;
pub use presence::Presence;
pub use try_or_null::{catch_or_null, catch_or_null_with, log_error, try_or_null, try_or_null_with, TryError};
pub use when::{when_all_not_null, when_not_null, when_not_null2, when_not_null3, Deferred};
pub use with::{with_all_not_null, with_not_null, with_not_null2, with_not_null3};
