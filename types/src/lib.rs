//! Optional and fallible values as first-class, inspectable data.
//!
//! This crate contains two closed container families and nothing else:
//!
//! - **[`Optional`]**: `Present(value)` or `Absent`
//! - **[`Outcome`]**: `Success(value)` or `Failure(error)`
//!
//! Every combinator consumes its receiver and returns a new value (or the
//! receiver unchanged); nothing is mutated in place. Accessors that only make
//! sense on one variant return `Err(`[`Fault`]`)` on the other, tagged with a
//! [`FaultKind`].
//!
//! ```
//! use rustlike_types::{FaultKind, Optional, Outcome};
//!
//! let doubled = Optional::present(5)
//!     .and_then(|x| if x > 0 { Optional::present(x * 2) } else { Optional::ABSENT });
//! assert_eq!(doubled.unwrap().unwrap(), 10);
//!
//! let loud = Optional::<i32>::ABSENT.map(|x| x + 1).unwrap_err();
//! assert_eq!(loud.kind(), FaultKind::AbsentMap);
//!
//! let shouted = Outcome::<_, String>::success("My Ok Val").map(str::to_uppercase);
//! assert_eq!(shouted.unwrap().unwrap(), "MY OK VAL");
//! ```
//!
//! `map` on `Absent` faulting, rather than passing absence through, is
//! deliberate: a transformation chain over a missing value fails loudly.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // every fallible accessor returns Fault, documented on FaultKind
#![allow(clippy::should_implement_trait)] // `as_ref` yields a container of references, not `&U`

mod fault;
mod optional;
mod outcome;

pub use fault::{ErrorLike, Fault, FaultKind};
pub use optional::Optional;
pub use outcome::Outcome;
