//! Iterator and collection utilities.
//!
//! This module rounds out the standard iterator vocabulary with a few
//! adaptors and boundary helpers used alongside [`Maybe`](crate::control::Maybe):
//!
//! - [`unfold`] / [`repeat_forever`]: lazy infinite generators
//! - [`SequenceExt`]: extension adaptors on any iterator
//!   ([`start_with`](SequenceExt::start_with),
//!   [`pairwise`](SequenceExt::pairwise), [`zip3`](SequenceExt::zip3),
//!   [`zip4`](SequenceExt::zip4), [`tap_each`](SequenceExt::tap_each),
//!   [`for_each_drain`](SequenceExt::for_each_drain),
//!   [`first_or_none`](SequenceExt::first_or_none),
//!   [`join_strings`](SequenceExt::join_strings))
//! - [`MapLookupExt`]: map access returning `Maybe<&V>`
//! - [`TupleAppend`]: growing tuples one element at a time
//! - [`none_if_empty`]: the empty-string-as-absence boundary adapter
//!
//! # Examples
//!
//! ```
//! use fallibars::control::Maybe;
//! use fallibars::sequence::{SequenceExt, unfold};
//!
//! let first_large = unfold(1_u32, |value| value * 3)
//!     .filter(|value| *value > 100)
//!     .first_or_none();
//! assert_eq!(first_large, Maybe::some(243));
//! ```

mod ext;
mod generate;
mod lookup;
mod text;
mod tuple;

pub use ext::{Pairwise, SequenceExt, StartWith, TapEach, Zip3, Zip4};
pub use generate::{RepeatForever, Unfold, repeat_forever, unfold};
pub use lookup::MapLookupExt;
pub use text::none_if_empty;
pub use tuple::TupleAppend;
