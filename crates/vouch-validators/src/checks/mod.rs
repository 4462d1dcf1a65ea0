//! Capability traits adding checks to [`Validator`](crate::Validator).
//!
//! Each trait covers one family of values. Blanket implementations attach
//! the checks to every validator whose value type qualifies, so importing a
//! trait (or the crate prelude) is all a caller needs.

mod boolean;
mod collection;
mod comparable;
mod map;
mod numeric;
mod object;
mod option;
mod string;

pub use boolean::BoolCheck;
pub use collection::{CollectionCheck, Elements};
pub use comparable::ComparableCheck;
pub use map::{MapCheck, MapLike};
pub use numeric::{FloatCheck, IntegerCheck};
pub use object::ObjectCheck;
pub use option::OptionCheck;
pub use string::StringCheck;
