//! Typed validator builders.
//!
//! Scalars (string, number, boolean) carry only a rule chain. Composites
//! (array, object) additionally own child validators and recurse into them
//! once their own rules hold.

pub mod array;
pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
