//! # shapeguard-core
//!
//! Composable validation of untyped data.
//!
//! Describe the expected shape of a `serde_json::Value` (strings, numbers,
//! booleans, arrays, nested objects) with chained builder calls, then check
//! concrete values against it.
//!
//! ## Key Guarantees
//!
//! 1. **Fail-fast**: the first failing rule or child is reported, nothing else
//! 2. **Contextual**: nested failures carry the array/key context in their text
//! 3. **Read-only validation**: the same tree gives the same answer every time
//!    and can be shared across threads
//! 4. **No coercion**: `"1"` is not a number and `1` is not a boolean
//!
//! ## Example
//!
//! ```rust
//! use shapeguard_core::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("name", Validator::from(Schema::string().min_length(2))),
//!     ("age", Schema::number().optional().into()),
//! ]);
//!
//! assert!(schema.validate(&json!({"name": "Al"})).is_ok());
//!
//! let err = schema.validate(&json!({"name": "A"})).unwrap_err();
//! assert_eq!(
//!     err.message,
//!     "Invalid value for key 'name': String must be at least 2 characters long"
//! );
//! ```
//!
//! ## Absent values
//!
//! `null` is the absence marker. An `optional()` validator accepts it without
//! running any rule. Inside an object a missing key is absent too, and is only
//! allowed when the field's validator is optional.
//!
//! ## Custom messages
//!
//! `with_message` replaces the message of the most recently added rule only.
//! Called straight after construction it replaces the type rule's message.

pub mod error;
pub mod rule;
pub mod schema;
pub mod validator;
pub mod validators;

// Re-export main types at crate root
pub use error::{SchemaError, ValidationError};
pub use rule::{Bound, Check, Predicate, Rule};
pub use schema::Schema;
pub use validator::{Validator, ValidatorKind};
pub use validators::{
    ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator, StringValidator,
};
