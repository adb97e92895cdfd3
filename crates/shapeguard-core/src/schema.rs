//! Schema factory.

use crate::validator::Validator;
use crate::validators::{
    ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator, StringValidator,
};

/// Entry point for building validators.
///
/// Every constructor returns a fresh validator, so chains started from
/// separate calls never share state.
///
/// ```
/// use shapeguard_core::{Schema, Validator};
/// use serde_json::json;
///
/// let user = Schema::object([
///     ("name", Validator::from(Schema::string().min_length(2))),
///     ("email", Schema::string().try_pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?.into()),
///     ("age", Schema::number().min_value(0).optional().into()),
///     ("is_active", Schema::boolean().into()),
///     ("tags", Schema::array(Schema::string()).optional().into()),
/// ]);
///
/// let err = user
///     .validate(&json!({"name": "Bob", "email": "invalid-email", "is_active": true}))
///     .unwrap_err();
/// assert!(err.message.starts_with("Invalid value for key 'email'"));
/// # Ok::<(), shapeguard_core::SchemaError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Schema;

impl Schema {
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// Array whose every element must satisfy `items`.
    pub fn array(items: impl Into<Validator>) -> ArrayValidator {
        ArrayValidator::new(items)
    }

    /// Object with the given fields, in declaration order.
    pub fn object<I, K, V>(fields: I) -> ObjectValidator
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Validator>,
    {
        ObjectValidator::new(fields)
    }
}
