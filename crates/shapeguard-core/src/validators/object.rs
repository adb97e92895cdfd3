//! Object validator.
//!
//! Field presence is decided by the child validator alone: a field whose
//! validator is `optional()` may be missing, every other declared field must
//! be present. Keys that are not declared fail validation unless
//! `allow_unknown()` was called.
//!
//! Checks run in this order and stop at the first failure:
//! 1. type rule and any extra rules on the object itself
//! 2. unknown keys, in the input's key order
//! 3. declared fields, in declaration order

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::rule::Check;
use crate::validator::{common_builders, Outcome, RuleChain, Shape, Validator};

/// Declared fields of an object schema.
#[derive(Debug, Clone, Default)]
pub(crate) struct ObjectFields {
    fields: Vec<(String, Validator)>,
    allow_unknown: bool,
}

impl ObjectFields {
    /// Declare a field. Redeclaring a name keeps its position and replaces
    /// the validator.
    fn insert(&mut self, name: String, validator: Validator) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = validator,
            None => self.fields.push((name, validator)),
        }
    }

    fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }

    pub(crate) fn validate_entries(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(entries) = value.as_object() else {
            return Ok(());
        };

        if !self.allow_unknown {
            self.reject_unknown_keys(entries)?;
        }

        for (name, validator) in &self.fields {
            match entries.get(name) {
                Some(field_value) => validator.validate(field_value).map_err(|err| {
                    tracing::debug!(key = %name, error = %err, "object field failed validation");
                    err.wrap(format_args!("Invalid value for key '{}'", name))
                })?,
                None if validator.is_optional() => {}
                None => {
                    return Err(ValidationError::new(format!(
                        "Missing key '{}' in object",
                        name
                    )))
                }
            }
        }

        Ok(())
    }

    fn reject_unknown_keys(&self, entries: &Map<String, Value>) -> Result<(), ValidationError> {
        match entries.keys().find(|key| !self.declares(key)) {
            Some(key) => Err(ValidationError::new(format!(
                "Unexpected key '{}' in object",
                key
            ))),
            None => Ok(()),
        }
    }
}

/// Validates a key-value mapping against declared fields.
///
/// ```
/// use shapeguard_core::{Schema, Validator};
/// use serde_json::json;
///
/// let person = Schema::object([
///     ("name", Validator::from(Schema::string().min_length(2))),
///     ("age", Schema::number().optional().into()),
/// ]);
///
/// assert!(person.validate(&json!({"name": "Al"})).is_ok());
/// assert_eq!(
///     person.validate(&json!({"age": 5})).unwrap_err().message,
///     "Missing key 'name' in object"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    chain: RuleChain,
    fields: ObjectFields,
}

impl ObjectValidator {
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Validator>,
    {
        fields.into_iter().fold(
            Self {
                chain: RuleChain::typed(Check::IsObject, "Value must be an object"),
                fields: ObjectFields::default(),
            },
            |object, (name, validator)| object.field(name, validator),
        )
    }

    /// Declare one more field, or replace the validator of an existing one.
    pub fn field(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.fields.insert(name.into(), validator.into());
        self
    }

    /// Accept keys that are not declared in the schema.
    pub fn allow_unknown(mut self) -> Self {
        self.fields.allow_unknown = true;
        self
    }

    pub fn allows_unknown(&self) -> bool {
        self.fields.allow_unknown
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.fields
            .fields
            .iter()
            .map(|(name, validator)| (name.as_str(), validator))
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match self.chain.evaluate(value)? {
            Outcome::Skipped => Ok(()),
            Outcome::Passed => self.fields.validate_entries(value),
        }
    }
}

common_builders!(ObjectValidator);

impl From<ObjectValidator> for Validator {
    fn from(validator: ObjectValidator) -> Self {
        Validator::from_parts(validator.chain, Shape::Object(validator.fields))
    }
}
