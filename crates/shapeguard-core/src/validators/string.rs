//! String validator.

use regex::Regex;
use serde_json::Value;

use crate::error::{SchemaError, ValidationError};
use crate::rule::Check;
use crate::validator::{common_builders, RuleChain, Shape, Validator};

/// Validates textual values with optional length and pattern constraints.
///
/// Lengths count characters (Unicode scalar values), not bytes.
///
/// ```
/// use shapeguard_core::Schema;
/// use serde_json::json;
///
/// let name = Schema::string().min_length(2).max_length(50);
/// assert!(name.validate(&json!("John Doe")).is_ok());
/// assert_eq!(
///     name.validate(&json!("J")).unwrap_err().message,
///     "String must be at least 2 characters long"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StringValidator {
    chain: RuleChain,
}

impl StringValidator {
    pub fn new() -> Self {
        Self {
            chain: RuleChain::typed(Check::IsString, "Value must be a string"),
        }
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.chain.push(
            Check::MinLength(length),
            format!("String must be at least {} characters long", length),
        );
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.chain.push(
            Check::MaxLength(length),
            format!("String must be at most {} characters long", length),
        );
        self
    }

    /// Require the string to match `regex` starting at its first character.
    ///
    /// A prefix match is enough; use `^...$` to match the whole string.
    pub fn pattern(mut self, regex: Regex) -> Self {
        let message = format!("String does not match pattern {}", regex.as_str());
        self.chain.push(Check::Pattern(regex), message);
        self
    }

    /// Compile `pattern` and add it as with [`StringValidator::pattern`].
    pub fn try_pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.pattern(regex))
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.chain.evaluate(value).map(|_| ())
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

common_builders!(StringValidator);

impl From<StringValidator> for Validator {
    fn from(validator: StringValidator) -> Self {
        Validator::from_parts(validator.chain, Shape::String)
    }
}
