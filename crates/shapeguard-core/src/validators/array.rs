//! Array validator.

use serde_json::Value;

use crate::error::ValidationError;
use crate::rule::Check;
use crate::validator::{common_builders, Outcome, RuleChain, Shape, Validator};

/// Validates a sequence whose every element satisfies one item validator.
///
/// The same item validator is applied to all elements. Only the first
/// offending element is reported:
///
/// ```
/// use shapeguard_core::Schema;
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string().min_length(2));
/// assert!(tags.validate(&json!([])).is_ok());
/// assert_eq!(
///     tags.validate(&json!(["rust", "a", 7])).unwrap_err().message,
///     "Invalid item in array: String must be at least 2 characters long"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    chain: RuleChain,
    items: Box<Validator>,
}

impl ArrayValidator {
    pub fn new(items: impl Into<Validator>) -> Self {
        Self {
            chain: RuleChain::typed(Check::IsArray, "Value must be an array"),
            items: Box::new(items.into()),
        }
    }

    pub fn min_items(mut self, count: usize) -> Self {
        self.chain.push(
            Check::MinItems(count),
            format!("Array must contain at least {} items", count),
        );
        self
    }

    pub fn max_items(mut self, count: usize) -> Self {
        self.chain.push(
            Check::MaxItems(count),
            format!("Array must contain at most {} items", count),
        );
        self
    }

    /// The validator applied to each element.
    pub fn items(&self) -> &Validator {
        &self.items
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match self.chain.evaluate(value)? {
            Outcome::Skipped => Ok(()),
            Outcome::Passed => validate_items(&self.items, value),
        }
    }
}

common_builders!(ArrayValidator);

impl From<ArrayValidator> for Validator {
    fn from(validator: ArrayValidator) -> Self {
        Validator::from_parts(validator.chain, Shape::Array(validator.items))
    }
}

/// Validate every element in order, wrapping the first failure.
pub(crate) fn validate_items(items: &Validator, value: &Value) -> Result<(), ValidationError> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };

    for (index, element) in elements.iter().enumerate() {
        if let Err(err) = items.validate(element) {
            tracing::debug!(index, error = %err, "array item failed validation");
            return Err(err.wrap("Invalid item in array"));
        }
    }

    Ok(())
}
