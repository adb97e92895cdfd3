//! The validator base contract.
//!
//! Every validator is an ordered [`RuleChain`] (type rule first, constraints
//! after) plus a [`Shape`] saying whether the value has children to recurse
//! into. Typed builders in [`crate::validators`] own the same pieces and
//! convert into the erased [`Validator`] when they are nested in a schema.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::rule::{Check, Rule};
use crate::validators::{
    array, object::ObjectFields, ArrayValidator, BooleanValidator, NumberValidator,
    ObjectValidator, StringValidator,
};

/// Result of running a rule chain against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Value was absent and the validator is optional; nothing ran.
    Skipped,
    /// Every rule held.
    Passed,
}

/// Ordered rules plus the optionality flag.
#[derive(Debug, Clone)]
pub(crate) struct RuleChain {
    rules: Vec<Rule>,
    optional: bool,
}

impl RuleChain {
    /// Start a chain with its type rule at index 0.
    pub(crate) fn typed(check: Check, message: &str) -> Self {
        Self {
            rules: vec![Rule::new(check, message)],
            optional: false,
        }
    }

    pub(crate) fn push(&mut self, check: Check, message: impl Into<String>) {
        self.rules.push(Rule::new(check, message));
    }

    pub(crate) fn set_optional(&mut self) {
        self.optional = true;
    }

    /// Replace the message of the most recently added rule.
    pub(crate) fn override_last_message(&mut self, message: impl Into<String>) {
        if let Some(rule) = self.rules.last_mut() {
            rule.set_message(message.into());
        }
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run the rules in order, stopping at the first failure.
    pub(crate) fn evaluate(&self, value: &Value) -> Result<Outcome, ValidationError> {
        if self.optional && value.is_null() {
            return Ok(Outcome::Skipped);
        }

        for rule in &self.rules {
            if !rule.holds(value) {
                tracing::trace!(
                    rule = rule.check().name(),
                    message = rule.message(),
                    "rule failed"
                );
                return Err(ValidationError::new(rule.message()));
            }
        }

        Ok(Outcome::Passed)
    }
}

/// The variant a validator belongs to, and for composites, its children.
#[derive(Debug, Clone)]
pub(crate) enum Shape {
    String,
    Number,
    Boolean,
    Array(Box<Validator>),
    Object(ObjectFields),
}

/// Which kind of value a validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// A validator of any kind.
///
/// This is what composite validators store for their children. Build one with
/// [`crate::Schema`] and the typed builders, then convert with `.into()` or
/// [`Validator::from`].
///
/// Validation only reads the tree, so a finished validator can be shared
/// across threads (e.g. behind an `Arc`) and used concurrently. Cloning a
/// validator copies the whole tree; later builder calls on one copy never
/// affect the other.
#[derive(Debug, Clone)]
pub struct Validator {
    pub(crate) chain: RuleChain,
    pub(crate) shape: Shape,
}

impl Validator {
    pub(crate) fn from_parts(chain: RuleChain, shape: Shape) -> Self {
        Self { chain, shape }
    }

    /// Validate a value, returning the first failure.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.chain.evaluate(value)? == Outcome::Skipped {
            return Ok(());
        }

        match &self.shape {
            Shape::String | Shape::Number | Shape::Boolean => Ok(()),
            Shape::Array(items) => array::validate_items(items, value),
            Shape::Object(fields) => fields.validate_entries(value),
        }
    }

    pub fn kind(&self) -> ValidatorKind {
        match self.shape {
            Shape::String => ValidatorKind::String,
            Shape::Number => ValidatorKind::Number,
            Shape::Boolean => ValidatorKind::Boolean,
            Shape::Array(_) => ValidatorKind::Array,
            Shape::Object(_) => ValidatorKind::Object,
        }
    }
}

/// Builder methods shared by every validator type.
///
/// Expects the type to have a `chain: RuleChain` field and an inherent
/// `validate` method.
macro_rules! common_builders {
    ($ty:ty) => {
        impl $ty {
            /// Accept `null` without evaluating any rule.
            pub fn optional(mut self) -> Self {
                self.chain.set_optional();
                self
            }

            /// Replace the failure message of the most recently added rule.
            ///
            /// Called right after construction this customizes the type
            /// rule's message.
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.chain.override_last_message(message);
                self
            }

            /// Append a caller-supplied predicate with its failure message.
            pub fn refine<F>(mut self, predicate: F, message: impl Into<String>) -> Self
            where
                F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
            {
                self.chain.push(
                    $crate::rule::Check::Custom(std::sync::Arc::new(predicate)),
                    message,
                );
                self
            }

            pub fn is_optional(&self) -> bool {
                self.chain.is_optional()
            }

            /// Rules in evaluation order; the type rule is always first.
            pub fn rules(&self) -> &[$crate::rule::Rule] {
                self.chain.rules()
            }

            pub fn is_valid(&self, value: &serde_json::Value) -> bool {
                self.validate(value).is_ok()
            }
        }
    };
}

pub(crate) use common_builders;

common_builders!(Validator);

// Every validator, erased or typed, can be shared across threads.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Validator>();
    assert_send_sync::<Arc<Validator>>();
    assert_send_sync::<StringValidator>();
    assert_send_sync::<NumberValidator>();
    assert_send_sync::<BooleanValidator>();
    assert_send_sync::<ArrayValidator>();
    assert_send_sync::<ObjectValidator>();
};
