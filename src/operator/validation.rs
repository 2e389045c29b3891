//! Construction-time type validation.
//!
//! Validators never evaluate anything and never panic: they return a
//! [`TypeValidationError`] that a UI can localize and show next to the wiring.
use serde::Serialize;
use thiserror::Error;

use crate::{operator::Operator, runtime::value_type::ValueType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeValidationError {
    #[error("{operator} expects {expected} inputs, got {got}")]
    WrongInputLength {
        operator: String,
        got: usize,
        expected: usize,
    },
    #[error("{operator} has no type for input {index}")]
    NullType { operator: String, index: usize },
    #[error("{operator} got {got} at input {index}, expected {expected}")]
    WrongType {
        operator: String,
        got: &'static str,
        index: usize,
        expected: &'static str,
    },
}

impl TypeValidationError {
    pub fn localization_key(&self) -> &'static str {
        match self {
            TypeValidationError::WrongInputLength { .. } => "operator.error.wrongInputLength",
            TypeValidationError::NullType { .. } => "operator.error.nullType",
            TypeValidationError::WrongType { .. } => "operator.error.wrongType",
        }
    }

    /// Positional arguments for the localized message.
    pub fn args(&self) -> Vec<String> {
        match self {
            TypeValidationError::WrongInputLength {
                operator,
                got,
                expected,
            } => vec![operator.clone(), got.to_string(), expected.to_string()],
            TypeValidationError::NullType { operator, index } => {
                vec![operator.clone(), index.to_string()]
            }
            TypeValidationError::WrongType {
                operator,
                got,
                index,
                expected,
            } => vec![
                operator.clone(),
                format!("valuetype.{}", got),
                index.to_string(),
                format!("valuetype.{}", expected),
            ],
        }
    }
}

fn wrong_type(
    operator: &Operator,
    index: usize,
    got: &ValueType,
    expected: &ValueType,
) -> TypeValidationError {
    TypeValidationError::WrongType {
        operator: operator.unique_name().to_string(),
        got: got.id(),
        index,
        expected: expected.id(),
    }
}

/// Resolves every slot, failing on a wrong count or an unset slot.
fn resolved(
    operator: &Operator,
    input: &[Option<&'static ValueType>],
) -> Result<Vec<&'static ValueType>, TypeValidationError> {
    let required = operator.required_input_length();
    if input.len() != required {
        return Err(TypeValidationError::WrongInputLength {
            operator: operator.unique_name().to_string(),
            got: input.len(),
            expected: required,
        });
    }
    input
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| TypeValidationError::NullType {
                operator: operator.unique_name().to_string(),
                index,
            })
        })
        .collect()
}

/// Count, presence, then per-slot acceptance against the declared signature.
pub fn validate_default(
    operator: &Operator,
    input: &[Option<&'static ValueType>],
) -> Result<(), TypeValidationError> {
    let actual = resolved(operator, input)?;
    for (index, (expected, got)) in operator.input_types().iter().zip(&actual).enumerate() {
        if !expected.accepts(got) {
            return Err(wrong_type(operator, index, got, expected));
        }
    }
    Ok(())
}

/// The default check, then every slot must carry the type of slot 0.
///
/// Used by equality and by the arithmetic/relational templates, whose category
/// slots would otherwise admit an integer on one side and a double on the other.
pub fn validate_uniform(
    operator: &Operator,
    input: &[Option<&'static ValueType>],
) -> Result<(), TypeValidationError> {
    validate_default(operator, input)?;
    validate_same_types(operator, input, 0, 1..input.len())
}

/// Every slot in `others` must carry the type of slot `first`.
///
/// Call only after [`validate_default`] succeeded, so all slots are present.
pub fn validate_same_types(
    operator: &Operator,
    input: &[Option<&'static ValueType>],
    first: usize,
    others: std::ops::Range<usize>,
) -> Result<(), TypeValidationError> {
    let actual = resolved(operator, input)?;
    let Some(&reference) = actual.get(first) else {
        return Ok(());
    };
    for index in others {
        let Some(&got) = actual.get(index) else {
            break;
        };
        if got != reference {
            return Err(wrong_type(operator, index, got, reference));
        }
    }
    Ok(())
}
