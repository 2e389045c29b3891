//! Category dispatch.
//!
//! A [`Category`] groups value types that share polymorphic operations.
//! Arithmetic over `Number` is routed to the [`NumberOps`] implementation the
//! operand's value type was declared with, so one operator serves every
//! numeric representation. Calling a category operation with a value whose
//! type is not a member is a programming error and panics; operators only
//! reach this code after their inputs were checked against their signature.
use std::cmp::Ordering;

use serde::Serialize;

use crate::runtime::{
    EvalResult,
    error::EvaluationError,
    value::Value,
    value_type::ValueType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Every value type.
    Any,
    /// Numeric types with arithmetic.
    Number,
    /// Host object types with a display name.
    Named,
}

/// Arithmetic for one numeric representation.
///
/// Both operands must carry the implementing type; anything else is reported
/// as [`EvaluationError::TypeMismatch`].
pub trait NumberOps: Sync {
    fn add(&self, a: &Value, b: &Value) -> EvalResult;
    fn subtract(&self, a: &Value, b: &Value) -> EvalResult;
    fn multiply(&self, a: &Value, b: &Value) -> EvalResult;
    fn divide(&self, a: &Value, b: &Value) -> EvalResult;
    fn min(&self, a: &Value, b: &Value) -> EvalResult;
    fn max(&self, a: &Value, b: &Value) -> EvalResult;
    /// `None` when the operands are unordered (NaN).
    fn compare(&self, a: &Value, b: &Value) -> EvalResult<Option<Ordering>>;
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Any => "any",
            Category::Number => "number",
            Category::Named => "named",
        }
    }

    pub fn add(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).add(a, b)
    }

    pub fn subtract(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).subtract(a, b)
    }

    pub fn multiply(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).multiply(a, b)
    }

    pub fn divide(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).divide(a, b)
    }

    pub fn min(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).min(a, b)
    }

    pub fn max(self, a: &Value, b: &Value) -> EvalResult {
        self.number_ops(a).max(a, b)
    }

    pub fn compare(self, a: &Value, b: &Value) -> EvalResult<Option<Ordering>> {
        self.number_ops(a).compare(a, b)
    }

    /// Display name of a `Named` member value.
    pub fn display_name(self, value: &Value) -> String {
        self.assert_member(Category::Named, value.value_type());
        match value {
            Value::Object(object) => object.name(),
            other => panic!(
                "value of type {} claims category named but carries no host object",
                other.value_type()
            ),
        }
    }

    fn number_ops(self, value: &Value) -> &'static dyn NumberOps {
        let value_type = value.value_type();
        self.assert_member(Category::Number, value_type);
        match value_type.number_ops() {
            Some(ops) => ops,
            None => panic!("number type {} was declared without arithmetic", value_type),
        }
    }

    fn assert_member(self, expected: Category, value_type: &ValueType) {
        assert!(
            self == expected,
            "operation of category {} invoked on category {}",
            expected.name(),
            self.name()
        );
        assert!(
            value_type.categories().contains(&self),
            "{} is not a member of category {}",
            value_type,
            self.name()
        );
    }
}

fn mismatch(a: &Value, b: &Value) -> EvaluationError {
    EvaluationError::TypeMismatch {
        left: a.value_type().id(),
        right: b.value_type().id(),
    }
}

/// `i32` arithmetic with two's complement wrapping.
pub struct IntegerOps;

impl IntegerOps {
    fn operands(a: &Value, b: &Value) -> EvalResult<(i32, i32)> {
        match (a, b) {
            (Value::Integer(a), Value::Integer(b)) => Ok((*a, *b)),
            _ => Err(mismatch(a, b)),
        }
    }
}

impl NumberOps for IntegerOps {
    fn add(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Integer(a.wrapping_add(b)))
    }

    fn subtract(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Integer(a.wrapping_sub(b)))
    }

    fn multiply(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Integer(a.wrapping_mul(b)))
    }

    fn divide(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        if b == 0 {
            return Err(EvaluationError::DivisionByZero);
        }
        Ok(Value::Integer(a.wrapping_div(b)))
    }

    fn min(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Integer(a.min(b)))
    }

    fn max(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Integer(a.max(b)))
    }

    fn compare(&self, a: &Value, b: &Value) -> EvalResult<Option<Ordering>> {
        let (a, b) = Self::operands(a, b)?;
        Ok(Some(a.cmp(&b)))
    }
}

/// `f64` arithmetic. Division by zero fails like the integer case.
pub struct DoubleOps;

impl DoubleOps {
    fn operands(a: &Value, b: &Value) -> EvalResult<(f64, f64)> {
        match (a, b) {
            (Value::Double(a), Value::Double(b)) => Ok((*a, *b)),
            _ => Err(mismatch(a, b)),
        }
    }
}

impl NumberOps for DoubleOps {
    fn add(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Double(a + b))
    }

    fn subtract(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Double(a - b))
    }

    fn multiply(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Double(a * b))
    }

    fn divide(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        if b == 0.0 {
            return Err(EvaluationError::DivisionByZero);
        }
        Ok(Value::Double(a / b))
    }

    fn min(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Double(a.min(b)))
    }

    fn max(&self, a: &Value, b: &Value) -> EvalResult {
        let (a, b) = Self::operands(a, b)?;
        Ok(Value::Double(a.max(b)))
    }

    fn compare(&self, a: &Value, b: &Value) -> EvalResult<Option<Ordering>> {
        let (a, b) = Self::operands(a, b)?;
        Ok(a.partial_cmp(&b))
    }
}
