use std::cmp::Ordering;

use crate::runtime::{
    category::Category,
    error::EvaluationError,
    value::{HostObject, Value},
    value_type::ValueType,
};

static ITEM: ValueType = ValueType::concrete("item", &[Category::Named]);

#[derive(Debug)]
struct Item;

impl HostObject for Item {
    fn value_type(&self) -> &'static ValueType {
        &ITEM
    }

    fn name(&self) -> String {
        "Iron Ingot".to_string()
    }
}

#[test]
fn number_dispatch_keeps_integer_representation() {
    let a = Value::Integer(6);
    let b = Value::Integer(7);
    assert_eq!(Category::Number.add(&a, &b), Ok(Value::Integer(13)));
    assert_eq!(Category::Number.subtract(&a, &b), Ok(Value::Integer(-1)));
    assert_eq!(Category::Number.multiply(&a, &b), Ok(Value::Integer(42)));
    assert_eq!(Category::Number.divide(&b, &a), Ok(Value::Integer(1)));
    assert_eq!(Category::Number.min(&a, &b), Ok(Value::Integer(6)));
    assert_eq!(Category::Number.max(&a, &b), Ok(Value::Integer(7)));
    assert_eq!(Category::Number.compare(&a, &b), Ok(Some(Ordering::Less)));
}

#[test]
fn number_dispatch_keeps_double_representation() {
    let a = Value::Double(1.5);
    let b = Value::Double(0.5);
    assert_eq!(Category::Number.add(&a, &b), Ok(Value::Double(2.0)));
    assert_eq!(Category::Number.divide(&a, &b), Ok(Value::Double(3.0)));
    assert_eq!(Category::Number.max(&a, &b), Ok(Value::Double(1.5)));
    assert_eq!(
        Category::Number.compare(&Value::Double(f64::NAN), &b),
        Ok(None)
    );
}

#[test]
fn integer_arithmetic_wraps() {
    let max = Value::Integer(i32::MAX);
    assert_eq!(
        Category::Number.add(&max, &Value::Integer(1)),
        Ok(Value::Integer(i32::MIN))
    );
    assert_eq!(
        Category::Number.divide(&Value::Integer(i32::MIN), &Value::Integer(-1)),
        Ok(Value::Integer(i32::MIN))
    );
}

#[test]
fn division_by_zero_fails_for_every_representation() {
    assert_eq!(
        Category::Number.divide(&Value::Integer(1), &Value::Integer(0)),
        Err(EvaluationError::DivisionByZero)
    );
    assert_eq!(
        Category::Number.divide(&Value::Double(1.0), &Value::Double(0.0)),
        Err(EvaluationError::DivisionByZero)
    );
}

#[test]
fn mixed_representations_are_a_type_mismatch() {
    let err = Category::Number
        .add(&Value::Integer(1), &Value::Double(1.0))
        .unwrap_err();
    assert_eq!(
        err,
        EvaluationError::TypeMismatch {
            left: "integer",
            right: "double",
        }
    );
}

#[test]
fn named_dispatch_asks_the_host_object() {
    assert_eq!(Category::Named.display_name(&Value::object(Item)), "Iron Ingot");
}

#[test]
#[should_panic(expected = "is not a member of category number")]
fn non_member_dispatch_panics() {
    let _ = Category::Number.add(&Value::Boolean(true), &Value::Boolean(false));
}

#[test]
#[should_panic(expected = "is not a member of category named")]
fn naming_a_plain_value_panics() {
    let _ = Category::Named.display_name(&Value::Integer(1));
}
