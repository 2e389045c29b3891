use super::{
    names::{
        ARITHMETIC_ADDITION, ARITHMETIC_DIVISION, ARITHMETIC_MAXIMUM, ARITHMETIC_MINIMUM,
        ARITHMETIC_MULTIPLICATION, ARITHMETIC_SUBTRACTION,
    },
    test_support::{builtin, eval},
};
use crate::runtime::{
    error::EvaluationError,
    value::Value,
    value_type::{DOUBLE, INTEGER, NUMBER},
    variable::{Constant, VariableRef},
};

fn ints(a: i32, b: i32) -> [VariableRef; 2] {
    [Constant::shared(a), Constant::shared(b)]
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval(ARITHMETIC_ADDITION, &ints(3, 4)), Ok(Value::Integer(7)));
    assert_eq!(eval(ARITHMETIC_SUBTRACTION, &ints(10, 3)), Ok(Value::Integer(7)));
    assert_eq!(eval(ARITHMETIC_MULTIPLICATION, &ints(6, 7)), Ok(Value::Integer(42)));
    assert_eq!(eval(ARITHMETIC_DIVISION, &ints(20, 4)), Ok(Value::Integer(5)));
    assert_eq!(eval(ARITHMETIC_MAXIMUM, &ints(-2, 9)), Ok(Value::Integer(9)));
    assert_eq!(eval(ARITHMETIC_MINIMUM, &ints(-2, 9)), Ok(Value::Integer(-2)));
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(
        eval(ARITHMETIC_DIVISION, &ints(1, 0)),
        Err(EvaluationError::DivisionByZero)
    );
    assert_eq!(
        eval(
            ARITHMETIC_DIVISION,
            &[Constant::shared(1.5), Constant::shared(0.0)]
        ),
        Err(EvaluationError::DivisionByZero)
    );
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        eval(ARITHMETIC_ADDITION, &ints(i32::MAX, 1)),
        Ok(Value::Integer(i32::MIN))
    );
    assert_eq!(
        eval(ARITHMETIC_DIVISION, &ints(i32::MIN, -1)),
        Ok(Value::Integer(i32::MIN))
    );
}

#[test]
fn double_arithmetic() {
    let inputs = [Constant::shared(1.5), Constant::shared(0.25)];
    assert_eq!(eval(ARITHMETIC_ADDITION, &inputs), Ok(Value::Double(1.75)));
    assert_eq!(eval(ARITHMETIC_DIVISION, &inputs), Ok(Value::Double(6.0)));
}

#[test]
fn mixed_numbers_fail_validation_and_evaluation() {
    let op = builtin(ARITHMETIC_ADDITION);
    assert!(op.validate_types(&[Some(&INTEGER), Some(&DOUBLE)]).is_err());

    let err = op
        .evaluate(&[Constant::shared(1), Constant::shared(1.0)])
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
fn output_type_follows_the_operands() {
    let op = builtin(ARITHMETIC_MULTIPLICATION);
    assert_eq!(op.output_type(), &NUMBER);
    assert_eq!(op.conditional_output_type(&ints(1, 2)), &INTEGER);
    assert_eq!(
        op.conditional_output_type(&[Constant::shared(1.0), Constant::shared(2.0)]),
        &DOUBLE
    );
}
