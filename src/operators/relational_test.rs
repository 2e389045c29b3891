use super::{
    names::{
        RELATIONAL_EQUALS, RELATIONAL_GE, RELATIONAL_GT, RELATIONAL_LE, RELATIONAL_LT,
        RELATIONAL_NOTEQUALS,
    },
    test_support::{builtin, eval},
};
use crate::{
    operator::TypeValidationError,
    runtime::{
        error::EvaluationError,
        value::Value,
        value_type::{ANY, BOOLEAN, DOUBLE, INTEGER, NUMBER, STRING},
        variable::Constant,
    },
};

#[test]
fn equals_compares_values() {
    assert_eq!(
        eval(RELATIONAL_EQUALS, &[Constant::shared(3), Constant::shared(3)]),
        Ok(Value::Boolean(true))
    );
    assert_eq!(
        eval(RELATIONAL_EQUALS, &[Constant::shared("a"), Constant::shared("b")]),
        Ok(Value::Boolean(false))
    );
}

#[test]
fn equals_validation_names_both_types() {
    let err = builtin(RELATIONAL_EQUALS)
        .validate_types(&[Some(&INTEGER), Some(&STRING)])
        .unwrap_err();
    assert_eq!(
        err,
        TypeValidationError::WrongType {
            operator: "relational.equals".to_string(),
            got: "string",
            index: 1,
            expected: "integer",
        }
    );
}

#[test]
fn ordering_over_integers_and_doubles() {
    assert_eq!(
        eval(RELATIONAL_GT, &[Constant::shared(5), Constant::shared(2)]),
        Ok(Value::Boolean(true))
    );
    assert_eq!(
        eval(RELATIONAL_LT, &[Constant::shared(5), Constant::shared(2)]),
        Ok(Value::Boolean(false))
    );
    assert_eq!(
        eval(RELATIONAL_LT, &[Constant::shared(0.5), Constant::shared(2.0)]),
        Ok(Value::Boolean(true))
    );
}

#[test]
fn nan_is_neither_greater_nor_less() {
    let inputs = [Constant::shared(f64::NAN), Constant::shared(1.0)];
    assert_eq!(eval(RELATIONAL_GT, &inputs), Ok(Value::Boolean(false)));
    assert_eq!(eval(RELATIONAL_LT, &inputs), Ok(Value::Boolean(false)));
}

#[test]
fn ordering_rejects_mixed_numbers() {
    assert_eq!(
        eval(RELATIONAL_GT, &[Constant::shared(1), Constant::shared(1.0)]),
        Err(EvaluationError::TypeMismatch {
            left: "integer",
            right: "double",
        })
    );
}

#[test]
fn composites_agree_with_their_parts() {
    for (a, b) in [(1, 2), (2, 2), (3, 2)] {
        let inputs = [Constant::shared(a), Constant::shared(b)];
        assert_eq!(eval(RELATIONAL_GE, &inputs), Ok(Value::Boolean(a >= b)));
        assert_eq!(eval(RELATIONAL_LE, &inputs), Ok(Value::Boolean(a <= b)));
        assert_eq!(eval(RELATIONAL_NOTEQUALS, &inputs), Ok(Value::Boolean(a != b)));
    }
    assert_eq!(
        eval(
            RELATIONAL_NOTEQUALS,
            &[Constant::shared(true), Constant::shared(false)]
        ),
        Ok(Value::Boolean(true))
    );
}

#[test]
fn composite_signatures() {
    let ge = builtin(RELATIONAL_GE);
    assert_eq!(ge.input_types(), &[&NUMBER, &NUMBER]);
    assert_eq!(ge.output_type(), &BOOLEAN);
    assert!(ge.validate_types(&[Some(&DOUBLE), Some(&DOUBLE)]).is_ok());
    assert!(ge.validate_types(&[Some(&DOUBLE), Some(&INTEGER)]).is_err());

    let ne = builtin(RELATIONAL_NOTEQUALS);
    assert_eq!(ne.input_types(), &[&ANY, &ANY]);
    assert!(ne.validate_types(&[Some(&STRING), Some(&STRING)]).is_ok());
    assert!(matches!(
        ne.validate_types(&[Some(&STRING), Some(&BOOLEAN)]),
        Err(TypeValidationError::WrongType { index: 1, .. })
    ));
}
