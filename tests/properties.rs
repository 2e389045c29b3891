//! Property tests for the relational composites, modulus and list access.
use std::sync::Arc;

use opgraph::{
    operator::{Operator, registry},
    operators::names,
    runtime::{Constant, EvaluationError, Value, VariableRef, value_type::INTEGER},
};
use proptest::prelude::*;

fn op(unique_name: &str) -> Arc<Operator> {
    registry::global().require(unique_name).unwrap()
}

fn pair(a: impl Into<Value>, b: impl Into<Value>) -> [VariableRef; 2] {
    [Constant::shared(a), Constant::shared(b)]
}

fn boolean(unique_name: &str, inputs: &[VariableRef]) -> bool {
    op(unique_name)
        .evaluate(inputs)
        .unwrap()
        .as_boolean()
        .unwrap()
}

proptest! {
    #[test]
    fn ge_is_equals_or_greater(a in any::<i32>(), b in any::<i32>()) {
        let inputs = pair(a, b);
        let expected = boolean(names::RELATIONAL_EQUALS, &inputs) || boolean(names::RELATIONAL_GT, &inputs);
        prop_assert_eq!(boolean(names::RELATIONAL_GE, &inputs), expected);
        prop_assert_eq!(expected, a >= b);
    }

    #[test]
    fn le_is_equals_or_less(a in any::<i32>(), b in any::<i32>()) {
        let inputs = pair(a, b);
        let expected = boolean(names::RELATIONAL_EQUALS, &inputs) || boolean(names::RELATIONAL_LT, &inputs);
        prop_assert_eq!(boolean(names::RELATIONAL_LE, &inputs), expected);
        prop_assert_eq!(expected, a <= b);
    }

    #[test]
    fn double_ordering_composites(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        let inputs = pair(a, b);
        prop_assert_eq!(boolean(names::RELATIONAL_GE, &inputs), a >= b);
        prop_assert_eq!(boolean(names::RELATIONAL_LE, &inputs), a <= b);
    }

    #[test]
    fn ne_is_not_equals(a in any::<i32>(), b in any::<i32>()) {
        let inputs = pair(a, b);
        prop_assert_eq!(
            boolean(names::RELATIONAL_NOTEQUALS, &inputs),
            !boolean(names::RELATIONAL_EQUALS, &inputs)
        );
    }

    #[test]
    fn ne_over_strings(a in "[a-c]{0,3}", b in "[a-c]{0,3}") {
        let inputs = pair(a.as_str(), b.as_str());
        prop_assert_eq!(boolean(names::RELATIONAL_NOTEQUALS, &inputs), a != b);
    }

    #[test]
    fn modulus_matches_truncating_remainder(x in any::<i32>(), y in any::<i32>()) {
        let result = op(names::INTEGER_MODULUS).evaluate(&pair(x, y));
        match y {
            0 => {
                prop_assert_eq!(result, Err(EvaluationError::DivisionByZero));
            }
            1 => {
                prop_assert_eq!(result, Ok(Value::Integer(0)));
            }
            _ => {
                prop_assert_eq!(result, Ok(Value::Integer(x.wrapping_rem(y))));
            }
        }
    }

    #[test]
    fn list_get_respects_bounds(len in 0usize..16, index in -4i32..24) {
        let list = Value::list(&INTEGER, (0..len as i32).map(|i| Value::Integer(i * 10)).collect());
        let result = op(names::LIST_GET).evaluate(&pair(list, index));
        if index >= 0 && (index as usize) < len {
            prop_assert_eq!(result, Ok(Value::Integer(index * 10)));
        } else {
            prop_assert_eq!(
                result,
                Err(EvaluationError::IndexOutOfBounds { index: i64::from(index), length: len })
            );
        }
    }
}
