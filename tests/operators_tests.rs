use std::{cell::Cell, rc::Rc, sync::Arc};

use opgraph::{
    operator::{Operator, registry},
    operators::names,
    runtime::{
        Category, Constant, Deferred, EvaluationError, HostObject, OperatorVariable, Value,
        ValueType, Variable, VariableRef,
        value_type::{ANY, BOOLEAN, DOUBLE, INTEGER, LIST, NAMED, NUMBER, STRING},
    },
};

static ENTITY: ValueType = ValueType::concrete("entity", &[Category::Named]);

#[derive(Debug)]
struct Entity(&'static str);

impl HostObject for Entity {
    fn value_type(&self) -> &'static ValueType {
        &ENTITY
    }

    fn name(&self) -> String {
        self.0.to_string()
    }
}

fn op(unique_name: &str) -> Arc<Operator> {
    registry::global().require(unique_name).unwrap()
}

fn node(unique_name: &str, inputs: Vec<VariableRef>) -> VariableRef {
    Rc::new(OperatorVariable::checked(op(unique_name), inputs).unwrap())
}

fn sample(value_type: &'static ValueType) -> VariableRef {
    if value_type == &BOOLEAN {
        Constant::shared(true)
    } else if value_type == &INTEGER || value_type == &NUMBER || value_type == &ANY {
        Constant::shared(3)
    } else if value_type == &DOUBLE {
        Constant::shared(2.5)
    } else if value_type == &STRING {
        Constant::shared("ab")
    } else if value_type == &LIST {
        Constant::shared(Value::list(
            &INTEGER,
            (0..5).map(Value::Integer).collect(),
        ))
    } else if value_type == &NAMED {
        Constant::shared(Value::object(Entity("zombie")))
    } else {
        panic!("no sample for {}", value_type)
    }
}

#[test]
fn arithmetic_graph() {
    let sum = node(
        names::ARITHMETIC_ADDITION,
        vec![Constant::shared(3), Constant::shared(4)],
    );
    assert_eq!(sum.value(), Ok(Value::Integer(7)));
    assert_eq!(sum.value_type(), &INTEGER);

    let product = node(
        names::ARITHMETIC_MULTIPLICATION,
        vec![sum, Constant::shared(6)],
    );
    assert_eq!(product.value(), Ok(Value::Integer(42)));

    let quotient = node(
        names::ARITHMETIC_DIVISION,
        vec![Constant::shared(20), Constant::shared(4)],
    );
    assert_eq!(quotient.value(), Ok(Value::Integer(5)));
}

#[test]
fn failures_propagate_from_the_innermost_node() {
    let failing = node(
        names::ARITHMETIC_DIVISION,
        vec![Constant::shared(1), Constant::shared(0)],
    );
    let outer = node(
        names::ARITHMETIC_SUBTRACTION,
        vec![Constant::shared(10), failing],
    );
    let root = node(names::RELATIONAL_GT, vec![outer, Constant::shared(0)]);
    assert_eq!(root.value(), Err(EvaluationError::DivisionByZero));
}

#[test]
fn double_negation() {
    let inner = node(names::LOGICAL_NOT, vec![Constant::shared(true)]);
    let outer = node(names::LOGICAL_NOT, vec![inner]);
    assert_eq!(outer.value(), Ok(Value::Boolean(true)));
}

#[test]
fn and_short_circuits_through_a_graph() {
    let reads = Rc::new(Cell::new(0));
    let recorded = {
        let reads = reads.clone();
        Deferred::shared(&BOOLEAN, move || {
            reads.set(reads.get() + 1);
            Ok(Value::Boolean(true))
        })
    };
    let left = node(
        names::RELATIONAL_EQUALS,
        vec![Constant::shared("a"), Constant::shared("b")],
    );
    let root = node(names::LOGICAL_AND, vec![left, recorded]);
    assert_eq!(root.value(), Ok(Value::Boolean(false)));
    assert_eq!(reads.get(), 0);
}

#[test]
fn wiring_is_checked_before_evaluation() {
    let err = OperatorVariable::checked(
        op(names::RELATIONAL_EQUALS),
        vec![Constant::shared(3), Constant::shared("3")],
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "relational.equals got string at input 1, expected integer"
    );

    let err = OperatorVariable::checked(op(names::STRING_CONCAT), vec![Constant::shared("a")])
        .unwrap_err();
    assert_eq!(err.localization_key(), "operator.error.wrongInputLength");
}

#[test]
fn list_lookup_through_a_choice() {
    let list = Constant::shared(Value::list(
        &STRING,
        vec![Value::string("north"), Value::string("south")],
    ));
    let index = node(
        names::GENERAL_CHOICE,
        vec![Constant::shared(false), Constant::shared(0), Constant::shared(1)],
    );
    let element = node(names::LIST_GET, vec![list, index]);
    assert_eq!(element.value_type(), &STRING);
    assert_eq!(element.value(), Ok(Value::string("south")));
}

#[test]
fn declared_output_types_match_results() {
    for operator in registry::global().operators() {
        let inputs: Vec<VariableRef> = operator
            .input_types()
            .iter()
            .map(|&value_type| sample(value_type))
            .collect();
        let value = operator
            .evaluate(&inputs)
            .unwrap_or_else(|err| panic!("{} failed: {}", operator.unique_name(), err));
        let declared = operator.conditional_output_type(&inputs);
        assert!(
            declared.accepts(value.value_type()),
            "{} declared {} but produced {}",
            operator.unique_name(),
            declared,
            value.value_type()
        );
        assert!(
            operator.output_type().accepts(value.value_type()),
            "{} static output {} does not cover {}",
            operator.unique_name(),
            operator.output_type(),
            value.value_type()
        );
    }
}
