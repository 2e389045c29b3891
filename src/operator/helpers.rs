use crate::{
    operator::Operator,
    runtime::{
        EvalResult, error::EvaluationError, value::Value, value_type::ValueType,
        variable::VariableRef,
    },
};

pub(crate) fn arity_error(operator: &Operator, got: usize) -> EvaluationError {
    EvaluationError::WrongArity {
        operator: operator.unique_name().to_string(),
        expected: operator.required_input_length(),
        got,
    }
}

/// A slot past the end of the variable list; reported as an arity error.
pub(crate) fn missing_input(operator: &Operator, got: usize) -> EvaluationError {
    arity_error(operator, got)
}

pub(crate) fn type_error(
    operator: &Operator,
    index: usize,
    expected: &ValueType,
    got: &ValueType,
) -> EvaluationError {
    EvaluationError::WrongType {
        operator: operator.unique_name().to_string(),
        index,
        expected: expected.id(),
        got: got.id(),
    }
}

pub(crate) fn payload_error(
    operator: &Operator,
    index: usize,
    expected: &'static str,
    got: &Value,
) -> EvaluationError {
    EvaluationError::WrongType {
        operator: operator.unique_name().to_string(),
        index,
        expected,
        got: got.type_name(),
    }
}

pub(crate) fn check_arity(operator: &Operator, variables: &[VariableRef]) -> Result<(), EvaluationError> {
    if variables.len() != operator.required_input_length() {
        return Err(arity_error(operator, variables.len()));
    }
    Ok(())
}

/// Evaluates slot `index` of a raw function's inputs as a boolean.
pub(crate) fn boolean_at(operator: &Operator, variables: &[VariableRef], index: usize) -> EvalResult<bool> {
    let value = variables
        .get(index)
        .ok_or_else(|| missing_input(operator, variables.len()))?
        .value()?;
    value
        .as_boolean()
        .ok_or_else(|| payload_error(operator, index, "boolean", &value))
}
