use crate::{
    operator::{
        Operator, OperatorRegistry, RegistryError, SafeVariables,
        helpers::{boolean_at, check_arity, missing_input},
        templates::{LOGICAL_1_PREFIX, LOGICAL_2},
    },
    runtime::{EvalResult, value::Value, variable::VariableRef},
};

/// Operand 1 is only read when operand 0 is true, and is returned as read.
pub(super) fn builtin_and(operator: &Operator, variables: &[VariableRef]) -> EvalResult {
    check_arity(operator, variables)?;
    if !boolean_at(operator, variables, 0)? {
        return Ok(Value::Boolean(false));
    }
    second_operand(operator, variables)
}

/// Operand 1 is only read when operand 0 is false.
pub(super) fn builtin_or(operator: &Operator, variables: &[VariableRef]) -> EvalResult {
    check_arity(operator, variables)?;
    if boolean_at(operator, variables, 0)? {
        return Ok(Value::Boolean(true));
    }
    second_operand(operator, variables)
}

pub(super) fn builtin_not(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Boolean(!vars.boolean(0)?))
}

fn second_operand(operator: &Operator, variables: &[VariableRef]) -> EvalResult {
    variables
        .get(1)
        .ok_or_else(|| missing_input(operator, variables.len()))?
        .value()
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        LOGICAL_2
            .clone()
            .symbol("&&")
            .name("and")
            .raw_function(builtin_and)
            .build()?,
    )?;
    registry.register(
        LOGICAL_2
            .clone()
            .symbol("||")
            .name("or")
            .raw_function(builtin_or)
            .build()?,
    )?;
    registry.register(
        LOGICAL_1_PREFIX
            .clone()
            .symbol("!")
            .name("not")
            .safe_function(builtin_not)
            .build()?,
    )?;
    Ok(())
}
