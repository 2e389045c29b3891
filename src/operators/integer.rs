use crate::{
    operator::{
        OperatorRegistry, RegistryError, SafeVariables,
        templates::{INTEGER_1_SUFFIX, INTEGER_2},
    },
    runtime::{EvalResult, error::EvaluationError, value::Value},
};

/// Truncating remainder; the result takes the sign of the dividend.
///
/// The dividend is only read when a remainder has to be computed.
pub(super) fn builtin_modulus(vars: &SafeVariables<'_>) -> EvalResult {
    match vars.integer(1)? {
        0 => Err(EvaluationError::DivisionByZero),
        1 => Ok(Value::Integer(0)),
        divisor => Ok(Value::Integer(vars.integer(0)?.wrapping_rem(divisor))),
    }
}

pub(super) fn builtin_increment(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer(vars.integer(0)?.wrapping_add(1)))
}

pub(super) fn builtin_decrement(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer(vars.integer(0)?.wrapping_sub(1)))
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        INTEGER_2
            .clone()
            .symbol("%")
            .name("modulus")
            .safe_function(builtin_modulus)
            .build()?,
    )?;
    registry.register(
        INTEGER_1_SUFFIX
            .clone()
            .symbol("++")
            .name("increment")
            .safe_function(builtin_increment)
            .build()?,
    )?;
    registry.register(
        INTEGER_1_SUFFIX
            .clone()
            .symbol("--")
            .name("decrement")
            .safe_function(builtin_decrement)
            .build()?,
    )?;
    Ok(())
}
