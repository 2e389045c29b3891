//! Rounding of doubles to integers. Results saturate at the `i32` bounds and
//! NaN rounds to zero.
use crate::{
    operator::{OperatorRegistry, RegistryError, SafeVariables, templates::DOUBLE_1_PREFIX},
    runtime::{EvalResult, value::Value, value_type::INTEGER},
};

type RoundingFn = fn(&SafeVariables<'_>) -> EvalResult;

/// Half-up: `2.5` rounds to `3`, `-2.5` to `-2`.
pub(super) fn builtin_round(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer((vars.double(0)? + 0.5).floor() as i32))
}

pub(super) fn builtin_ceil(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer(vars.double(0)?.ceil() as i32))
}

pub(super) fn builtin_floor(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer(vars.double(0)?.floor() as i32))
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    let rounding: [(&str, &str, RoundingFn); 3] = [
        ("|| ||", "round", builtin_round),
        ("⌈ ⌉", "ceil", builtin_ceil),
        ("⌊ ⌋", "floor", builtin_floor),
    ];
    for (symbol, name, function) in rounding {
        registry.register(
            DOUBLE_1_PREFIX
                .clone()
                .symbol(symbol)
                .name(name)
                .output_type(&INTEGER)
                .safe_function(function)
                .build()?,
        )?;
    }
    Ok(())
}
