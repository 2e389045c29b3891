//! Bitwise operators over `i32`.
//!
//! Shift counts are masked to the low five bits, so `1 << 33 == 2`.
use crate::{
    operator::{
        OperatorRegistry, RegistryError, SafeVariables,
        templates::{BINARY_1_PREFIX, BINARY_2},
    },
    runtime::{EvalResult, value::Value},
};

type BinaryFn = fn(&SafeVariables<'_>) -> EvalResult;

fn operands(vars: &SafeVariables<'_>) -> EvalResult<(i32, i32)> {
    Ok((vars.integer(0)?, vars.integer(1)?))
}

pub(super) fn builtin_and(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer(a & b))
}

pub(super) fn builtin_or(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer(a | b))
}

pub(super) fn builtin_xor(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer(a ^ b))
}

pub(super) fn builtin_complement(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Integer(!vars.integer(0)?))
}

pub(super) fn builtin_lshift(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer(a.wrapping_shl(b as u32)))
}

/// Arithmetic shift; the sign bit is copied in.
pub(super) fn builtin_rshift(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer(a.wrapping_shr(b as u32)))
}

/// Logical shift; zeros are shifted in.
pub(super) fn builtin_rzshift(vars: &SafeVariables<'_>) -> EvalResult {
    let (a, b) = operands(vars)?;
    Ok(Value::Integer((a as u32).wrapping_shr(b as u32) as i32))
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    let infix: [(&str, &str, BinaryFn); 3] = [
        ("&", "and", builtin_and),
        ("|", "or", builtin_or),
        ("^", "xor", builtin_xor),
    ];
    for (symbol, name, function) in infix {
        registry.register(BINARY_2.clone().symbol(symbol).name(name).safe_function(function).build()?)?;
    }

    registry.register(
        BINARY_1_PREFIX
            .clone()
            .symbol("~")
            .name("complement")
            .safe_function(builtin_complement)
            .build()?,
    )?;

    let shifts: [(&str, &str, BinaryFn); 3] = [
        ("<<", "lshift", builtin_lshift),
        (">>", "rshift", builtin_rshift),
        (">>>", "rzshift", builtin_rzshift),
    ];
    for (symbol, name, function) in shifts {
        registry.register(BINARY_2.clone().symbol(symbol).name(name).safe_function(function).build()?)?;
    }
    Ok(())
}
