use crate::{
    operator::{
        OperatorRegistry, RegistryError, SafeVariables,
        templates::{ARITHMETIC_2, ARITHMETIC_2_PREFIX},
    },
    runtime::{EvalResult, category::Category},
};

pub(super) fn builtin_addition(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.add(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn builtin_subtraction(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.subtract(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn builtin_multiplication(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.multiply(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn builtin_division(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.divide(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn builtin_maximum(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.max(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn builtin_minimum(vars: &SafeVariables<'_>) -> EvalResult {
    Category::Number.min(&vars.value(0)?, &vars.value(1)?)
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    let infix = [
        ("+", "addition", builtin_addition as fn(&SafeVariables<'_>) -> EvalResult),
        ("-", "subtraction", builtin_subtraction),
        ("*", "multiplication", builtin_multiplication),
        ("/", "division", builtin_division),
    ];
    for (symbol, name, function) in infix {
        registry.register(
            ARITHMETIC_2
                .clone()
                .symbol(symbol)
                .name(name)
                .safe_function(function)
                .build()?,
        )?;
    }

    registry.register(
        ARITHMETIC_2_PREFIX
            .clone()
            .symbol("max")
            .name("maximum")
            .safe_function(builtin_maximum)
            .build()?,
    )?;
    registry.register(
        ARITHMETIC_2_PREFIX
            .clone()
            .symbol("min")
            .name("minimum")
            .safe_function(builtin_minimum)
            .build()?,
    )?;
    Ok(())
}
