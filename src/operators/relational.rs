use std::cmp::Ordering;

use crate::{
    operator::{
        CompositionBuilder, OperatorRegistry, RegistryError, RenderPattern, SafeVariables,
        templates::{RELATIONAL, RELATIONAL_2},
        validation::validate_uniform,
    },
    operators::names::{
        LOGICAL_NOT, LOGICAL_OR, RELATIONAL_EQUALS, RELATIONAL_GT, RELATIONAL_LT,
    },
    runtime::{EvalResult, category::Category, value::Value, value_type::ANY},
};

pub(super) fn builtin_equals(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::Boolean(vars.value(0)? == vars.value(1)?))
}

pub(super) fn builtin_gt(vars: &SafeVariables<'_>) -> EvalResult {
    ordered(vars, Ordering::Greater)
}

pub(super) fn builtin_lt(vars: &SafeVariables<'_>) -> EvalResult {
    ordered(vars, Ordering::Less)
}

/// NaN is unordered and never greater or less than anything.
fn ordered(vars: &SafeVariables<'_>, expected: Ordering) -> EvalResult {
    let ordering = Category::Number.compare(&vars.value(0)?, &vars.value(1)?)?;
    Ok(Value::Boolean(ordering == Some(expected)))
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        RELATIONAL
            .clone()
            .input_type_n(2, &ANY)
            .symbol("==")
            .name("equals")
            .type_validator(validate_uniform)
            .safe_function(builtin_equals)
            .build()?,
    )?;
    registry.register(
        RELATIONAL_2
            .clone()
            .symbol(">")
            .name("gt")
            .safe_function(builtin_gt)
            .build()?,
    )?;
    registry.register(
        RELATIONAL_2
            .clone()
            .symbol("<")
            .name("lt")
            .safe_function(builtin_lt)
            .build()?,
    )?;

    let not = registry.require(LOGICAL_NOT)?;
    let or = registry.require(LOGICAL_OR)?;
    let equals = registry.require(RELATIONAL_EQUALS)?;
    let gt = registry.require(RELATIONAL_GT)?;
    let lt = registry.require(RELATIONAL_LT)?;

    registry.register(
        CompositionBuilder::new(not)
            .apply([equals.clone()])
            .build("!=", "notequals", RenderPattern::Infix, "relational")?,
    )?;
    registry.register(
        CompositionBuilder::new(or.clone())
            .apply([equals.clone(), gt])
            .build(">=", "ge", RenderPattern::Infix, "relational")?,
    )?;
    registry.register(
        CompositionBuilder::new(or)
            .apply([equals, lt])
            .build("<=", "le", RenderPattern::Infix, "relational")?,
    )?;
    Ok(())
}
