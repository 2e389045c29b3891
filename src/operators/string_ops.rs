use crate::{
    operator::{
        OperatorRegistry, RegistryError, RenderPattern, SafeVariables,
        templates::{STRING_1_PREFIX, STRING_2},
    },
    runtime::{
        EvalResult,
        category::Category,
        value::Value,
        value_type::{INTEGER, NAMED},
    },
};

/// Length in Unicode scalar values.
pub(super) fn builtin_length(vars: &SafeVariables<'_>) -> EvalResult {
    let length = vars.string(0)?.chars().count();
    Ok(Value::Integer(i32::try_from(length).unwrap_or(i32::MAX)))
}

pub(super) fn builtin_concat(vars: &SafeVariables<'_>) -> EvalResult {
    let left = vars.string(0)?;
    let right = vars.string(1)?;
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(&left);
    joined.push_str(&right);
    Ok(Value::string(joined))
}

pub(super) fn builtin_name(vars: &SafeVariables<'_>) -> EvalResult {
    Ok(Value::string(Category::Named.display_name(&vars.value(0)?)))
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        STRING_1_PREFIX
            .clone()
            .symbol("len")
            .name("length")
            .output_type(&INTEGER)
            .safe_function(builtin_length)
            .build()?,
    )?;
    registry.register(
        STRING_2
            .clone()
            .symbol("..")
            .name("concat")
            .safe_function(builtin_concat)
            .build()?,
    )?;
    registry.register(
        STRING_1_PREFIX
            .clone()
            .input_type(&NAMED)
            .render_pattern(RenderPattern::Suffix)
            .symbol_operator("name")
            .safe_function(builtin_name)
            .build()?,
    )?;
    Ok(())
}
