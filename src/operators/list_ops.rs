use crate::{
    operator::{
        Operator, OperatorRegistry, RegistryError, RenderPattern, SafeVariables,
        templates::LIST_1_PREFIX,
    },
    runtime::{
        EvalResult,
        error::EvaluationError,
        value::Value,
        value_type::{ANY, INTEGER, LIST, ValueType},
        variable::VariableRef,
    },
};

/// Reads the proxy length; no element is produced.
pub(super) fn builtin_length(vars: &SafeVariables<'_>) -> EvalResult {
    let length = vars.list(0)?.len();
    Ok(Value::Integer(i32::try_from(length).unwrap_or(i32::MAX)))
}

pub(super) fn builtin_get(vars: &SafeVariables<'_>) -> EvalResult {
    let list = vars.list(0)?;
    let index = vars.integer(1)?;
    let length = list.len();
    match usize::try_from(index) {
        Ok(slot) if slot < length => list.get(slot),
        _ => Err(EvaluationError::IndexOutOfBounds {
            index: i64::from(index),
            length,
        }),
    }
}

/// Element type of the wired list, when it can be evaluated.
fn element_type(_: &Operator, inputs: &[VariableRef]) -> Option<&'static ValueType> {
    let list = inputs.first()?.value().ok()?;
    list.as_list().map(|list| list.element_type())
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        LIST_1_PREFIX
            .clone()
            .symbol("| |")
            .name("length")
            .output_type(&INTEGER)
            .safe_function(builtin_length)
            .build()?,
    )?;
    registry.register(
        LIST_1_PREFIX
            .clone()
            .input_types([&LIST, &INTEGER])
            .output_type(&ANY)
            .render_pattern(RenderPattern::Infix)
            .symbol_operator("get")
            .safe_function(builtin_get)
            .output_type_deriver(element_type)
            .build()?,
    )?;
    Ok(())
}
