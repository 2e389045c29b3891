use crate::{
    operator::{
        Operator, OperatorRegistry, RegistryError, SafeVariables, TypeValidationError,
        helpers::{boolean_at, check_arity, missing_input},
        templates::GENERAL,
        validation::{validate_default, validate_same_types},
    },
    runtime::{
        EvalResult,
        value_type::{ANY, BOOLEAN, ValueType},
        variable::VariableRef,
    },
};

/// Reads the condition, then only the chosen branch.
pub(super) fn builtin_choice(operator: &Operator, variables: &[VariableRef]) -> EvalResult {
    check_arity(operator, variables)?;
    let branch = if boolean_at(operator, variables, 0)? { 1 } else { 2 };
    variables
        .get(branch)
        .ok_or_else(|| missing_input(operator, variables.len()))?
        .value()
}

pub(super) fn builtin_identity(vars: &SafeVariables<'_>) -> EvalResult {
    vars.value(0)
}

/// Both branches must carry one type.
fn validate_choice(
    operator: &Operator,
    input: &[Option<&'static ValueType>],
) -> Result<(), TypeValidationError> {
    validate_default(operator, input)?;
    validate_same_types(operator, input, 1, 2..3)
}

fn input_type_at(slot: usize) -> impl Fn(&Operator, &[VariableRef]) -> Option<&'static ValueType> {
    move |_, inputs| inputs.get(slot).map(|input| input.value_type())
}

pub(super) fn register(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    registry.register(
        GENERAL
            .clone()
            .input_types([&BOOLEAN, &ANY, &ANY])
            .output_type(&ANY)
            .symbol("?")
            .name("choice")
            .raw_function(builtin_choice)
            .type_validator(validate_choice)
            .output_type_deriver(input_type_at(1))
            .build()?,
    )?;
    registry.register(
        GENERAL
            .clone()
            .input_types([&ANY])
            .output_type(&ANY)
            .symbol("id")
            .name("identity")
            .safe_function(builtin_identity)
            .output_type_deriver(input_type_at(0))
            .build()?,
    )?;
    Ok(())
}
