//! Built-in operator catalogue.
//!
//! Each group module defines its operators from the shared templates and
//! registers them; [`register_builtins`] runs the groups in catalogue order.
use crate::operator::{OperatorRegistry, RegistryError};

mod arithmetic;
mod binary;
mod double_ops;
mod general;
mod integer;
mod list_ops;
mod logical;
mod relational;
mod string_ops;

/// Unique names of the built-in operators.
pub mod names {
    pub const LOGICAL_AND: &str = "logical.and";
    pub const LOGICAL_OR: &str = "logical.or";
    pub const LOGICAL_NOT: &str = "logical.not";

    pub const ARITHMETIC_ADDITION: &str = "arithmetic.addition";
    pub const ARITHMETIC_SUBTRACTION: &str = "arithmetic.subtraction";
    pub const ARITHMETIC_MULTIPLICATION: &str = "arithmetic.multiplication";
    pub const ARITHMETIC_DIVISION: &str = "arithmetic.division";
    pub const ARITHMETIC_MAXIMUM: &str = "arithmetic.maximum";
    pub const ARITHMETIC_MINIMUM: &str = "arithmetic.minimum";

    pub const INTEGER_MODULUS: &str = "integer.modulus";
    pub const INTEGER_INCREMENT: &str = "integer.increment";
    pub const INTEGER_DECREMENT: &str = "integer.decrement";

    pub const RELATIONAL_EQUALS: &str = "relational.equals";
    pub const RELATIONAL_GT: &str = "relational.gt";
    pub const RELATIONAL_LT: &str = "relational.lt";
    pub const RELATIONAL_NOTEQUALS: &str = "relational.notequals";
    pub const RELATIONAL_GE: &str = "relational.ge";
    pub const RELATIONAL_LE: &str = "relational.le";

    pub const BINARY_AND: &str = "binary.and";
    pub const BINARY_OR: &str = "binary.or";
    pub const BINARY_XOR: &str = "binary.xor";
    pub const BINARY_COMPLEMENT: &str = "binary.complement";
    pub const BINARY_LSHIFT: &str = "binary.lshift";
    pub const BINARY_RSHIFT: &str = "binary.rshift";
    pub const BINARY_RZSHIFT: &str = "binary.rzshift";

    pub const STRING_LENGTH: &str = "string.length";
    pub const STRING_CONCAT: &str = "string.concat";
    pub const STRING_NAME: &str = "string.name";

    pub const DOUBLE_ROUND: &str = "double.round";
    pub const DOUBLE_CEIL: &str = "double.ceil";
    pub const DOUBLE_FLOOR: &str = "double.floor";

    pub const LIST_LENGTH: &str = "list.length";
    pub const LIST_GET: &str = "list.get";

    pub const GENERAL_CHOICE: &str = "general.choice";
    pub const GENERAL_IDENTITY: &str = "general.identity";
}

/// Registers every built-in operator into `registry`.
///
/// Relational composites look up equality and ordering in `registry`, so the
/// groups must run in this order.
pub fn register_builtins(registry: &mut OperatorRegistry) -> Result<(), RegistryError> {
    logical::register(registry)?;
    arithmetic::register(registry)?;
    integer::register(registry)?;
    relational::register(registry)?;
    binary::register(registry)?;
    string_ops::register(registry)?;
    double_ops::register(registry)?;
    list_ops::register(registry)?;
    general::register(registry)?;
    Ok(())
}

#[cfg(test)]
mod test_support {
    use std::sync::Arc;

    use crate::{
        operator::{Operator, registry},
        runtime::{EvalResult, variable::VariableRef},
    };

    pub(super) fn builtin(unique_name: &str) -> Arc<Operator> {
        registry::global()
            .require(unique_name)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub(super) fn eval(unique_name: &str, inputs: &[VariableRef]) -> EvalResult {
        builtin(unique_name).evaluate(inputs)
    }
}

#[cfg(test)]
mod arithmetic_test;
#[cfg(test)]
mod relational_test;
