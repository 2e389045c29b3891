//! Shared builder prototypes.
//!
//! Each template fixes the kind, signature, output type and render pattern of
//! a family of operators. Definitions clone a template and fill in symbol,
//! name and function; the template itself is never modified.
use std::sync::LazyLock;

use crate::{
    operator::{Operator, OperatorBuilder, RenderPattern, validation::validate_uniform},
    runtime::{
        value_type::{BOOLEAN, DOUBLE, INTEGER, LIST, NUMBER, STRING, ValueType},
        variable::VariableRef,
    },
};

/// Output type of slot 0, for operators that return their operands' type.
pub fn first_input_type(_: &Operator, inputs: &[VariableRef]) -> Option<&'static ValueType> {
    inputs.first().map(|input| input.value_type())
}

fn template(
    kind: &str,
    arity: usize,
    input_type: &'static ValueType,
    output_type: &'static ValueType,
    render_pattern: RenderPattern,
) -> OperatorBuilder {
    OperatorBuilder::new()
        .kind(kind)
        .input_type_n(arity, input_type)
        .output_type(output_type)
        .render_pattern(render_pattern)
}

pub static LOGICAL_1_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("logical", 1, &BOOLEAN, &BOOLEAN, RenderPattern::Prefix));
pub static LOGICAL_2: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("logical", 2, &BOOLEAN, &BOOLEAN, RenderPattern::Infix));

pub static ARITHMETIC_2: LazyLock<OperatorBuilder> = LazyLock::new(|| {
    template("arithmetic", 2, &NUMBER, &NUMBER, RenderPattern::Infix)
        .type_validator(validate_uniform)
        .output_type_deriver(first_input_type)
});
pub static ARITHMETIC_2_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| ARITHMETIC_2.clone().render_pattern(RenderPattern::Prefix));

pub static INTEGER_1_SUFFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("integer", 1, &INTEGER, &INTEGER, RenderPattern::Suffix));
pub static INTEGER_2: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("integer", 2, &INTEGER, &INTEGER, RenderPattern::Infix));

/// Relational operators all answer a boolean; arity and inputs vary.
pub static RELATIONAL: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("relational", 0, &NUMBER, &BOOLEAN, RenderPattern::Infix));
pub static RELATIONAL_2: LazyLock<OperatorBuilder> = LazyLock::new(|| {
    RELATIONAL
        .clone()
        .input_type_n(2, &NUMBER)
        .type_validator(validate_uniform)
});

pub static BINARY_1_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("binary", 1, &INTEGER, &INTEGER, RenderPattern::Prefix));
pub static BINARY_2: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("binary", 2, &INTEGER, &INTEGER, RenderPattern::Infix));

pub static STRING_1_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("string", 1, &STRING, &STRING, RenderPattern::Prefix));
pub static STRING_2: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("string", 2, &STRING, &STRING, RenderPattern::Infix));

pub static DOUBLE_1_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("double", 1, &DOUBLE, &DOUBLE, RenderPattern::Prefix));

pub static LIST_1_PREFIX: LazyLock<OperatorBuilder> =
    LazyLock::new(|| template("list", 1, &LIST, &LIST, RenderPattern::Prefix));

pub static GENERAL: LazyLock<OperatorBuilder> =
    LazyLock::new(|| OperatorBuilder::new().kind("general").render_pattern(RenderPattern::Prefix));
