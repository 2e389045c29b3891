use std::sync::Arc;

use thiserror::Error;

use crate::{
    operator::{
        Operator, OperatorFunction, OutputTypeDeriver, RenderPattern, SafeVariables,
        TypeValidationError, TypeValidator,
    },
    runtime::{EvalResult, value_type::ValueType, variable::VariableRef},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("operator builder is missing its {0}")]
    MissingField(&'static str),
    #[error("composite {composite} needs {expected} inner operators for its outer operator, got {got}")]
    InnerCountMismatch {
        composite: String,
        expected: usize,
        got: usize,
    },
    #[error("inner operators of {composite} disagree on arity: {first} and {other}")]
    InnerArityMismatch {
        composite: String,
        first: usize,
        other: usize,
    },
}

/// Configuration record for an [`Operator`].
///
/// Every setter consumes the record and returns the changed copy, so a
/// template is specialised by cloning it first:
///
/// ```
/// use opgraph::operator::{OperatorFunction, templates::INTEGER_1_SUFFIX};
/// use opgraph::runtime::Value;
///
/// let double = INTEGER_1_SUFFIX
///     .clone()
///     .symbol("*2")
///     .name("double")
///     .function(OperatorFunction::safe(|vars| Ok(Value::Integer(vars.integer(0)? * 2))))
///     .build()
///     .unwrap();
/// assert_eq!(double.unique_name(), "integer.double");
/// ```
#[derive(Clone, Default)]
pub struct OperatorBuilder {
    symbol: Option<String>,
    name: Option<String>,
    kind: Option<String>,
    input_types: Vec<&'static ValueType>,
    output_type: Option<&'static ValueType>,
    render_pattern: RenderPattern,
    function: Option<OperatorFunction>,
    type_validator: Option<TypeValidator>,
    output_type_deriver: Option<OutputTypeDeriver>,
}

impl OperatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Uses `token` as both symbol and name, for word-like operators.
    pub fn symbol_operator(self, token: &str) -> Self {
        self.symbol(token).name(token)
    }

    pub fn input_types(mut self, input_types: impl Into<Vec<&'static ValueType>>) -> Self {
        self.input_types = input_types.into();
        self
    }

    /// `count` inputs of the same type.
    pub fn input_type_n(mut self, count: usize, input_type: &'static ValueType) -> Self {
        self.input_types = vec![input_type; count];
        self
    }

    /// Keeps the arity and replaces every slot type with `input_type`.
    pub fn input_type(self, input_type: &'static ValueType) -> Self {
        let count = self.input_types.len();
        self.input_type_n(count, input_type)
    }

    pub fn output_type(mut self, output_type: &'static ValueType) -> Self {
        self.output_type = Some(output_type);
        self
    }

    pub fn render_pattern(mut self, render_pattern: RenderPattern) -> Self {
        self.render_pattern = render_pattern;
        self
    }

    pub fn function(mut self, function: OperatorFunction) -> Self {
        self.function = Some(function);
        self
    }

    pub fn raw_function(
        self,
        f: impl Fn(&Operator, &[VariableRef]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.function(OperatorFunction::raw(f))
    }

    pub fn safe_function(
        self,
        f: impl Fn(&SafeVariables<'_>) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.function(OperatorFunction::safe(f))
    }

    pub fn type_validator(
        mut self,
        validator: impl Fn(&Operator, &[Option<&'static ValueType>]) -> Result<(), TypeValidationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.type_validator = Some(Arc::new(validator));
        self
    }

    pub fn output_type_deriver(
        mut self,
        deriver: impl Fn(&Operator, &[VariableRef]) -> Option<&'static ValueType> + Send + Sync + 'static,
    ) -> Self {
        self.output_type_deriver = Some(Arc::new(deriver));
        self
    }

    pub fn build(self) -> Result<Operator, BuildError> {
        let kind = self.kind.ok_or(BuildError::MissingField("kind"))?;
        let name = self.name.ok_or(BuildError::MissingField("name"))?;
        let symbol = self.symbol.ok_or(BuildError::MissingField("symbol"))?;
        let output_type = self.output_type.ok_or(BuildError::MissingField("output type"))?;
        let function = self.function.ok_or(BuildError::MissingField("function"))?;
        Ok(Operator {
            unique_name: format!("{}.{}", kind, name),
            symbol,
            name,
            kind,
            input_types: self.input_types,
            output_type,
            render_pattern: self.render_pattern,
            function,
            type_validator: self.type_validator,
            output_type_deriver: self.output_type_deriver,
        })
    }
}
