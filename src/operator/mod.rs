//! Operator contract.
//!
//! An [`Operator`] is an immutable descriptor plus a pure function from an
//! ordered list of variables to one value. Operators are shared through `Arc`
//! by every graph that uses them and by the registry, so they are
//! `Send + Sync`; the variables they consume are not.
use std::{fmt, rc::Rc, sync::Arc};

use serde::Serialize;
use tracing::trace;

use crate::runtime::{
    EvalResult,
    list_proxy::ValueList,
    value::Value,
    value_type::ValueType,
    variable::VariableRef,
};

pub mod builder;
pub mod composition;
pub(crate) mod helpers;
pub mod registry;
pub mod templates;
pub mod validation;

pub use builder::{BuildError, OperatorBuilder};
pub use composition::CompositionBuilder;
pub use registry::{OperatorRegistry, RegistryError};
pub use validation::TypeValidationError;

use helpers::{check_arity, missing_input, type_error};

/// How the UI lays an operator out relative to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderPattern {
    /// `op a b`
    Prefix,
    /// `a op b`
    #[default]
    Infix,
    /// `a op`
    Suffix,
}

pub type RawFn = dyn Fn(&Operator, &[VariableRef]) -> EvalResult + Send + Sync;
pub type SafeFn = dyn Fn(&SafeVariables<'_>) -> EvalResult + Send + Sync;

/// The two dispatch shapes of an operator function.
#[derive(Clone)]
pub enum OperatorFunction {
    /// Receives the variables untouched and decides what to evaluate. Arity is
    /// the function's own business. Short-circuiting operators use this shape.
    Raw(Arc<RawFn>),
    /// Runs after the arity check and reads inputs through [`SafeVariables`],
    /// which type-checks every value it produces.
    Safe(Arc<SafeFn>),
}

impl OperatorFunction {
    pub fn raw(f: impl Fn(&Operator, &[VariableRef]) -> EvalResult + Send + Sync + 'static) -> Self {
        OperatorFunction::Raw(Arc::new(f))
    }

    pub fn safe(f: impl Fn(&SafeVariables<'_>) -> EvalResult + Send + Sync + 'static) -> Self {
        OperatorFunction::Safe(Arc::new(f))
    }
}

impl fmt::Debug for OperatorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorFunction::Raw(_) => f.write_str("Raw(..)"),
            OperatorFunction::Safe(_) => f.write_str("Safe(..)"),
        }
    }
}

/// Replaces the default type check of an operator.
pub type TypeValidator = Arc<
    dyn Fn(&Operator, &[Option<&'static ValueType>]) -> Result<(), TypeValidationError>
        + Send
        + Sync,
>;

/// Resolves the output type from the actual inputs; `None` falls back to the
/// operator's static output type. Must be side-effect free.
pub type OutputTypeDeriver =
    Arc<dyn Fn(&Operator, &[VariableRef]) -> Option<&'static ValueType> + Send + Sync>;

pub struct Operator {
    symbol: String,
    name: String,
    kind: String,
    unique_name: String,
    input_types: Vec<&'static ValueType>,
    output_type: &'static ValueType,
    render_pattern: RenderPattern,
    function: OperatorFunction,
    type_validator: Option<TypeValidator>,
    output_type_deriver: Option<OutputTypeDeriver>,
}

impl Operator {
    /// Short token shown on the node, e.g. `+` or `get`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Identifier within the operator's kind, e.g. `addition`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group label such as `arithmetic` or `relational`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Catalogue key, `<kind>.<name>`.
    pub fn unique_name(&self) -> &str {
        &self.unique_name
    }

    /// Localization key of the operator's display name.
    pub fn unlocalized_name(&self) -> String {
        format!("operator.operators.{}.name", self.unique_name)
    }

    pub fn input_types(&self) -> &[&'static ValueType] {
        &self.input_types
    }

    pub fn required_input_length(&self) -> usize {
        self.input_types.len()
    }

    /// Statically declared output type.
    pub fn output_type(&self) -> &'static ValueType {
        self.output_type
    }

    /// Output type for these actual inputs, falling back to [`Operator::output_type`].
    pub fn conditional_output_type(&self, inputs: &[VariableRef]) -> &'static ValueType {
        self.output_type_deriver
            .as_ref()
            .and_then(|derive| derive(self, inputs))
            .unwrap_or(self.output_type)
    }

    pub fn render_pattern(&self) -> RenderPattern {
        self.render_pattern
    }

    /// Checks a candidate wiring without evaluating anything.
    pub fn validate_types(
        &self,
        input: &[Option<&'static ValueType>],
    ) -> Result<(), TypeValidationError> {
        match &self.type_validator {
            Some(validate) => validate(self, input),
            None => validation::validate_default(self, input),
        }
    }

    /// [`Operator::validate_types`] over the declared types of `inputs`.
    pub fn validate_variables(&self, inputs: &[VariableRef]) -> Result<(), TypeValidationError> {
        let types: Vec<_> = inputs.iter().map(|input| Some(input.value_type())).collect();
        self.validate_types(&types)
    }

    pub fn evaluate(&self, variables: &[VariableRef]) -> EvalResult {
        trace!(operator = %self.unique_name, inputs = variables.len(), "evaluate");
        match &self.function {
            OperatorFunction::Raw(function) => function(self, variables),
            OperatorFunction::Safe(function) => {
                check_arity(self, variables)?;
                function(&SafeVariables::new(self, variables))
            }
        }
    }

    pub fn descriptor(&self) -> OperatorDescriptor {
        OperatorDescriptor {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            unique_name: self.unique_name.clone(),
            kind: self.kind.clone(),
            inputs: self.input_types.iter().map(|ty| ty.id()).collect(),
            output: self.output_type.id(),
            render_pattern: self.render_pattern,
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("unique_name", &self.unique_name)
            .field("input_types", &self.input_types)
            .field("output_type", &self.output_type)
            .field("function", &self.function)
            .finish()
    }
}

/// Serializable summary of an operator, for UI and tooling consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorDescriptor {
    pub symbol: String,
    pub name: String,
    pub unique_name: String,
    pub kind: String,
    pub inputs: Vec<&'static str>,
    pub output: &'static str,
    pub render_pattern: RenderPattern,
}

/// Typed, on-demand access to the inputs of a safe operator function.
///
/// Nothing is evaluated until a slot is read, and each read evaluates again.
/// Every value is checked against the operator's declared slot type.
pub struct SafeVariables<'a> {
    operator: &'a Operator,
    variables: &'a [VariableRef],
}

impl<'a> SafeVariables<'a> {
    pub fn new(operator: &'a Operator, variables: &'a [VariableRef]) -> Self {
        Self {
            operator,
            variables,
        }
    }

    pub fn operator(&self) -> &Operator {
        self.operator
    }

    pub fn variables(&self) -> &[VariableRef] {
        self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluates slot `index` and checks it against the declared slot type.
    pub fn value(&self, index: usize) -> EvalResult {
        let variable = self
            .variables
            .get(index)
            .ok_or_else(|| missing_input(self.operator, self.variables.len()))?;
        let value = variable.value()?;
        match self.operator.input_types.get(index) {
            Some(expected) if !expected.accepts(value.value_type()) => Err(type_error(
                self.operator,
                index,
                expected,
                value.value_type(),
            )),
            _ => Ok(value),
        }
    }

    pub fn boolean(&self, index: usize) -> EvalResult<bool> {
        self.extract(index, "boolean", Value::as_boolean)
    }

    pub fn integer(&self, index: usize) -> EvalResult<i32> {
        self.extract(index, "integer", Value::as_integer)
    }

    pub fn double(&self, index: usize) -> EvalResult<f64> {
        self.extract(index, "double", Value::as_double)
    }

    pub fn string(&self, index: usize) -> EvalResult<Rc<str>> {
        self.extract(index, "string", |value| match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn list(&self, index: usize) -> EvalResult<ValueList> {
        self.extract(index, "list", |value| value.as_list().cloned())
    }

    fn extract<T>(
        &self,
        index: usize,
        expected: &'static str,
        get: impl FnOnce(&Value) -> Option<T>,
    ) -> EvalResult<T> {
        let value = self.value(index)?;
        get(&value).ok_or_else(|| helpers::payload_error(self.operator, index, expected, &value))
    }
}
