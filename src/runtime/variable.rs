use std::{fmt, rc::Rc, sync::Arc};

use tracing::debug;

use crate::{
    operator::{Operator, validation::TypeValidationError},
    runtime::{EvalResult, value::Value, value_type::ValueType},
};

/// Lazy handle to a value.
///
/// `value_type` is known before anything is evaluated so that wirings can be
/// type-checked at construction time. `value` may be called any number of
/// times and re-evaluates on every call.
pub trait Variable {
    fn value_type(&self) -> &'static ValueType;

    fn value(&self) -> EvalResult;
}

/// Variables are owned by one expression graph and never shared across threads.
pub type VariableRef = Rc<dyn Variable>;

/// A variable holding an already resolved value.
#[derive(Debug, Clone)]
pub struct Constant(Value);

impl Constant {
    pub fn new(value: impl Into<Value>) -> Self {
        Constant(value.into())
    }

    pub fn shared(value: impl Into<Value>) -> VariableRef {
        Rc::new(Self::new(value))
    }
}

impl Variable for Constant {
    fn value_type(&self) -> &'static ValueType {
        self.0.value_type()
    }

    fn value(&self) -> EvalResult {
        Ok(self.0.clone())
    }
}

/// A variable whose value is produced by a closure on every read.
pub struct Deferred {
    value_type: &'static ValueType,
    producer: Box<dyn Fn() -> EvalResult>,
}

impl Deferred {
    pub fn new(
        value_type: &'static ValueType,
        producer: impl Fn() -> EvalResult + 'static,
    ) -> Self {
        Self {
            value_type,
            producer: Box::new(producer),
        }
    }

    pub fn shared(
        value_type: &'static ValueType,
        producer: impl Fn() -> EvalResult + 'static,
    ) -> VariableRef {
        Rc::new(Self::new(value_type, producer))
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({})", self.value_type)
    }
}

impl Variable for Deferred {
    fn value_type(&self) -> &'static ValueType {
        self.value_type
    }

    fn value(&self) -> EvalResult {
        (self.producer)()
    }
}

/// An operator applied to input variables: one node of an expression graph.
pub struct OperatorVariable {
    operator: Arc<Operator>,
    inputs: Vec<VariableRef>,
}

impl OperatorVariable {
    /// Wires `inputs` into `operator` without type-checking.
    pub fn new(operator: Arc<Operator>, inputs: Vec<VariableRef>) -> Self {
        Self { operator, inputs }
    }

    /// Wires `inputs` into `operator` after validating the declared input types.
    pub fn checked(
        operator: Arc<Operator>,
        inputs: Vec<VariableRef>,
    ) -> Result<Self, TypeValidationError> {
        operator.validate_variables(&inputs)?;
        Ok(Self::new(operator, inputs))
    }

    pub fn shared(operator: Arc<Operator>, inputs: Vec<VariableRef>) -> VariableRef {
        Rc::new(Self::new(operator, inputs))
    }

    pub fn operator(&self) -> &Arc<Operator> {
        &self.operator
    }

    pub fn inputs(&self) -> &[VariableRef] {
        &self.inputs
    }
}

impl fmt::Debug for OperatorVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorVariable")
            .field("operator", &self.operator.unique_name())
            .field("inputs", &self.inputs.len())
            .finish()
    }
}

impl Variable for OperatorVariable {
    fn value_type(&self) -> &'static ValueType {
        self.operator.conditional_output_type(&self.inputs)
    }

    fn value(&self) -> EvalResult {
        self.operator.evaluate(&self.inputs).inspect_err(|err| {
            debug!(operator = %self.operator.unique_name(), error = %err, "node evaluation failed");
        })
    }
}
