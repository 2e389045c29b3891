//! Operators derived by composing existing ones.
//!
//! `CompositionBuilder::new(outer).apply([a, b])` yields an operator that
//! evaluates `a` and `b` against its own inputs and feeds the two results to
//! `outer`. No evaluation logic is written for the composite itself.
use std::sync::Arc;

use crate::{
    operator::{
        BuildError, Operator, OperatorBuilder, RenderPattern,
        validation::validate_default,
    },
    runtime::{
        value_type::{ANY, ValueType},
        variable::{Constant, Deferred, VariableRef},
    },
};

pub struct CompositionBuilder {
    outer: Arc<Operator>,
    inners: Vec<Arc<Operator>>,
}

impl CompositionBuilder {
    pub fn new(outer: Arc<Operator>) -> Self {
        Self {
            outer,
            inners: Vec::new(),
        }
    }

    /// Inner operators, one per input of the outer operator, in order.
    pub fn apply(mut self, inners: impl IntoIterator<Item = Arc<Operator>>) -> Self {
        self.inners.extend(inners);
        self
    }

    pub fn build(
        self,
        symbol: &str,
        name: &str,
        render_pattern: RenderPattern,
        kind: &str,
    ) -> Result<Operator, BuildError> {
        let composite = format!("{}.{}", kind, name);
        if self.inners.len() != self.outer.required_input_length() || self.inners.is_empty() {
            return Err(BuildError::InnerCountMismatch {
                composite,
                expected: self.outer.required_input_length(),
                got: self.inners.len(),
            });
        }
        let arity = self.inners[0].required_input_length();
        if let Some(other) = self
            .inners
            .iter()
            .find(|inner| inner.required_input_length() != arity)
        {
            return Err(BuildError::InnerArityMismatch {
                composite,
                first: arity,
                other: other.required_input_length(),
            });
        }

        let input_types = narrowest_signature(&self.inners, arity);
        let output_type = self.outer.output_type();
        let Self { outer, inners } = self;
        let validated = inners.clone();
        let derived_outer = Arc::clone(&outer);
        let derived_inners = inners.clone();

        OperatorBuilder::new()
            .kind(kind)
            .symbol(symbol)
            .name(name)
            .render_pattern(render_pattern)
            .input_types(input_types)
            .output_type(output_type)
            .raw_function(move |_, variables| {
                let values = inners
                    .iter()
                    .map(|inner| inner.evaluate(variables).map(Constant::shared))
                    .collect::<Result<Vec<_>, _>>()?;
                outer.evaluate(&values)
            })
            .type_validator(move |composite, input| {
                validate_default(composite, input)?;
                validated
                    .iter()
                    .try_for_each(|inner| inner.validate_types(input))
            })
            .output_type_deriver(move |_, inputs| {
                Some(derived_outer.conditional_output_type(&inner_results(&derived_inners, inputs)))
            })
            .build()
    }
}

/// The inners applied to `inputs`, unevaluated, each typed by its own
/// conditional output type. Lets the outer's deriver see concrete types.
fn inner_results(inners: &[Arc<Operator>], inputs: &[VariableRef]) -> Vec<VariableRef> {
    inners
        .iter()
        .map(|inner| {
            let value_type = inner.conditional_output_type(inputs);
            let inner = Arc::clone(inner);
            let inputs = inputs.to_vec();
            Deferred::shared(value_type, move || inner.evaluate(&inputs))
        })
        .collect()
}

/// Per slot, the narrowest type any inner operator declares.
fn narrowest_signature(inners: &[Arc<Operator>], arity: usize) -> Vec<&'static ValueType> {
    (0..arity)
        .map(|slot| {
            let declared = inners.iter().map(|inner| inner.input_types()[slot]);
            declared
                .reduce(|narrowest, candidate| {
                    if candidate.specificity() > narrowest.specificity() {
                        candidate
                    } else {
                        narrowest
                    }
                })
                .unwrap_or(&ANY)
        })
        .collect()
}
