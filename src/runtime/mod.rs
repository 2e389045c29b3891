//! Runtime value model: value types, categories, values, lists and variables.
//!
//! # Ownership
//! Value types are `static` and live for the whole process. Values and
//! variables use `Rc` and belong to the expression graph that created them;
//! they are never shared between threads. Values are immutable and form
//! acyclic graphs, so reference counting never leaks.
pub mod category;
pub mod error;
pub mod list_proxy;
pub mod value;
pub mod value_type;
pub mod variable;

pub use category::Category;
pub use error::EvaluationError;
pub use list_proxy::{FactoryList, ListProxy, MaterializedList, ValueList};
pub use value::{HostObject, Value};
pub use value_type::ValueType;
pub use variable::{Constant, Deferred, OperatorVariable, Variable, VariableRef};

pub type EvalResult<T = value::Value> = Result<T, EvaluationError>;

#[cfg(test)]
mod category_test;
