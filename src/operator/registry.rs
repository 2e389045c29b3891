//! Operator catalogue.
//!
//! A registry maps symbols and unique names (`<kind>.<name>`) to operators,
//! both keys unique, and remembers registration order. [`global`] is the
//! process-wide catalogue of built-ins, built on first use and read-only
//! afterwards; tests and hosts that need isolation build their own registry.
use std::{collections::HashMap, sync::{Arc, LazyLock}};

use thiserror::Error;
use tracing::debug;

use crate::operator::{BuildError, Operator, OperatorDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("an operator with symbol `{0}` is already registered")]
    DuplicateSymbol(String),
    #[error("an operator named `{0}` is already registered")]
    DuplicateName(String),
    #[error("no operator named `{0}` is registered")]
    UnknownOperator(String),
    #[error(transparent)]
    Build(#[from] BuildError),
}

#[derive(Debug, Default)]
pub struct OperatorRegistry {
    operators: Vec<Arc<Operator>>,
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the full built-in catalogue.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        crate::operators::register_builtins(&mut registry)?;
        Ok(registry)
    }

    /// Adds `operator` and hands back the shared handle that lookups return.
    pub fn register(&mut self, operator: impl Into<Arc<Operator>>) -> Result<Arc<Operator>, RegistryError> {
        let operator = operator.into();
        if self.by_symbol.contains_key(operator.symbol()) {
            return Err(RegistryError::DuplicateSymbol(operator.symbol().to_string()));
        }
        if self.by_name.contains_key(operator.unique_name()) {
            return Err(RegistryError::DuplicateName(operator.unique_name().to_string()));
        }

        let index = self.operators.len();
        self.by_symbol.insert(operator.symbol().to_string(), index);
        self.by_name.insert(operator.unique_name().to_string(), index);
        self.operators.push(Arc::clone(&operator));
        debug!(
            symbol = operator.symbol(),
            name = operator.unique_name(),
            "registered operator"
        );
        Ok(operator)
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Option<&Arc<Operator>> {
        self.by_symbol.get(symbol).map(|&index| &self.operators[index])
    }

    /// Looks up by unique name, e.g. `relational.equals`.
    pub fn get_by_name(&self, unique_name: &str) -> Option<&Arc<Operator>> {
        self.by_name.get(unique_name).map(|&index| &self.operators[index])
    }

    /// Like [`OperatorRegistry::get_by_name`], as an error when absent.
    pub fn require(&self, unique_name: &str) -> Result<Arc<Operator>, RegistryError> {
        self.get_by_name(unique_name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownOperator(unique_name.to_string()))
    }

    /// Every operator in registration order.
    pub fn operators(&self) -> &[Arc<Operator>] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn describe(&self) -> Vec<OperatorDescriptor> {
        self.operators.iter().map(|operator| operator.descriptor()).collect()
    }
}

static GLOBAL: LazyLock<OperatorRegistry> = LazyLock::new(|| {
    match OperatorRegistry::with_builtins() {
        Ok(registry) => registry,
        // The built-in catalogue is fixed; a collision is a defect in this crate.
        Err(err) => panic!("built-in operator catalogue is inconsistent: {}", err),
    }
});

/// The process-wide built-in catalogue.
pub fn global() -> &'static OperatorRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{operator::templates::LOGICAL_2, runtime::value::Value};

    fn probe(symbol: &str, name: &str) -> Operator {
        LOGICAL_2
            .clone()
            .symbol(symbol)
            .name(name)
            .raw_function(|_, _| Ok(Value::Boolean(true)))
            .build()
            .unwrap()
    }

    #[test]
    fn lookups_return_the_registered_handle() {
        let mut registry = OperatorRegistry::new();
        let handle = registry.register(probe("&?", "probe")).unwrap();

        assert!(Arc::ptr_eq(registry.get_by_symbol("&?").unwrap(), &handle));
        assert!(Arc::ptr_eq(
            registry.get_by_name("logical.probe").unwrap(),
            &handle
        ));
        assert!(registry.get_by_name("probe").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let mut registry = OperatorRegistry::new();
        registry.register(probe("&?", "first")).unwrap();
        let err = registry.register(probe("&?", "second")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSymbol("&?".to_string()));
        assert_eq!(registry.len(), 1);
        assert!(registry.get_by_name("logical.second").is_none());
    }

    #[test]
    fn duplicate_unique_name_is_rejected() {
        let mut registry = OperatorRegistry::new();
        registry.register(probe("a?", "probe")).unwrap();
        let err = registry.register(probe("b?", "probe")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("logical.probe".to_string()));
        assert!(registry.get_by_symbol("b?").is_none());
    }

    #[test]
    fn require_reports_unknown_names() {
        let registry = OperatorRegistry::new();
        assert_eq!(
            registry.require("logical.and").unwrap_err(),
            RegistryError::UnknownOperator("logical.and".to_string())
        );
    }

    #[test]
    fn global_registry_is_built_once() {
        assert!(std::ptr::eq(global(), global()));
        assert!(!global().is_empty());
    }
}
