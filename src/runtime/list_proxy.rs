//! List values as lazy views.
//!
//! A list value never owns a materialised sequence by contract: it wraps a
//! [`ListProxy`] that reports its length and produces elements on demand.
//! Host adapters back proxies with their own collections (inventories and
//! the like) through [`FactoryList`].
use std::{fmt, rc::Rc};

use crate::runtime::{EvalResult, error::EvaluationError, value::Value, value_type::ValueType};

pub trait ListProxy {
    fn element_type(&self) -> &'static ValueType;

    /// Number of elements, answered without producing them.
    fn len(&self) -> usize;

    /// Element at `index`. Called once per access, nothing is cached.
    fn get(&self, index: usize) -> EvalResult;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Proxy over values that are already in memory.
pub struct MaterializedList {
    element_type: &'static ValueType,
    values: Rc<[Value]>,
}

impl MaterializedList {
    pub fn new(element_type: &'static ValueType, values: impl Into<Rc<[Value]>>) -> Self {
        Self {
            element_type,
            values: values.into(),
        }
    }
}

impl ListProxy for MaterializedList {
    fn element_type(&self) -> &'static ValueType {
        self.element_type
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> EvalResult {
        self.values
            .get(index)
            .cloned()
            .ok_or(EvaluationError::IndexOutOfBounds {
                index: index as i64,
                length: self.values.len(),
            })
    }
}

type LengthFn = Box<dyn Fn() -> usize>;
type ElementFn = Box<dyn Fn(usize) -> EvalResult>;

/// Proxy that asks a host collection for its size and elements.
pub struct FactoryList {
    element_type: &'static ValueType,
    length: LengthFn,
    element: ElementFn,
}

impl FactoryList {
    pub fn new(
        element_type: &'static ValueType,
        length: impl Fn() -> usize + 'static,
        element: impl Fn(usize) -> EvalResult + 'static,
    ) -> Self {
        Self {
            element_type,
            length: Box::new(length),
            element: Box::new(element),
        }
    }
}

impl ListProxy for FactoryList {
    fn element_type(&self) -> &'static ValueType {
        self.element_type
    }

    fn len(&self) -> usize {
        (self.length)()
    }

    fn get(&self, index: usize) -> EvalResult {
        (self.element)(index)
    }
}

/// Payload of a list [`Value`]: a shared handle to a proxy.
#[derive(Clone)]
pub struct ValueList(Rc<dyn ListProxy>);

impl ValueList {
    pub fn new(proxy: impl ListProxy + 'static) -> Self {
        ValueList(Rc::new(proxy))
    }

    pub fn of(element_type: &'static ValueType, values: Vec<Value>) -> Self {
        Self::new(MaterializedList::new(element_type, values))
    }

    pub fn element_type(&self) -> &'static ValueType {
        self.0.element_type()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> EvalResult {
        self.0.get(index)
    }

    /// Produces every element; fails on the first failing accessor.
    pub fn to_vec(&self) -> EvalResult<Vec<Value>> {
        (0..self.len()).map(|index| self.get(index)).collect()
    }

    pub fn ptr_eq(&self, other: &ValueList) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueList")
            .field("element_type", &self.element_type())
            .field("len", &self.len())
            .finish()
    }
}

impl PartialEq for ValueList {
    /// Element-wise equality; lists whose elements cannot be produced are
    /// only equal to themselves.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.element_type() != other.element_type() || self.len() != other.len() {
            return false;
        }
        match (self.to_vec(), other.to_vec()) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    }
}
