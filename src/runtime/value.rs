use std::{fmt, rc::Rc};

use crate::runtime::{
    list_proxy::ValueList,
    value_type::{BOOLEAN, DOUBLE, INTEGER, LIST, STRING, ValueType},
};

/// Object supplied by a host adapter (a block, an item, an entity, ...).
///
/// The engine never inspects host objects beyond this trait; their value type
/// is declared by the adapter and normally belongs to `Category::Named`.
pub trait HostObject: fmt::Debug {
    fn value_type(&self) -> &'static ValueType;

    /// Display name used by the `name` operator.
    fn name(&self) -> String;

    /// Host-defined equality. Defaults to same type and same name.
    fn same_as(&self, other: &dyn HostObject) -> bool {
        self.value_type() == other.value_type() && self.name() == other.name()
    }
}

/// Immutable typed payload produced by evaluation.
///
/// Heap payloads are behind `Rc`, so cloning a value is O(1) and never copies
/// strings or list storage. Transformations always build new values.
#[derive(Debug, Clone)]
pub enum Value {
    Boolean(bool),
    /// 32-bit signed integer with wrapping arithmetic.
    Integer(i32),
    Double(f64),
    String(Rc<str>),
    /// Lazily produced sequence.
    List(ValueList),
    /// Host object.
    Object(Rc<dyn HostObject>),
}

impl Value {
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Value::String(value.into())
    }

    pub fn list(element_type: &'static ValueType, values: Vec<Value>) -> Self {
        Value::List(ValueList::of(element_type, values))
    }

    pub fn object(object: impl HostObject + 'static) -> Self {
        Value::Object(Rc::new(object))
    }

    /// The concrete type this value carries.
    pub fn value_type(&self) -> &'static ValueType {
        match self {
            Value::Boolean(_) => &BOOLEAN,
            Value::Integer(_) => &INTEGER,
            Value::Double(_) => &DOUBLE,
            Value::String(_) => &STRING,
            Value::List(_) => &LIST,
            Value::Object(object) => object.value_type(),
        }
    }

    /// Identity of [`Value::value_type`], used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.value_type().id()
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.same_as(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{:?}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::List(list) => {
                let items: Vec<String> = (0..list.len())
                    .map(|index| match list.get(index) {
                        Ok(value) => value.to_string(),
                        Err(_) => "<error>".to_string(),
                    })
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Object(object) => write!(f, "{}", object.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}
