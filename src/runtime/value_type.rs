use std::{fmt, ptr};

use serde::{Serialize, Serializer};

use crate::runtime::category::{Category, DoubleOps, IntegerOps, NumberOps};

/// Identity of a kind of value.
///
/// Value types are process-lifetime `static`s and compare by address: two
/// types are equal iff they are the same static, regardless of their ids.
/// A type is either *concrete* (values carry it) or a *category placeholder*
/// (`ANY`, `NUMBER`, `NAMED`) that only appears in operator signatures and
/// accepts every member of its category.
pub struct ValueType {
    id: &'static str,
    categories: &'static [Category],
    placeholder: Option<Category>,
    number_ops: Option<&'static dyn NumberOps>,
}

impl ValueType {
    /// Declares a concrete type belonging to `categories`.
    ///
    /// Host adapters use this for their own object types, typically with
    /// `&[Category::Named]`.
    pub const fn concrete(id: &'static str, categories: &'static [Category]) -> Self {
        Self {
            id,
            categories,
            placeholder: None,
            number_ops: None,
        }
    }

    /// Declares a concrete member of [`Category::Number`] backed by `ops`.
    pub const fn numeric(id: &'static str, ops: &'static dyn NumberOps) -> Self {
        Self {
            id,
            categories: &[Category::Number],
            placeholder: None,
            number_ops: Some(ops),
        }
    }

    const fn placeholder(id: &'static str, category: Category) -> Self {
        Self {
            id,
            categories: &[],
            placeholder: Some(category),
            number_ops: None,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Localization key used by UI layers, e.g. `valuetype.integer`.
    pub fn unlocalized_name(&self) -> String {
        format!("valuetype.{}", self.id)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// The category this placeholder stands for, `None` for concrete types.
    pub fn placeholder_category(&self) -> Option<Category> {
        self.placeholder
    }

    pub fn is_concrete(&self) -> bool {
        self.placeholder.is_none()
    }

    pub fn is_member(&self, category: Category) -> bool {
        category == Category::Any || self.categories.contains(&category)
    }

    pub(crate) fn number_ops(&self) -> Option<&'static dyn NumberOps> {
        self.number_ops
    }

    /// Whether a slot declared with `self` accepts an input of type `actual`.
    ///
    /// Concrete slots accept only themselves. Placeholder slots accept their
    /// category members and the placeholder itself; `ANY` accepts everything.
    pub fn accepts(&self, actual: &ValueType) -> bool {
        match self.placeholder {
            Some(Category::Any) => true,
            Some(category) => ptr::eq(self, actual) || actual.is_member(category),
            None => ptr::eq(self, actual),
        }
    }

    /// Ranks how narrow a slot type is: concrete > category > any.
    pub(crate) fn specificity(&self) -> u8 {
        match self.placeholder {
            None => 2,
            Some(Category::Any) => 0,
            Some(_) => 1,
        }
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for ValueType {}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueType({})", self.id)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id)
    }
}

pub static BOOLEAN: ValueType = ValueType::concrete("boolean", &[]);
pub static INTEGER: ValueType = ValueType::numeric("integer", &IntegerOps);
pub static DOUBLE: ValueType = ValueType::numeric("double", &DoubleOps);
pub static STRING: ValueType = ValueType::concrete("string", &[]);
pub static LIST: ValueType = ValueType::concrete("list", &[]);

pub static ANY: ValueType = ValueType::placeholder("any", Category::Any);
pub static NUMBER: ValueType = ValueType::placeholder("number", Category::Number);
pub static NAMED: ValueType = ValueType::placeholder("named", Category::Named);

/// Built-in types, concrete first, for identity lookups by serialisation layers.
pub static BUILTIN_TYPES: [&ValueType; 8] = [
    &BOOLEAN, &INTEGER, &DOUBLE, &STRING, &LIST, &ANY, &NUMBER, &NAMED,
];

/// Resolves a built-in type from its identity string.
pub fn lookup(id: &str) -> Option<&'static ValueType> {
    BUILTIN_TYPES.iter().copied().find(|ty| ty.id == id)
}
