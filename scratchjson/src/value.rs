// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::ParseError;

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON value.
///
/// String, array and object payloads are exclusively owned, exactly sized heap
/// allocations. Dropping a `Value` releases its whole subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`, also the state of a new or destroyed value.
    #[default]
    Null,
    False,
    True,
    Number(f64),
    /// Raw string bytes, without the surrounding quotes.
    String(Box<[u8]>),
    Array(Box<[Value]>),
    /// Members in input order. Duplicate keys are kept.
    Object(Box<[Member]>),
}

/// A key/value pair inside a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    key: Box<[u8]>,
    value: Value,
}

impl Member {
    pub fn new(key: impl Into<Box<[u8]>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_parts(self) -> (Box<[u8]>, Value) {
        (self.key, self.value)
    }
}

#[cold]
#[track_caller]
fn type_mismatch(accessor: &str, found: ValueType) -> ! {
    panic!("{accessor} called on a {found:?} value")
}

impl Value {
    /// Creates a `Null` value.
    pub const fn new() -> Self {
        Value::Null
    }

    /// Replaces `self` with the result of parsing `input`.
    ///
    /// The previous payload is released first, so on error `self` is `Null`.
    pub fn parse_from(&mut self, input: impl AsRef<[u8]>) -> Result<(), ParseError> {
        self.destroy();
        *self = crate::parse(input.as_ref())?;
        Ok(())
    }

    /// Releases the payload and resets the tag to `Null`.
    ///
    /// Nested strings, arrays and objects are released recursively. Calling
    /// this on a `Null` value does nothing.
    pub fn destroy(&mut self) {
        *self = Value::Null;
    }

    /// Alias of [`destroy`](Self::destroy).
    pub fn set_null(&mut self) {
        self.destroy();
    }

    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// # Panics
    /// Unless the value is `True` or `False`.
    #[track_caller]
    pub fn get_boolean(&self) -> bool {
        self.as_bool()
            .unwrap_or_else(|| type_mismatch("get_boolean", self.get_type()))
    }

    pub fn set_boolean(&mut self, b: bool) {
        self.destroy();
        *self = if b { Value::True } else { Value::False };
    }

    /// # Panics
    /// Unless the value is a `Number`.
    #[track_caller]
    pub fn get_number(&self) -> f64 {
        self.as_f64()
            .unwrap_or_else(|| type_mismatch("get_number", self.get_type()))
    }

    pub fn set_number(&mut self, n: f64) {
        self.destroy();
        *self = Value::Number(n);
    }

    /// # Panics
    /// Unless the value is a `String`.
    #[track_caller]
    pub fn get_string(&self) -> &[u8] {
        self.as_bytes()
            .unwrap_or_else(|| type_mismatch("get_string", self.get_type()))
    }

    /// # Panics
    /// Unless the value is a `String`.
    #[track_caller]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Copies `s` into a new exactly sized buffer owned by this value.
    pub fn set_string(&mut self, s: &[u8]) {
        self.destroy();
        *self = Value::String(Box::from(s));
    }

    /// # Panics
    /// Unless the value is an `Array`.
    #[track_caller]
    pub fn get_array_size(&self) -> usize {
        self.array_elements("get_array_size").len()
    }

    /// # Panics
    /// Unless the value is an `Array` with more than `index` elements.
    #[track_caller]
    pub fn get_array_element(&self, index: usize) -> &Value {
        let elements = self.array_elements("get_array_element");
        assert!(
            index < elements.len(),
            "array index {index} out of range for size {}",
            elements.len()
        );
        &elements[index]
    }

    /// # Panics
    /// Unless the value is an `Object`.
    #[track_caller]
    pub fn get_object_size(&self) -> usize {
        self.object_members("get_object_size").len()
    }

    /// # Panics
    /// Unless the value is an `Object` with more than `index` members.
    #[track_caller]
    pub fn get_object_key(&self, index: usize) -> &[u8] {
        self.object_member("get_object_key", index).key()
    }

    /// # Panics
    /// Unless the value is an `Object` with more than `index` members.
    #[track_caller]
    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.object_member("get_object_key_length", index).key_len()
    }

    /// # Panics
    /// Unless the value is an `Object` with more than `index` members.
    #[track_caller]
    pub fn get_object_value(&self, index: usize) -> &Value {
        self.object_member("get_object_value", index).value()
    }

    #[track_caller]
    fn array_elements(&self, accessor: &str) -> &[Value] {
        self.as_array()
            .unwrap_or_else(|| type_mismatch(accessor, self.get_type()))
    }

    #[track_caller]
    fn object_members(&self, accessor: &str) -> &[Member] {
        self.as_object()
            .unwrap_or_else(|| type_mismatch(accessor, self.get_type()))
    }

    #[track_caller]
    fn object_member(&self, accessor: &str, index: usize) -> &Member {
        let members = self.object_members(accessor);
        assert!(
            index < members.len(),
            "object index {index} out of range for size {}",
            members.len()
        );
        &members[index]
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| core::str::from_utf8(s).ok())
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut [Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut [Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// First member whose key equals `key`.
    ///
    /// Objects may hold duplicate keys; later duplicates are only reachable by index.
    pub fn find_member(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        self.as_object()?
            .iter()
            .find(|member| member.key() == key)
            .map(Member::value)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&[u8]> for Value {
    fn from(s: &[u8]) -> Self {
        Value::String(Box::from(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.as_bytes())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements.into_boxed_slice())
    }
}

impl From<Vec<Member>> for Value {
    fn from(members: Vec<Member>) -> Self {
        Value::Object(members.into_boxed_slice())
    }
}
