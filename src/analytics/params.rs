use std::collections::BTreeMap;

use serde::Serialize;

/// Value of a single event parameter. The tag-management consumer accepts
/// strings, numbers, and flags; nested structures are never pushed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Flag(bool),
}

pub type EventParams = BTreeMap<String, ParamValue>;

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

macro_rules! impl_integer_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Integer(value as i64)
                }
            }
        )*
    };
}

impl_integer_param!(i8, i16, i32, i64, u8, u16, u32, usize);

/// Builds a parameter entry; keeps call sites down to one line per field.
pub(crate) fn entry(key: &str, value: impl Into<ParamValue>) -> (String, ParamValue) {
    (key.to_owned(), value.into())
}
