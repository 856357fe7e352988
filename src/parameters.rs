use std::borrow::Cow;
use std::fmt;

/// A launch parameter value before it is stringified into the request body.
///
/// Launch bodies are flat string maps; typed values are converted here, at
/// the boundary, so the signature core only ever sees strings.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue<'a> {
    StringValue(Cow<'a, str>),
    IntValue(i64),
    FloatValue(f64),
    BoolValue(bool),
}

impl<'a> From<&'a str> for ParameterValue<'a> {
    fn from(s: &'a str) -> Self {
        ParameterValue::StringValue(s.into())
    }
}

impl<'a> From<&'a String> for ParameterValue<'a> {
    fn from(s: &'a String) -> Self {
        ParameterValue::StringValue(s.as_str().into())
    }
}

impl From<String> for ParameterValue<'_> {
    fn from(s: String) -> Self {
        ParameterValue::StringValue(s.into())
    }
}

impl From<i64> for ParameterValue<'_> {
    fn from(n: i64) -> Self {
        ParameterValue::IntValue(n)
    }
}

impl From<i32> for ParameterValue<'_> {
    fn from(n: i32) -> Self {
        ParameterValue::IntValue(n.into())
    }
}

impl From<f64> for ParameterValue<'_> {
    fn from(n: f64) -> Self {
        ParameterValue::FloatValue(n)
    }
}

impl From<bool> for ParameterValue<'_> {
    fn from(b: bool) -> Self {
        ParameterValue::BoolValue(b)
    }
}

impl fmt::Display for ParameterValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::StringValue(s) => f.write_str(s),
            ParameterValue::IntValue(n) => write!(f, "{}", n),
            ParameterValue::FloatValue(n) => write!(f, "{}", n),
            ParameterValue::BoolValue(b) => write!(f, "{}", b),
        }
    }
}

impl<'a> ParameterValue<'a> {
    /// Stringified form as it appears in the launch body.
    pub fn into_string(self) -> String {
        match self {
            ParameterValue::StringValue(s) => s.into_owned(),
            other => other.to_string(),
        }
    }
}
