//! Runtime binding of a combination to a template.
use std::sync::Arc;

use crate::{BindingError, Combination, Value};

/// Template body as seen at runtime: it receives the bound values and
/// reports binding problems as errors.
pub type TemplateFn = Arc<dyn Fn(&Arguments<'_>) -> Result<(), BindingError> + Send + Sync>;

/// Wrap a closure in a [`TemplateFn`].
pub fn template_fn<F>(f: F) -> TemplateFn
where
    F: Fn(&Arguments<'_>) -> Result<(), BindingError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Conversion from a bound [`Value`] to a concrete type.
pub trait FromValue: Sized {
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// The values bound to a single generated test.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    combination: &'a Combination,
}

impl<'a> Arguments<'a> {
    pub fn new(combination: &'a Combination) -> Self {
        Self { combination }
    }

    pub fn combination(&self) -> &'a Combination {
        self.combination
    }

    pub fn positional<T: FromValue>(&self, index: usize) -> Result<T, BindingError> {
        let value = self.combination.positional().get(index).ok_or(
            BindingError::MissingPositional {
                index,
                available: self.combination.positional().len(),
            },
        )?;
        convert(format!("arg{index}"), value)
    }

    pub fn named<T: FromValue>(&self, name: &str) -> Result<T, BindingError> {
        let value = self
            .combination
            .get(name)
            .ok_or_else(|| BindingError::MissingNamed(name.to_owned()))?;
        convert(name.to_owned(), value)
    }

    /// Check the bound values against a signature made by `positional`
    /// parameters and the `named` ones.
    pub fn check(&self, positional: usize, named: &[&str]) -> Result<(), BindingError> {
        let found = self.combination.positional().len();
        if found != positional {
            return Err(BindingError::PositionalCount {
                expected: positional,
                found,
            });
        }
        if let Some((unexpected, _)) = self
            .combination
            .named()
            .iter()
            .find(|(n, _)| !named.contains(&n.as_str()))
        {
            return Err(BindingError::UnexpectedNamed(unexpected.clone()));
        }
        match named.iter().find(|n| self.combination.get(n).is_none()) {
            Some(missed) => Err(BindingError::MissingNamed(missed.to_string())),
            None => Ok(()),
        }
    }
}

fn convert<T: FromValue>(parameter: String, value: &Value) -> Result<T, BindingError> {
    T::from_value(value).ok_or_else(|| BindingError::TypeMismatch {
        parameter,
        expected: T::EXPECTED,
        found: value.clone(),
    })
}
