use thiserror::Error;

use crate::Value;

/// Fatal configuration error raised while a test group is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "{attempts} tests with a name like '{prefix}' already exist, \
         please consider renaming the template or changing its values"
    )]
    NameCollision { prefix: String, attempts: usize },
}

/// A generated test cannot bind its values to the template parameters.
///
/// These errors belong to the single generated test that raised them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    #[error("missed positional argument {index}: just {available} values are bound")]
    MissingPositional { index: usize, available: usize },
    #[error("missed named argument '{0}'")]
    MissingNamed(String),
    #[error("unexpected named argument '{0}'")]
    UnexpectedNamed(String),
    #[error("got multiple values for argument '{0}'")]
    MultipleValues(String),
    #[error("takes {expected} positional arguments but {found} were given")]
    PositionalCount { expected: usize, found: usize },
    #[error("argument '{parameter}' should be {expected} but is {} `{found}`", .found.type_name())]
    TypeMismatch {
        parameter: String,
        expected: &'static str,
        found: Value,
    },
}
