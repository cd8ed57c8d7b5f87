use multitest_core::{BindingError, Combination};
use quote::format_ident;
use syn::{ext::IdentExt, Ident, Signature};

use crate::{parse::literal::Literal, refident::MaybeIdent, utils::fn_args};

/// A template argument and the value it gets in a generated test.
#[derive(Debug)]
pub(crate) struct Binding<'a> {
    pub(crate) local: Ident,
    pub(crate) value: &'a Literal,
}

/// Bind positional values to the first template arguments and named values
/// to the arguments with the same name, like a call `t(1, 2, c = 3)` would do.
pub(crate) fn bind<'a>(
    signature: &Signature,
    combination: &'a Combination<Literal>,
) -> Result<Vec<Binding<'a>>, BindingError> {
    let args = fn_args(signature).collect::<Vec<_>>();
    let positional = combination.positional();
    if positional.len() > args.len() {
        return Err(BindingError::PositionalCount {
            expected: args.len(),
            found: positional.len(),
        });
    }
    let mut bound = positional
        .iter()
        .map(Some)
        .chain(std::iter::repeat(None))
        .take(args.len())
        .collect::<Vec<_>>();
    for (name, value) in combination.named() {
        let index = args
            .iter()
            .position(|a| {
                a.maybe_ident()
                    .map(|id| id.unraw() == name.as_str())
                    .unwrap_or(false)
            })
            .ok_or_else(|| BindingError::UnexpectedNamed(name.clone()))?;
        if bound[index].replace(value).is_some() {
            return Err(BindingError::MultipleValues(name.clone()));
        }
    }

    args.iter()
        .zip(bound)
        .enumerate()
        .map(|(index, (arg, value))| match (arg.maybe_ident(), value) {
            (Some(id), Some(value)) => Ok(Binding {
                local: id.clone(),
                value,
            }),
            (None, Some(value)) => Ok(Binding {
                local: format_ident!("arg{}", index),
                value,
            }),
            (Some(id), None) => Err(BindingError::MissingNamed(id.unraw().to_string())),
            (None, None) => Err(BindingError::MissingPositional {
                index,
                available: positional.len(),
            }),
        })
        .collect()
}
