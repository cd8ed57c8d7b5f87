/// Module for error rendering stuff
use std::collections::HashSet;

use proc_macro2::TokenStream;

use crate::parse::group::GroupInfo;

pub mod messages {
    pub const EMPTY_VALUES: &str = "Values list should not be empty";
    pub const UNSUPPORTED_VALUE: &str =
        "Unsupported value: use an integer, float, string, char or bool literal";
    pub const UNSUPPORTED_DOMAIN: &str =
        "Expected a values list like `[1, 2]` or a string like \"+-\"";
    pub const POSITIONAL_AFTER_NAMED: &str = "Positional domains should precede the named ones";
    pub const NOT_A_FUNCTION: &str = "#[combined] can be used just on functions";
    pub const HAS_RECEIVER: &str = "A template should be a free function without receiver";
    pub const MODULE_WITHOUT_BODY: &str =
        "#[multitest] needs an inline module: use `mod name { ... }`";
    pub const NO_ARGUMENTS: &str = "#[multitest] doesn't take any argument";

    pub fn use_more_than_once(name: &str) -> String {
        format!("You cannot use '{name}' attribute more than once for the same function")
    }

    pub fn duplicate_domain(name: &str) -> String {
        format!("Duplicate domain: '{name}' is already defined.")
    }

    pub fn invalid_test_name(name: &str) -> String {
        format!("Cannot use '{name}' as a test name: it's not a valid identifier")
    }
}

/// Errors that can be checked just after the whole group was parsed.
pub(crate) fn group(info: &GroupInfo) -> TokenStream {
    receivers(info)
        .chain(duplicate_domains(info))
        .map(|e| e.to_compile_error())
        .collect()
}

type Errors<'a> = Box<dyn Iterator<Item = syn::Error> + 'a>;

fn receivers(info: &GroupInfo) -> Errors {
    Box::new(
        info.templates
            .iter()
            .filter_map(|t| t.signature.receiver())
            .map(|r| syn::Error::new_spanned(r, messages::HAS_RECEIVER)),
    )
}

fn duplicate_domains(info: &GroupInfo) -> Errors {
    Box::new(info.templates.iter().flat_map(|t| {
        let mut used = HashSet::new();
        t.named_domains
            .iter()
            .filter(move |name| !used.insert(name.to_string()))
            .map(|name| {
                syn::Error::new(name.span(), messages::duplicate_domain(&name.to_string()))
            })
    }))
}

#[derive(Debug, Default)]
pub struct ErrorsVec(Vec<syn::Error>);

pub(crate) fn _merge_errors<R1, R2>(
    r1: Result<R1, ErrorsVec>,
    r2: Result<R2, ErrorsVec>,
) -> Result<(R1, R2), ErrorsVec> {
    match (r1, r2) {
        (Ok(r1), Ok(r2)) => Ok((r1, r2)),
        (Ok(_), Err(e)) | (Err(e), Ok(_)) => Err(e),
        (Err(mut e1), Err(mut e2)) => {
            e1.append(&mut e2);
            Err(e1)
        }
    }
}

macro_rules! merge_errors {
    ($e:expr) => {
        $e
    };
    ($e:expr, $($es:expr), +) => {
        crate::error::_merge_errors($e, merge_errors!($($es),*))
    };
}

macro_rules! composed_tuple {
    ($i:ident) => {
        $i
    };
    ($i:ident, $($is:ident), +) => {
        ($i, composed_tuple!($($is),*))
    };
}

impl std::ops::Deref for ErrorsVec {
    type Target = Vec<syn::Error>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ErrorsVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<syn::Error> for ErrorsVec {
    fn from(errors: syn::Error) -> Self {
        vec![errors].into()
    }
}

impl From<Vec<syn::Error>> for ErrorsVec {
    fn from(errors: Vec<syn::Error>) -> Self {
        Self(errors)
    }
}

impl From<ErrorsVec> for Vec<syn::Error> {
    fn from(v: ErrorsVec) -> Self {
        v.0
    }
}

impl FromIterator<syn::Error> for ErrorsVec {
    fn from_iter<T: IntoIterator<Item = syn::Error>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl quote::ToTokens for ErrorsVec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.0.iter().map(|e| e.to_compile_error()))
    }
}

impl From<ErrorsVec> for proc_macro::TokenStream {
    fn from(v: ErrorsVec) -> Self {
        use quote::ToTokens;
        v.into_token_stream().into()
    }
}
