use multitest_core::Declaration;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream, Result},
    Attribute, Expr, ExprLit, Ident, Lit, Meta, Token,
};

use super::literal::Literal;
use crate::error::messages;

/// Parameter domains declared by `#[combined(...)]`.
///
/// `[a, b, ...]` is a positional domain, `name = [a, b, ...]` a named one and
/// a string literal stands for the list of its characters in both forms.
#[derive(Debug, Default)]
pub(crate) struct Domains {
    pub(crate) declaration: Declaration<Literal>,
    /// Named domains identifiers as written, repetitions included.
    pub(crate) named: Vec<Ident>,
}

impl Domains {
    pub(crate) fn from_attribute(attr: &Attribute) -> Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(_) => attr.parse_args(),
            Meta::NameValue(nv) => Err(syn::Error::new_spanned(
                &nv.value,
                messages::UNSUPPORTED_DOMAIN,
            )),
        }
    }
}

enum Domain {
    Positional(Vec<Literal>),
    Named(Ident, Vec<Literal>),
}

impl Parse for Domain {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Ident::peek_any) && input.peek2(Token![=]) {
            let name = input.call(Ident::parse_any)?;
            let _eq: Token![=] = input.parse()?;
            Ok(Domain::Named(name, values(input.parse()?)?))
        } else {
            Ok(Domain::Positional(values(input.parse()?)?))
        }
    }
}

fn values(expr: Expr) -> Result<Vec<Literal>> {
    let values = match expr {
        Expr::Array(array) if array.elems.is_empty() => {
            return Err(syn::Error::new_spanned(array, messages::EMPTY_VALUES))
        }
        Expr::Array(array) => {
            let mut errors: Option<syn::Error> = None;
            let mut values = Vec::with_capacity(array.elems.len());
            for value in array.elems.into_iter().map(Literal::try_from) {
                match (value, errors.as_mut()) {
                    (Ok(value), _) => values.push(value),
                    (Err(e), Some(errors)) => errors.combine(e),
                    (Err(e), None) => errors = Some(e),
                }
            }
            if let Some(errors) = errors {
                return Err(errors);
            }
            values
        }
        Expr::Lit(ExprLit {
            lit: Lit::Str(text),
            ..
        }) if text.value().is_empty() => {
            return Err(syn::Error::new_spanned(text, messages::EMPTY_VALUES))
        }
        Expr::Lit(ExprLit {
            lit: Lit::Str(text),
            ..
        }) => Literal::chars(&text),
        Expr::Group(g) => return values(*g.expr),
        other => return Err(syn::Error::new_spanned(other, messages::UNSUPPORTED_DOMAIN)),
    };
    Ok(values)
}

impl Parse for Domains {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut domains = Domains::default();
        let mut named_span = None;
        while !input.is_empty() {
            let span = input.span();
            match (input.parse::<Domain>()?, named_span) {
                (Domain::Positional(_), Some(named)) => {
                    let mut error = syn::Error::new(span, messages::POSITIONAL_AFTER_NAMED);
                    error.combine(syn::Error::new(named, "first named domain is here"));
                    return Err(error);
                }
                (Domain::Positional(values), None) => domains.declaration.push_positional(values),
                (Domain::Named(name, values), _) => {
                    named_span.get_or_insert(name.span());
                    domains
                        .declaration
                        .push_named(name.unraw().to_string(), values);
                    domains.named.push(name);
                }
            }
            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }
        Ok(domains)
    }
}
