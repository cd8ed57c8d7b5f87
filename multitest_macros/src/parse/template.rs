use multitest_core::{Declaration, Template};
use proc_macro2::Span;
use syn::{ext::IdentExt, parse_quote, spanned::Spanned, Attribute, Ident, ItemFn, Signature};

use super::{declaration::Domains, literal::Literal};
use crate::{
    error::{messages, ErrorsVec},
    utils::{attr_ends_with, attr_in, attr_is, doc_string, drain_attrs},
};

/// A function marked by `#[combined(...)]`.
#[derive(Debug)]
pub(crate) struct TemplateInfo {
    pub(crate) signature: Signature,
    pub(crate) combined: Attribute,
    pub(crate) declaration: Declaration<Literal>,
    pub(crate) named_domains: Vec<Ident>,
    pub(crate) doc: Option<String>,
    pub(crate) trace: bool,
    /// Attributes to render on every generated test.
    pub(crate) test_attrs: Vec<Attribute>,
}

fn is_test_only(attr: &Attribute) -> bool {
    attr_in(attr, &["should_panic", "ignore"]) || attr_ends_with(attr, &parse_quote! { test })
}

impl TemplateInfo {
    /// Take away from `item_fn` the attributes that belong to the generated
    /// tests. Return `None` if `item_fn` is not a template.
    pub(crate) fn extract(item_fn: &mut ItemFn) -> Result<Option<Self>, ErrorsVec> {
        let mut combined = drain_attrs(&mut item_fn.attrs, |a| attr_is(a, "combined")).into_iter();
        let Some(first) = combined.next() else {
            return Ok(None);
        };
        let mut errors = combined
            .map(|a| syn::Error::new_spanned(a, messages::use_more_than_once("combined")))
            .collect::<ErrorsVec>();
        let trace = !drain_attrs(&mut item_fn.attrs, |a| attr_is(a, "trace")).is_empty();
        let mut test_attrs = drain_attrs(&mut item_fn.attrs, is_test_only);
        test_attrs.extend(item_fn.attrs.iter().filter(|a| attr_is(a, "cfg")).cloned());

        match Domains::from_attribute(&first) {
            Ok(domains) if errors.is_empty() => Ok(Some(Self {
                signature: item_fn.sig.clone(),
                combined: first,
                declaration: domains.declaration,
                named_domains: domains.named,
                doc: doc_string(&item_fn.attrs),
                trace,
                test_attrs,
            })),
            Ok(_) => Err(errors),
            Err(e) => {
                errors.insert(0, e);
                Err(errors)
            }
        }
    }

    pub(crate) fn ident(&self) -> &Ident {
        &self.signature.ident
    }

    pub(crate) fn name(&self) -> String {
        self.ident().unraw().to_string()
    }

    pub(crate) fn span(&self) -> Span {
        self.combined.span()
    }

    pub(crate) fn is_async(&self) -> bool {
        self.signature.asyncness.is_some()
    }

    /// The engine view of this template: `index` identifies it in the group.
    pub(crate) fn template(&self, index: usize) -> Template<usize, Literal> {
        let template = Template::new(self.name(), self.declaration.clone(), index);
        match &self.doc {
            Some(doc) => template.with_doc(doc.clone()),
            None => template,
        }
    }
}
