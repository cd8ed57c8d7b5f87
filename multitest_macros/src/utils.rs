/// Contains some unsorted functions used across others modules
///
use quote::format_ident;
use syn::{Attribute, Expr, ExprLit, FnArg, Item, Lit, PatType, Signature};
use unicode_ident::{is_xid_continue, is_xid_start};

/// Return an iterator over the typed fn arguments.
///
pub(crate) fn fn_args(sig: &Signature) -> impl Iterator<Item = &PatType> {
    sig.inputs.iter().filter_map(|arg| match arg {
        FnArg::Typed(t) => Some(t),
        FnArg::Receiver(_) => None,
    })
}

pub(crate) fn attr_ends_with(attr: &Attribute, segment: &syn::PathSegment) -> bool {
    attr.path().segments.iter().last() == Some(segment)
}

pub(crate) fn attr_is(attr: &Attribute, name: &str) -> bool {
    attr.path().is_ident(&format_ident!("{}", name))
}

pub(crate) fn attr_in(attr: &Attribute, names: &[&str]) -> bool {
    names
        .iter()
        .any(|name| attr.path().is_ident(&format_ident!("{}", name)))
}

/// Remove from `attrs` the attributes that match `predicate` and return them.
pub(crate) fn drain_attrs(
    attrs: &mut Vec<Attribute>,
    predicate: impl Fn(&Attribute) -> bool,
) -> Vec<Attribute> {
    let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(attrs)
        .into_iter()
        .partition(|a| predicate(a));
    *attrs = kept;
    taken
}

/// Join the lines of all `#[doc = "..."]` attributes.
pub(crate) fn doc_string(attrs: &[Attribute]) -> Option<String> {
    let lines = attrs
        .iter()
        .filter(|a| attr_is(a, "doc"))
        .filter_map(|a| match &a.meta.require_name_value().ok()?.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(line),
                ..
            }) => Some(line.value()),
            _ => None,
        })
        .collect::<Vec<_>>();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

pub(crate) fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(i) => Some(&mut i.attrs),
        Item::Enum(i) => Some(&mut i.attrs),
        Item::ExternCrate(i) => Some(&mut i.attrs),
        Item::Fn(i) => Some(&mut i.attrs),
        Item::ForeignMod(i) => Some(&mut i.attrs),
        Item::Impl(i) => Some(&mut i.attrs),
        Item::Macro(i) => Some(&mut i.attrs),
        Item::Mod(i) => Some(&mut i.attrs),
        Item::Static(i) => Some(&mut i.attrs),
        Item::Struct(i) => Some(&mut i.attrs),
        Item::Trait(i) => Some(&mut i.attrs),
        Item::TraitAlias(i) => Some(&mut i.attrs),
        Item::Type(i) => Some(&mut i.attrs),
        Item::Union(i) => Some(&mut i.attrs),
        Item::Use(i) => Some(&mut i.attrs),
        _ => None,
    }
}

pub(crate) fn is_valid_ident(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .map(|c| c == '_' || is_xid_start(c))
        .unwrap_or(false)
        && chars.all(is_xid_continue)
        && name != "_"
}
