/// Shortcuts to extract the identity (`syn::Ident`) of the syntax items the
/// macro inspects.
use proc_macro2::Ident;
use syn::{ForeignItem, Item, Pat, PatType, UseTree};

pub trait MaybeIdent {
    /// Return the reference to ident if any
    fn maybe_ident(&self) -> Option<&Ident>;
}

impl MaybeIdent for PatType {
    fn maybe_ident(&self) -> Option<&Ident> {
        self.pat.maybe_ident()
    }
}

impl MaybeIdent for Pat {
    fn maybe_ident(&self) -> Option<&Ident> {
        match self {
            Pat::Ident(ident) => Some(&ident.ident),
            _ => None,
        }
    }
}

/// Names an item declares in its module.
pub trait DeclaredIdents {
    fn declared_idents(&self) -> Vec<&Ident>;
}

impl DeclaredIdents for Item {
    fn declared_idents(&self) -> Vec<&Ident> {
        match self {
            Item::Const(i) => vec![&i.ident],
            Item::Enum(i) => vec![&i.ident],
            Item::ExternCrate(i) => vec![i.rename.as_ref().map(|(_, r)| r).unwrap_or(&i.ident)],
            Item::Fn(i) => vec![&i.sig.ident],
            Item::ForeignMod(i) => i.items.iter().flat_map(|f| f.declared_idents()).collect(),
            Item::Macro(i) => i.ident.iter().collect(),
            Item::Mod(i) => vec![&i.ident],
            Item::Static(i) => vec![&i.ident],
            Item::Struct(i) => vec![&i.ident],
            Item::Trait(i) => vec![&i.ident],
            Item::TraitAlias(i) => vec![&i.ident],
            Item::Type(i) => vec![&i.ident],
            Item::Union(i) => vec![&i.ident],
            Item::Use(i) => i.tree.declared_idents(),
            _ => vec![],
        }
    }
}

impl DeclaredIdents for ForeignItem {
    fn declared_idents(&self) -> Vec<&Ident> {
        match self {
            ForeignItem::Fn(i) => vec![&i.sig.ident],
            ForeignItem::Static(i) => vec![&i.ident],
            ForeignItem::Type(i) => vec![&i.ident],
            _ => vec![],
        }
    }
}

impl DeclaredIdents for UseTree {
    fn declared_idents(&self) -> Vec<&Ident> {
        match self {
            UseTree::Path(p) => p.tree.declared_idents(),
            UseTree::Name(n) if n.ident != "self" => vec![&n.ident],
            UseTree::Rename(r) => vec![&r.rename],
            UseTree::Group(g) => g.items.iter().flat_map(|t| t.declared_idents()).collect(),
            _ => vec![],
        }
    }
}
