//! Everything `#[multitest]` reads from the module it decorates.
pub(crate) mod declaration;
pub(crate) mod group;
pub(crate) mod literal;
pub(crate) mod template;
