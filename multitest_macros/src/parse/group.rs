use syn::{Ident, Item, ItemMod};

use super::template::TemplateInfo;
use crate::{
    error::{messages, ErrorsVec},
    refident::DeclaredIdents,
    utils::{attr_is, drain_attrs, item_attrs_mut},
};

/// What `#[multitest]` needs to know about its module.
#[derive(Debug, Default)]
pub(crate) struct GroupInfo {
    /// Every name already declared in the module.
    pub(crate) members: Vec<Ident>,
    pub(crate) templates: Vec<TemplateInfo>,
}

impl GroupInfo {
    /// Collect templates and members from `module` and strip the
    /// `#[combined]` and `#[trace]` attributes from its items.
    pub(crate) fn extract(module: &mut ItemMod) -> Result<Self, ErrorsVec> {
        let Some((_, items)) = module.content.as_mut() else {
            return Err(syn::Error::new_spanned(&module.ident, messages::MODULE_WITHOUT_BODY).into());
        };
        let members = items
            .iter()
            .flat_map(|item| item.declared_idents())
            .cloned()
            .collect();
        let mut info = GroupInfo {
            members,
            ..Default::default()
        };
        let mut errors = ErrorsVec::default();
        for item in items.iter_mut() {
            match item {
                Item::Fn(item_fn) => match TemplateInfo::extract(item_fn) {
                    Ok(Some(template)) => info.templates.push(template),
                    Ok(None) => {}
                    Err(mut e) => errors.append(&mut e),
                },
                other => {
                    if let Some(attrs) = item_attrs_mut(other) {
                        errors.extend(
                            drain_attrs(attrs, |a| attr_is(a, "combined"))
                                .into_iter()
                                .map(|a| syn::Error::new_spanned(a, messages::NOT_A_FUNCTION)),
                        );
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(info)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::test::{assert_eq, *};
    use multitest_test::assert_in;

    #[test]
    fn collect_templates_in_order() {
        let mut module: ItemMod = r#"
            mod group {
                use super::*;

                #[combined([1, 2])]
                fn first(a: u32) {}

                fn helper() {}

                #[combined(b = ["x"])]
                fn second(b: &str) {}
            }
            "#
        .ast();

        let info = GroupInfo::extract(&mut module).unwrap();

        assert_eq!(
            vec!["first", "second"],
            info.templates.iter().map(|t| t.name()).collect::<Vec<_>>()
        );
        assert_eq!(to_idents!(["first", "helper", "second"]), info.members);
    }

    #[test]
    fn strip_multitest_attributes() {
        let mut module: ItemMod = r#"
            mod group {
                #[combined([1, 2])]
                #[trace]
                fn first(a: u32) {}
            }
            "#
        .ast();

        GroupInfo::extract(&mut module).unwrap();

        let expected: ItemMod = "mod group { fn first(a: u32) {} }".ast();
        assert_eq!(expected, module);
    }

    #[test]
    fn collect_all_item_names_as_members() {
        let mut module: ItemMod = r#"
            mod group {
                use std::fmt::{Debug, Display as D};
                const test_c_1: u32 = 1;
                struct Data;
                macro_rules! test_m { () => {} }
                mod inner {}
            }
            "#
        .ast();

        let info = GroupInfo::extract(&mut module).unwrap();

        assert_eq!(
            to_idents!(["Debug", "D", "test_c_1", "Data", "test_m", "inner"]),
            info.members
        );
    }

    #[test]
    fn reject_module_without_body() {
        let mut module: ItemMod = "mod group;".ast();

        let errors = GroupInfo::extract(&mut module).unwrap_err();

        assert_in!(errors[0].to_string(), messages::MODULE_WITHOUT_BODY);
    }

    #[test]
    fn reject_combined_on_other_items_and_report_all_errors() {
        let mut module: ItemMod = r#"
            mod group {
                #[combined([1])]
                struct S;

                #[combined([])]
                fn t(a: u32) {}

                #[combined([1])]
                const C: u32 = 1;
            }
            "#
        .ast();

        let errors = GroupInfo::extract(&mut module).unwrap_err();

        assert_eq!(
            vec![
                messages::NOT_A_FUNCTION,
                messages::EMPTY_VALUES,
                messages::NOT_A_FUNCTION
            ],
            errors.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }
}
