extern crate proc_macro;


#[macro_use]
mod error;
mod parse;
mod refident;
mod render;
mod utils;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, ItemMod};

use crate::{error::ErrorsVec, parse::group::GroupInfo};

/// Turn an inline module in a test group: every function of the module
/// marked by `#[combined(...)]` is a *template*, and the group gets a
/// `#[test]` function for each combination of the template's parameter
/// values.
///
/// ```
/// use multitest_macros::multitest;
///
/// #[multitest]
/// mod group {
///     /// Test steps with row=$arg0 col=$col extra=$extra
///     #[combined([1.0, 2.0, 3.456], col = ["a", "b", "c"], extra = "+-")]
///     fn steps(row: f64, col: &str, extra: &str) {
///         assert!(row > 0.0);
///         assert_eq!(1, col.len());
///         assert!(["+", "-"].contains(&extra));
///     }
/// }
/// ```
///
/// That module will contain, beside the unchanged `steps()` function, the 18
/// tests
///
/// ```text
/// test_steps_1_0_col_a_extra_plus
/// test_steps_1_0_col_a_extra_minus
/// test_steps_1_0_col_b_extra_plus
/// ...
/// test_steps_3_456_col_c_extra_minus
/// ```
///
/// Each of them calls `self::steps()` with its values and is documented by
/// the template documentation where the placeholders are replaced by the
/// values: `test_steps_3_456_col_a_extra_plus` is documented as
/// `Test steps with row=3.456 col=a extra=+`.
///
/// # Domains
///
/// `#[combined(...)]` takes a comma separated list of parameter *domains*:
///
/// - a list of values like `[1, 2, 3]` is a _positional_ domain: positional
///   domains are bound to the first template arguments in order;
/// - `name = [...]` is a _named_ domain bound to the argument `name`;
/// - a string like `"+-"` can replace a list: it stands for the list of its
///   characters `["+", "-"]`.
///
/// Positional domains should precede the named ones. Values should be
/// integer, float, string, char or bool literals, negative numbers included.
/// An empty list is an error. `#[combined]` without domains generates just
/// one test that calls the template without arguments.
///
/// # Names
///
/// Test names are `test_<template>` followed by the positional values and by
/// the `<name>_<value>` pairs of the named values sorted by name, all joined
/// by `_`. Values are made identifier safe: alphanumeric chars are kept, some
/// punctuation becomes a word (`+` is `plus`, `-` is `minus`, `.` is `_`, ...)
/// and any other char becomes `_`.
///
/// A name never hides any item already declared in the module: if the name
/// is taken a `_0`, `_1`, ... suffix is tried till a free one is found; after
/// 1024 attempts the macro gives up with a compile error.
///
/// # Documentation
///
/// The template doc placeholders `$arg0`, `${arg0}`, `$arg1`, ... refer to the
/// positional values and `$name` or `${name}` to the named ones; `$$` is a
/// literal `$`. Unknown placeholders are left as they are.
///
/// # Attributes
///
/// Every test attribute of the template (`#[should_panic]`, `#[ignore]` and
/// any attribute whose path ends with `test` like `#[tokio::test]`) is moved
/// to the generated tests; `#[cfg(...)]` attributes are copied.
///
/// ```
/// use multitest_macros::multitest;
///
/// #[multitest]
/// mod group {
///     #[combined([0, -1])]
///     #[should_panic]
///     fn not_positive(v: i32) {
///         assert!(v > 0)
///     }
/// }
/// ```
///
/// # Async
///
/// An `async` template generates `async` tests that `.await` it. If the
/// template doesn't declare a test attribute the generated tests use
/// `#[async_std::test]`.
///
/// # Trace
///
/// Mark the template by `#[trace]` to print the arguments of each test
/// before calling the template (you need `--nocapture` to see them).
///
/// # Binding errors
///
/// Domains that don't fit the template arguments make the generated tests
/// fail to compile with a message like
///
/// ```text
/// test_t_1_2: t(): takes 1 positional arguments but 2 were given
/// ```
#[proc_macro_attribute]
pub fn multitest(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut module = parse_macro_input!(input as ItemMod);

    let result = merge_errors!(no_arguments(args.into()), GroupInfo::extract(&mut module))
        .and_then(|composed_tuple!(_args, info)| {
            let errors = error::group(&info);
            if errors.is_empty() {
                render::multitest(module, info)
            } else {
                Ok(errors)
            }
        });

    match result {
        Ok(tokens) => tokens,
        Err(errors) => errors.into_token_stream(),
    }
    .into()
}

fn no_arguments(args: TokenStream) -> Result<(), ErrorsVec> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(args, error::messages::NO_ARGUMENTS).into())
    }
}
