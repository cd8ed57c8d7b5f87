//! Write a test once and run it against every combination of its parameter
//! values.
//!
//! A *template* is a test body with parameters. For each parameter you
//! declare a *domain*, the finite list of values it can take, and `multitest`
//! generates a named test for each element of the cartesian product of the
//! domains.
//!
//! ## What
//!
//! `multitest` gives you two ways to do it:
//!
//! - the [`[multitest]`](macro@multitest) attribute expands an inline module
//!   at compile time: every function marked by `#[combined(...)]` becomes a
//!   set of plain `#[test]` functions that `cargo test` runs and filters by
//!   name;
//! - the runtime API ([`TestGroup`], [`Template`], [`Declaration`]) does the
//!   same expansion when you call [`TestGroup::expand`] and gives you back
//!   the [`GeneratedTest`]s to run in your own harness.
//!
//! ## Why
//!
//! Very often we write tests that check the same property on many inputs
//!
//! ```
//! #[test]
//! fn cell_should_be_valid() {
//!     for row in [1.0, 2.0, 3.456] {
//!         for col in ["a", "b", "c"] {
//!             assert!(row > 0.0);
//!             assert_eq!(1, col.len());
//!         }
//!     }
//! }
//! ```
//!
//! When it fails you don't know which input broke it and the loop stops at
//! the first failure. With `multitest` every combination is a test on its
//! own, with a name that tells you the values:
//!
//! ```
//! use multitest::multitest;
//!
//! #[multitest]
//! mod cells {
//!     /// Cell ($arg0, $col) should be valid
//!     #[combined([1.0, 2.0, 3.456], col = ["a", "b", "c"])]
//!     fn valid(row: f64, col: &str) {
//!         assert!(row > 0.0);
//!         assert_eq!(1, col.len());
//!     }
//! }
//! ```
//!
//! `cargo test` will run the 9 tests `cells::test_valid_1_0_col_a`,
//! `cells::test_valid_1_0_col_b`, ... `cells::test_valid_3_456_col_c`.
//!
//! ## Values and names
//!
//! Domains can be positional (`[1, 2]`) or named (`col = ["a", "b"]`), and a
//! string like `"+-"` stands for the list of its characters. Values become
//! name tokens: alphanumerics are kept, `+` is `plus`, `-` is `minus`, `.`
//! is `_` and so on. Named values are written as `<name>_<token>` after the
//! positional ones, sorted by name. A name never hides another item of the
//! module: a `_0`, `_1`, ... suffix resolves the collisions.
//!
//! Look at [`macro@multitest`] for all the details about the attribute.
//!
//! ## Runtime API
//!
//! ```
//! use multitest::{template_fn, Declaration, Template, TestGroup};
//!
//! let group = TestGroup::new().template(
//!     Template::new(
//!         "steps",
//!         Declaration::new()
//!             .positional([1.0, 2.0])
//!             .named("extra", Declaration::chars("+-")),
//!         template_fn(|args| {
//!             let row: f64 = args.positional(0)?;
//!             let extra: String = args.named("extra")?;
//!             assert!(row > 0.0);
//!             assert!(extra == "+" || extra == "-");
//!             Ok(())
//!         }),
//!     )
//!     .with_doc("Step $arg0 with ${extra}"),
//! );
//!
//! let expansion = group.expand().unwrap();
//! assert_eq!(
//!     vec![
//!         "test_steps_1_0_extra_plus",
//!         "test_steps_1_0_extra_minus",
//!         "test_steps_2_0_extra_plus",
//!         "test_steps_2_0_extra_minus",
//!     ],
//!     expansion.names().collect::<Vec<_>>()
//! );
//! for test in &expansion {
//!     test.run().unwrap();
//! }
//! ```
//!
//! Binding problems, like a missing value or a value of the wrong type,
//! don't break the whole group: they are reported as a [`BindingError`] by
//! the [`GeneratedTest::run`] call of the single test that raised them.

pub use multitest_core::{
    bind, combination, declaration, doc, group, name, template_fn, synthesize, test_name,
    Arguments, BindingError, Combination, Combinations, Declaration, Error, Expansion,
    FromValue, GeneratedTest, NameRegistry, Template, TemplateFn, TestGroup, Value,
    MAX_NAME_ATTEMPTS,
};
pub use multitest_macros::multitest;
