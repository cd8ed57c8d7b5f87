//! The expansion engine behind `multitest`.
//!
//! A [`TestGroup`] is a table of [`Template`]s, each one with a
//! [`Declaration`] of parameter domains. [`TestGroup::expand`] computes the
//! cartesian product of every declaration and gives back a [`GeneratedTest`]
//! for each [`Combination`], with a unique name and the template
//! documentation specialized on the bound values.
//!
//! ```
//! use multitest_core::{template_fn, Declaration, Template, TestGroup};
//!
//! let group = TestGroup::new().template(
//!     Template::new(
//!         "sum",
//!         Declaration::new().positional([1, 2]).named("b", [10, 20]),
//!         template_fn(|args| {
//!             let a: i64 = args.positional(0)?;
//!             let b: i64 = args.named("b")?;
//!             assert!(a + b > 10);
//!             Ok(())
//!         }),
//!     )
//!     .with_doc("Sum $arg0 and $b"),
//! );
//!
//! let expansion = group.expand().unwrap();
//!
//! assert_eq!(
//!     vec!["test_sum_1_b_10", "test_sum_1_b_20", "test_sum_2_b_10", "test_sum_2_b_20"],
//!     expansion.names().collect::<Vec<_>>()
//! );
//! assert_eq!(Some("Sum 2 and 20"), expansion.get("test_sum_2_b_20").unwrap().doc());
//! for test in &expansion {
//!     test.run().unwrap();
//! }
//! ```
//!
//! The same engine runs at compile time inside the `#[multitest]` attribute,
//! where `T` is the source template and `V` carries the literal expression of
//! every value.
pub mod bind;
pub mod combination;
pub mod declaration;
pub mod doc;
mod error;
pub mod group;
pub mod name;
mod value;

pub use bind::{template_fn, Arguments, FromValue, TemplateFn};
pub use combination::{Combination, Combinations};
pub use declaration::Declaration;
pub use error::{BindingError, Error};
pub use group::{Expansion, GeneratedTest, Template, TestGroup};
pub use name::{synthesize, test_name, NameRegistry, MAX_NAME_ATTEMPTS};
pub use value::Value;
