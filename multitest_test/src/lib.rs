//! Test-project harness: build throw-away cargo projects, run their tests
//! and check the reported test names and outcomes.
pub mod prj;
pub mod utils;

pub use prj::{Channel, Project};
pub use regex;
pub use utils::*;
