#![doc = pretty_readme::docify!("README.md", "https://docs.rs/keres/latest/keres/", "./")]
#![deny(macro_use_extern_crate, meta_variable_misuse, unit_bindings)]
#![warn(
	explicit_outlives_requirements,
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_crate_dependencies,
	unused_qualifications,
	clippy::pedantic,
	clippy::dbg_macro,
	clippy::expect_used,
	clippy::if_then_some_else_none,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::unwrap_in_result,
	clippy::unwrap_used
)]

pub mod damage;
pub mod die;
pub mod generator;
#[cfg(feature = "parse")]
pub mod parse;
pub mod result;
pub mod roll;

#[cfg(feature = "serde")]
mod serde_support;

pub use damage::DamageType;
pub use die::Die;
pub use generator::NumberGenerator;
pub use result::{DiceResult, RollResult, RollType};
pub use roll::Roll;

#[cfg(test)]
mod tests;

#[cfg(feature = "build-binary")]
use ariadne as _;
