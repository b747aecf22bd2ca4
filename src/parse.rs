#![cfg(feature = "parse")]

//! Parsers for the canonical dice notation, along with the [`FromStr`]
//! implementations built on them.
//!
//! Parsing is more permissive than formatting: the unit letter is accepted in
//! either case, any amount of spaces/tabs may precede the parenthesized
//! damage type, and damage types match by full name or abbreviation.

use std::str::FromStr;

use chumsky::prelude::*;

use crate::{damage::DamageType, die::Die, roll::Roll};

/// Generates a parser that specifically handles single die notation like
/// "d20", "4d10+3 (poison)", "7d8-100 (r)".
///
/// The parser expects lowercase input; [`FromStr`] lowercases before parsing.
pub fn die_part<'src>() -> impl Parser<'src, &'src str, Die, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for the parenthesized damage type suffix, allowing any amount of
	// spaces and tabs before the parenthesis
	let damage = one_of(" \t").repeated().ignore_then(
		text::ident()
			.try_map(|name: &str, span| {
				DamageType::from_name(name).ok_or_else(|| Rich::custom(span, format!("Unknown damage type: {name}")))
			})
			.delimited_by(just('('), just(')')),
	);

	text::int(10)
		.or_not()
		.then_ignore(just('d'))
		.then(text::int::<&'src str, _, _>(10))
		.then(one_of("+-").then(text::int(10)).or_not())
		.then(damage.or_not())
		.try_map(|(((count, sides), modifier), damage), span| {
			let count = count
				.unwrap_or("1")
				.parse()
				.map_err(|err| Rich::custom(span, format!("Die count: {err}")))?;
			let sides = sides
				.parse()
				.map_err(|err| Rich::custom(span, format!("Die sides: {err}")))?;
			let modifier = match modifier {
				Some((sign, digits)) => {
					let magnitude: i32 = digits
						.parse()
						.map_err(|err| Rich::custom(span, format!("Die modifier: {err}")))?;
					if sign == '-' {
						-magnitude
					} else {
						magnitude
					}
				}
				None => 0,
			};

			Ok(Die::new(count, sides)
				.with_modifier(modifier)
				.with_damage(damage.unwrap_or_default()))
		})
}

/// Generates a parser that specifically handles single die notation like
/// "d20", "4d10+3 (poison)", "7d8-100 (r)" and expects end of input.
pub fn die<'src>() -> impl Parser<'src, &'src str, Die, extra::Err<Rich<'src, char>>> + Clone {
	die_part().padded().then_ignore(end())
}

/// Generates a parser that handles composite roll notation - one or more die
/// expressions joined by `+` - like "10d4+5 (radiant) + 3d8-2 (poison)".
///
/// The composite `+` only splits entries when it cannot bind as a die's
/// modifier: a sign directly following a die with digits after it is always a
/// modifier, so composite notation separates entries with whitespace as the
/// canonical format does.
pub fn roll_part<'src>() -> impl Parser<'src, &'src str, Roll, extra::Err<Rich<'src, char>>> + Clone {
	die_part()
		.separated_by(just('+').padded())
		.at_least(1)
		.collect::<Vec<_>>()
		.map(Roll::from_vec)
}

/// Generates a parser that handles composite roll notation - one or more die
/// expressions joined by `+` - and expects end of input.
pub fn roll<'src>() -> impl Parser<'src, &'src str, Roll, extra::Err<Rich<'src, char>>> + Clone {
	roll_part().padded().then_ignore(end())
}

/// An error resulting from parsing dice notation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The input was empty or entirely whitespace.
	#[error("dice notation is empty")]
	Empty,

	/// The input does not match the dice notation grammar.
	#[error("invalid dice notation: {0}")]
	Invalid(String),
}

impl Error {
	/// Joins parser diagnostics into a single format error.
	fn from_rich(errs: Vec<Rich<'_, char>>) -> Self {
		Self::Invalid(errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))
	}
}

impl FromStr for Die {
	type Err = Error;

	/// Parses a single die from its notation, accepting either case for the
	/// unit letter and the damage type, and any amount of spaces/tabs before
	/// the parenthesized type.
	///
	/// # Errors
	/// [`Error::Empty`] for empty/whitespace input; [`Error::Invalid`] for
	/// anything that does not match the grammar.
	///
	/// # Examples
	/// ```
	/// use keres::{DamageType, Die};
	///
	/// let die: Die = "7D8-100\t\t (r)".parse()?;
	/// assert_eq!(die, Die::new(7, 8).with_modifier(-100).with_damage(DamageType::Radiant));
	/// # Ok::<(), keres::parse::Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().is_empty() {
			return Err(Error::Empty);
		}

		let lc = s.to_lowercase();
		let result = die().parse(&lc).into_result().map_err(Error::from_rich);
		result
	}
}

impl FromStr for Roll {
	type Err = Error;

	/// Parses a composite roll from its notation: one or more die expressions
	/// joined by `+`, split only at the top level.
	///
	/// # Errors
	/// [`Error::Empty`] for empty/whitespace input; [`Error::Invalid`] for
	/// anything that does not match the grammar.
	///
	/// # Examples
	/// ```
	/// use keres::Roll;
	///
	/// let roll: Roll = "10D4+5 (radiant) + 3D8-2 (poison) + 4D10 (force)".parse()?;
	/// assert_eq!(roll.len(), 3);
	/// # Ok::<(), keres::parse::Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().is_empty() {
			return Err(Error::Empty);
		}

		let lc = s.to_lowercase();
		let result = roll().parse(&lc).into_result().map_err(Error::from_rich);
		result
	}
}

impl FromStr for DamageType {
	type Err = Error;

	/// Parses a damage type from its full name or abbreviation,
	/// case-insensitively.
	///
	/// # Errors
	/// [`Error::Empty`] for empty/whitespace input; [`Error::Invalid`] for an
	/// unrecognized name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().is_empty() {
			return Err(Error::Empty);
		}

		Self::from_name(s).ok_or_else(|| Error::Invalid(format!("unknown damage type: {}", s.trim())))
	}
}

impl TryFrom<&str> for Die {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl TryFrom<&str> for Roll {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		value.parse()
	}
}
