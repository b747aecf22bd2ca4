//! The composite roll type: an ordered sequence of dice rolled together.

use std::{
	fmt,
	ops::{Add, Index},
	slice,
	string::ToString,
};

use crate::{
	die::Die,
	generator::{self, NumberGenerator},
	result::{DiceResult, RollResult, RollType},
};

/// An ordered, non-empty sequence of [`Die`] entries representing a composite
/// dice expression such as `2D6+3 (fire) + D8-2 (radiant)`.
///
/// Insertion order is significant: it determines both the canonical notation
/// and the order of entries in a [`RollResult`]. A roll is immutable once
/// constructed; combination via `+` produces new rolls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roll {
	/// Die entries in insertion order; never empty
	dice: Vec<Die>,
}

impl Roll {
	/// Wraps an already-validated non-empty list of dice.
	pub(crate) fn from_vec(dice: Vec<Die>) -> Self {
		debug_assert!(!dice.is_empty(), "a roll must contain at least one die");
		Self { dice }
	}

	/// Creates a roll from any sequence of dice, preserving order.
	/// Returns [`None`] for an empty sequence.
	///
	/// # Examples
	/// ```
	/// use keres::{Die, Roll};
	///
	/// let roll = Roll::from_dice([Die::D20, Die::D4]).unwrap();
	/// assert_eq!(roll.len(), 2);
	/// assert!(Roll::from_dice([]).is_none());
	/// ```
	#[must_use]
	pub fn from_dice(dice: impl IntoIterator<Item = Die>) -> Option<Self> {
		let dice: Vec<Die> = dice.into_iter().collect();
		if dice.is_empty() {
			None
		} else {
			Some(Self::from_vec(dice))
		}
	}

	/// The number of [`Die`] entries in the roll - not the total number of
	/// individual dice.
	#[must_use]
	pub fn len(&self) -> usize {
		self.dice.len()
	}

	/// Whether the roll has no entries. Always `false` for a constructed
	/// roll; present for API completeness.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.dice.is_empty()
	}

	/// Gets the entry at the given position, if any.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Die> {
		self.dice.get(index)
	}

	/// Iterates over the entries in insertion order.
	pub fn iter(&self) -> slice::Iter<'_, Die> {
		self.dice.iter()
	}

	/// The entries as a slice, in insertion order.
	#[must_use]
	pub fn dice(&self) -> &[Die] {
		&self.dice
	}

	/// The lowest total the roll can produce: the sum of every entry's
	/// [`Die::min`]. Negative modifiers may make this negative; no clamping
	/// is applied.
	#[must_use]
	pub fn min(&self) -> i32 {
		self.dice.iter().map(Die::min).sum()
	}

	/// The highest total the roll can produce: the sum of every entry's
	/// [`Die::max`].
	#[must_use]
	pub fn max(&self) -> i32 {
		self.dice.iter().map(Die::max).sum()
	}

	/// Rolls every entry in order, each with its own advantage or
	/// disadvantage resolution, and packages the outcomes into a
	/// [`RollResult`] preserving entry order.
	///
	/// # Errors
	/// The first generator failure aborts the whole roll and is propagated
	/// unchanged; no partial result is produced.
	///
	/// # Examples
	/// ```
	/// use keres::{generator::Standard, Die, Roll, RollType};
	///
	/// let roll = Roll::from(Die::new(2, 6)) + Die::D8;
	/// let mut generator = Standard::default();
	/// let results = roll.results(RollType::Regular, &mut generator)?;
	/// assert_eq!(results.len(), 2);
	/// assert!((roll.min()..=roll.max()).contains(&results.total()));
	/// # Ok::<(), keres::generator::Error>(())
	/// ```
	pub fn results<G: NumberGenerator>(
		&self,
		kind: RollType,
		generator: &mut G,
	) -> Result<RollResult, generator::Error> {
		let mut results: Vec<DiceResult> = Vec::with_capacity(self.dice.len());
		for die in &self.dice {
			results.push(die.roll(kind, generator)?);
		}
		Ok(RollResult::new(results))
	}
}

impl Default for Roll {
	/// Creates the default roll: a single default die (D20).
	fn default() -> Self {
		Self::from(Die::default())
	}
}

impl From<Die> for Roll {
	/// Creates a roll with the die as its only entry.
	fn from(die: Die) -> Self {
		Self::from_vec(vec![die])
	}
}

impl Index<usize> for Roll {
	type Output = Die;

	fn index(&self, index: usize) -> &Die {
		&self.dice[index]
	}
}

impl IntoIterator for Roll {
	type Item = Die;
	type IntoIter = std::vec::IntoIter<Die>;

	fn into_iter(self) -> Self::IntoIter {
		self.dice.into_iter()
	}
}

impl<'a> IntoIterator for &'a Roll {
	type Item = &'a Die;
	type IntoIter = slice::Iter<'a, Die>;

	fn into_iter(self) -> Self::IntoIter {
		self.dice.iter()
	}
}

impl fmt::Display for Roll {
	/// Formats the roll as each entry's canonical notation joined with
	/// `" + "`.
	///
	/// # Examples
	/// ```
	/// use keres::{DamageType, Die, Roll};
	///
	/// let roll = Roll::from(Die::new(2, 6).with_damage(DamageType::Fire)) + (Die::D8 + -2);
	/// assert_eq!(roll.to_string(), "2D6 (fire) + D8-2");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(
			&self
				.dice
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(" + "),
		)
	}
}

impl Add<Die> for Roll {
	type Output = Self;

	/// Produces a roll with the die appended after this roll's entries.
	fn add(mut self, die: Die) -> Self {
		self.dice.push(die);
		self
	}
}

impl Add for Roll {
	type Output = Self;

	/// Produces a roll concatenating both rolls' entries in left-to-right
	/// order, with no merging.
	fn add(mut self, other: Self) -> Self {
		self.dice.extend(other.dice);
		self
	}
}
