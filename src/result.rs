//! Outcome types produced by the rolling engine, including the per-damage
//! aggregation of composite rolls.

use std::{collections::BTreeMap, fmt, ops::Index, slice, string::ToString};

use once_cell::sync::OnceCell;

use crate::{damage::DamageType, die::Die};

/// How a roll's outcome is selected: a per-roll request, not stored state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum RollType {
	/// A single set of values is generated and kept.
	#[default]
	Regular,

	/// Two independent sets are generated and the higher total is kept.
	Advantage,

	/// Two independent sets are generated and the lower total is kept.
	Disadvantage,
}

/// The realized outcome of rolling a single [`Die`].
///
/// Holds the kept face values and, for advantage/disadvantage rolls, the
/// discarded set. The kept values always live in [`Self::rolls`] regardless
/// of which generated set won the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceResult {
	/// Dice that were rolled to produce this
	die: Die,

	/// How the kept set was selected
	kind: RollType,

	/// Kept face values; one entry per die in the group
	rolls: Vec<i32>,

	/// Discarded face values; empty for regular rolls
	alternate: Vec<i32>,
}

impl DiceResult {
	/// Packages a completed roll. `rolls` holds the kept set; `alternate` is
	/// empty exactly when `kind` is [`RollType::Regular`].
	pub(crate) fn new(die: Die, kind: RollType, rolls: Vec<i32>, alternate: Vec<i32>) -> Self {
		debug_assert_eq!(rolls.len(), usize::from(die.count));
		debug_assert!(kind != RollType::Regular || alternate.is_empty());
		Self {
			die,
			kind,
			rolls,
			alternate,
		}
	}

	/// The dice that were rolled to produce this outcome.
	#[must_use]
	pub const fn die(&self) -> Die {
		self.die
	}

	/// How the kept set was selected.
	#[must_use]
	pub const fn kind(&self) -> RollType {
		self.kind
	}

	/// The kept face values, one per die in the group, each in
	/// `[1, sides]`.
	#[must_use]
	pub fn rolls(&self) -> &[i32] {
		&self.rolls
	}

	/// The discarded face values. Empty for regular rolls; a full set for
	/// advantage and disadvantage rolls.
	#[must_use]
	pub fn alternate_rolls(&self) -> &[i32] {
		&self.alternate
	}

	/// The kept total: the sum of the kept face values plus the die's
	/// modifier.
	#[must_use]
	pub fn total(&self) -> i32 {
		self.rolls.iter().sum::<i32>() + self.die.modifier
	}

	/// The discarded total for advantage and disadvantage rolls, or [`None`]
	/// for regular rolls.
	///
	/// For advantage, `total() >= alternate_total()`; for disadvantage,
	/// `total() <= alternate_total()`.
	#[must_use]
	pub fn alternate_total(&self) -> Option<i32> {
		(self.kind != RollType::Regular).then(|| self.alternate.iter().sum::<i32>() + self.die.modifier)
	}
}

impl fmt::Display for DiceResult {
	/// Formats the outcome as the die's notation, the kept face values, and
	/// the kept total, appending the discarded values for
	/// advantage/disadvantage rolls.
	///
	/// # Examples
	/// ```
	/// use keres::{generator::Iter, Die, RollType};
	///
	/// let outcome = Die::new(2, 6).roll(RollType::Regular, &mut Iter::new(vec![3, 5]))?;
	/// assert_eq!(outcome.to_string(), "2D6[3, 5] = 8");
	/// # Ok::<(), keres::generator::Error>(())
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}[{}] = {}", self.die, join_values(&self.rolls), self.total())?;
		if !self.alternate.is_empty() {
			write!(f, " (dropped [{}])", join_values(&self.alternate))?;
		}
		Ok(())
	}
}

/// The realized outcome of evaluating a [`Roll`]: an immutable ordered
/// collection of [`DiceResult`], one per roll entry.
///
/// Per-damage totals are computed on first access and cached for the
/// lifetime of the result; this is safe because the result and its
/// constituents never change after construction.
///
/// [`Roll`]: crate::Roll
#[derive(Debug, Clone)]
pub struct RollResult {
	/// Per-entry outcomes, in the source roll's entry order
	results: Vec<DiceResult>,

	/// Lazily computed per-damage totals
	damage_totals: OnceCell<BTreeMap<DamageType, i32>>,
}

impl RollResult {
	/// Packages the per-entry outcomes of a fully successful roll.
	pub(crate) fn new(results: Vec<DiceResult>) -> Self {
		Self {
			results,
			damage_totals: OnceCell::new(),
		}
	}

	/// The number of [`DiceResult`] entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.results.len()
	}

	/// Whether the result has no entries.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}

	/// Gets the outcome at the given position, if any.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&DiceResult> {
		self.results.get(index)
	}

	/// Iterates over the outcomes in entry order.
	pub fn iter(&self) -> slice::Iter<'_, DiceResult> {
		self.results.iter()
	}

	/// The total of all dice outcomes in this result.
	#[must_use]
	pub fn total(&self) -> i32 {
		self.results.iter().map(DiceResult::total).sum()
	}

	/// The total rolled per damage type, summed across all entries sharing
	/// that type. Computed once on first access, then cached.
	///
	/// The map's keys are exactly the damage types present among the rolled
	/// dice, and its values sum to [`Self::total`].
	pub fn totals_by_damage(&self) -> &BTreeMap<DamageType, i32> {
		self.damage_totals.get_or_init(|| {
			let mut totals = BTreeMap::new();
			for result in &self.results {
				*totals.entry(result.die().damage).or_insert(0) += result.total();
			}
			totals
		})
	}

	/// The total rolled for the given damage type, or `0` if no dice of that
	/// type were part of the roll.
	#[must_use]
	pub fn total_by_damage(&self, damage: DamageType) -> i32 {
		self.totals_by_damage().get(&damage).copied().unwrap_or(0)
	}

	/// Iterates over the outcomes whose dice deal the given damage type, in
	/// entry order.
	pub fn by_damage(&self, damage: DamageType) -> impl Iterator<Item = &DiceResult> {
		self.results.iter().filter(move |result| result.die().damage == damage)
	}
}

impl PartialEq for RollResult {
	/// Compares the per-entry outcomes; the lazily computed damage totals are
	/// derived data and do not participate.
	fn eq(&self, other: &Self) -> bool {
		self.results == other.results
	}
}

impl Eq for RollResult {}

impl Index<usize> for RollResult {
	type Output = DiceResult;

	fn index(&self, index: usize) -> &DiceResult {
		&self.results[index]
	}
}

impl IntoIterator for RollResult {
	type Item = DiceResult;
	type IntoIter = std::vec::IntoIter<DiceResult>;

	fn into_iter(self) -> Self::IntoIter {
		self.results.into_iter()
	}
}

impl<'a> IntoIterator for &'a RollResult {
	type Item = &'a DiceResult;
	type IntoIter = slice::Iter<'a, DiceResult>;

	fn into_iter(self) -> Self::IntoIter {
		self.results.iter()
	}
}

impl fmt::Display for RollResult {
	/// Formats each entry's outcome joined with `", "`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(
			&self
				.results
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(", "),
		)
	}
}

/// Joins face values with `", "` for display.
fn join_values(values: &[i32]) -> String {
	values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
