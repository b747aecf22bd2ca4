//! The single-die value type: a homogeneous group of same-sided dice with a
//! fixed modifier and damage type.

use std::{fmt, ops::Add};

use crate::{
	damage::DamageType,
	generator::{self, NumberGenerator},
	result::{DiceResult, RollType},
	roll::Roll,
};

/// A group of one or more dice with the same number of sides, along with a
/// flat modifier and a damage type applied to their rolls.
///
/// `Die` is an immutable value: two dice are equal iff all four fields match,
/// and every operation that "changes" a die produces a new one. Its canonical
/// notation is `[count]D<sides>[+/-modifier][ (type)]`, with the count omitted
/// at 1, the modifier omitted at 0, and the type omitted when
/// [`DamageType::Unknown`].
///
/// # Examples
/// ```
/// use keres::{DamageType, Die};
///
/// let poison = Die::new(4, 10).with_modifier(3).with_damage(DamageType::Poison);
/// assert_eq!(poison.to_string(), "4D10+3 (poison)");
/// assert_eq!(Die::D20.to_string(), "D20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Die {
	/// Number of dice to roll
	pub count: u8,

	/// Number of sides for each die
	pub sides: u8,

	/// Flat modifier added to the total of any roll of these dice
	pub modifier: i32,

	/// Category of damage the dice deal
	pub damage: DamageType,
}

impl Die {
	/// A single four-sided die.
	pub const D4: Self = Self::new(1, 4);

	/// A single six-sided die.
	pub const D6: Self = Self::new(1, 6);

	/// A single eight-sided die.
	pub const D8: Self = Self::new(1, 8);

	/// A single ten-sided die.
	pub const D10: Self = Self::new(1, 10);

	/// A single twelve-sided die.
	pub const D12: Self = Self::new(1, 12);

	/// A single twenty-sided die.
	pub const D20: Self = Self::new(1, 20);

	/// A single hundred-sided die.
	pub const D100: Self = Self::new(1, 100);

	/// Creates a new set of dice with a given count and number of sides, no
	/// modifier, and no damage type.
	#[must_use]
	pub const fn new(count: u8, sides: u8) -> Self {
		Self {
			count,
			sides,
			modifier: 0,
			damage: DamageType::Unknown,
		}
	}

	/// Creates a new set of dice matching this one with the modifier set to
	/// the given value.
	#[must_use]
	pub const fn with_modifier(mut self, modifier: i32) -> Self {
		self.modifier = modifier;
		self
	}

	/// Creates a new set of dice matching this one with the damage type set
	/// to the given value.
	#[must_use]
	pub const fn with_damage(mut self, damage: DamageType) -> Self {
		self.damage = damage;
		self
	}

	/// The lowest total the dice can roll: `count + modifier`.
	///
	/// A negative modifier can make this negative; no clamping is applied.
	#[must_use]
	pub const fn min(&self) -> i32 {
		self.count as i32 + self.modifier
	}

	/// The highest total the dice can roll: `count * sides + modifier`.
	#[must_use]
	pub const fn max(&self) -> i32 {
		self.count as i32 * self.sides as i32 + self.modifier
	}

	/// Rolls the dice, producing values from the given generator.
	///
	/// For [`RollType::Regular`], a single set of `count` values in
	/// `[1, sides]` is generated. For [`RollType::Advantage`] and
	/// [`RollType::Disadvantage`], two independent full sets are generated
	/// and the one with the higher (respectively lower) total is kept; the
	/// other is retained as the outcome's alternate set. Ties keep the first
	/// set.
	///
	/// # Errors
	/// Any generator failure (invalid range, cancellation, entropy) is
	/// propagated unchanged; no partial outcome is produced.
	///
	/// # Examples
	/// ```
	/// use keres::{generator::Standard, Die, RollType};
	///
	/// let mut generator = Standard::default();
	/// let outcome = Die::D20.roll(RollType::Advantage, &mut generator)?;
	/// assert!(outcome.total() >= outcome.alternate_total().unwrap());
	/// # Ok::<(), keres::generator::Error>(())
	/// ```
	pub fn roll<G: NumberGenerator>(&self, kind: RollType, generator: &mut G) -> Result<DiceResult, generator::Error> {
		let primary = self.roll_set(generator)?;
		if kind == RollType::Regular {
			return Ok(DiceResult::new(*self, kind, primary, Vec::new()));
		}

		let secondary = self.roll_set(generator)?;
		let primary_total: i32 = primary.iter().sum::<i32>() + self.modifier;
		let secondary_total: i32 = secondary.iter().sum::<i32>() + self.modifier;
		let keep_primary = if kind == RollType::Advantage {
			primary_total >= secondary_total
		} else {
			primary_total <= secondary_total
		};

		let (kept, discarded) = if keep_primary {
			(primary, secondary)
		} else {
			(secondary, primary)
		};
		Ok(DiceResult::new(*self, kind, kept, discarded))
	}

	/// Generates one full set of `count` face values in `[1, sides]`.
	fn roll_set<G: NumberGenerator>(&self, generator: &mut G) -> Result<Vec<i32>, generator::Error> {
		let mut rolls = Vec::with_capacity(usize::from(self.count));
		for _ in 0..self.count {
			rolls.push(generator.generate(i32::from(self.sides))?);
		}
		Ok(rolls)
	}
}

#[cfg(feature = "parse")]
impl Die {
	/// Parses a comma-separated list of independent die expressions,
	/// preserving input order. Requires the `parse` feature (enabled by
	/// default).
	///
	/// # Errors
	/// Fails with the first segment's error if any segment fails to parse.
	///
	/// # Examples
	/// ```
	/// use keres::Die;
	///
	/// let dice = Die::parse_all("2D6+3 (fire), 1D8-2 (radiant), 3D4")?;
	/// assert_eq!(dice.len(), 3);
	/// # Ok::<(), keres::parse::Error>(())
	/// ```
	pub fn parse_all(input: &str) -> Result<Vec<Self>, crate::parse::Error> {
		input.split(',').map(str::parse).collect()
	}
}

impl Default for Die {
	/// Creates the default die (D20).
	fn default() -> Self {
		Self::D20
	}
}

impl fmt::Display for Die {
	/// Formats the die in its canonical notation: count only if above 1,
	/// literal `D`, sides, modifier with explicit sign if nonzero, then a
	/// space and the parenthesized lowercase damage name if the type is not
	/// [`DamageType::Unknown`].
	///
	/// # Examples
	/// ```
	/// use keres::{DamageType, Die};
	///
	/// assert_eq!(Die::new(5, 3).to_string(), "5D3");
	/// assert_eq!(
	/// 	Die::new(1, 8).with_modifier(-2).with_damage(DamageType::Radiant).to_string(),
	/// 	"D8-2 (radiant)",
	/// );
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.count != 1 {
			write!(f, "{}", self.count)?;
		}
		write!(f, "D{}", self.sides)?;
		if self.modifier != 0 {
			write!(f, "{:+}", self.modifier)?;
		}
		if self.damage != DamageType::Unknown {
			write!(f, " ({})", self.damage)?;
		}
		Ok(())
	}
}

impl Add<i32> for Die {
	type Output = Self;

	/// Produces a new die with the modifier increased by the given value, all
	/// other fields unchanged.
	///
	/// # Examples
	/// ```
	/// use keres::Die;
	///
	/// assert_eq!(Die::D20 + 100, Die::new(1, 20).with_modifier(100));
	/// ```
	fn add(self, modifier: i32) -> Self {
		Self {
			modifier: self.modifier + modifier,
			..self
		}
	}
}

impl Add for Die {
	type Output = Roll;

	/// Combines two dice into a roll.
	///
	/// Dice with equal sides and damage type merge into a single entry with
	/// their counts and modifiers summed; anything else yields a two-entry
	/// roll preserving left-to-right order. Counts that would overflow the
	/// merged entry fall back to the two-entry form.
	///
	/// # Examples
	/// ```
	/// use keres::{DamageType, Die};
	///
	/// let merged = Die::new(2, 6).with_damage(DamageType::Fire) + Die::new(3, 6).with_damage(DamageType::Fire);
	/// assert_eq!(merged.len(), 1);
	/// assert_eq!(merged[0], Die::new(5, 6).with_damage(DamageType::Fire));
	///
	/// let appended = Die::new(3, 10).with_damage(DamageType::Fire) + Die::new(2, 8).with_damage(DamageType::Radiant);
	/// assert_eq!(appended.len(), 2);
	/// ```
	fn add(self, other: Self) -> Roll {
		if self.sides == other.sides && self.damage == other.damage {
			if let Some(count) = self.count.checked_add(other.count) {
				return Roll::from(Self {
					count,
					modifier: self.modifier + other.modifier,
					..self
				});
			}
		}

		Roll::from_vec(vec![self, other])
	}
}

impl Add<Roll> for Die {
	type Output = Roll;

	/// Produces a roll with this die prepended to the given roll's entries.
	fn add(self, roll: Roll) -> Roll {
		Roll::from(self) + roll
	}
}
