//! The closed vocabulary of damage categories that dice can be tagged with.

use std::fmt;

/// Category of damage dealt by a [`Die`], used to group roll outcomes.
///
/// Each type has a canonical lowercase [name](Self::name) used when formatting
/// notation and a unique [abbreviation](Self::abbreviation) accepted when
/// parsing `(x)` suffixes. [`DamageType::Unknown`] is the default and is never
/// written out in notation.
///
/// [`Die`]: crate::Die
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum DamageType {
	/// No particular damage type
	#[default]
	Unknown,

	/// Acid damage
	Acid,

	/// Bludgeoning damage
	Bludgeoning,

	/// Cold damage
	Cold,

	/// Fire damage
	Fire,

	/// Force damage
	Force,

	/// Lightning damage
	Lightning,

	/// Necrotic damage
	Necrotic,

	/// Piercing damage
	Piercing,

	/// Poison damage
	Poison,

	/// Psychic damage
	Psychic,

	/// Radiant damage
	Radiant,

	/// Slashing damage
	Slashing,

	/// Thunder damage
	Thunder,
}

impl DamageType {
	/// Every damage type, in declaration order.
	pub const ALL: [Self; 14] = [
		Self::Unknown,
		Self::Acid,
		Self::Bludgeoning,
		Self::Cold,
		Self::Fire,
		Self::Force,
		Self::Lightning,
		Self::Necrotic,
		Self::Piercing,
		Self::Poison,
		Self::Psychic,
		Self::Radiant,
		Self::Slashing,
		Self::Thunder,
	];

	/// Gets the canonical lowercase name of the damage type.
	#[must_use]
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Unknown => "unknown",
			Self::Acid => "acid",
			Self::Bludgeoning => "bludgeoning",
			Self::Cold => "cold",
			Self::Fire => "fire",
			Self::Force => "force",
			Self::Lightning => "lightning",
			Self::Necrotic => "necrotic",
			Self::Piercing => "piercing",
			Self::Poison => "poison",
			Self::Psychic => "psychic",
			Self::Radiant => "radiant",
			Self::Slashing => "slashing",
			Self::Thunder => "thunder",
		}
	}

	/// Gets the abbreviation of the damage type.
	///
	/// Abbreviations are the first letter of the name except where that would
	/// collide (`fo` force, `pi` piercing, `ps` psychic).
	#[must_use]
	pub const fn abbreviation(&self) -> &'static str {
		match self {
			Self::Unknown => "u",
			Self::Acid => "a",
			Self::Bludgeoning => "b",
			Self::Cold => "c",
			Self::Fire => "f",
			Self::Force => "fo",
			Self::Lightning => "l",
			Self::Necrotic => "n",
			Self::Piercing => "pi",
			Self::Poison => "p",
			Self::Psychic => "ps",
			Self::Radiant => "r",
			Self::Slashing => "s",
			Self::Thunder => "t",
		}
	}

	/// Looks up a damage type from its full name or abbreviation,
	/// case-insensitively.
	///
	/// # Examples
	/// ```
	/// use keres::DamageType;
	///
	/// assert_eq!(DamageType::from_name("poison"), Some(DamageType::Poison));
	/// assert_eq!(DamageType::from_name("FIRE"), Some(DamageType::Fire));
	/// assert_eq!(DamageType::from_name("r"), Some(DamageType::Radiant));
	/// assert_eq!(DamageType::from_name("arcane"), None);
	/// ```
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|ty| ty.name().eq_ignore_ascii_case(name) || ty.abbreviation().eq_ignore_ascii_case(name))
	}
}

impl fmt::Display for DamageType {
	/// Formats the damage type as its canonical lowercase name.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
